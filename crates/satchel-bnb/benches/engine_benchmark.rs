// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use satchel_bnb::{
    bnb::BnbSolver,
    bound::{BoundEstimator, FractionalBound},
    frontier::FrontierKind,
    node::SearchNode,
};
use satchel_model::problem::Problem;
use std::hint::black_box;

const SIZES: [usize; 3] = [20, 30, 40];

/// Weakly correlated instance: values stay within 10 of the weight, and the
/// capacity is half the total weight.
fn weakly_correlated(num_items: usize, seed: u64) -> Problem<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let pairs: Vec<(i64, i64)> = (0..num_items)
        .map(|_| {
            let weight = rng.random_range(1..=100);
            let value = (weight + rng.random_range(-10..=10)).max(1);
            (weight, value)
        })
        .collect();
    let capacity = pairs.iter().map(|&(w, _)| w).sum::<i64>() / 2;
    Problem::from_pairs(&pairs, capacity)
        .unwrap_or_else(|e| panic!("Failed to build instance: {}", e))
}

fn bench_frontiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_benchmark");
    group.sample_size(20);

    for &size in &SIZES {
        let problem = weakly_correlated(size, size as u64);
        group.throughput(Throughput::Elements(size as u64));

        for frontier in FrontierKind::ALL {
            let solver = BnbSolver::with_frontier(frontier);
            group.bench_with_input(
                BenchmarkId::new(frontier.to_string(), size),
                &problem,
                |b, problem| {
                    b.iter(|| {
                        let outcome = solver.solve(black_box(problem), ());
                        black_box(outcome.objective_value())
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_root_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractional_bound");
    for &size in &SIZES {
        let problem = weakly_correlated(size, size as u64);
        let root = SearchNode::root(problem.num_items());
        group.bench_with_input(BenchmarkId::from_parameter(size), &problem, |b, problem| {
            b.iter(|| {
                black_box(FractionalBound.estimate(
                    black_box(&root),
                    problem.capacity(),
                    problem.catalog(),
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frontiers, bench_root_bound);
criterion_main!(benches);
