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

//! Frontiers: the pool of live, not yet expanded nodes.
//!
//! The discipline decides which node is expanded next. It changes how much
//! of the tree is visited and how soon a good incumbent appears, never the
//! optimum.
//!
//! - `FifoFrontier`: breadth-first. The reference discipline.
//! - `LifoFrontier`: depth-first. Small frontier, finds complete selections
//!   early.
//! - `BestFirstFrontier`: highest bound first. Usually expands the fewest
//!   nodes; the default.

mod best_first;
mod fifo;
mod lifo;

pub use best_first::BestFirstFrontier;
pub use fifo::FifoFrontier;
pub use lifo::LifoFrontier;

use crate::node::SearchNode;

/// A pool of nodes awaiting expansion.
pub trait Frontier<T> {
    /// Returns the name of the frontier.
    fn name(&self) -> &str;
    /// Adds an admitted node.
    fn push(&mut self, node: SearchNode<T>);
    /// Removes the next node to expand, or `None` if the frontier is empty.
    fn pop(&mut self) -> Option<SearchNode<T>>;
    /// Number of live nodes.
    fn len(&self) -> usize;
    /// Drops every live node, keeping allocations.
    fn clear(&mut self);

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selects a frontier discipline at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrontierKind {
    Fifo,
    Lifo,
    #[default]
    BestFirst,
}

impl FrontierKind {
    /// Every discipline, in a fixed order.
    pub const ALL: [FrontierKind; 3] = [
        FrontierKind::Fifo,
        FrontierKind::Lifo,
        FrontierKind::BestFirst,
    ];
}

impl std::fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontierKind::Fifo => write!(f, "fifo"),
            FrontierKind::Lifo => write!(f, "lifo"),
            FrontierKind::BestFirst => write!(f, "best-first"),
        }
    }
}

/// Error for an unknown frontier name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrontierKindError {
    pub name: String,
}

impl std::fmt::Display for ParseFrontierKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown frontier '{}', expected one of: fifo, lifo, best-first",
            self.name
        )
    }
}

impl std::error::Error for ParseFrontierKindError {}

impl std::str::FromStr for FrontierKind {
    type Err = ParseFrontierKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" | "breadth-first" => Ok(FrontierKind::Fifo),
            "lifo" | "depth-first" => Ok(FrontierKind::Lifo),
            "best-first" | "best" => Ok(FrontierKind::BestFirst),
            _ => Err(ParseFrontierKindError { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_display() {
        for kind in FrontierKind::ALL {
            assert_eq!(kind.to_string().parse::<FrontierKind>(), Ok(kind));
        }
        assert_eq!("Depth-First".parse(), Ok(FrontierKind::Lifo));
        assert_eq!(FrontierKind::default(), FrontierKind::BestFirst);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = "random".parse::<FrontierKind>().unwrap_err();
        assert_eq!(err.name, "random");
        assert!(err.to_string().contains("best-first"));
    }
}
