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

//! Instance loader for 0/1 knapsack problems.
//!
//! Two whitespace-delimited text layouts are understood:
//!
//! * **Split**: an item file of repeated `weight value` pairs plus a
//!   separate capacity file holding a single integer. This is what the
//!   command line reads (`input_data.txt` and `input_max_cap.txt` by
//!   default).
//! * **Combined**: the capacity followed by the item pairs in one stream,
//!   convenient for tests and benchmarks.
//!
//! Lines may contain comments introduced by `#`. A missing or unreadable
//! source is always an error; nothing is silently defaulted. Parsed items
//! are validated by `ItemCatalog`, so a loaded `Problem` is ready to search.

use crate::{error::ModelError, item::Item, problem::Problem};
use num_traits::{PrimInt, Signed};
use satchel_core::num::{convert::Widen, ops::CheckedAddVal};
use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Default item file name used by the command line.
pub const DEFAULT_ITEMS_FILE: &str = "input_data.txt";
/// Default capacity file name used by the command line.
pub const DEFAULT_CAPACITY_FILE: &str = "input_max_cap.txt";

/// The error type for the problem loading process.
#[derive(Debug)]
pub enum ProblemLoaderError {
    /// The item list could not be opened or read.
    ItemSourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The capacity could not be opened or read.
    CapacitySourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The capacity source contained no token.
    MissingCapacity,
    /// An I/O error occurred while reading an in-memory or generic stream.
    Io(std::io::Error),
    /// The input ended in the middle of a `weight value` pair.
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The parsed instance failed validation.
    Model(ModelError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl Display for ProblemLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemSourceUnavailable { path, source } => {
                write!(f, "Cannot read item list '{}': {}", path.display(), source)
            }
            Self::CapacitySourceUnavailable { path, source } => {
                write!(f, "Cannot read capacity '{}': {}", path.display(), source)
            }
            Self::MissingCapacity => write!(f, "Capacity source is empty"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => {
                write!(f, "Unexpected end of input: item list ends inside a pair")
            }
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Model(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ItemSourceUnavailable { source, .. }
            | Self::CapacitySourceUnavailable { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Model(e) => Some(e),
            Self::MissingCapacity | Self::UnexpectedEof => None,
        }
    }
}

impl From<std::io::Error> for ProblemLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for ProblemLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ModelError> for ProblemLoaderError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

/// A configurable loader for knapsack instances.
///
/// # Configuration
/// * `with_capacity`: use this capacity instead of reading one. The
///   capacity source is then never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemLoader<T> {
    capacity_override: Option<T>,
}

impl<T> Default for ProblemLoader<T> {
    fn default() -> Self {
        Self {
            capacity_override: None,
        }
    }
}

impl<T> ProblemLoader<T>
where
    T: PrimInt + Signed + Widen + CheckedAddVal + FromStr,
{
    /// Creates a new `ProblemLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the capacity instead of reading it from a source.
    #[inline]
    pub fn with_capacity(mut self, capacity: T) -> Self {
        self.capacity_override = Some(capacity);
        self
    }

    /// Reads `weight value` pairs until the end of the stream.
    pub fn items_from_bufread<R: BufRead>(&self, rdr: R) -> Result<Vec<Item<T>>, ProblemLoaderError> {
        let mut sc = Scanner::new(rdr);
        read_pairs(&mut sc)
    }

    /// Reads the item list from a file.
    pub fn items_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<Item<T>>, ProblemLoaderError> {
        let path = path.as_ref();
        let unavailable = |source| ProblemLoaderError::ItemSourceUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        match self.items_from_bufread(BufReader::new(file)) {
            Err(ProblemLoaderError::Io(source)) => Err(unavailable(source)),
            other => other,
        }
    }

    /// Reads a single capacity token. Trailing tokens are ignored.
    pub fn capacity_from_bufread<R: BufRead>(&self, rdr: R) -> Result<T, ProblemLoaderError> {
        let mut sc = Scanner::new(rdr);
        sc.next::<T>()?.ok_or(ProblemLoaderError::MissingCapacity)
    }

    /// Reads the capacity from a file.
    pub fn capacity_from_path<P: AsRef<Path>>(&self, path: P) -> Result<T, ProblemLoaderError> {
        let path = path.as_ref();
        let unavailable = |source| ProblemLoaderError::CapacitySourceUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        match self.capacity_from_bufread(BufReader::new(file)) {
            Err(ProblemLoaderError::Io(source)) => Err(unavailable(source)),
            other => other,
        }
    }

    /// Loads a problem from an item file and a capacity file.
    ///
    /// With a capacity override, `capacity_path` is not opened.
    pub fn from_paths<P, Q>(
        &self,
        items_path: P,
        capacity_path: Q,
    ) -> Result<Problem<T>, ProblemLoaderError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let items = self.items_from_path(items_path)?;
        let capacity = match self.capacity_override {
            Some(c) => c,
            None => self.capacity_from_path(capacity_path)?,
        };
        Ok(Problem::from_items(&items, capacity)?)
    }

    /// Loads a problem in the combined layout from a type implementing `BufRead`.
    ///
    /// The first token is the capacity, the rest are `weight value` pairs.
    /// With a capacity override the stream holds the pairs only.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Problem<T>, ProblemLoaderError> {
        let mut sc = Scanner::new(rdr);
        let capacity = match self.capacity_override {
            Some(c) => c,
            None => sc.next::<T>()?.ok_or(ProblemLoaderError::MissingCapacity)?,
        };
        let items = read_pairs(&mut sc)?;
        Ok(Problem::from_items(&items, capacity)?)
    }

    /// Loads a combined-layout problem from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Problem<T>, ProblemLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a combined-layout problem from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Problem<T>, ProblemLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a combined-layout problem from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem<T>, ProblemLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

fn read_pairs<T, R>(sc: &mut Scanner<R>) -> Result<Vec<Item<T>>, ProblemLoaderError>
where
    T: PrimInt + Signed + FromStr,
    R: BufRead,
{
    let mut items = Vec::new();
    while let Some(weight) = sc.next::<T>()? {
        let value = sc.next::<T>()?.ok_or(ProblemLoaderError::UnexpectedEof)?;
        items.push(Item::new(weight, value));
    }
    Ok(items)
}

/// A helper to read whitespace-delimited tokens from a generic reader.
struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Refills the internal line buffer. Returns `Ok(false)` on EOF.
    #[inline]
    fn fill_line(&mut self) -> Result<bool, ProblemLoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self.rdr.read_line(&mut self.buf)?;
        Ok(n > 0)
    }

    /// Returns the next raw token, skipping whitespace and `#` comments.
    fn next_token(&mut self) -> Result<Option<&str>, ProblemLoaderError> {
        loop {
            if self.pos >= self.buf.len() && !self.fill_line()? {
                return Ok(None);
            }

            let rest = &self.buf[self.pos..];
            let skipped = rest.len() - rest.trim_start().len();
            self.pos += skipped;

            if self.buf[self.pos..].starts_with('#') || self.pos >= self.buf.len() {
                self.pos = self.buf.len();
                continue;
            }

            let rest = &self.buf[self.pos..];
            let len = rest
                .find(|c: char| c.is_whitespace() || c == '#')
                .unwrap_or(rest.len());
            let start = self.pos;
            self.pos += len;
            return Ok(Some(&self.buf[start..start + len]));
        }
    }

    /// Reads the next token and parses it into `T`. `Ok(None)` at end of input.
    fn next<T>(&mut self) -> Result<Option<T>, ProblemLoaderError>
    where
        T: FromStr,
    {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        token.parse::<T>().map(Some).map_err(|_| {
            ProblemLoaderError::Parse(ParseTokenError {
                token: token.to_owned(),
                type_name: std::any::type_name::<T>(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::InvalidItemReason, index::ItemIndex};
    use std::io::Write;

    const COMBINED_INSTANCE: &str = r#"
        50          # capacity
        10 60       # item 0
        20 100
        30 120      # item 2
    "#;

    #[test]
    fn test_loads_combined_layout() {
        let problem: Problem<i64> = ProblemLoader::new()
            .from_str(COMBINED_INSTANCE)
            .expect("Failed to load");
        assert_eq!(problem.capacity(), 50);
        assert_eq!(problem.num_items(), 3);
        assert_eq!(problem.catalog().total_value(), 280);
    }

    #[test]
    fn test_capacity_override_in_combined_layout() {
        let problem: Problem<i64> = ProblemLoader::new()
            .with_capacity(5)
            .from_str("2 3 3 4 4 5 5 6")
            .unwrap();
        assert_eq!(problem.capacity(), 5);
        assert_eq!(problem.num_items(), 4);
    }

    #[test]
    fn test_comment_glued_to_token() {
        let loader = ProblemLoader::<i64>::new();
        let items = loader.items_from_bufread("4 5#trailing\n# full line\n6 7".as_bytes()).unwrap();
        assert_eq!(items, vec![Item::new(4, 5), Item::new(6, 7)]);
    }

    #[test]
    fn test_odd_token_count_is_unexpected_eof() {
        let loader = ProblemLoader::<i64>::new();
        let res = loader.items_from_bufread("10 60 20".as_bytes());
        assert!(matches!(res, Err(ProblemLoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_empty_item_list_is_valid() {
        let problem: Problem<i64> = ProblemLoader::new().from_str("  7  # no items\n").unwrap();
        assert_eq!(problem.num_items(), 0);
        assert_eq!(problem.capacity(), 7);
    }

    #[test]
    fn test_empty_capacity_source() {
        let loader = ProblemLoader::<i64>::new();
        let res = loader.capacity_from_bufread("   # nothing here\n".as_bytes());
        assert!(matches!(res, Err(ProblemLoaderError::MissingCapacity)));
    }

    #[test]
    fn test_parse_error_structure() {
        let loader = ProblemLoader::<i64>::new();
        match loader.from_str("50 10 garbage") {
            Err(ProblemLoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("i64"));
            }
            other => panic!("Expected Parse error with context, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_item_and_capacity_are_model_errors() {
        let loader = ProblemLoader::<i64>::new();
        match loader.from_str("5  3 4  0 10") {
            Err(ProblemLoaderError::Model(ModelError::InvalidItem(e))) => {
                assert_eq!(e.index, ItemIndex::new(1));
                assert_eq!(e.reason, InvalidItemReason::NonPositiveWeight);
            }
            other => panic!("Expected InvalidItem, got {:?}", other),
        }

        assert!(matches!(
            loader.from_str("-3  1 1"),
            Err(ProblemLoaderError::Model(ModelError::InvalidCapacity { capacity: -3 }))
        ));
    }

    #[test]
    fn test_split_files() {
        let dir = tempfile::tempdir().unwrap();
        let items_path = dir.path().join(DEFAULT_ITEMS_FILE);
        let cap_path = dir.path().join(DEFAULT_CAPACITY_FILE);

        let mut f = File::create(&items_path).unwrap();
        writeln!(f, "2 3\n3 4\n4 5\n5 6").unwrap();
        let mut f = File::create(&cap_path).unwrap();
        writeln!(f, "5").unwrap();

        let problem: Problem<i64> = ProblemLoader::new().from_paths(&items_path, &cap_path).unwrap();
        assert_eq!(problem.capacity(), 5);
        assert_eq!(problem.num_items(), 4);
    }

    #[test]
    fn test_missing_files_name_their_source() {
        let dir = tempfile::tempdir().unwrap();
        let items_path = dir.path().join("absent_items.txt");
        let cap_path = dir.path().join("absent_cap.txt");
        let loader = ProblemLoader::<i64>::new();

        match loader.from_paths(&items_path, &cap_path) {
            Err(ProblemLoaderError::ItemSourceUnavailable { path, .. }) => {
                assert_eq!(path, items_path)
            }
            other => panic!("Expected ItemSourceUnavailable, got {:?}", other),
        }

        std::fs::write(&items_path, "1 1\n").unwrap();
        match loader.from_paths(&items_path, &cap_path) {
            Err(ProblemLoaderError::CapacitySourceUnavailable { path, .. }) => {
                assert_eq!(path, cap_path)
            }
            other => panic!("Expected CapacitySourceUnavailable, got {:?}", other),
        }

        // An override means the capacity file is never opened.
        let problem = loader.with_capacity(9).from_paths(&items_path, &cap_path).unwrap();
        assert_eq!(problem.capacity(), 9);
    }
}
