use std::fmt::{Display, Formatter, Result as FmtResult};
use std::iter::Enumerate;
use std::slice;

use crate::iter::ChainIter;
use crate::node::Link;

/// The state of one bucket at the time it was visited.
pub enum BucketDump<'a, V> {
    Empty { index: usize },
    Chain { index: usize, entries: ChainIter<'a, V> },
}

impl<'a, V> BucketDump<'a, V> {
    pub fn index(&self) -> usize {
        match self {
            BucketDump::Empty { index } | BucketDump::Chain { index, .. } => *index,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            BucketDump::Empty { .. } => true,
            BucketDump::Chain { .. } => false,
        }
    }

    /// Entries of the chain in insertion order, empty for an empty bucket.
    pub fn entries(&self) -> Vec<(&'a str, &'a V)> {
        match self {
            BucketDump::Empty { .. } => vec![],
            BucketDump::Chain { entries, .. } => entries.clone().collect(),
        }
    }
}

impl<'a, V: Display> BucketDump<'a, V> {
    /// Each entry rendered as `<key>: <value>`.
    pub fn lines(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect()
    }
}

impl<'a, V: Display> Display for BucketDump<'a, V> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            BucketDump::Empty { index } => write!(f, "Index {}: Empty", index),
            BucketDump::Chain { index, entries } => {
                write!(f, "Index {}:", index)?;
                for (k, v) in entries.clone() {
                    write!(f, " - {}: {}", k, v)?;
                }
                Ok(())
            }
        }
    }
}

/// Yields one `BucketDump` per bucket, from index 0 upwards.
pub struct Dump<'a, V>(Enumerate<slice::Iter<'a, Link<V>>>);

impl<'a, V> Dump<'a, V> {
    pub(crate) fn new(buckets: &'a [Link<V>]) -> Self {
        Dump(buckets.iter().enumerate())
    }
}

impl<'a, V> Iterator for Dump<'a, V> {
    type Item = BucketDump<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(index, head)| match head.as_deref() {
            None => BucketDump::Empty { index },
            Some(node) => BucketDump::Chain {
                index,
                entries: ChainIter::new(Some(node)),
            },
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, V> ExactSizeIterator for Dump<'a, V> {}
