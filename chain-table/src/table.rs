use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Drop;

use log::trace;

use crate::dump::Dump;
use crate::error::{MyResult, StatusCode};
use crate::hash::sum_hash;
use crate::iter::{ChainIter, Iter, IterMut};
use crate::node::{ChainNode, Link};

/// A fixed-capacity string-keyed table resolving collisions by separate
/// chaining. The number of buckets never changes after construction.
pub struct ChainTable<V> {
    buckets_: Box<[Link<V>]>,
    length_: usize,
}

impl<V> ChainTable<V> {
    pub fn new(capacity: usize) -> MyResult<Self> {
        if capacity == 0 {
            return err!(StatusCode::InvalidArgument, "capacity must be > 0");
        }
        let buckets_ = (0..capacity).map(|_| None).collect::<Vec<_>>();
        Ok(ChainTable {
            buckets_: buckets_.into_boxed_slice(),
            length_: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.buckets_.len()
    }

    pub fn length(&self) -> usize {
        self.length_
    }

    pub fn is_empty(&self) -> bool {
        self.length_ == 0
    }

    pub fn hash_index(&self, key: &str) -> usize {
        sum_hash(key, self.capacity())
    }

    /// Inserts `value` under `key`. An existing entry keeps its place in the
    /// chain and has its value swapped, the old one being returned.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let index = self.hash_index(key);
        let mut link = &mut self.buckets_[index];
        let mut depth = 0;

        while let Some(node) = link {
            if node.key_ == key {
                return Some(node.replace_value(value));
            }
            link = &mut node.next_;
            depth += 1;
        }

        if depth > 0 {
            trace!("key {:?} collided in bucket {} at depth {}", key, index, depth);
        }

        *link = Some(ChainNode::allocate(key, value));
        self.length_ += 1;
        None
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        self.chain(self.hash_index(key)).find(|(k, _)| *k == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.hash_index(key);
        let mut current = self.buckets_[index].as_deref_mut();

        while let Some(node) = current {
            if node.key_ == key {
                return Some(&mut node.value_);
            }
            current = node.next_.as_deref_mut();
        }

        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The chain stored in bucket `index`; an out-of-range index yields
    /// nothing.
    pub fn chain(&self, index: usize) -> ChainIter<V> {
        ChainIter::new(self.buckets_.get(index).and_then(|head| head.as_deref()))
    }

    pub fn dump(&self) -> Dump<V> {
        Dump::new(&self.buckets_)
    }

    pub fn iter(&self) -> Iter<V> {
        Iter::new(&self.buckets_)
    }

    pub fn iter_mut(&mut self) -> IterMut<V> {
        IterMut::new(&mut self.buckets_)
    }

    fn dispose(&mut self) {
        for head in self.buckets_.iter_mut() {
            let mut current = head.take();
            while let Some(mut node) = current {
                current = node.next_.take();
            }
        }
        self.length_ = 0;
    }
}

impl<V: Display> Display for ChainTable<V> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for (i, bucket) in self.dump().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            write!(f, "{}", bucket)?;
        }
        Ok(())
    }
}

impl<V: Clone> Clone for ChainTable<V> {
    fn clone(&self) -> Self {
        let mut copied = ChainTable {
            buckets_: (0..self.capacity()).map(|_| None).collect(),
            length_: 0,
        };
        for (k, v) in self.iter() {
            copied.insert(k, v.clone());
        }
        copied
    }
}

impl<V> Drop for ChainTable<V> {
    fn drop(&mut self) {
        self.dispose();
    }
}
