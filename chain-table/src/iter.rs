use std::slice;

use crate::node::{ChainNode, Link};

/// Walks a single bucket chain from its head.
pub struct ChainIter<'a, V>(Option<&'a ChainNode<V>>);

impl<'a, V> ChainIter<'a, V> {
    pub(crate) fn new(head: Option<&'a ChainNode<V>>) -> Self {
        ChainIter(head)
    }
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.map(|node| {
            self.0 = node.next();
            (node.key_.as_str(), &node.value_)
        })
    }
}

impl<'a, V> Clone for ChainIter<'a, V> {
    fn clone(&self) -> Self {
        ChainIter(self.0)
    }
}

pub struct ChainIterMut<'a, V>(Option<&'a mut ChainNode<V>>);

impl<'a, V> ChainIterMut<'a, V> {
    pub(crate) fn new(head: Option<&'a mut ChainNode<V>>) -> Self {
        ChainIterMut(head)
    }
}

impl<'a, V> Iterator for ChainIterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.take().map(|node| {
            self.0 = node.next_.as_deref_mut();
            (node.key_.as_str(), &mut node.value_)
        })
    }
}

/// Every entry of a table, bucket by bucket, each chain in insertion order.
pub struct Iter<'a, V> {
    buckets: slice::Iter<'a, Link<V>>,
    chain: ChainIter<'a, V>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(buckets: &'a [Link<V>]) -> Self {
        Iter {
            buckets: buckets.iter(),
            chain: ChainIter::new(None),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                return Some(entry);
            }
            let head = self.buckets.next()?;
            self.chain = ChainIter::new(head.as_deref());
        }
    }
}

pub struct IterMut<'a, V> {
    buckets: slice::IterMut<'a, Link<V>>,
    chain: ChainIterMut<'a, V>,
}

impl<'a, V> IterMut<'a, V> {
    pub(crate) fn new(buckets: &'a mut [Link<V>]) -> Self {
        IterMut {
            buckets: buckets.iter_mut(),
            chain: ChainIterMut::new(None),
        }
    }
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                return Some(entry);
            }
            let head = self.buckets.next()?;
            self.chain = ChainIterMut::new(head.as_deref_mut());
        }
    }
}
