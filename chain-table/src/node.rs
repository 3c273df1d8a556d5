use std::mem;

pub(crate) type Link<V> = Option<Box<ChainNode<V>>>;

/// One entry of a bucket chain; owns everything after it.
#[derive(Debug)]
pub(crate) struct ChainNode<V> {
    pub(crate) key_: String,
    pub(crate) value_: V,
    pub(crate) next_: Link<V>,
}

impl<V> ChainNode<V> {
    pub(crate) fn allocate(key: &str, value: V) -> Box<ChainNode<V>> {
        Box::new(ChainNode {
            key_: key.to_owned(),
            value_: value,
            next_: None,
        })
    }

    pub(crate) fn next(&self) -> Option<&ChainNode<V>> {
        self.next_.as_deref()
    }

    pub(crate) fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value_, value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_replace_value() {
        let mut node = ChainNode::allocate("John", 1);
        assert_eq!(1, node.replace_value(2));
        assert_eq!(2, node.value_);
        assert_eq!("John", node.key_);
        assert!(node.next().is_none());
    }

    #[test]
    fn test_link() {
        let mut head = ChainNode::allocate("Amy", 1);
        head.next_ = Some(ChainNode::allocate("May", 2));
        let next = head.next().unwrap();
        assert_eq!("May", next.key_);
        assert!(next.next().is_none());
    }
}
