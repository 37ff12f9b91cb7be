use crate::error::{Error, Result};

/// One node of a frozen Huffman tree.
///
/// The variant is the leaf/internal tag: a leaf carries its symbol, an
/// internal node only routes traversal to its two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: char, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    pub fn merge(left: Self, right: Self) -> Self {
        let weight = left.weight() + right.weight();
        Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }
}

/// Builds the Huffman tree from a pool of leaves sorted descending by
/// weight, as produced by [`crate::frequency::count_symbols`].
///
/// The two smallest candidates sit at the end of the pool. Each round pops
/// them both, merges them with the second-popped node as the left child and
/// the first-popped as the right, pushes the merged node and re-sorts. The
/// sort is stable and the merged node is pushed at the end, so it orders
/// after equal-weight peers and ties stay deterministic.
pub fn build_tree(mut pool: Vec<Node>) -> Result<Node> {
    while pool.len() > 1 {
        if let (Some(first), Some(second)) = (pool.pop(), pool.pop()) {
            pool.push(Node::merge(second, first));
            pool.sort_by(|a, b| b.weight().cmp(&a.weight()));
        }
    }

    pool.into_iter().next().ok_or(Error::EmptyInput)
}
