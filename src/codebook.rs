use std::collections::HashMap;

use crate::tree::Node;

/// A code is the root-to-leaf path, one bit per byte, each 0 or 1.
pub type Code = Vec<u8>;

/// Symbol to code lookup, precomputed once so the encoder never searches
/// the tree per character.
pub type CodeTable = HashMap<char, Code>;

/// Walks the tree and assigns every leaf its path code: 0 for a left
/// descent, 1 for a right one. Codes of distinct leaves are prefix-free by
/// construction.
pub fn assign_codes(root: &Node) -> CodeTable {
    let mut table = HashMap::new();
    match root {
        // A lone leaf never descends, so the walk would hand it an empty
        // code. It gets a fixed one-bit code instead.
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, vec![0]);
        }
        Node::Internal { .. } => walk(root, 0u64, 0, &mut table),
    }
    table
}

fn walk(node: &Node, code: u64, depth: usize, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            table.insert(*symbol, bits_of(code, depth));
        }
        Node::Internal { left, right, .. } => {
            walk(left, code << 1, depth + 1, table);
            walk(right, (code << 1) | 1, depth + 1, table);
        }
    }
}

/// Expands the low `size` bits of `value` into a bit-per-byte vector,
/// most significant bit first.
fn bits_of<T>(mut value: T, size: usize) -> Code
where
    T: num_traits::Zero + num_traits::One,
    T: PartialEq + PartialOrd + Copy,
    u8: TryFrom<T>,
    T: std::ops::BitAnd<Output = T>,
    T: std::ops::ShrAssign<T>,
{
    let (zero, one) = (T::zero(), T::one());

    if value == zero {
        return vec![0; size];
    }

    let mut bits = Vec::new();
    while value > zero {
        let bit = u8::try_from(value & one).unwrap_or_default();
        bits.push(bit);
        value >>= one;
    }
    bits.resize(size, 0);
    bits.reverse();
    bits
}
