use std::collections::HashMap;

use crate::tree::Node;

/// Counts each Unicode scalar value in `text` and returns one leaf per
/// distinct symbol, sorted descending by weight. Equal weights fall back to
/// code point order so the result never depends on map iteration order.
///
/// Empty text yields an empty pool; rejecting it is the tree builder's job.
pub fn count_symbols(text: &str) -> Vec<Node> {
    let mut counts: HashMap<char, u64> = HashMap::new();
    for symbol in text.chars() {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    let mut leaves = counts
        .into_iter()
        .map(|(symbol, weight)| Node::leaf(symbol, weight))
        .collect::<Vec<_>>();

    leaves.sort_by(|a, b| {
        b.weight()
            .cmp(&a.weight())
            .then_with(|| a.symbol().cmp(&b.symbol()))
    });
    leaves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(char, u64)> {
        count_symbols(text)
            .into_iter()
            .map(|leaf| (leaf.symbol().unwrap(), leaf.weight()))
            .collect()
    }

    #[test]
    fn counts_are_sorted_descending() {
        assert_eq!(
            pairs("cbccaccaccbcacacf"),
            vec![('c', 10), ('a', 4), ('b', 2), ('f', 1)]
        );
    }

    #[test]
    fn equal_weights_order_by_code_point() {
        assert_eq!(pairs("baba"), vec![('a', 2), ('b', 2)]);
        assert_eq!(pairs("zzyx"), vec![('z', 2), ('x', 1), ('y', 1)]);
    }

    #[test]
    fn multibyte_symbols_count_as_one() {
        assert_eq!(pairs("ééé漢"), vec![('é', 3), ('漢', 1)]);
    }

    #[test]
    fn empty_text_yields_no_leaves() {
        assert!(pairs("").is_empty());
    }
}
