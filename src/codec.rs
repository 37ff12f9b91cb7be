use crate::codebook::CodeTable;
use crate::error::{Error, Result};
use crate::tree::Node;

/// Encodes `text` into a logical bit buffer, one bit per byte, by
/// concatenating each symbol's code.
pub fn encode(text: &str, table: &CodeTable) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(text.len());
    for symbol in text.chars() {
        let code = table
            .get(&symbol)
            .ok_or(Error::SymbolNotFound(symbol))?;
        bits.extend_from_slice(code);
    }
    Ok(bits)
}

/// Decodes a logical bit buffer against a tree, emitting one symbol per
/// root-to-leaf traversal until the buffer is exhausted.
pub fn decode(bits: &[u8], root: &Node) -> Result<String> {
    let mut text = String::new();
    let mut cursor = 0;
    while cursor < bits.len() {
        let (symbol, rest) = decode_symbol(root, bits, cursor)?;
        text.push(symbol);
        cursor = rest;
    }
    Ok(text)
}

/// Walks one root-to-leaf path starting at `cursor` and returns the decoded
/// symbol plus the cursor past the consumed bits. Running out of bits
/// mid-walk is `TruncatedStream`, never a partial symbol.
fn decode_symbol(root: &Node, bits: &[u8], mut cursor: usize) -> Result<(char, usize)> {
    // A single-leaf tree still consumes one bit per symbol, mirroring the
    // one-bit code the assigner hands a lone leaf.
    if let Node::Leaf { symbol, .. } = root {
        return Ok((*symbol, cursor + 1));
    }

    let mut node = root;
    loop {
        match node {
            Node::Leaf { symbol, .. } => return Ok((*symbol, cursor)),
            Node::Internal { left, right, .. } => {
                let bit = bits.get(cursor).ok_or(Error::TruncatedStream)?;
                node = if *bit == 0 { left } else { right };
                cursor += 1;
            }
        }
    }
}
