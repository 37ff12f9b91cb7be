//! Persistence adapter: round-trips a tree plus its logical bit buffer
//! through an opaque binary blob.
//!
//! The tree is written pre-order: bit 0 introduces an internal node followed
//! by both children, bit 1 a leaf followed by a 64-bit weight and a 32-bit
//! scalar value. A 64-bit bit count and the packed buffer bits follow, with
//! a byte-aligned tail.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::{Error, Result};
use crate::tree::Node;

// Parse guard: trees built from real text never nest anywhere near this
// deep, so anything beyond it is treated as corrupt rather than recursed.
const MAX_TREE_DEPTH: usize = 4096;

pub fn serialize(root: &Node, bits: &[u8]) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::new(), BigEndian);

    write_node(&mut writer, root)?;

    writer.write(64, bits.len() as u64)?;
    for &bit in bits {
        writer.write_bit(bit != 0)?;
    }
    writer.byte_align()?;

    Ok(writer.into_writer())
}

pub fn deserialize(blob: &[u8]) -> Result<(Node, Vec<u8>)> {
    let mut reader = BitReader::endian(Cursor::new(blob), BigEndian);

    let root = read_node(&mut reader, 0)?;

    let bit_count = reader
        .read::<u64>(64)
        .map_err(|_| corrupt("blob ends before the bit count"))? as usize;
    if bit_count > blob.len() * 8 {
        return Err(corrupt("bit count exceeds the blob"));
    }

    let mut bits = Vec::with_capacity(bit_count);
    for _ in 0..bit_count {
        let bit = reader
            .read_bit()
            .map_err(|_| corrupt("blob ends inside the bit buffer"))?;
        bits.push(bit as u8);
    }

    Ok((root, bits))
}

fn write_node<W: std::io::Write>(
    writer: &mut BitWriter<W, BigEndian>,
    node: &Node,
) -> Result<()> {
    match node {
        Node::Leaf { symbol, weight } => {
            writer.write_bit(true)?;
            writer.write(64, *weight)?;
            writer.write(32, *symbol as u32)?;
        }
        Node::Internal { left, right, .. } => {
            writer.write_bit(false)?;
            write_node(writer, left)?;
            write_node(writer, right)?;
        }
    }
    Ok(())
}

fn read_node<R: std::io::Read>(
    reader: &mut BitReader<R, BigEndian>,
    depth: usize,
) -> Result<Node> {
    if depth > MAX_TREE_DEPTH {
        return Err(corrupt("tree nesting exceeds the depth guard"));
    }

    let is_leaf = reader
        .read_bit()
        .map_err(|_| corrupt("blob ends inside the tree"))?;

    if is_leaf {
        let weight = reader
            .read::<u64>(64)
            .map_err(|_| corrupt("blob ends inside a leaf weight"))?;
        let scalar = reader
            .read::<u32>(32)
            .map_err(|_| corrupt("blob ends inside a leaf symbol"))?;
        let symbol = char::from_u32(scalar)
            .ok_or_else(|| corrupt(format!("{scalar:#x} is not a Unicode scalar value")))?;
        Ok(Node::leaf(symbol, weight))
    } else {
        // Internal weights are recomputed from the children, so every
        // deserialized tree satisfies weight conservation.
        let left = read_node(reader, depth + 1)?;
        let right = read_node(reader, depth + 1)?;
        Ok(Node::merge(left, right))
    }
}

fn corrupt(message: impl Into<String>) -> Error {
    Error::CorruptData(message.into())
}
