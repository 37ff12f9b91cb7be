//! # huffpack
//!
//! Static Huffman compression for text. Builds a prefix-free binary code
//! from a text's symbol distribution, encodes the text into a bit buffer,
//! and decodes it back. A persistence adapter round-trips the tree and the
//! buffer through an opaque binary blob.
//!
//! Symbols are Unicode scalar values, not bytes or grapheme clusters.
//!
//! ```
//! use huffpack::EncodingContext;
//!
//! let mut context = EncodingContext::new();
//! context.compress("abracadabra")?;
//!
//! let blob = context.to_blob()?;
//! let loaded = EncodingContext::from_blob(&blob)?;
//! assert_eq!(loaded.decode()?, "abracadabra");
//! # Ok::<(), huffpack::Error>(())
//! ```

pub mod blob;
pub mod codebook;
pub mod codec;
pub mod context;
pub mod error;
pub mod frequency;
pub mod tree;

pub use context::EncodingContext;
pub use error::{Error, Result};
pub use tree::Node;
