use crate::blob;
use crate::codebook::{assign_codes, CodeTable};
use crate::codec;
use crate::error::{Error, Result};
use crate::frequency::count_symbols;
use crate::tree::{build_tree, Node};

/// One compressed text: a frozen tree, the code table derived from it, and
/// the encoded bit buffer.
///
/// A fresh context is uninitialized; every accessor fails with
/// [`Error::NotInitialized`] until [`compress`](Self::compress) or
/// [`from_blob`](Self::from_blob) populates it.
#[derive(Debug, Default)]
pub struct EncodingContext {
    root: Option<Node>,
    table: CodeTable,
    encoding: Vec<u8>,
}

impl EncodingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.root.is_some()
    }

    /// Runs the full pipeline over `text`: frequency counting, tree
    /// construction, code assignment and encoding. Replaces any encoding
    /// the context held before.
    pub fn compress(&mut self, text: &str) -> Result<()> {
        let root = build_tree(count_symbols(text))?;
        let table = assign_codes(&root);

        self.encoding = codec::encode(text, &table)?;
        self.table = table;
        self.root = Some(root);
        Ok(())
    }

    /// Decodes the owned bit buffer back into the original text.
    pub fn decode(&self) -> Result<String> {
        let root = self.root.as_ref().ok_or(Error::NotInitialized)?;
        codec::decode(&self.encoding, root)
    }

    /// Encodes a new text against the active tree. A tree loaded from a
    /// blob may not cover the text, in which case this fails with
    /// [`Error::SymbolNotFound`].
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        if !self.is_initialized() {
            return Err(Error::NotInitialized);
        }
        codec::encode(text, &self.table)
    }

    /// The logical bit buffer of the compressed text, one bit per byte.
    pub fn bits(&self) -> Result<&[u8]> {
        if !self.is_initialized() {
            return Err(Error::NotInitialized);
        }
        Ok(&self.encoding)
    }

    pub fn root(&self) -> Result<&Node> {
        self.root.as_ref().ok_or(Error::NotInitialized)
    }

    /// Serializes the tree and bit buffer into an opaque blob.
    pub fn to_blob(&self) -> Result<Vec<u8>> {
        let root = self.root.as_ref().ok_or(Error::NotInitialized)?;
        blob::serialize(root, &self.encoding)
    }

    /// Rebuilds a context from a blob. The deserialized tree is untrusted:
    /// decoding still applies the same truncation checks as for freshly
    /// encoded buffers.
    pub fn from_blob(data: &[u8]) -> Result<Self> {
        let (root, encoding) = blob::deserialize(data)?;
        let table = assign_codes(&root);
        Ok(Self {
            root: Some(root),
            table,
            encoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_rejects_everything() {
        let context = EncodingContext::new();
        assert!(!context.is_initialized());
        assert!(matches!(context.decode(), Err(Error::NotInitialized)));
        assert!(matches!(context.encode("a"), Err(Error::NotInitialized)));
        assert!(matches!(context.bits(), Err(Error::NotInitialized)));
        assert!(matches!(context.root(), Err(Error::NotInitialized)));
        assert!(matches!(context.to_blob(), Err(Error::NotInitialized)));
    }

    #[test]
    fn compress_then_decode_round_trip() {
        let text = "it was the best of times, it was the worst of times";
        let mut context = EncodingContext::new();
        context.compress(text).unwrap();
        assert!(context.is_initialized());
        assert_eq!(context.decode().unwrap(), text);
    }

    #[test]
    fn compress_rejects_empty_text() {
        let mut context = EncodingContext::new();
        assert!(matches!(context.compress(""), Err(Error::EmptyInput)));
        assert!(!context.is_initialized());
    }

    #[test]
    fn blob_round_trip_preserves_tree_and_bits() {
        let mut context = EncodingContext::new();
        context.compress("cbccaccaccbcacacf").unwrap();

        let blob = context.to_blob().unwrap();
        let loaded = EncodingContext::from_blob(&blob).unwrap();

        assert_eq!(loaded.root().unwrap(), context.root().unwrap());
        assert_eq!(loaded.bits().unwrap(), context.bits().unwrap());
        assert_eq!(loaded.decode().unwrap(), "cbccaccaccbcacacf");
    }

    #[test]
    fn loaded_tree_rejects_foreign_symbols() {
        let mut context = EncodingContext::new();
        context.compress("cbccaccaccbcacacf").unwrap();

        let loaded = EncodingContext::from_blob(&context.to_blob().unwrap()).unwrap();
        assert_eq!(
            loaded.encode("cab").unwrap(),
            vec![0, 1, 0, 1, 1, 0]
        );
        assert!(matches!(
            loaded.encode("cabz"),
            Err(Error::SymbolNotFound('z'))
        ));
    }

    #[test]
    fn recompress_replaces_the_encoding() {
        let mut context = EncodingContext::new();
        context.compress("aaaa").unwrap();
        context.compress("abab").unwrap();
        assert_eq!(context.decode().unwrap(), "abab");
    }
}
