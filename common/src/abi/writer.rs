use primitive_types::U256;

use crate::crypto::{Address, Hash};

use super::WORD_SIZE;

/// Appends 32-byte words to an output buffer
#[derive(Debug, Default)]
pub struct Writer {
    bytes: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    pub fn write_word(&mut self, word: &Hash) {
        self.bytes.extend_from_slice(word.as_bytes());
    }

    pub fn write_u256(&mut self, value: &U256) {
        self.bytes.extend_from_slice(&value.to_big_endian());
    }

    pub fn write_usize(&mut self, value: usize) {
        self.write_u256(&U256::from(value));
    }

    pub fn write_address(&mut self, address: &Address) {
        self.write_word(&address.to_word());
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_usize(value as usize);
    }

    /// Length word followed by the bytes, right-padded to a word boundary
    pub fn write_dynamic_bytes(&mut self, bytes: &[u8]) {
        self.write_usize(bytes.len());
        self.bytes.extend_from_slice(bytes);
        let padding = padded_len(bytes.len()) - bytes.len();
        self.bytes.resize(self.bytes.len() + padding, 0);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Length rounded up to a whole number of words
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_SIZE) * WORD_SIZE
}

/// Encoded size of a dynamic byte string (length word + padded data)
pub fn dynamic_size(len: usize) -> usize {
    WORD_SIZE + padded_len(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_bytes_padding() {
        let mut writer = Writer::new();
        writer.write_dynamic_bytes(b"TEST");

        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(bytes[31], 4);
        assert_eq!(&bytes[32..36], b"TEST");
        assert!(bytes[36..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_empty_dynamic_bytes() {
        let mut writer = Writer::new();
        writer.write_dynamic_bytes(b"");
        assert_eq!(writer.len(), 32);
        assert_eq!(dynamic_size(0), 32);
        assert_eq!(dynamic_size(33), 96);
    }
}
