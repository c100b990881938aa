use primitive_types::U256;

use crate::crypto::{Address, Hash, ADDRESS_SIZE};

use super::{AbiError, WORD_SIZE};

/// Word-oriented view over an encoded argument tuple
///
/// Head words are addressed by index; dynamic values are reached through
/// offsets relative to the start of this reader.
#[derive(Clone, Copy, Debug)]
pub struct Reader<'a> {
    bytes: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Reader over a complete argument block: must be word aligned and hold
    /// at least `head_words` words
    pub fn with_head(bytes: &'a [u8], head_words: usize) -> Result<Self, AbiError> {
        if bytes.len() % WORD_SIZE != 0 {
            return Err(AbiError::Unaligned(bytes.len()));
        }

        let reader = Self::new(bytes);
        reader.ensure(head_words * WORD_SIZE)?;
        Ok(reader)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn ensure(&self, needed: usize) -> Result<(), AbiError> {
        if self.bytes.len() < needed {
            return Err(AbiError::Truncated {
                needed,
                available: self.bytes.len(),
            });
        }
        Ok(())
    }

    fn word_at(&self, offset: usize) -> Result<Hash, AbiError> {
        let end = offset.checked_add(WORD_SIZE).ok_or(AbiError::InvalidOffset)?;
        self.ensure(end)?;

        let mut word = [0u8; WORD_SIZE];
        word.copy_from_slice(&self.bytes[offset..end]);
        Ok(Hash::new(word))
    }

    /// Raw head word at `index`
    pub fn read_word(&self, index: usize) -> Result<Hash, AbiError> {
        let offset = index.checked_mul(WORD_SIZE).ok_or(AbiError::InvalidOffset)?;
        self.word_at(offset)
    }

    pub fn read_u256(&self, index: usize) -> Result<U256, AbiError> {
        self.read_word(index).map(|word| word.to_u256())
    }

    pub fn read_address(&self, index: usize) -> Result<Address, AbiError> {
        let word = self.read_word(index)?;
        if word.as_bytes()[..WORD_SIZE - ADDRESS_SIZE]
            .iter()
            .any(|b| *b != 0)
        {
            return Err(AbiError::InvalidAddress);
        }
        Ok(Address::from_word(&word))
    }

    pub fn read_bool(&self, index: usize) -> Result<bool, AbiError> {
        match self.read_u256(index)? {
            v if v.is_zero() => Ok(false),
            v if v == U256::one() => Ok(true),
            _ => Err(AbiError::InvalidBool),
        }
    }

    /// Offset stored at head `index`, bounded by the length of the reader
    pub fn read_offset(&self, index: usize) -> Result<usize, AbiError> {
        Self::to_bounded_usize(self.read_u256(index)?, self.bytes.len())
    }

    fn to_bounded_usize(value: U256, bound: usize) -> Result<usize, AbiError> {
        if value > U256::from(bound) {
            return Err(AbiError::InvalidOffset);
        }
        Ok(value.as_usize())
    }

    /// Reader over the tail starting at the offset stored at head `index`
    pub fn read_tail(&self, index: usize) -> Result<Reader<'a>, AbiError> {
        let offset = self.read_offset(index)?;
        Ok(Reader::new(&self.bytes[offset..]))
    }

    /// Dynamic byte string whose offset is stored at head `index`
    pub fn read_bytes(&self, index: usize) -> Result<&'a [u8], AbiError> {
        let offset = self.read_offset(index)?;
        let length_word = self.word_at(offset)?;
        let start = offset + WORD_SIZE;
        let length = Self::to_bounded_usize(length_word.to_u256(), self.bytes.len() - start)?;

        Ok(&self.bytes[start..start + length])
    }

    pub fn read_string(&self, index: usize) -> Result<String, AbiError> {
        let bytes = self.read_bytes(index)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| AbiError::InvalidUtf8)
    }
}
