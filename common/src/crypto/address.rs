use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryInto,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

use super::Hash;

pub const ADDRESS_SIZE: usize = 20; // 20 bytes / 160 bits

/// 20-byte account identifier
///
/// The all-zero address is reserved: it identifies the native coin when used
/// as a backing asset and an absent caller when used as an identity.
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug, Default, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    pub const fn zero() -> Self {
        Address([0; ADDRESS_SIZE])
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; ADDRESS_SIZE]
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Address made of the low (last) 20 bytes of a 32-byte word
    pub fn from_word(word: &Hash) -> Self {
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(&word.as_bytes()[32 - ADDRESS_SIZE..]);
        Address(bytes)
    }

    /// Left-padded 32-byte word holding this address
    pub fn to_word(&self) -> Hash {
        let mut bytes = [0u8; 32];
        bytes[32 - ADDRESS_SIZE..].copy_from_slice(&self.0);
        Hash::new(bytes)
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| "Invalid hex string")?;
        let bytes: [u8; ADDRESS_SIZE] = bytes.try_into().map_err(|_| "Invalid address")?;
        Ok(Address::new(bytes))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'a> Deserialize<'a> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        Address::from_str(&hex).map_err(SerdeError::custom)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_round_trip_keeps_low_bytes() {
        let address: Address = "0x1234567890123456789012345678901234567890".parse().unwrap();
        let word = address.to_word();

        assert!(word.as_bytes()[..12].iter().all(|b| *b == 0));
        assert_eq!(Address::from_word(&word), address);
    }

    #[test]
    fn test_display_and_serde() {
        let address = Address::new([0x11; ADDRESS_SIZE]);
        assert_eq!(
            address.to_string(),
            "0x1111111111111111111111111111111111111111"
        );

        let json = serde_json::to_string(&address).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn test_invalid_length_rejected() {
        assert!("0x1234".parse::<Address>().is_err());
        assert!("zz".parse::<Address>().is_err());
        assert!(Address::zero().is_zero());
    }
}
