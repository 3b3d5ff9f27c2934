//! The codec module is the one-shot side of `based`.
//!
//! An Encoding owns the dictionary and everything derived from it. It holds no state for any
//! single call, so one Encoding can serve any number of batch calls and streams at once.
//!
//! - encode: Encode, append_encode, and the String conveniences for char dictionaries.
//! - decode: Decode, append_decode, and the str conveniences for char dictionaries.
//!
pub mod decode;
pub mod encode;

use std::hash::Hash;

use crate::error::Error;
use crate::tools::alphabets::{HEX_BASE32, STD_BASE32, STD_BASE64, URL_BASE64};
use crate::tools::symbol_map::SymbolMap;

/// A binary-to-text encoding over an arbitrary dictionary of symbols.
#[derive(Debug, Clone)]
pub struct Encoding<W> {
    map: SymbolMap<W>,
}

impl<W: Eq + Hash + Clone> Encoding<W> {
    /// Create an encoding over `dictionary`. Fails if it holds fewer than 2 or
    /// more than 511 symbols, or if any symbol repeats.
    pub fn new(dictionary: impl Into<Vec<W>>) -> Result<Self, Error> {
        Ok(Self {
            map: SymbolMap::new(dictionary.into())?,
        })
    }
}

impl<W> Encoding<W> {
    /// Number of symbols produced for `n` bytes.
    pub fn encoded_len(&self, n: usize) -> usize {
        self.encoded_len_with(n, 0)
    }

    /// Number of symbols produced for `n` bytes when `avail_bits` input bits are
    /// already pending, including the final padded symbol if one is needed.
    pub(crate) fn encoded_len_with(&self, n: usize, avail_bits: u8) -> usize {
        let len_bits = n * 8 + avail_bits as usize;
        let step_bits = self.map.step_bits() as usize;
        (len_bits + step_bits - 1) / step_bits
    }

    /// Number of bytes recovered from `n` symbols.
    pub fn decoded_len(&self, n: usize) -> usize {
        n * self.map.step_bits() as usize / 8
    }

    /// Bits of input carried by each symbol.
    pub fn step_bits(&self) -> u8 {
        self.map.step_bits()
    }

    /// True when the dictionary size is not a power of two and symbols carry
    /// a running offset.
    pub fn carries(&self) -> bool {
        self.map.carries()
    }

    pub fn dictionary(&self) -> &[W] {
        self.map.symbols()
    }

    pub(crate) fn symbol_map(&self) -> &SymbolMap<W> {
        &self.map
    }
}

impl Encoding<u8> {
    /// RFC 4648 base32 without padding.
    pub fn std_base32() -> Self {
        Self::preset(STD_BASE32)
    }

    /// RFC 4648 base32hex without padding.
    pub fn hex_base32() -> Self {
        Self::preset(HEX_BASE32)
    }

    /// RFC 4648 base64 without padding.
    pub fn std_base64() -> Self {
        Self::preset(STD_BASE64)
    }

    /// RFC 4648 URL-safe base64 without padding.
    pub fn url_base64() -> Self {
        Self::preset(URL_BASE64)
    }

    fn preset(alphabet: &[u8]) -> Self {
        Self::new(alphabet).expect("built-in alphabets hold unique symbols")
    }
}

#[cfg(test)]
mod test {
    use super::Encoding;
    use crate::error::Error;

    #[test]
    fn preset_widths_test() {
        assert_eq!(Encoding::std_base32().step_bits(), 5);
        assert!(!Encoding::hex_base32().carries());
        assert_eq!(Encoding::std_base64().step_bits(), 6);
        assert!(!Encoding::url_base64().carries());
    }

    #[test]
    fn synthetic_33_test() {
        let enc = Encoding::new((0..33_u16).collect::<Vec<_>>()).unwrap();
        assert_eq!(enc.step_bits(), 5);
        assert!(enc.carries());
    }

    #[test]
    fn lengths_test() {
        let b32 = Encoding::std_base32();
        assert_eq!(b32.encoded_len(0), 0);
        assert_eq!(b32.encoded_len(1), 2);
        assert_eq!(b32.encoded_len(5), 8);
        assert_eq!(b32.encoded_len(11), 18);
        assert_eq!(b32.encoded_len_with(1, 2), 2);
        assert_eq!(b32.encoded_len_with(1, 3), 3);
        assert_eq!(b32.decoded_len(18), 11);
        assert_eq!(b32.decoded_len(1), 0);

        let b64 = Encoding::std_base64();
        assert_eq!(b64.encoded_len(3), 4);
        assert_eq!(b64.encoded_len(11), 15);
        assert_eq!(b64.decoded_len(15), 11);
    }

    #[test]
    fn construction_errors_test() {
        assert_eq!(
            Encoding::new(Vec::<char>::new()).unwrap_err(),
            Error::TooFewSymbols(0)
        );
        assert_eq!(Encoding::new(vec!['a']).unwrap_err(), Error::TooFewSymbols(1));
        assert_eq!(
            Encoding::new(vec!['a', 'b', 'a']).unwrap_err(),
            Error::DuplicateSymbol {
                first: 0,
                duplicate: 2
            }
        );
        assert_eq!(
            Encoding::new((0..1000_u32).collect::<Vec<_>>()).unwrap_err(),
            Error::TooManySymbols(1000)
        );
    }
}
