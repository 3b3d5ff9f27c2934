use std::hash::Hash;

use super::Encoding;
use crate::bitstream::bitunpacker::BitUnpacker;
use crate::error::Error;

impl<W: Eq + Hash + Clone> Encoding<W> {
    /// Decode `src` into a new vector of decoded_len(src.len()) bytes.
    pub fn decode(&self, src: &[W]) -> Result<Vec<u8>, Error> {
        let mut dst = Vec::with_capacity(self.decoded_len(src.len()));
        self.append_decode(&mut dst, src)?;
        Ok(dst)
    }

    /// Decode `src` onto the end of `dst`, leaving what `dst` already holds
    /// untouched, and return the number of bytes appended. If a symbol fails to
    /// decode, the bytes decoded before it are still appended.
    pub fn append_decode(&self, dst: &mut Vec<u8>, src: &[W]) -> Result<usize, Error> {
        dst.reserve_exact(self.decoded_len(src.len()));

        let mut bu = BitUnpacker::new();
        let n = bu.unpack(self.symbol_map(), src, dst)?;
        bu.finish()?;
        Ok(n)
    }
}

impl Encoding<char> {
    /// Decode the chars of `src`.
    pub fn decode_str(&self, src: &str) -> Result<Vec<u8>, Error> {
        self.decode(&src.chars().collect::<Vec<_>>())
    }
}
