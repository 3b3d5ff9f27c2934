use super::Encoding;
use crate::bitstream::bitpacker::BitPacker;

impl<W: Clone> Encoding<W> {
    /// Encode `src` into a new vector of exactly encoded_len(src.len()) symbols.
    pub fn encode(&self, src: &[u8]) -> Vec<W> {
        let mut dst = Vec::with_capacity(self.encoded_len(src.len()));
        self.append_encode(&mut dst, src);
        dst
    }

    /// Encode `src` onto the end of `dst`, leaving what `dst` already holds
    /// untouched. Returns the number of symbols appended.
    pub fn append_encode(&self, dst: &mut Vec<W>, src: &[u8]) -> usize {
        dst.reserve_exact(self.encoded_len(src.len()));

        let mut bp = BitPacker::new();
        let n = bp.pack(self.symbol_map(), src, dst);
        n + bp.flush(self.symbol_map(), dst)
    }
}

impl Encoding<char> {
    /// Encode `src` into a String.
    pub fn encode_to_string(&self, src: &[u8]) -> String {
        self.encode(src).into_iter().collect()
    }
}
