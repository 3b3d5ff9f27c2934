use std::hash::Hash;

use crate::error::Error;
use crate::tools::symbol_map::SymbolMap;

/// Unpacks dictionary symbols back into bytes. Like BitPacker, the state
/// survives between calls so symbols can arrive in chunks.
#[derive(Debug, Default, Clone)]
pub struct BitUnpacker {
    /// Bits of the byte under construction, right aligned.
    partial: u8,
    /// Count of valid bits in partial.
    partial_bits: u8,
    /// Raw position of the last symbol when the map carries, else 0.
    offset: usize,
    /// Symbols consumed so far, used to report error positions.
    consumed: usize,
}

impl BitUnpacker {
    /// Create an empty unpacker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of decoded bits still waiting to complete a byte.
    pub fn partial_bits(&self) -> u8 {
        self.partial_bits
    }

    /// Unpacks `src` onto `dst`, returning the number of bytes pushed. On
    /// error, the bytes decoded before the offending symbol stay in `dst`.
    pub fn unpack<W: Eq + Hash + Clone>(
        &mut self,
        map: &SymbolMap<W>,
        src: &[W],
        dst: &mut Vec<u8>,
    ) -> Result<usize, Error> {
        let step_bits = map.step_bits();
        let start = dst.len();

        for sym in src {
            let position = self.consumed;
            self.consumed += 1;

            let raw = map
                .position(sym)
                .ok_or(Error::UnknownSymbol { position })?;

            // Undo the offset the encoder added, modulo the dictionary size
            let value = if self.offset <= raw {
                raw - self.offset
            } else {
                map.len() - (self.offset - raw)
            };
            if value >> step_bits != 0 {
                return Err(Error::InvalidSymbol { position });
            }
            self.offset = if map.carries() { raw } else { 0 };

            let mut value = value as u32;
            let mut rem_bits = step_bits;
            while rem_bits > 0 {
                let take = rem_bits.min(8 - self.partial_bits);
                self.partial = ((u32::from(self.partial) << take) | (value >> (rem_bits - take))) as u8;
                self.partial_bits += take;

                rem_bits -= take;
                value &= (1 << rem_bits) - 1;

                if self.partial_bits == 8 {
                    dst.push(self.partial);
                    self.partial = 0;
                    self.partial_bits = 0;
                }
            }
        }
        Ok(dst.len() - start)
    }

    /// Checks the bits left over once all symbols are in. Zero padding is what
    /// the encoder leaves behind; anything else means the input was cut short
    /// or corrupted.
    pub fn finish(&self) -> Result<(), Error> {
        if self.partial_bits > 0 && self.partial != 0 {
            return Err(Error::TrailingBits {
                partial: self.partial,
                bits: self.partial_bits,
            });
        }
        Ok(())
    }
}
