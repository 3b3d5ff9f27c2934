use crate::tools::symbol_map::SymbolMap;

/// Packs bytes into dictionary symbols, `step_bits` at a time. The state
/// survives between calls to pack(), so a stream can be fed in chunks.
#[derive(Debug, Default, Clone)]
pub struct BitPacker {
    /// Bits waiting to become the next symbol.
    index: u64,
    /// Count of valid bits in index.
    avail_bits: u8,
    /// Position of the last emitted symbol when the map carries, else 0.
    offset: usize,
}

impl BitPacker {
    /// Create an empty packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of input bits not yet turned into a symbol.
    pub fn avail_bits(&self) -> u8 {
        self.avail_bits
    }

    /// Packs all of `src` onto `dst`, returning the number of symbols pushed.
    /// Up to step_bits - 1 bits may remain pending; flush() emits them.
    pub fn pack<W: Clone>(&mut self, map: &SymbolMap<W>, src: &[u8], dst: &mut Vec<W>) -> usize {
        let step_bits = map.step_bits();
        let start = dst.len();

        for &byte in src {
            let mut read = byte;
            let mut rem_bits = 8_u8;
            while rem_bits > 0 {
                // Take the high bits of what is left of this byte
                let take = (step_bits - self.avail_bits).min(rem_bits);
                self.index <<= take;
                self.index |= u64::from(read >> (rem_bits - take));
                self.avail_bits += take;

                rem_bits -= take;
                read &= ((1_u16 << rem_bits) - 1) as u8;

                if self.avail_bits == step_bits {
                    self.emit(map, dst);
                }
            }
        }
        dst.len() - start
    }

    /// Emits the pending bits, zero padded, as one final symbol. Returns the
    /// number of symbols pushed (0 when nothing was pending).
    pub fn flush<W: Clone>(&mut self, map: &SymbolMap<W>, dst: &mut Vec<W>) -> usize {
        if self.avail_bits == 0 {
            return 0;
        }
        self.emit(map, dst);
        1
    }

    fn emit<W: Clone>(&mut self, map: &SymbolMap<W>, dst: &mut Vec<W>) {
        // Padding only shifts in when flushing a short group
        let value = (self.index << (map.step_bits() - self.avail_bits)) as usize;
        let mut pos = value + self.offset;
        if pos >= map.len() {
            pos -= map.len();
        }
        dst.push(map.symbol(pos).clone());

        self.offset = if map.carries() { pos } else { 0 };
        self.index = 0;
        self.avail_bits = 0;
    }
}
