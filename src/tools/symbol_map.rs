use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::Error;

/// Largest dictionary whose symbols carry at most 8 bits each.
pub const MAX_SYMBOLS: usize = 511;

/// Returns the number of bits packed into each symbol for a dictionary of `size`
/// symbols, and whether the running offset (carry) is needed to use the whole
/// alphabet.
pub fn step_width(size: usize) -> (u8, bool) {
    /*
    The largest index is size - 1. If size itself needs the same number of bits
    as size - 1, size is not a power of two: only the lower power of two fits a
    fixed bit group, and the spare symbols are reached through the carry.
    Otherwise size = 2^k and every symbol maps to exactly k bits.
    */
    let max_index_bits = bit_len(size - 1);
    if max_index_bits == bit_len(size) {
        (max_index_bits - 1, true)
    } else {
        (max_index_bits, false)
    }
}

/// Number of bits needed to represent n (0 for 0).
fn bit_len(n: usize) -> u8 {
    (usize::BITS - n.leading_zeros()) as u8
}

/// The dictionary of an encoding: symbols in order, the reverse index from
/// symbol back to position, and the step width derived from its size.
#[derive(Debug, Clone)]
pub struct SymbolMap<W> {
    symbols: Vec<W>,
    index: FxHashMap<W, usize>,
    step_bits: u8,
    carry: bool,
}

impl<W: Eq + Hash + Clone> SymbolMap<W> {
    /// Builds the map, rejecting dictionaries that are too small, too large or
    /// that repeat a symbol.
    pub fn new(symbols: Vec<W>) -> Result<Self, Error> {
        if symbols.len() < 2 {
            return Err(Error::TooFewSymbols(symbols.len()));
        }
        if symbols.len() > MAX_SYMBOLS {
            return Err(Error::TooManySymbols(symbols.len()));
        }

        let mut index = FxHashMap::default();
        index.reserve(symbols.len());
        for (pos, sym) in symbols.iter().enumerate() {
            if let Some(&first) = index.get(sym) {
                return Err(Error::DuplicateSymbol {
                    first,
                    duplicate: pos,
                });
            }
            index.insert(sym.clone(), pos);
        }

        let (step_bits, carry) = step_width(symbols.len());
        debug!(
            "Built dictionary of {} symbols: {} bits per symbol, carry {}",
            symbols.len(),
            step_bits,
            if carry { "enabled" } else { "disabled" }
        );

        Ok(Self {
            symbols,
            index,
            step_bits,
            carry,
        })
    }

    /// Position of `sym` in the dictionary, or None if it is not a member.
    pub fn position(&self, sym: &W) -> Option<usize> {
        self.index.get(sym).copied()
    }
}

impl<W> SymbolMap<W> {
    /// Symbol stored at `pos`. Callers only pass positions below len().
    pub fn symbol(&self, pos: usize) -> &W {
        &self.symbols[pos]
    }

    /// Number of symbols in the dictionary.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; a map holds at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn step_bits(&self) -> u8 {
        self.step_bits
    }

    /// True when the dictionary size is not a power of two.
    pub fn carries(&self) -> bool {
        self.carry
    }

    pub fn symbols(&self) -> &[W] {
        &self.symbols
    }
}

#[cfg(test)]
mod test {
    use super::{step_width, SymbolMap};
    use crate::error::Error;

    #[test]
    fn step_width_power_of_two_test() {
        assert_eq!(step_width(2), (1, false));
        assert_eq!(step_width(16), (4, false));
        assert_eq!(step_width(32), (5, false));
        assert_eq!(step_width(64), (6, false));
        assert_eq!(step_width(256), (8, false));
    }

    #[test]
    fn step_width_carry_test() {
        assert_eq!(step_width(3), (1, true));
        assert_eq!(step_width(10), (3, true));
        assert_eq!(step_width(33), (5, true));
        assert_eq!(step_width(63), (5, true));
        assert_eq!(step_width(65), (6, true));
        assert_eq!(step_width(511), (8, true));
    }

    #[test]
    fn reverse_index_test() {
        let map = SymbolMap::new("abcde".chars().collect()).unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.position(&'a'), Some(0));
        assert_eq!(map.position(&'e'), Some(4));
        assert_eq!(map.position(&'z'), None);
        assert_eq!(*map.symbol(3), 'd');
        assert_eq!(map.step_bits(), 2);
        assert!(map.carries());
    }

    #[test]
    fn too_few_symbols_test() {
        assert_eq!(
            SymbolMap::<u8>::new(vec![]).unwrap_err(),
            Error::TooFewSymbols(0)
        );
        assert_eq!(
            SymbolMap::new(vec![b'x']).unwrap_err(),
            Error::TooFewSymbols(1)
        );
    }

    #[test]
    fn duplicate_symbol_test() {
        assert_eq!(
            SymbolMap::new(b"abcb".to_vec()).unwrap_err(),
            Error::DuplicateSymbol {
                first: 1,
                duplicate: 3
            }
        );
    }

    #[test]
    fn too_many_symbols_test() {
        assert!(SymbolMap::new((0..511_u16).collect()).is_ok());
        assert_eq!(
            SymbolMap::new((0..512_u16).collect()).unwrap_err(),
            Error::TooManySymbols(512)
        );
    }
}
