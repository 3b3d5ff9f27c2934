use thiserror::Error;

/// Error type for dictionary construction and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A dictionary needs at least two symbols to carry any bits.
    #[error("dictionary must have at least 2 symbols, found {0}")]
    TooFewSymbols(usize),

    /// More than 511 symbols would need 9+ bits per symbol, which the
    /// unpadded length arithmetic cannot reconstruct.
    #[error("dictionary of {0} symbols is larger than the supported maximum of 511")]
    TooManySymbols(usize),

    /// The same symbol appears twice in the dictionary.
    #[error("dictionary must consist of unique symbols; found duplicate of {first} at {duplicate}")]
    DuplicateSymbol { first: usize, duplicate: usize },

    /// A symbol that is not part of the dictionary was found while decoding.
    #[error("unknown symbol at index {position}")]
    UnknownSymbol { position: usize },

    /// A known symbol that, given the running offset, does not decode to a
    /// value the encoder could have produced.
    #[error("symbol at index {position} is out of range for the running offset")]
    InvalidSymbol { position: usize },

    /// Decoding finished with non-zero bits that do not make up a whole byte.
    #[error("finished with remaining partial bits [partial={partial:08b}, partial_bits={bits}]")]
    TrailingBits { partial: u8, bits: u8 },
}

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, err)
    }
}
