//! Binary-to-text encoding over arbitrary alphabets.
//!
//! Version 0.1.0
//!
//! Turns bytes into symbols drawn from any ordered dictionary of 2 to 511 unique symbols, and
//! back. Symbols can be bytes, chars or any other hashable value.
//!
//! A dictionary of 2^k symbols packs k bits into each symbol, so a 32 or 64 symbol alphabet
//! gives exactly the unpadded output of base32 or base64. Any other size packs
//! floor(log2(n)) bits per symbol and adds a running offset (the previous symbol's position)
//! before each lookup, so every symbol of the alphabet is used. Output is never padded; the
//! decoded length follows from the symbol count alone.
//!
//! Streaming is provided by BitWriter and BitReader, which produce exactly what the one-shot
//! codec produces no matter how the input is chunked.
//!
//! Basic usage:
//!
//! ```
//! use based::Encoding;
//!
//! let b64 = Encoding::std_base64();
//! assert_eq!(b64.encode(b"hello world"), b"aGVsbG8gd29ybGQ");
//!
//! let digits = Encoding::new("0123456789".chars().collect::<Vec<_>>()).unwrap();
//! let text = digits.encode_to_string(b"hello world");
//! assert_eq!(digits.decode_str(&text).unwrap(), b"hello world");
//! ```
//!
pub mod bitstream;
pub mod codec;
mod error;
pub mod tools;

pub use bitstream::bitreader::BitReader;
pub use bitstream::bitwriter::BitWriter;
pub use bitstream::{SymbolSink, SymbolSource};
pub use codec::Encoding;
pub use error::Error;
