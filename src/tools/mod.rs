//! The tools module holds the pieces around the bit engine of `based`.
//!
//! The tools are:
//! - alphabets: The RFC 4648 base32 and base64 byte alphabets.
//! - cli: Command line interface for the `based` binary.
//! - pipe: Streams a file or stdin through the encoder or decoder for the binary.
//! - symbol_map: The dictionary, its reverse index and the step width derived from its size.
//!
pub mod alphabets;
pub mod cli;
pub mod pipe;
pub mod symbol_map;
