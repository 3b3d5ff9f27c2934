//! BitReader: the decoding half of the streaming layer.
//!
//! Pulls symbols from any SymbolSource and hands back the decoded bytes through `std::io::Read`.
//!
//! NOTE: Each read asks the source for about as many symbols as the caller's buffer can take.
//! Bytes decoded past the end of that buffer are kept and served first on the next read.
//!
use std::hash::Hash;
use std::io;

use log::{trace, warn};

use super::bitunpacker::BitUnpacker;
use super::SymbolSource;
use crate::codec::Encoding;
use crate::error::Error;

/// Reads symbols from a source and decodes them through an Encoding.
pub struct BitReader<'a, W, S> {
    encoding: &'a Encoding<W>,
    source: S,
    /// Symbols of the current chunk.
    symbols: Vec<W>,
    /// Decoded bytes not yet handed out, starting at cursor.
    pending: Vec<u8>,
    cursor: usize,
    unpacker: BitUnpacker,
    /// Decode failure, reported once the bytes decoded before it are handed out.
    failed: Option<Error>,
    eof: bool,
}

impl<'a, W: Eq + Hash + Clone, S: SymbolSource<W>> BitReader<'a, W, S> {
    pub fn new(encoding: &'a Encoding<W>, source: S) -> Self {
        Self {
            encoding,
            source,
            symbols: Vec::new(),
            pending: Vec::new(),
            cursor: 0,
            unpacker: BitUnpacker::new(),
            failed: None,
            eof: false,
        }
    }

    /// Reports TrailingBits if the symbols read so far end in non-zero bits
    /// that do not make up a whole byte.
    pub fn close(&self) -> Result<(), Error> {
        self.unpacker.finish().map_err(|e| {
            warn!("Stream ended with partial data: {}", e);
            e
        })
    }

    /// Count of decoded bits waiting to complete a byte.
    pub fn pending_bits(&self) -> u8 {
        self.unpacker.partial_bits()
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Pull and decode the next chunk of symbols for a read of `capacity` bytes.
    fn fill(&mut self, capacity: usize) -> io::Result<()> {
        self.pending.clear();
        self.cursor = 0;

        // A partial byte is already waiting, so one symbol fewer completes the buffer
        let mut want = self.encoding.encoded_len(capacity);
        if self.unpacker.partial_bits() > 0 {
            want -= 1;
        }

        self.symbols.clear();
        let n = self.source.read_symbols(&mut self.symbols, want.max(1))?;
        if n == 0 {
            trace!("Reached end of the symbol stream");
            self.eof = true;
            return Ok(());
        }

        if let Err(e) = self
            .unpacker
            .unpack(self.encoding.symbol_map(), &self.symbols, &mut self.pending)
        {
            self.failed = Some(e);
        }
        Ok(())
    }
}

impl<W: Eq + Hash + Clone, S: SymbolSource<W>> io::Read for BitReader<'_, W, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            if self.cursor < self.pending.len() {
                let n = (self.pending.len() - self.cursor).min(buf.len());
                buf[..n].copy_from_slice(&self.pending[self.cursor..self.cursor + n]);
                self.cursor += n;
                return Ok(n);
            }
            if let Some(e) = &self.failed {
                return Err(e.clone().into());
            }
            if self.eof {
                self.close()?;
                return Ok(0);
            }
            // A chunk may decode to no whole byte yet, so keep pulling
            self.fill(buf.len())?;
        }
    }
}
