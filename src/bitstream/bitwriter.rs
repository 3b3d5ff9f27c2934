use std::io;

use log::trace;

use super::bitpacker::BitPacker;
use super::SymbolSink;
use crate::codec::Encoding;

/// Streams bytes through an Encoding into a symbol sink. Bits that do not yet
/// fill a symbol are held until the next write, so the output does not depend
/// on how the input is chunked. Call close() once the input is done to emit
/// the last, padded symbol.
pub struct BitWriter<'a, W, S> {
    encoding: &'a Encoding<W>,
    sink: S,
    /// Scratch buffer for the symbols of one chunk.
    buf: Vec<W>,
    packer: BitPacker,
}

impl<'a, W: Clone, S: SymbolSink<W>> BitWriter<'a, W, S> {
    pub fn new(encoding: &'a Encoding<W>, sink: S) -> Self {
        Self {
            encoding,
            sink,
            buf: Vec::new(),
            packer: BitPacker::new(),
        }
    }

    /// Encode one chunk and hand its symbols to the sink. Returns the number
    /// of symbols written, which may be 0 for a short chunk.
    pub fn write_chunk(&mut self, src: &[u8]) -> io::Result<usize> {
        if src.is_empty() {
            return Ok(0);
        }

        self.buf.clear();
        self.buf
            .reserve(self.encoding.encoded_len_with(src.len(), self.packer.avail_bits()));
        let n = self.packer.pack(self.encoding.symbol_map(), src, &mut self.buf);
        if n > 0 {
            self.sink.write_symbols(&self.buf)?;
        }
        Ok(n)
    }

    /// Emit the pending bits, if any, as one padded symbol and flush the sink.
    /// The packer is empty afterwards, so closing again writes nothing.
    pub fn close(&mut self) -> io::Result<()> {
        self.buf.clear();
        if self.packer.flush(self.encoding.symbol_map(), &mut self.buf) > 0 {
            trace!("Flushing the final padded symbol");
            self.sink.write_symbols(&self.buf)?;
        }
        self.sink.flush_symbols()
    }

    /// Count of input bits waiting for the next symbol.
    pub fn pending_bits(&self) -> u8 {
        self.packer.avail_bits()
    }

    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Give back the sink. Pending bits are dropped unless close() was called.
    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<W: Clone, S: SymbolSink<W>> io::Write for BitWriter<'_, W, S> {
    /// Always consumes the whole buffer.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_chunk(buf)?;
        Ok(buf.len())
    }

    /// Flushes the sink only. Pending bits stay pending, since padding them
    /// here would change the output.
    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush_symbols()
    }
}
