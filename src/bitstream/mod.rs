//! The bitstream module forms the bit engine and the streaming I/O layer of `based`.
//!
//! BitPacker and BitUnpacker hold the accumulator state that turns bytes into symbols and back.
//! Both keep their state between calls, which is what lets BitWriter and BitReader work on a
//! stream one chunk at a time while producing exactly what the one-shot codec produces.
//!
//! The streaming types talk to opaque symbol endpoints through SymbolSink and SymbolSource.
//! Any `std::io::Write` / `std::io::Read` is an endpoint for byte symbols, and `String` /
//! `Chars` serve `char` symbols.
//!
pub mod bitpacker;
pub mod bitreader;
pub mod bitunpacker;
pub mod bitwriter;

use std::io;

/// A sequential endpoint that accepts symbols.
pub trait SymbolSink<W> {
    /// Write all of `symbols`, or fail.
    fn write_symbols(&mut self, symbols: &[W]) -> io::Result<()>;

    fn flush_symbols(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sequential endpoint that produces symbols.
pub trait SymbolSource<W> {
    /// Append up to `max` symbols to `buf`, returning how many were appended.
    /// Returns 0 only at end of stream.
    fn read_symbols(&mut self, buf: &mut Vec<W>, max: usize) -> io::Result<usize>;
}

impl<T: io::Write> SymbolSink<u8> for T {
    fn write_symbols(&mut self, symbols: &[u8]) -> io::Result<()> {
        self.write_all(symbols)
    }

    fn flush_symbols(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl<T: io::Read> SymbolSource<u8> for T {
    fn read_symbols(&mut self, buf: &mut Vec<u8>, max: usize) -> io::Result<usize> {
        let start = buf.len();
        buf.resize(start + max, 0);
        loop {
            match self.read(&mut buf[start..]) {
                Ok(n) => {
                    buf.truncate(start + n);
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    buf.truncate(start);
                    return Err(e);
                }
            }
        }
    }
}

impl SymbolSink<char> for String {
    fn write_symbols(&mut self, symbols: &[char]) -> io::Result<()> {
        self.extend(symbols);
        Ok(())
    }
}

impl SymbolSource<char> for std::str::Chars<'_> {
    fn read_symbols(&mut self, buf: &mut Vec<char>, max: usize) -> io::Result<usize> {
        let start = buf.len();
        buf.extend(self.by_ref().take(max));
        Ok(buf.len() - start)
    }
}
