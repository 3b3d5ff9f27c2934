use std::io::{self, Read, Write};

use based::{BitReader, BitWriter, Encoding, Error, SymbolSink, SymbolSource};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Sink for symbols that are not bytes.
#[derive(Default)]
struct Collect<W>(Vec<W>);

impl<W: Clone> SymbolSink<W> for Collect<W> {
    fn write_symbols(&mut self, symbols: &[W]) -> io::Result<()> {
        self.0.extend_from_slice(symbols);
        Ok(())
    }
}

/// Source that hands out at most a few symbols per call.
struct Trickle<W> {
    symbols: Vec<W>,
    pos: usize,
    rng: StdRng,
}

impl<W: Clone> SymbolSource<W> for Trickle<W> {
    fn read_symbols(&mut self, buf: &mut Vec<W>, max: usize) -> io::Result<usize> {
        let n = self
            .rng
            .gen_range(1..=5)
            .min(max)
            .min(self.symbols.len() - self.pos);
        buf.extend_from_slice(&self.symbols[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Sink that refuses everything.
struct Broken;

impl SymbolSink<u16> for Broken {
    fn write_symbols(&mut self, _symbols: &[u16]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

fn encodings() -> Vec<Encoding<u16>> {
    [2_u16, 3, 10, 32, 33, 64, 85, 256, 300]
        .iter()
        .map(|&n| Encoding::new((0..n).collect::<Vec<_>>()).unwrap())
        .collect()
}

fn random_chunks<'d>(rng: &mut StdRng, data: &'d [u8]) -> Vec<&'d [u8]> {
    let mut chunks = Vec::new();
    let mut rest = data;
    while !rest.is_empty() {
        let n = rng.gen_range(0..=rest.len().min(17));
        let (head, tail) = rest.split_at(n);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

#[test]
fn writer_matches_batch_encode() {
    let mut rng = StdRng::seed_from_u64(11);
    for enc in encodings() {
        for size in [0, 1, 2, 9, 39, 304, 1000] {
            let mut data = vec![0_u8; size];
            rng.fill(&mut data[..]);

            let mut bw = BitWriter::new(&enc, Collect::default());
            let mut written = 0;
            for chunk in random_chunks(&mut rng, &data) {
                written += bw.write_chunk(chunk).unwrap();
            }
            let pending = bw.pending_bits();
            bw.close().unwrap();
            let out = bw.into_inner().0;

            assert_eq!(out, enc.encode(&data), "n {} size {}", enc.dictionary().len(), size);
            assert_eq!(written + usize::from(pending > 0), out.len());
        }
    }
}

#[test]
fn reader_matches_batch_decode() {
    let mut rng = StdRng::seed_from_u64(12);
    for enc in encodings() {
        for size in [0, 1, 2, 9, 39, 304, 1000] {
            let mut data = vec![0_u8; size];
            rng.fill(&mut data[..]);
            let symbols = enc.encode(&data);

            let source = Trickle {
                symbols,
                pos: 0,
                rng: StdRng::seed_from_u64(size as u64),
            };
            let mut br = BitReader::new(&enc, source);
            let mut out = Vec::new();
            loop {
                let mut buf = vec![0_u8; rng.gen_range(1..=9)];
                let n = br.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                out.extend_from_slice(&buf[..n]);
            }
            assert!(br.close().is_ok());
            assert_eq!(out, data, "n {} size {}", enc.dictionary().len(), size);
        }
    }
}

#[test]
fn byte_stream_round_trip() {
    let enc = Encoding::std_base32();
    let mut bw = BitWriter::new(&enc, Vec::new());
    for word in ["hel", "lo", " ", "", "world"] {
        bw.write_all(word.as_bytes()).unwrap();
    }
    bw.close().unwrap();
    let encoded = bw.into_inner();
    assert_eq!(encoded, b"NBSWY3DPEB3W64TMMQ");

    let mut br = BitReader::new(&enc, encoded.as_slice());
    let mut text = String::new();
    br.read_to_string(&mut text).unwrap();
    assert_eq!(text, "hello world");
}

#[test]
fn truncated_stream_reports_trailing_bits() {
    let enc = Encoding::std_base64();
    // "hello world" cut off after 10 symbols: 7 bytes and 4 stray bits
    let mut br = BitReader::new(&enc, &b"aGVsbG8gd2"[..]);
    let mut out = Vec::new();
    let err = br.read_to_end(&mut out).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(out, b"hello w");
    assert_eq!(
        br.close().unwrap_err(),
        Error::TrailingBits {
            partial: 0b0110,
            bits: 4
        }
    );
}

#[test]
fn sink_errors_propagate() {
    let enc = Encoding::new((0..40_u16).collect::<Vec<_>>()).unwrap();
    let mut bw = BitWriter::new(&enc, Broken);
    let err = bw.write_chunk(b"data").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn shared_encoding_serves_many_streams() {
    let enc = Encoding::new((0..100_u16).collect::<Vec<_>>()).unwrap();
    let mut a = BitWriter::new(&enc, Collect::default());
    let mut b = BitWriter::new(&enc, Collect::default());
    a.write_chunk(b"first").unwrap();
    b.write_chunk(b"second").unwrap();
    a.close().unwrap();
    b.close().unwrap();
    assert_eq!(a.into_inner().0, enc.encode(b"first"));
    assert_eq!(b.into_inner().0, enc.encode(b"second"));
}
