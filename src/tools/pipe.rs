use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use log::{debug, info};

use super::cli::CodecOpts;
use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::codec::Encoding;

/// Open the input named in opts, or stdin.
fn open_input(opts: &CodecOpts) -> io::Result<Box<dyn Read>> {
    Ok(match &opts.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    })
}

/// Open the output named in opts, or stdout.
fn open_output(opts: &CodecOpts) -> io::Result<Box<dyn Write>> {
    Ok(match &opts.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

/// Encode the input defined in opts <CodecOpts> with its dictionary.
pub fn encode(opts: &CodecOpts) -> io::Result<()> {
    let enc = Encoding::new(opts.dictionary.as_slice())?;
    let mut input = open_input(opts)?;
    let mut bw = BitWriter::new(&enc, open_output(opts)?);

    let mut buf = vec![0_u8; opts.buffer_size];
    let mut bytes_in = 0;
    let mut symbols_out = 0;
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        symbols_out += bw.write_chunk(&buf[..n])?;
        bytes_in += n;
        debug!("Encoded a chunk of {} bytes", n);
    }
    if bw.pending_bits() > 0 {
        symbols_out += 1;
    }
    bw.close()?;

    info!("Encoded {} bytes into {} symbols.", bytes_in, symbols_out);
    Ok(())
}

/// Decode the input defined in opts <CodecOpts> with its dictionary.
pub fn decode(opts: &CodecOpts) -> io::Result<()> {
    let enc = Encoding::new(opts.dictionary.as_slice())?;
    let mut br = BitReader::new(&enc, open_input(opts)?);
    let mut output = open_output(opts)?;

    let mut buf = vec![0_u8; opts.buffer_size];
    let mut bytes_out = 0;
    loop {
        let n = match br.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        output.write_all(&buf[..n])?;
        bytes_out += n;
    }
    output.flush()?;

    info!("Decoded {} bytes.", bytes_out);
    Ok(())
}
