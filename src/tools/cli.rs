use clap::{ArgEnum, Parser};
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

use super::alphabets::{HEX_BASE32, STD_BASE32, STD_BASE64, URL_BASE64};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Encode, Decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Built-in alphabets selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ArgEnum)]
pub enum Alphabet {
    /// RFC 4648 base32
    Std32,
    /// RFC 4648 base32hex
    Hex32,
    /// RFC 4648 base64
    Std64,
    /// RFC 4648 URL-safe base64
    Url64,
}

impl Alphabet {
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            Alphabet::Std32 => STD_BASE32,
            Alphabet::Hex32 => HEX_BASE32,
            Alphabet::Std64 => STD_BASE64,
            Alphabet::Url64 => URL_BASE64,
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "based",
    version,
    about = "Encode or decode data with any alphabet of 2 to 511 unique symbols",
    long_about = None)]
pub struct Args {
    /// File to process. Reads standard input when omitted
    #[clap()]
    filename: Option<String>,

    /// Decode the input instead of encoding it
    #[clap(short = 'd', long = "decode")]
    decode: bool,

    /// Built-in alphabet to use
    #[clap(short = 'a', long = "alphabet", arg_enum, default_value = "std64")]
    alphabet: Alphabet,

    /// Custom dictionary, one symbol per byte. Overrides --alphabet
    #[clap(long = "dictionary")]
    dictionary: Option<String>,

    /// Write output to this file instead of standard output
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Bytes (or symbols) to read at a time
    #[clap(short = 'b', long = "buffer", default_value_t = 64 * 1024)]
    buffer_size: usize,

    /// Sets verbosity. -v shows warnings, -vvvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: u64,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// All user settable options of the binary
#[derive(Debug, Clone)]
pub struct CodecOpts {
    /// Encode or decode
    pub op_mode: Mode,
    /// Symbols of the dictionary, in order
    pub dictionary: Vec<u8>,
    /// File to read, or None for stdin
    pub input: Option<String>,
    /// File to write, or None for stdout
    pub output: Option<String>,
    /// Size of each read from the input
    pub buffer_size: usize,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl From<Args> for CodecOpts {
    fn from(args: Args) -> Self {
        let verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            match args.verbose {
                0 => Verbosity::Errors,
                1 => Verbosity::Warnings,
                2 => Verbosity::Info,
                3 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };

        Self {
            op_mode: if args.decode { Mode::Decode } else { Mode::Encode },
            dictionary: match args.dictionary {
                Some(symbols) => symbols.into_bytes(),
                None => args.alphabet.symbols().to_vec(),
            },
            input: args.filename,
            output: args.output,
            buffer_size: args.buffer_size.max(1),
            verbose,
        }
    }
}

/// Parse the command line, set the log level and report the settings.
pub fn codec_opts_init() -> CodecOpts {
    let opts = CodecOpts::from(Args::parse());

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("---- based initialization start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Dictionary has {} symbols", opts.dictionary.len());
    match &opts.input {
        Some(s) => info!("Getting input from the file {}", s),
        None => info!("Getting input from stdin"),
    }
    match &opts.output {
        Some(s) => info!("Sending output to the file {}", s),
        None => warn!("Sending output to stdout"),
    }
    info!("Buffer size set to {}", opts.buffer_size);
    info!("---- based initialization end ----");
    opts
}
