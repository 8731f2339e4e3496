use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use xor_core::encoding::{Decodable, Encodable};
use xor_core::xor::{self, XorError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// first block, hex encoded
    block1: String,

    /// second block, hex encoded, must be the same length as the first
    block2: String,
}

const EXIT_USAGE: u8 = 1;
const EXIT_LENGTH_MISMATCH: u8 = 2;
const EXIT_MALFORMED_HEX: u8 = 3;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version are not usage errors
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let (b1, b2) = match decode_blocks(&args) {
        Ok(blocks) => blocks,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::from(EXIT_MALFORMED_HEX);
        }
    };

    let xorred = match xor::xor_blocks(&b1, &b2) {
        Ok(xorred) => xorred,
        Err(XorError::LengthMismatch(l1, l2)) => {
            eprintln!("blocks must decode to the same length: {l1} bytes != {l2} bytes");
            eprintln!("{}", Args::command().render_usage());
            return ExitCode::from(EXIT_LENGTH_MISMATCH);
        }
    };

    println!("{}", xorred.encode_hex());
    ExitCode::SUCCESS
}

/// Decode both command line blocks, naming the offending one on failure
fn decode_blocks(args: &Args) -> Result<(Vec<u8>, Vec<u8>)> {
    let b1 = args
        .block1
        .decode_hex()
        .context("decoding the first block")?;
    let b2 = args
        .block2
        .decode_hex()
        .context("decoding the second block")?;

    Ok((b1, b2))
}
