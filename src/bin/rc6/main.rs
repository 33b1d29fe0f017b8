// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

//! Command-line interface for the `rc6` crate.

#![forbid(unsafe_code)]

mod logger;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rc6::{new_rc6_dyn, RC6Algo, DEFAULT_ROUNDS};
use tracing::{info, metadata::LevelFilter};

/// RC6-w/r/b block cipher CLI.
#[derive(Parser)]
#[command(name = "rc6", version, about = "RC6 block cipher in ECB mode")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct KeyArgs {
    /// Key as hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// Key length in bits; defaults to every bit of the hex key.
    #[arg(long)]
    key_bits: Option<usize>,
    /// Number of rounds.
    #[arg(long, default_value_t = DEFAULT_ROUNDS as usize)]
    rounds: usize,
    /// Word size in bits (16, 32 or 64).
    #[arg(long, default_value_t = 32)]
    width: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file block by block.
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Input file (must be a multiple of the block size).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path; the result is printed as hex when omitted.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt a file block by block.
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Input file (must be a multiple of the block size).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path; the result is printed as hex when omitted.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the expanded round-key table as hex words.
    RoundKeys {
        #[command(flatten)]
        key: KeyArgs,
    },
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn main() -> Result<()> {
    logger::init(LevelFilter::INFO);

    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt { key, input, output } => {
            cmd_transform(&key, &input, output.as_deref(), Direction::Encrypt)
        }
        Commands::Decrypt { key, input, output } => {
            cmd_transform(&key, &input, output.as_deref(), Direction::Decrypt)
        }
        Commands::RoundKeys { key } => cmd_round_keys(&key),
    }
}

fn cmd_transform(
    key: &KeyArgs,
    input_path: &Path,
    output_path: Option<&Path>,
    direction: Direction,
) -> Result<()> {
    let cipher = build_cipher(key)?;
    let mut data =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;

    match direction {
        Direction::Encrypt => cipher.encrypt(&mut data),
        Direction::Decrypt => cipher.decrypt(&mut data),
    }
    .with_context(|| format!("process {}", input_path.display()))?;

    info!(
        bytes = data.len(),
        blocks = data.len() / cipher.block_size(),
        "processed input"
    );

    match output_path {
        Some(path) => {
            fs::write(path, &data).with_context(|| format!("write {}", path.display()))?
        }
        None => println!("{}", hex::encode(&data)),
    }
    Ok(())
}

fn cmd_round_keys(key: &KeyArgs) -> Result<()> {
    let cipher = build_cipher(key)?;
    let digits = key.width / 4;
    for (i, word) in cipher.round_key_words().iter().enumerate() {
        println!("S[{i:>3}] = {word:0digits$x}");
    }
    Ok(())
}

fn build_cipher(args: &KeyArgs) -> Result<Box<dyn RC6Algo + Send + Sync>> {
    let key = hex::decode(args.key_hex.trim()).context("decode key hex")?;
    let key_bits = args.key_bits.unwrap_or(key.len() * 8);
    let cipher = new_rc6_dyn(args.width, args.rounds, &key, key_bits)
        .context("initialize rc6 instance")?;
    Ok(cipher)
}
