//! huffpack: command-line front end for the huffpack-core codec.
//!
//! The binary is the "external collaborator" of the codec: it owns all
//! file I/O and reporting, and hands the core nothing but byte buffers.

mod config;
mod report;
mod sample;

use config::{Config, Mode};
use huffpack_core::{compress, decompress, Result};
use report::SizeReport;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let input = match &config.input_file {
        Some(path) => fs::read(path)?,
        None => {
            println!(
                "No input file; compressing a {}-byte generated sample (seed {})",
                config.sample_bytes, config.seed
            );
            sample::generate(config.seed, config.sample_bytes)
        }
    };

    let output_path = config.resolved_output();

    match config.mode {
        Mode::Compress => {
            let (payload, table) = compress(&input);
            fs::write(&output_path, &payload)?;
            println!("Wrote {}", output_path.display());

            if config.print_stats {
                SizeReport {
                    input_bytes: input.len(),
                    output_bytes: payload.len(),
                }
                .print_compress();
            }

            if config.show_codes {
                report::print_code_table(&table);
            }

            if config.verify {
                verify_round_trip(&input, &payload)?;
            }
        }
        Mode::Decompress => {
            let restored = decompress(&input)?;
            fs::write(&output_path, &restored)?;
            println!("Wrote {}", output_path.display());

            if config.print_stats {
                SizeReport {
                    input_bytes: input.len(),
                    output_bytes: restored.len(),
                }
                .print_decompress();
            }
        }
    }

    Ok(())
}

/// Decompress the payload in memory and compare CRC32 checksums with the
/// original input.
fn verify_round_trip(original: &[u8], payload: &[u8]) -> Result<()> {
    let restored = decompress(payload)?;

    let expected = crc32fast::hash(original);
    let actual = crc32fast::hash(&restored);

    if expected == actual && restored.len() == original.len() {
        println!("Verify: OK (crc32 {expected:#010x}, {} bytes)", restored.len());
    } else {
        // decompress succeeded but the bytes differ: report loudly rather
        // than pretending the payload is fine.
        eprintln!(
            "Verify: MISMATCH (crc32 {expected:#010x} != {actual:#010x}, {} vs {} bytes)",
            original.len(),
            restored.len()
        );
        std::process::exit(1);
    }

    Ok(())
}
