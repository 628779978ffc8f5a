//! Configuration for the huffpack command-line tool.
//!
//! Parses command-line arguments with a plain flag loop and fills in
//! reproducible defaults. Running with zero arguments works: a seeded
//! sample input is generated and compressed, and the seed is printed so
//! the run can be repeated.

use std::path::PathBuf;

/// What the tool should do with the input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Build a payload from raw bytes
    Compress,
    /// Recover raw bytes from a payload
    Decompress,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Compress or decompress
    pub mode: Mode,

    /// Input file (None = generate a seeded sample, compress mode only)
    pub input_file: Option<PathBuf>,

    /// Output file (None = derive from the input name)
    pub output_file: Option<PathBuf>,

    /// Size of the generated sample when no input file is given
    pub sample_bytes: usize,

    /// Seed for sample generation
    pub seed: u64,

    /// Print the code table after compressing
    pub show_codes: bool,

    /// Decompress the payload in memory and compare checksums
    pub verify: bool,

    /// Print the statistics block
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode = Mode::Compress;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut show_codes = false;
        let mut verify = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--decompress" | "-d" => {
                    mode = Mode::Decompress;
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--show-codes" => {
                    show_codes = true;
                }
                "--verify" => {
                    verify = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => {
                    // First bare argument is the input path, matching
                    // `huffpack file.bin` usage.
                    if !other.starts_with('-') && input_file.is_none() {
                        input_file = Some(PathBuf::from(other));
                    } else {
                        return Err(format!("unknown argument: {other}"));
                    }
                }
            }
            i += 1;
        }

        if mode == Mode::Decompress && input_file.is_none() {
            return Err("--decompress requires an input file".to_string());
        }

        // Explicit seed, or time-based for varied sample runs.
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            mode,
            input_file,
            output_file,
            sample_bytes: sample_bytes.unwrap_or(64 * 1024),
            seed,
            show_codes,
            verify,
            print_stats,
        })
    }

    /// Resolve the output path, deriving it from the input when not given.
    ///
    /// Compress appends `.huff`; decompress strips a `.huff` suffix or
    /// appends `.out` when there is none to strip.
    pub fn resolved_output(&self) -> PathBuf {
        if let Some(out) = &self.output_file {
            return out.clone();
        }

        match (&self.input_file, self.mode) {
            (Some(input), Mode::Compress) => {
                let mut name = input.as_os_str().to_os_string();
                name.push(".huff");
                PathBuf::from(name)
            }
            (Some(input), Mode::Decompress) => {
                let name = input.to_string_lossy();
                match name.strip_suffix(".huff") {
                    Some(stripped) => PathBuf::from(stripped),
                    None => PathBuf::from(format!("{name}.out")),
                }
            }
            (None, _) => PathBuf::from("sample.huff"),
        }
    }
}

fn print_help() {
    println!("huffpack: Huffman file compressor");
    println!();
    println!("USAGE:");
    println!("    huffpack [FILE] [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>             Input file (default: generate a seeded sample)");
    println!("    --out <PATH>            Output file (default: derived from input name)");
    println!("    --decompress, -d        Decompress instead of compress");
    println!();
    println!("    --sample-bytes <N>      Generated sample size (default: 65536)");
    println!("    --seed <N>              Seed for sample generation");
    println!();
    println!("    --show-codes            Print the code table after compressing");
    println!("    --verify                Re-decompress in memory and compare checksums");
    println!("    --no-stats              Don't print the statistics block");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpack                              # Compress a generated sample");
    println!("    huffpack notes.txt                    # Write notes.txt.huff");
    println!("    huffpack -d notes.txt.huff            # Restore notes.txt");
    println!("    huffpack --seed 42 --show-codes       # Reproducible sample + code table");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, String> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Config::from_args(&args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.mode, Mode::Compress);
        assert!(config.input_file.is_none());
        assert_eq!(config.sample_bytes, 64 * 1024);
        assert!(config.print_stats);
        assert!(!config.verify);
    }

    #[test]
    fn test_bare_input_path() {
        let config = parse(&["notes.txt"]).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("notes.txt")));
        assert_eq!(config.resolved_output(), PathBuf::from("notes.txt.huff"));
    }

    #[test]
    fn test_decompress_strips_suffix() {
        let config = parse(&["-d", "notes.txt.huff"]).unwrap();
        assert_eq!(config.mode, Mode::Decompress);
        assert_eq!(config.resolved_output(), PathBuf::from("notes.txt"));
    }

    #[test]
    fn test_decompress_without_suffix() {
        let config = parse(&["-d", "payload.bin"]).unwrap();
        assert_eq!(config.resolved_output(), PathBuf::from("payload.bin.out"));
    }

    #[test]
    fn test_decompress_requires_input() {
        assert!(parse(&["--decompress"]).is_err());
    }

    #[test]
    fn test_missing_flag_value() {
        assert!(parse(&["--out"]).is_err());
        assert!(parse(&["--seed", "abc"]).is_err());
    }

    #[test]
    fn test_explicit_out() {
        let config = parse(&["--in", "a.bin", "--out", "b.huff"]).unwrap();
        assert_eq!(config.resolved_output(), PathBuf::from("b.huff"));
    }
}
