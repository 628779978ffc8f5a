//! Seeded sample-input generation.
//!
//! When no input file is given, the tool compresses generated data with a
//! mix of compressibility profiles so the statistics block shows something
//! interesting: long runs compress hard, text-like sections moderately,
//! random sections not at all. All randomness comes from a seeded ChaCha8
//! RNG, so the same seed reproduces the same bytes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How one section of the sample behaves under compression.
#[derive(Debug, Clone, Copy)]
enum Section {
    /// A run of one repeated byte
    Run,
    /// Bytes drawn from a small text-like alphabet
    Text,
    /// A short pattern tiled across the section
    Pattern,
    /// Uniform random bytes
    Noise,
}

const SECTION_BYTES: usize = 4096;

/// Generate `size` bytes of mixed-compressibility sample data.
pub fn generate(seed: u64, size: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size);

    while data.len() < size {
        let take = (size - data.len()).min(SECTION_BYTES);
        let section = match rng.gen_range(0..10) {
            0..=2 => Section::Run,
            3..=5 => Section::Text,
            6..=7 => Section::Pattern,
            _ => Section::Noise,
        };
        fill_section(&mut rng, section, take, &mut data);
    }

    data
}

fn fill_section(rng: &mut ChaCha8Rng, section: Section, len: usize, out: &mut Vec<u8>) {
    match section {
        Section::Run => {
            let byte: u8 = rng.gen();
            out.extend(std::iter::repeat(byte).take(len));
        }
        Section::Text => {
            const ALPHABET: &[u8] = b"etaoin shrdlucmfwypvbgkjqxz.,!\n";
            for _ in 0..len {
                out.push(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
            }
        }
        Section::Pattern => {
            let pattern: Vec<u8> = (0..rng.gen_range(4..=32)).map(|_| rng.gen()).collect();
            for i in 0..len {
                out.push(pattern[i % pattern.len()]);
            }
        }
        Section::Noise => {
            for _ in 0..len {
                out.push(rng.gen());
            }
        }
    }
}
