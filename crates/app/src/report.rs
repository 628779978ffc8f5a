//! Human-readable run reporting: size statistics and the code table.

use huffpack_core::CodeTable;

/// Maximum code-table rows printed before eliding the rest.
const CODE_DISPLAY_LIMIT: usize = 32;

/// Byte counts for one compression or decompression run.
#[derive(Debug, Clone, Copy)]
pub struct SizeReport {
    pub input_bytes: usize,
    pub output_bytes: usize,
}

impl SizeReport {
    /// Space saved relative to the input, as a percentage. Negative when
    /// the output grew (tiny or high-entropy inputs).
    pub fn ratio_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.output_bytes as f64 / self.input_bytes as f64) * 100.0
    }

    /// Print the statistics block for a compression run.
    pub fn print_compress(&self) {
        println!("=== Compression ===");
        println!("Original size:   {} bytes", self.input_bytes);
        println!("Compressed size: {} bytes", self.output_bytes);
        println!("Ratio:           {:.2}%", self.ratio_percent());
        println!(
            "Savings:         {} bytes",
            self.input_bytes as i64 - self.output_bytes as i64
        );
        println!();
    }

    /// Print the statistics block for a decompression run.
    pub fn print_decompress(&self) {
        println!("=== Decompression ===");
        println!("Payload size:  {} bytes", self.input_bytes);
        println!("Restored size: {} bytes", self.output_bytes);
        println!();
    }
}

/// Print the code table, shortest codes first.
///
/// Sorting and truncation are purely cosmetic; the serialized table in
/// the payload is untouched by display order.
pub fn print_code_table(table: &CodeTable) {
    let mut rows: Vec<(u8, String)> = table
        .iter()
        .map(|(symbol, code)| (symbol, code.to_string()))
        .collect();
    rows.sort_by(|a, b| (a.1.len(), a.0).cmp(&(b.1.len(), b.0)));

    println!("=== Code Table ({} symbols) ===", rows.len());
    for (symbol, code) in rows.iter().take(CODE_DISPLAY_LIMIT) {
        println!("  {}  {:>3} bits  {}", render_symbol(*symbol), code.len(), code);
    }
    if rows.len() > CODE_DISPLAY_LIMIT {
        println!("  ... and {} more", rows.len() - CODE_DISPLAY_LIMIT);
    }
    println!();
}

/// Render a symbol as a quoted character when printable, hex otherwise.
fn render_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        format!("'{}' ", symbol as char)
    } else {
        format!("0x{symbol:02X}")
    }
}
