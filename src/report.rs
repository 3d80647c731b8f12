use crate::checksum::Checksum;
use crate::frequency::SymbolStatistics;
use std::io::{self, Write};

/// Entropy figures of one input, in bits per symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyReport {
    pub entropy: f64,
    pub conditional_entropy: f64,
}

impl EntropyReport {
    pub fn absolute_difference(&self) -> f64 {
        (self.conditional_entropy - self.entropy).abs()
    }

    /// Writes the three result lines.
    pub fn write_to<W: Write>(&self, writer: &mut W, precision: Option<usize>) -> io::Result<()> {
        writeln!(writer, "Entropy: {}", format_value(self.entropy, precision))?;
        writeln!(
            writer,
            "Conditional Entropy: {}",
            format_value(self.conditional_entropy, precision)
        )?;
        writeln!(
            writer,
            "Absolute Difference: {}",
            format_value(self.absolute_difference(), precision)
        )
    }
}

fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(decimals) => format!("{:.*}", decimals, value),
        None => value.to_string(),
    }
}

pub fn write_summary<W: Write>(writer: &mut W, statistics: &SymbolStatistics) -> io::Result<()> {
    writeln!(writer, "Symbols: {}", statistics.frequencies.total())?;
    writeln!(writer, "Distinct Symbols: {}", statistics.frequencies.distinct())?;
    writeln!(writer, "Distinct Pairs: {}", statistics.pairs.distinct_pairs())?;
    writeln!(writer, "Context Model: {}", statistics.model)
}

pub fn write_checksum<W: Write>(writer: &mut W, checksum: &Checksum) -> io::Result<()> {
    writeln!(writer, "Checksum ({}): {}", checksum.checksum_type(), checksum.to_hex())
}
