//! # entropia
//!
//! Measures how much a byte stream's next symbol depends on the one before it.
//!
//! A single pass over the input tallies how often each byte value occurs and
//! how often each ordered pair of adjacent bytes occurs. From those tables the
//! crate computes:
//!
//! - the **entropy** H(X), in bits per symbol, of the byte distribution;
//! - the **conditional entropy** H(Xn | Xn-1), in bits per symbol, of a byte
//!   given the byte before it;
//! - the **absolute difference** between the two, a rough measure of how much
//!   an order-1 model could gain over an order-0 model when compressing.
//!
//! ## Quick Start
//!
//! ```rust
//! use entropia::{analyze_bytes, AnalysisConfig};
//!
//! let data = b"ABABABAB";
//! let report = analyze_bytes(data, &AnalysisConfig::default()).unwrap();
//! assert_eq!(report.entropy, 1.0);
//! assert_eq!(report.conditional_entropy, 0.0);
//! ```
//!
//! ### Context models
//!
//! The first byte has no predecessor. [`ContextModel::Cyclic`] (the default)
//! treats the input as a ring so the first byte follows the last one;
//! [`ContextModel::Sentinel`] pretends a `0x00` byte came first, matching the
//! classic single-pass program.
//!
//! ```rust
//! use entropia::{analyze_bytes, AnalysisConfig, ContextModel};
//!
//! let config = AnalysisConfig::default().with_model(ContextModel::Sentinel);
//! let report = analyze_bytes(b"ABAB", &config).unwrap();
//! assert_eq!(report.conditional_entropy, 0.25);
//! ```
//!
//! ### Working with Files
//!
//! ```rust
//! use entropia::{analyze_file, AnalysisConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let analysis = analyze_file("input.bin", &AnalysisConfig::default())?;
//! analysis.report.write_to(&mut std::io::stdout(), None)?;
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod checksum;
pub mod cli;
pub mod config;
pub mod entropy;
pub mod error;
pub mod frequency;
pub mod reader;
pub mod report;

// Re-export commonly used types for convenience
pub use analysis::{analyze, analyze_file, Analysis};
pub use checksum::{Checksum, Checksummer};
pub use config::{AnalysisConfig, ChecksumType, ContextModel};
pub use error::{EntropyError, Result};
pub use frequency::{ConditionalFrequencyTable, FrequencyAccumulator, FrequencyTable, SymbolStatistics};
pub use reader::SymbolReader;
pub use report::EntropyReport;

use std::io::Cursor;

/// Compute the entropy report of an in-memory buffer.
///
/// For files, use [`analyze_file`], which reads the input lazily.
///
/// # Example
///
/// ```rust
/// use entropia::{analyze_bytes, AnalysisConfig};
///
/// let report = analyze_bytes(&[0u8, 1, 2, 3], &AnalysisConfig::default()).unwrap();
/// assert_eq!(report.entropy, 2.0);
/// ```
pub fn analyze_bytes(data: &[u8], config: &AnalysisConfig) -> Result<EntropyReport> {
    Ok(analysis::analyze(Cursor::new(data), config)?.report)
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
