use crate::error::EntropyError;
use std::fmt;
use std::str::FromStr;

/// Predecessor assigned to the first symbol of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextModel {
    /// The first symbol follows a virtual `0x00` byte.
    ///
    /// Reproduces the classic single-pass program bit for bit, including its
    /// skew: row 0 gains one pair, and if `0x00` never occurs in the input
    /// that pair is dropped from the conditional sum.
    Sentinel,
    /// The stream wraps around: the first symbol follows the last one.
    ///
    /// Every context row then sums to the marginal count of its symbol.
    #[default]
    Cyclic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumType {
    CRC32,
    SHA256,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub model: ContextModel,
    /// Fixed number of decimals; `None` keeps the default float formatting.
    pub precision: Option<usize>,
    pub checksum: Option<ChecksumType>,
    pub summary: bool,
    pub progress: bool,
}

impl AnalysisConfig {
    pub fn with_model(mut self, model: ContextModel) -> Self {
        self.model = model;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_checksum(mut self, checksum: ChecksumType) -> Self {
        self.checksum = Some(checksum);
        self
    }

    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

impl FromStr for ContextModel {
    type Err = EntropyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sentinel" => Ok(ContextModel::Sentinel),
            "cyclic" => Ok(ContextModel::Cyclic),
            _ => Err(EntropyError::ConfigError(format!("Invalid context model: {}", s))),
        }
    }
}

impl fmt::Display for ContextModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextModel::Sentinel => f.write_str("sentinel"),
            ContextModel::Cyclic => f.write_str("cyclic"),
        }
    }
}

impl FromStr for ChecksumType {
    type Err = EntropyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crc32" => Ok(ChecksumType::CRC32),
            "sha256" => Ok(ChecksumType::SHA256),
            _ => Err(EntropyError::ConfigError(format!("Invalid checksum type: {}", s))),
        }
    }
}

impl fmt::Display for ChecksumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumType::CRC32 => f.write_str("crc32"),
            ChecksumType::SHA256 => f.write_str("sha256"),
        }
    }
}
