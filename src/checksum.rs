//! Incremental input fingerprints, computed alongside the frequency pass.

use crate::config::ChecksumType;
use crc32fast::Hasher as Crc32Hasher;
use sha2::{Digest, Sha256};
use std::fmt;

/// Running checksum state.
pub enum Checksummer {
    Crc32(Crc32Hasher),
    Sha256(Sha256),
}

impl Checksummer {
    pub fn new(checksum_type: ChecksumType) -> Self {
        match checksum_type {
            ChecksumType::CRC32 => Checksummer::Crc32(Crc32Hasher::new()),
            ChecksumType::SHA256 => Checksummer::Sha256(Sha256::new()),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            Checksummer::Crc32(hasher) => hasher.update(data),
            Checksummer::Sha256(hasher) => hasher.update(data),
        }
    }

    pub fn finalize(self) -> Checksum {
        match self {
            Checksummer::Crc32(hasher) => Checksum::Crc32(hasher.finalize()),
            Checksummer::Sha256(hasher) => Checksum::Sha256(hasher.finalize().into()),
        }
    }
}

/// Finished checksum of an analysed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checksum {
    Crc32(u32),
    Sha256([u8; 32]),
}

impl Checksum {
    pub fn checksum_type(&self) -> ChecksumType {
        match self {
            Checksum::Crc32(_) => ChecksumType::CRC32,
            Checksum::Sha256(_) => ChecksumType::SHA256,
        }
    }

    /// Lowercase hex digest.
    pub fn to_hex(&self) -> String {
        match self {
            Checksum::Crc32(crc) => format!("{:08x}", crc),
            Checksum::Sha256(hash) => hash.iter().map(|b| format!("{:02x}", b)).collect(),
        }
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.checksum_type(), self.to_hex())
    }
}
