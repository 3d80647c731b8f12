use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntropyError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Failed to open {}: {source}", .path.display())]
	FileOpen {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid command line arguments")]
	Usage,

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

pub type Result<T> = std::result::Result<T, EntropyError>;
