use crate::checksum::{Checksum, Checksummer};
use crate::config::AnalysisConfig;
use crate::entropy::{conditional_entropy, entropy, skipped_pairs};
use crate::error::Result;
use crate::frequency::{FrequencyAccumulator, SymbolStatistics};
use crate::reader::SymbolReader;
use crate::report::EntropyReport;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Read;
use std::path::Path;

const BLOCK_SIZE: usize = 64 * 1024;

/// Everything learned from one pass over an input.
#[derive(Debug, Clone)]
pub struct Analysis {
	pub report: EntropyReport,
	pub statistics: SymbolStatistics,
	pub checksum: Option<Checksum>,
}

/// Analyse an arbitrary reader in a single pass.
pub fn analyze<R: Read>(reader: R, config: &AnalysisConfig) -> Result<Analysis> {
	analyze_symbols(SymbolReader::new(reader), config, None)
}

/// Analyse the file at `path` in a single pass.
pub fn analyze_file<P: AsRef<Path>>(path: P, config: &AnalysisConfig) -> Result<Analysis> {
	let path = path.as_ref();
	let symbols = SymbolReader::open(path)?;
	let expected_len = fs::metadata(path).ok().map(|m| m.len());
	analyze_symbols(symbols, config, expected_len)
}

fn analyze_symbols<R: Read>(
	symbols: SymbolReader<R>,
	config: &AnalysisConfig,
	expected_len: Option<u64>,
) -> Result<Analysis> {
	let pb = progress_bar(config.progress, expected_len);
	let mut accumulator = FrequencyAccumulator::new(config.model);
	let mut checksummer = config.checksum.map(Checksummer::new);
	let mut block = Vec::with_capacity(BLOCK_SIZE);

	for symbol in symbols {
		let symbol = symbol?;
		accumulator.push(symbol);
		block.push(symbol);
		if block.len() == BLOCK_SIZE {
			flush_block(&mut block, checksummer.as_mut(), &pb);
		}
	}
	flush_block(&mut block, checksummer.as_mut(), &pb);
	pb.finish_and_clear();

	let statistics = accumulator.finish();
	let report = compute_report(&statistics);
	let checksum = checksummer.map(Checksummer::finalize);

	log::info!(
		"{} symbols ({} distinct): entropy {}, conditional entropy {}",
		statistics.frequencies.total(),
		statistics.frequencies.distinct(),
		report.entropy,
		report.conditional_entropy
	);

	Ok(Analysis { report, statistics, checksum })
}

/// Run both calculators over finished tables.
pub fn compute_report(statistics: &SymbolStatistics) -> EntropyReport {
	let frequencies = &statistics.frequencies;
	if frequencies.is_empty() {
		log::warn!("input is empty; reporting zero entropy");
	}

	let skipped = skipped_pairs(&statistics.pairs, frequencies);
	if skipped > 0 {
		log::warn!(
			"{} pair(s) under contexts that never occur as symbols are left out of the conditional entropy",
			skipped
		);
	}

	EntropyReport {
		entropy: entropy(frequencies),
		conditional_entropy: conditional_entropy(&statistics.pairs, frequencies),
	}
}

fn flush_block(block: &mut Vec<u8>, checksummer: Option<&mut Checksummer>, pb: &ProgressBar) {
	if let Some(checksummer) = checksummer {
		checksummer.update(&block[..]);
	}
	pb.inc(block.len() as u64);
	block.clear();
}

fn progress_bar(enabled: bool, expected_len: Option<u64>) -> ProgressBar {
	if !enabled {
		return ProgressBar::hidden();
	}
	match expected_len {
		Some(len) => {
			let pb = ProgressBar::new(len);
			pb.set_style(ProgressStyle::default_bar()
				.template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
				.unwrap_or_else(|_| ProgressStyle::default_bar())
				.progress_chars("#>-")
			);
			pb
		}
		None => {
			let pb = ProgressBar::new_spinner();
			pb.set_style(ProgressStyle::default_spinner()
				.template("{spinner:.green} [{elapsed_precise}] {bytes} read")
				.unwrap_or_else(|_| ProgressStyle::default_spinner())
			);
			pb
		}
	}
}
