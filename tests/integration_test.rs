use entropia::{analyze_file, AnalysisConfig, ContextModel};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::Path;
use std::process::Command;

fn entropia_bin() -> &'static str {
	env!("CARGO_BIN_EXE_entropia")
}

fn write_input(dir: &Path, name: &str, data: &[u8]) -> std::path::PathBuf {
	let path = dir.join(name);
	fs::write(&path, data).unwrap();
	path
}

fn parse_report(stdout: &str) -> (f64, f64, f64) {
	let values: Vec<f64> = stdout
		.lines()
		.take(3)
		.map(|line| line.rsplit(": ").next().unwrap().parse().unwrap())
		.collect();
	(values[0], values[1], values[2])
}

#[test]
fn repeated_byte_has_zero_entropy() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_input(dir.path(), "a.bin", &[0x41; 1000]);

	let out = Command::new(entropia_bin()).arg(&path).output().unwrap();
	assert!(out.status.success(), "exit code: {}", out.status);
	let stdout = String::from_utf8_lossy(&out.stdout);
	assert_eq!(
		stdout,
		"Entropy: 0\nConditional Entropy: 0\nAbsolute Difference: 0\n"
	);
}

#[test]
fn distinct_bytes_give_log2_n() {
	let dir = tempfile::tempdir().unwrap();
	let data: Vec<u8> = (0..=255u8).collect();
	let path = write_input(dir.path(), "all.bin", &data);

	let out = Command::new(entropia_bin()).arg(&path).output().unwrap();
	assert!(out.status.success());
	let (h, _, _) = parse_report(&String::from_utf8_lossy(&out.stdout));
	assert!((h - 8.0).abs() < 1e-9);
}

#[test]
fn alternating_pattern_is_fully_predictable() {
	let dir = tempfile::tempdir().unwrap();
	let data: Vec<u8> = b"AB".iter().copied().cycle().take(64).collect();
	let path = write_input(dir.path(), "ab.bin", &data);

	let out = Command::new(entropia_bin()).arg(&path).output().unwrap();
	assert!(out.status.success());
	let (h, hc, diff) = parse_report(&String::from_utf8_lossy(&out.stdout));
	assert_eq!(h, 1.0);
	assert_eq!(hc, 0.0);
	assert_eq!(diff, 1.0);
}

#[test]
fn empty_file_reports_zero_and_succeeds() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_input(dir.path(), "empty.bin", &[]);

	let out = Command::new(entropia_bin()).arg(&path).output().unwrap();
	assert!(out.status.success());
	assert_eq!(
		String::from_utf8_lossy(&out.stdout),
		"Entropy: 0\nConditional Entropy: 0\nAbsolute Difference: 0\n"
	);
}

#[test]
fn wrong_argument_count_exits_with_one() {
	let out = Command::new(entropia_bin()).output().unwrap();
	assert_eq!(out.status.code(), Some(1));
	assert!(out.stdout.is_empty());
	assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));

	let out = Command::new(entropia_bin()).args(["one.bin", "two.bin"]).output().unwrap();
	assert_eq!(out.status.code(), Some(1));
}

#[test]
fn unreadable_file_exits_with_one() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("nope.bin");

	let out = Command::new(entropia_bin()).arg(&path).output().unwrap();
	assert_eq!(out.status.code(), Some(1));
	assert!(out.stdout.is_empty());
	assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to open"));
}

#[test]
fn same_file_twice_is_bit_identical() {
	let dir = tempfile::tempdir().unwrap();
	let mut rng = StdRng::seed_from_u64(7);
	let mut data = vec![0u8; 100_000];
	rng.fill(&mut data[..]);
	let path = write_input(dir.path(), "random.bin", &data);

	let first = Command::new(entropia_bin()).arg(&path).output().unwrap();
	let second = Command::new(entropia_bin()).arg(&path).output().unwrap();
	assert_eq!(first.stdout, second.stdout);

	let config = AnalysisConfig::default();
	let a = analyze_file(&path, &config).unwrap().report;
	let b = analyze_file(&path, &config).unwrap().report;
	assert_eq!(a.entropy.to_bits(), b.entropy.to_bits());
	assert_eq!(a.conditional_entropy.to_bits(), b.conditional_entropy.to_bits());
}

#[test]
fn conditioning_never_increases_entropy() {
	let dir = tempfile::tempdir().unwrap();
	let mut rng = StdRng::seed_from_u64(42);
	let config = AnalysisConfig::default();

	for round in 0..20 {
		let len = rng.gen_range(1..4096);
		let alphabet = rng.gen_range(1..=255u16) as u8;
		let data: Vec<u8> = (0..len).map(|_| rng.gen_range(0..=alphabet)).collect();
		let path = write_input(dir.path(), &format!("r{}.bin", round), &data);

		let report = analyze_file(&path, &config).unwrap().report;
		assert!(
			report.conditional_entropy <= report.entropy + 1e-12,
			"round {}: {} > {}",
			round,
			report.conditional_entropy,
			report.entropy
		);
		let expected = report.entropy - report.conditional_entropy;
		assert!((report.absolute_difference() - expected).abs() < 1e-12);
	}
}

#[test]
fn sentinel_model_from_command_line() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_input(dir.path(), "abab.bin", b"ABAB");

	let out = Command::new(entropia_bin())
		.args(["--model", "sentinel"])
		.arg(&path)
		.output()
		.unwrap();
	assert!(out.status.success());
	let (h, hc, diff) = parse_report(&String::from_utf8_lossy(&out.stdout));
	assert_eq!((h, hc, diff), (1.0, 0.25, 0.75));

	let analysis = analyze_file(&path, &AnalysisConfig::default().with_model(ContextModel::Sentinel)).unwrap();
	assert_eq!(analysis.report.conditional_entropy, 0.25);
}
