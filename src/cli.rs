use crate::analysis;
use crate::config::{AnalysisConfig, ChecksumType, ContextModel};
use crate::error::EntropyError;
use crate::report;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Reports the zero-order entropy, the first-order conditional entropy and their absolute difference for the bytes of a file")]
struct Cli {
    /// Input file to analyse
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Predecessor of the first byte [cyclic, sentinel]
    #[arg(short, long, default_value = "cyclic")]
    model: ContextModel,

    /// Print values with a fixed number of decimals
    #[arg(long, value_name = "DIGITS")]
    precision: Option<usize>,

    /// Also print a checksum of the input [crc32, sha256]
    #[arg(short, long)]
    checksum: Option<ChecksumType>,

    /// Also print symbol and pair counts
    #[arg(short, long)]
    summary: bool,

    /// Show a progress bar while reading
    #[arg(short, long)]
    progress: bool,
}

impl Cli {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            model: self.model,
            precision: self.precision,
            checksum: self.checksum,
            summary: self.summary,
            progress: self.progress,
        }
    }
}

pub fn run() -> Result<(), EntropyError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_from(std::env::args_os(), &mut out)
}

/// Parse `args` (program name first) and write the report to `out`.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> Result<(), EntropyError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            write!(out, "{}", e.render())?;
            return Ok(());
        }
        Err(e) => {
            e.print()?;
            return Err(EntropyError::Usage);
        }
    };

    let config = cli.config();
    let start = Instant::now();
    let analysis = analysis::analyze_file(&cli.input, &config)?;
    log::debug!("analysed {} in {:.2?}", cli.input.display(), start.elapsed());

    analysis.report.write_to(out, config.precision)?;
    if config.summary {
        report::write_summary(out, &analysis.statistics)?;
    }
    if let Some(checksum) = &analysis.checksum {
        report::write_checksum(out, checksum)?;
    }
    out.flush()?;

    Ok(())
}
