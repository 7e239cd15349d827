use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use unbundle::{Entry, Observer, UnbundleError};

#[derive(Parser)]
#[command(name = "unbundle")]
#[command(version, about = "Extracts the archive embedded in this binary", long_about = None)]
struct Cli {
    /// Directory to extract into. Created if missing; defaults to the
    /// current directory.
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

/// Renders the extraction protocol: one stdout line per materialized
/// entry, one stderr line per failure.
struct Console;

impl Observer for Console {
    fn on_dir(&mut self, entry: &Entry) {
        println!("  d {}", entry.relative.display());
    }

    fn on_file(&mut self, entry: &Entry) {
        println!("  f {}  ({} bytes)", entry.relative.display(), entry.size);
    }

    fn on_error(&mut self, error: &UnbundleError) {
        eprintln!("unbundle: {error}");
    }
}

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("Unbundling into {} …", cli.output_dir.display());

    let report = match unbundle::extract()
        .destination(&cli.output_dir)
        .observe(Console)
        .run()
    {
        Ok(report) => report,
        Err(error) => {
            eprintln!("unbundle: {error}");
            return ExitCode::FAILURE;
        }
    };

    if report.error_count > 0 {
        eprintln!(
            "unbundle: completed with {} error(s)",
            report.error_count
        );
        return ExitCode::FAILURE;
    }

    println!("Done.");
    ExitCode::SUCCESS
}
