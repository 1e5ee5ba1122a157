use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parse_pdf_mupdf::MupdfBackend;

/// Print the text of every page of a PDF file, in page order
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Cli {
    /// Path to the PDF file
    filepath: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries page text only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    parse_pdf(&cli.filepath)
}

fn parse_pdf(pdf_path: &Path) -> anyhow::Result<()> {
    let backend = MupdfBackend::new();
    let mut stdout = std::io::stdout().lock();

    parse_pdf_core::print_pages(pdf_path, &backend, &mut stdout)
        .with_context(|| format!("failed to extract text from {}", pdf_path.display()))?;

    Ok(())
}
