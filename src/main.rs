use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a directory of JPG/PNG images into a PDF file.
///
/// If the directory contains a README.md, it becomes the opening pages of
/// the document; one page per image follows.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Cli {
    /// Path to the directory containing the images
    directory: PathBuf,
}

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("can parse progress style")
            .progress_chars("#>-"),
    );

    let summary = img_book::convert(&cli.directory, &progress)
        .with_context(|| format!("Failed to convert {}", cli.directory.display()))?;
    progress.finish_and_clear();

    println!("Found {} image(s).", summary.image_count);
    println!(
        "Written {} page(s) → {}",
        summary.page_count,
        summary.outfile.display()
    );
    Ok(())
}
