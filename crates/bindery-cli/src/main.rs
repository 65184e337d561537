// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bindery — merge images and PDFs into a single PDF from the command line.
//
// Entry point. Initialises logging, classifies the inputs by extension, runs
// the assembler, and writes the output file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use bindery_core::{AssemblyConfig, BinderyError, InputKind, InvalidItemPolicy, PageGeometry};
use bindery_document::{DocumentAssembler, ImageSource, MergeableItem, PdfSource};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageSizeOption {
    A4,
    Letter,
}

impl From<PageSizeOption> for PageGeometry {
    fn from(opt: PageSizeOption) -> Self {
        match opt {
            PageSizeOption::A4 => Self::a4(),
            PageSizeOption::Letter => Self::letter(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InvalidItemOption {
    Abort,
    Skip,
}

impl From<InvalidItemOption> for InvalidItemPolicy {
    fn from(opt: InvalidItemOption) -> Self {
        match opt {
            InvalidItemOption::Abort => Self::Abort,
            InvalidItemOption::Skip => Self::Skip,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bindery")]
#[command(author, version, about = "Merge images and PDFs into a single PDF", long_about = None)]
struct Args {
    /// Input files (images and PDFs), merged in the order given
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long, default_value = "merged.pdf")]
    output: PathBuf,

    /// Page size for pages generated from images
    #[arg(long, value_enum)]
    page_size: Option<PageSizeOption>,

    /// Page margin in points
    #[arg(long)]
    margin: Option<f32>,

    /// Title embedded in the output document info
    #[arg(long)]
    title: Option<String>,

    /// What to do with an image that fails layout
    #[arg(long, value_enum)]
    on_invalid: Option<InvalidItemOption>,

    /// JSON config file; explicit flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(pages) => {
            info!(pages, output = %args.output.display(), "Merge complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "Merge failed");
            eprintln!("bindery: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<usize, BinderyError> {
    let config = build_config(args)?;
    let assembler = DocumentAssembler::new(config);

    let mut items = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        items.push(load_item(path)?);
    }

    let assembled = assembler.assemble(&items)?;
    assembled.write_to_file(&args.output)?;
    Ok(assembled.page_count())
}

/// Start from the config file (or defaults) and let explicit flags override.
fn build_config(args: &Args) -> Result<AssemblyConfig, BinderyError> {
    let mut config = match &args.config {
        Some(path) => AssemblyConfig::load(path)?,
        None => AssemblyConfig::default(),
    };

    if let Some(page_size) = args.page_size {
        // A size flag picks the canvas but keeps the configured margin.
        config.page = PageGeometry::from(page_size).with_margin(config.page.margin);
    }
    if let Some(margin) = args.margin {
        config.page.margin = margin;
    }
    if let Some(title) = &args.title {
        config.title = Some(title.clone());
    }
    if let Some(on_invalid) = args.on_invalid {
        config.on_invalid_item = on_invalid.into();
    }

    config.page.validate()?;
    Ok(config)
}

fn load_item(path: &Path) -> Result<MergeableItem, BinderyError> {
    let kind = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(InputKind::from_extension)
        .ok_or_else(|| BinderyError::UnsupportedInput(path.display().to_string()))?;

    match kind {
        InputKind::Pdf => Ok(MergeableItem::Document(PdfSource::open(path)?)),
        InputKind::Image => Ok(MergeableItem::Image(ImageSource::open(path)?)),
    }
}
