// SPDX-License-Identifier: GPL-3.0-only

use clap::Parser;
use raw_depth_convert::PreviewStyle;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser)]
#[command(name = "raw-depth-convert")]
#[command(about = "Convert a raw normalized depth buffer into a 16-bit millimeter PNG")]
#[command(version = env!("GIT_VERSION"))]
struct Cli {
    /// Color image paired with `{stem}_depth.raw` in the same directory
    #[arg(required_unless_present = "print_config")]
    color_image: Option<PathBuf>,

    /// JSON file overriding any of the depth configuration fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write `{stem}_depth_preview.png`
    #[arg(short, long)]
    preview: bool,

    /// Color scheme for the preview (used with `--preview`)
    #[arg(long, value_enum, default_value_t = PreviewStyle::Turbo)]
    preview_style: PreviewStyle,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=raw_depth_convert=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = if cli.print_config {
        cli::print_config(cli.config.as_deref())
    } else {
        let preview = cli.preview.then_some(cli.preview_style);
        match cli.color_image {
            Some(color_image) => cli::convert_depth(&color_image, cli.config.as_deref(), preview),
            None => Err("missing color image path".into()),
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
