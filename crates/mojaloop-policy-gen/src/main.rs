use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

/// Exit code for a malformed invocation
const USAGE_EXIT_CODE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "mojaloop-policy-gen")]
#[command(about = "Generate the anchore-cli compatible mojaloop-default policy bundle")]
#[command(version)]
struct Args {
    /// Full path of the desired output file (overwritten if it exists)
    #[arg(value_name = "OUTPUT_FILE", allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    // Diagnostics go to stderr; stdout only carries the export line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    println!("Exporting policy path: {}", args.output.display());

    let bundle = mojaloop_policy::generate(&args.output)
        .with_context(|| format!("Failed to export policy to {}", args.output.display()))?;

    tracing::info!(
        bundle = %bundle.id,
        last_updated = bundle.last_updated,
        "Policy exported to {}",
        args.output.display()
    );

    Ok(())
}
