use std::io::Write;

use anyhow::Context;
use katgen::{CliArgs, Generator, GeneratorConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only generated code.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    let config = GeneratorConfig::default().template(args.template);
    let generator = Generator::new(args.scheme, args.algorithm, config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = generator
        .generate_to(&mut out)
        .with_context(|| format!("generating tests for `{}`", generator.scheme()))?;
    out.flush().context("flushing stdout")?;

    info!(
        input = %report.input.display(),
        records = report.records_emitted,
        trailing_dropped = report.trailing_dropped,
        "done"
    );
    Ok(())
}
