//! typograph CLI: typographs a file or stdin and writes the result to stdout.

use anyhow::{Context as _, Result};
use clap::Parser;
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typograph::{Locale, OutputMode, Typograph};

#[derive(Parser)]
#[command(name = "typograph")]
#[command(version)]
#[command(about = "Smart quotes, dashes and spacing for plain text", long_about = None)]
struct Cli {
    /// Input file (stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Emit Unicode glyphs instead of HTML entities
    #[arg(short, long)]
    unicode: bool,

    /// Output mode: `html` (default) or `unicode`
    #[arg(short, long, env = "TYPOGRAPH_MODE")]
    mode: Option<OutputMode>,

    /// Pin the locale (`ru` or `en`) instead of detecting it
    #[arg(short, long)]
    locale: Option<Locale>,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.unicode {
            OutputMode::Unicode
        } else {
            self.mode.unwrap_or_default()
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            _ => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin as UTF-8")?;
                Ok(text)
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "typograph=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut builder = Typograph::builder().mode(cli.output_mode());
    if let Some(locale) = cli.locale {
        builder = builder.locale(locale);
    }
    let typograph = builder.build();

    let text = cli.read_input()?;
    let out = typograph.process(&text);
    info!(mode = %typograph.mode(), bytes_in = text.len(), bytes_out = out.len(), "done");

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(out.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
