use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use arabic_rtl::cli::{render_matches, CliArgs, Input};
use arabic_rtl::config::HighlightConfig;
use arabic_rtl::scan::{scan_with, Strategy};

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok(source)
        }
        Input::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn main() -> Result<()> {
    arabic_rtl::tracing::init();

    let run = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let config = match &run.config_path {
        Some(path) => HighlightConfig::load_from(path),
        None => HighlightConfig::load(),
    };

    let source = read_input(&run.input)?;
    let strategy = Strategy::resolve(run.strategy.unwrap_or(config.strategy), run.language);
    tracing::info!("Scanning {:?} with {:?}", run.input, strategy);

    let matches = scan_with(&source, strategy);
    let output = render_matches(&matches, run.format).map_err(anyhow::Error::msg)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}
