mod config;
mod effects;
mod logging;
mod render;
mod shell;

use clap::Parser;

/// Photograph a product's ingredient label and have a vision model explain
/// every ingredient in plain language.
#[derive(Debug, Parser)]
#[command(name = "labelscan")]
struct Cli {
    /// Image file to capture on startup.
    image: Option<String>,

    /// Model identifier override.
    #[arg(long)]
    model: Option<String>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value = "file")]
    log: logging::LogDestination,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log);

    let settings = config::analysis_settings(cli.model)?;
    let runner = effects::EffectRunner::new(settings);
    shell::run(cli.image, &runner)
}
