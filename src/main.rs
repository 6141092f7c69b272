use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use mixgen::{cli::Cli, config::Config, logging::init_logging, output::OutputWriter};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli).context("invalid association arguments")?;

    log::debug!("Configuration: {:?}", config);
    log::debug!(
        "Rendering {} association(s) for {}",
        config.model.associations.len(),
        config.model.interface_name()
    );

    for association in &config.model.associations {
        log::debug!(
            "  {} {} as {}",
            association.kind,
            association.association_model_name,
            association.singular
        );
    }

    OutputWriter::new(config.output_format)
        .write(&config.model)
        .context("failed to write generated interface")?;

    Ok(())
}
