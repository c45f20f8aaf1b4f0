use clap::Parser;
use doc_catalog::utils::{logger, validation::Validate};
use doc_catalog::{CatalogDemo, CliConfig, SystemClock};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting doc-catalog");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let demo = CatalogDemo::new(config, SystemClock);
    let mut stdout = std::io::stdout().lock();

    match demo.run(&mut stdout) {
        Ok(output_path) => {
            tracing::info!("Catalog run finished, output at {}", output_path.display());
        }
        Err(e) => {
            tracing::error!("Catalog run failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
