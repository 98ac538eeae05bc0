use clap::Parser;
use locator_model::cli::commands::{build_registry, cmd_profiles, cmd_scan};
use locator_model::cli::config::{Cli, Commands, load_config, resolve_settings};
use locator_model::model::builder::ModelBuilder;
use locator_model::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let scan_profile = match &cli.command {
        Commands::Scan { profile, .. } => profile.as_deref(),
        Commands::Profiles => None,
    };
    let settings = resolve_settings(
        &config,
        scan_profile,
        cli.profiles_file.as_deref(),
        cli.trace.as_deref(),
    );

    let registry = build_registry(settings.profiles_file.as_deref())?;
    let tracer = match &settings.trace {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Scan {
            snapshot,
            root_id,
            append_ids,
            ..
        } => {
            let builder = ModelBuilder::new(&registry).with_tracer(&tracer);
            let found = cmd_scan(
                &builder,
                &snapshot,
                &settings.profile,
                root_id.as_deref(),
                &append_ids,
                cli.verbose,
            )?;
            if !found {
                std::process::exit(1);
            }
        }
        Commands::Profiles => cmd_profiles(&registry),
    }

    Ok(())
}
