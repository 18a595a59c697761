use clap::Parser;
use droid_inspect::cli::commands::{cmd_classes, cmd_find, cmd_id, cmd_page};
use droid_inspect::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve connection settings: CLI > config file > defaults
    let server = cli.server.as_deref().or(config.server.endpoint.as_deref());
    let device = cli.device.as_deref().unwrap_or(&config.device.name);

    match cli.command {
        Commands::Page {
            input,
            strings,
            fingerprint,
        } => {
            let strings_path = strings.as_deref().or(config.strings.path.as_deref());
            cmd_page(
                input.as_deref(),
                server,
                device,
                strings_path,
                fingerprint,
                cli.verbose,
            )?;
        }
        Commands::Classes { input } => {
            cmd_classes(input.as_deref(), server, cli.verbose)?;
        }
        Commands::Find { tag, attribute } => {
            cmd_find(&tag, attribute.as_deref(), cli.verbose)?;
        }
        Commands::Id { id, strings } => {
            let strings_path = strings.as_deref().or(config.strings.path.as_deref());
            cmd_id(&id, strings_path, server)?;
        }
    }

    Ok(())
}
