use clap::Parser;
use hive_viewer::cli::commands::{cmd_clients, cmd_list, cmd_show};
use hive_viewer::cli::config::{Cli, Commands, build_view_options, load_config, resolve_source};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = load_config(cli.config.as_deref());

    // Resolve report location: CLI > config > defaults
    let target = resolve_source(cli.base.as_deref(), cli.index.as_deref(), &config.source)?;

    match cli.command {
        Commands::List {
            hide_passes,
            hide_fails,
            newest_first,
            expand,
            format,
            output,
        } => {
            let options = build_view_options(&config.view, hide_passes, hide_fails, newest_first);
            let format = format.unwrap_or_else(|| config.view.format.clone());
            cmd_list(&target, options, expand, &format, output.as_deref())?;
        }
        Commands::Show {
            file,
            format,
            output,
        } => {
            let format = format.unwrap_or_else(|| config.view.format.clone());
            cmd_show(&target, &file, &format, output.as_deref())?;
        }
        Commands::Clients => {
            cmd_clients(&target)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
