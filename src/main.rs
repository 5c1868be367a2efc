use clap::Parser;
use sleepvault::application::{load_report, ConfigService};
use sleepvault::cli::{format_badge_table, format_dashboard, Cli, Commands, Session};
use sleepvault::domain::Theme;
use sleepvault::error::SleepVaultError;
use sleepvault::infrastructure::Config;
use std::io;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // stdout carries the session itself, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Load config and apply the --theme override
fn load_config(cli: &Cli) -> Result<Config, SleepVaultError> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(theme) = &cli.theme {
        config.theme = Theme::from_str(theme).map_err(SleepVaultError::Config)?;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), SleepVaultError> {
    match &cli.command {
        None | Some(Commands::Session) => {
            let config = load_config(&cli)?;
            let mut session = Session::new(config);

            let stdin = io::stdin();
            let stdout = io::stdout();
            session.run(stdin.lock(), &mut stdout.lock())
        }
        Some(Commands::Report { input }) => {
            let config = load_config(&cli)?;
            let dashboard = load_report(input)?;
            print!("{}", format_dashboard(&dashboard, config.theme));
            Ok(())
        }
        Some(Commands::Badges) => {
            print!("{}", format_badge_table());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let (path, _) = Config::locate(cli.config.as_deref());
            let service = ConfigService::new(path);

            if *list {
                let config = service.list()?;
                println!("theme = {}", config.theme);
                println!("export_path = {}", config.export_path.display());
                println!("dashboard_after_add = {}", config.dashboard_after_add);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(k, v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(k)?);
                    Ok(())
                }
            } else {
                println!("Usage: sleepvault config [--list | <key> [<value>]]");
                println!("Valid keys: theme, export_path, dashboard_after_add");
                Ok(())
            }
        }
    }
}
