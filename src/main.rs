use anyhow::{Context, Result};
use clap::Parser;
use forumdeck::app::App;
use forumdeck::cli::{print_error, Cli};
use forumdeck::config::Config;
use forumdeck::styles::{init_theme, ThemeType};
use forumdeck::utils::{get_config_path, get_log_dir};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore the terminal first so the panic message is readable
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("forumdeck.log");

    // Initialize tracing with file logging; the terminal belongs to the TUI
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "forumdeck.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config_path = get_config_path();
    let mut config =
        Config::load_or_create(&config_path).context("Failed to load configuration")?;
    config.apply_env();
    cli.apply_overrides(&mut config);

    init_theme(config.theme.parse::<ThemeType>().unwrap_or_default());

    let result = match cli.command {
        Some(command) => Cli::execute(command, &config),
        None => {
            setup_panic_hook();

            eprintln!("Logs are being written to: {:?}", log_file);
            eprintln!("View logs in real-time: tail -f {:?}", log_file);

            App::new(config, config_path).and_then(|mut app| app.run())
        }
    };

    if let Err(err) = &result {
        tracing::error!("{:#}", err);
    }

    // Flush buffered log lines before exiting
    drop(guard);

    if let Err(err) = result {
        print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
    Ok(())
}
