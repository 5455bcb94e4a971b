use anyhow::Result;
use clap::Parser;
use std::cell::RefCell;
use std::rc::Rc;

use polaris_login::app::App;
use polaris_login::auth::{AuthPayload, SimulatedAuthenticator};
use polaris_login::cli::Cli;
use polaris_login::config::Config;
use polaris_login::styles::{self, ThemeType};
use polaris_login::utils::{get_cache_dir, get_config_path};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        // This ensures the terminal is usable after a panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        // Call the original panic hook to show the panic message
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    if !cli.execute()? {
        return Ok(());
    }

    // Set up logging directory
    let log_dir = get_cache_dir();
    std::fs::create_dir_all(&log_dir)?;

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "polaris-login.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let config_path = cli.config.clone().unwrap_or_else(get_config_path);
    let mut config = Config::load_or_create(&config_path)?;
    cli.apply_overrides(&mut config);

    let theme_type = config
        .theme
        .parse::<ThemeType>()
        .unwrap_or(ThemeType::Dark);
    styles::init_theme(theme_type);

    let authenticator =
        SimulatedAuthenticator::new(config.scan_delay(), config.transition_delay());

    // The payload is delivered through the completion callback; stash it so
    // the session summary can be printed after the terminal is restored.
    let session: Rc<RefCell<Option<AuthPayload>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&session);

    let mut app = App::new(
        config,
        Box::new(authenticator),
        Box::new(move |payload| {
            *sink.borrow_mut() = Some(payload);
        }),
    )?;
    let result = app.run();
    drop(app);

    // Flush buffered log lines before printing the summary
    drop(guard);

    if let Some(payload) = session.borrow_mut().take() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        println!("Access granted at {timestamp}");
        println!("  ID:   {}", payload.id);
        println!("  Name: {}", payload.name);
        println!("  Role: {}", payload.role);
    }

    result
}
