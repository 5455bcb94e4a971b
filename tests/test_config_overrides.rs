//! Integration tests for configuration loading and CLI override shadowing.

use clap::Parser;
use polaris_login::auth::{Authenticator, ScanKind, ScanRequest, SimulatedAuthenticator};
use polaris_login::cli::Cli;
use polaris_login::config::Config;
use tempfile::TempDir;

#[test]
fn missing_config_file_is_created_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = Config::load_or_create(&config_path).unwrap();

    assert!(config_path.exists());
    assert_eq!(config.core_name, "Phoenix");
    assert_eq!(config.system_name, "Polaris Medico");
    assert_eq!(config.scan_delay_ms, 3500);
    assert_eq!(config.transition_delay_ms, 2000);
}

#[test]
fn cli_overrides_shadow_file_values() {
    // Given: a config file with custom branding
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "core_name = \"Helios\"\nsystem_name = \"Helios Medical\"\n",
    )
    .unwrap();

    // When: the CLI overrides one of the two values
    let cli = Cli::parse_from(["polaris-login", "--core-name", "Aurora"]);
    let mut config = Config::load_or_create(&config_path).unwrap();
    cli.apply_overrides(&mut config);

    // Then: only the overridden value changes
    assert_eq!(config.core_name, "Aurora");
    assert_eq!(config.system_name, "Helios Medical");
}

#[test]
fn timing_overrides_reach_the_authenticator() {
    let cli = Cli::parse_from([
        "polaris-login",
        "--scan-delay-ms",
        "120",
        "--transition-delay-ms",
        "80",
    ]);
    let mut config = Config::default();
    cli.apply_overrides(&mut config);

    let authenticator =
        SimulatedAuthenticator::new(config.scan_delay(), config.transition_delay());
    let outcome = authenticator.authenticate(ScanRequest {
        kind: ScanKind::Face,
        identifier: "ID-0001",
    });

    assert_eq!(outcome.scan_delay.as_millis(), 120);
    assert_eq!(outcome.transition_delay.as_millis(), 80);
}

#[test]
fn logo_overrides_are_applied() {
    let cli = Cli::parse_from([
        "polaris-login",
        "--core-logo",
        "/opt/branding/core.png",
        "--investor-logo",
        "ACME CAPITAL",
    ]);
    let mut config = Config::default();
    cli.apply_overrides(&mut config);

    assert_eq!(config.core_logo.as_deref(), Some("/opt/branding/core.png"));
    assert_eq!(config.investor_logo.as_deref(), Some("ACME CAPITAL"));
}
