use crate::config::Config;
use anyhow::{bail, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Branded terminal entrance screen with a simulated biometric flow
#[derive(Parser, Debug)]
#[command(
    name = "polaris-login",
    version,
    about = "Branded terminal entrance screen with a simulated biometric flow",
    long_about = None,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Destination core name (overrides the configured value)
    #[arg(long, value_name = "NAME")]
    pub core_name: Option<String>,

    /// Destination core role line
    #[arg(long, value_name = "ROLE")]
    pub core_role: Option<String>,

    /// Core logo path or URL
    #[arg(long, value_name = "LOGO")]
    pub core_logo: Option<String>,

    /// Endorsement logo reference shown in the footer strip
    #[arg(long, value_name = "LOGO")]
    pub investor_logo: Option<String>,

    /// Portal system name shown in the branding block
    #[arg(long, value_name = "NAME")]
    pub system_name: Option<String>,

    /// Portal description line
    #[arg(long, value_name = "TEXT")]
    pub portal_description: Option<String>,

    /// Color theme: dark, light, or no-color
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Simulated scan duration in milliseconds
    #[arg(long, value_name = "MS")]
    pub scan_delay_ms: Option<u64>,

    /// Simulated transition duration in milliseconds
    #[arg(long, value_name = "MS")]
    pub transition_delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Execute the CLI command. Returns `true` when the TUI should launch.
    pub fn execute(&self) -> Result<bool> {
        match &self.command {
            Some(Commands::Completions { shell }) => {
                Self::generate_completions(*shell)?;
                Ok(false)
            }
            None => Ok(true),
        }
    }

    /// Fold command-line overrides into the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(core_name) = &self.core_name {
            config.core_name = core_name.clone();
        }
        if let Some(core_role) = &self.core_role {
            config.core_role = core_role.clone();
        }
        if let Some(core_logo) = &self.core_logo {
            config.core_logo = Some(core_logo.clone());
        }
        if let Some(investor_logo) = &self.investor_logo {
            config.investor_logo = Some(investor_logo.clone());
        }
        if let Some(system_name) = &self.system_name {
            config.system_name = system_name.clone();
        }
        if let Some(portal_description) = &self.portal_description {
            config.portal_description = portal_description.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(scan_delay_ms) = self.scan_delay_ms {
            config.scan_delay_ms = scan_delay_ms;
        }
        if let Some(transition_delay_ms) = self.transition_delay_ms {
            config.transition_delay_ms = transition_delay_ms;
        }
    }

    fn generate_completions(shell: Option<Shell>) -> Result<()> {
        let Some(shell) = shell.or_else(Shell::from_env) else {
            bail!("Could not automatically detect shell");
        };

        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_launches_tui() {
        let cli = Cli::parse_from(["polaris-login"]);
        assert!(cli.command.is_none());
        assert!(cli.execute().unwrap());
    }

    #[test]
    fn overrides_replace_configured_values() {
        let cli = Cli::parse_from([
            "polaris-login",
            "--core-name",
            "Phoenix",
            "--scan-delay-ms",
            "100",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.core_name, "Phoenix");
        assert_eq!(config.scan_delay_ms, 100);
        // Untouched fields keep their defaults
        assert_eq!(config.transition_delay_ms, 2000);
    }

    #[test]
    fn completions_subcommand_skips_tui() {
        let cli = Cli::parse_from(["polaris-login", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Some(_) })
        ));
    }
}
