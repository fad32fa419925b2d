// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trendpulse - backend for the social-media-trend dashboard.
//!
//! This is the binary entry point for the Trendpulse server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Trendpulse - backend for the social-media-trend dashboard.
#[derive(Parser, Debug)]
#[command(name = "trendpulse", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Trendpulse API server.
    Serve,
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match trendpulse_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            trendpulse_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run(config).await {
                eprintln!("trendpulse serve: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            // The signing key never reaches stdout.
            let mut printable = config.clone();
            if printable.auth.token_secret.is_some() {
                printable.auth.token_secret = Some("[redacted]".to_string());
            }
            match serde_json::to_string_pretty(&printable) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => {
                    eprintln!("trendpulse config: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => {
            println!("trendpulse: use --help for available commands");
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        // Only jemalloc supports this -- the system allocator would fail.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    #[serial_test::serial]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config =
            trendpulse_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.server.port, 5000);
    }
}
