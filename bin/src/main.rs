//! twelvebar CLI - MCP server and one-shot fetcher for Twelve Data OHLCV bars.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "twelvebar")]
#[command(about = "Twelve Data OHLCV bars over MCP, with synthetic 2-minute pairing")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server over HTTP + SSE
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "3000")]
        port: u16,
    },

    /// Fetch bars once and write them out
    Fetch {
        /// Instrument symbol (e.g., EUR/USD, AAPL)
        symbol: String,

        /// Bar interval (e.g., 1min, 5min, 1h, or the synthetic 2m)
        #[arg(short, long, default_value = "1min")]
        interval: String,

        /// Number of bars to return
        #[arg(short, long, default_value = "100", allow_negative_numbers = true)]
        limit: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Installs the tracing subscriber. `RUST_LOG` wins over the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    init_tracing(cli.verbose, cli.quiet);

    match command {
        Commands::Serve { host, port } => commands::serve::serve(host, port).await,
        Commands::Fetch {
            symbol,
            interval,
            limit,
            format,
            output,
        } => {
            commands::fetch::fetch(&symbol, &interval, limit, format, output.as_deref(), cli.quiet)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::try_parse_from([
            "twelvebar", "fetch", "EUR/USD", "-i", "2m", "-l", "50", "-f", "ndjson",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Fetch {
                symbol,
                interval,
                limit,
                format,
                output,
            }) => {
                assert_eq!(symbol, "EUR/USD");
                assert_eq!(interval, "2m");
                assert_eq!(limit, 50);
                assert!(matches!(format, Format::Ndjson));
                assert!(output.is_none());
            }
            _ => panic!("expected fetch"),
        }
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "twelvebar",
            "-vv",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);

        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert_eq!(host.to_string(), "127.0.0.1");
                assert_eq!(port, 8080);
            }
            _ => panic!("expected serve"),
        }
    }
}
