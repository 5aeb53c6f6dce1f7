use std::time::Duration;

use canonical_email::MxLookupOptions;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "canonical-email-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// read addresses from stdin (one per line)
    #[arg(long)]
    pub stdin: bool,

    /// write the report to a file (format per --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// per-query DNS timeout (ms)
    #[arg(long = "timeout-ms", default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// DNS query attempts before a lookup counts as failed
    #[arg(long, default_value_t = 2)]
    pub attempts: usize,

    /// ignore the system resolver configuration and use the built-in upstream
    #[arg(long = "no-system-conf")]
    pub no_system_conf: bool,

    /// log resolution steps to stderr (feature `with-tracing`)
    #[cfg(feature = "with-tracing")]
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// canonicalize one address
    Canonicalize { email: String },
    /// list the known mailbox providers
    Providers,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn lookup_options(&self) -> MxLookupOptions {
        MxLookupOptions::new()
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_attempts(self.attempts)
            .use_system_conf(!self.no_system_conf)
    }
}
