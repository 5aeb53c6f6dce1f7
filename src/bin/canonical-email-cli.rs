#[path = "canonical-email-cli/args.rs"]
mod args;
#[path = "canonical-email-cli/output.rs"]
mod output;

use anyhow::{Context, Result};
use canonical_email::{EmailCanonicalizer, EmailResult, providers};

use std::io::{self, BufRead};

use args::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "with-tracing")]
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    if let Some(Commands::Providers) = cli.cmd {
        for provider in providers() {
            println!("{}", output::provider_line(provider));
        }
        return Ok(());
    }

    let canonicalizer = EmailCanonicalizer::with_options(&cli.lookup_options())
        .context("build DNS resolver")?;
    let mut rows: Vec<EmailResult> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let email = line.context("read stdin")?;
            rows.push(canonicalizer.canonicalize(email.as_str()));
        }
    } else if let Some(Commands::Canonicalize { email }) = &cli.cmd {
        rows.push(canonicalizer.canonicalize(email));
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    }

    output::write_reports(&rows, &cli)?;

    // exit codes: 0 all canonicalized, 2 some not, 1 fatal
    if output::any_unresolved(&rows) {
        std::process::exit(2);
    }
    Ok(())
}
