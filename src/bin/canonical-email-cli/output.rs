use anyhow::{Context, Result, bail};

use canonical_email::{EmailResult, EmailResultStatus, MailboxProvider};

use crate::args::Cli;

pub fn write_reports(rows: &[EmailResult], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows, cli),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn any_unresolved(rows: &[EmailResult]) -> bool {
    rows.iter().any(|row| !row.is_success())
}

pub fn human_line(row: &EmailResult) -> String {
    let tag = match row.status {
        EmailResultStatus::Success => "SUCCESS",
        EmailResultStatus::UnknownProvider => "UNKNOWN",
        EmailResultStatus::DnsFailure => "DNS-FAIL",
        EmailResultStatus::InvalidEmail => "INVALID",
    };
    format!("[{tag}] {} -> {}", row.address, row.canonical_address)
}

pub fn provider_line(provider: &MailboxProvider) -> String {
    let rules = provider
        .rules()
        .iter()
        .map(|rule| rule.name())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{:<12} {:<40} {}",
        provider.name(),
        rules,
        provider.mx_suffixes().join(", ")
    )
}

/// One [`human_line`] per row, newline-terminated.
pub fn human_report(rows: &[EmailResult]) -> String {
    rows.iter().map(|row| human_line(row) + "\n").collect()
}

fn write_human(rows: &[EmailResult], cli: &Cli) -> Result<()> {
    let report = human_report(rows);
    if let Some(path) = &cli.out {
        write_all_atomically(path, report.as_bytes())?;
    } else {
        print!("{report}");
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[EmailResult], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[EmailResult], _: &Cli) -> Result<()> {
    bail!("format=json requires the 'with-serde' feature")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[EmailResult], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        for row in rows {
            let line = serde_json::to_string(row)?;
            buf.extend_from_slice(line.as_bytes());
            buf.push(b'\n');
        }
        write_all_atomically(path, &buf)?;
    } else {
        for row in rows {
            println!("{}", serde_json::to_string(row)?);
        }
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[EmailResult], _: &Cli) -> Result<()> {
    bail!("format=ndjson requires the 'with-serde' feature")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[EmailResult], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_csv_rows(&mut wtr, rows)?;
        let data = wtr.into_inner()?;
        write_all_atomically(path, &data)?;
    } else {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        write_csv_rows(&mut wtr, rows)?;
        wtr.flush()?;
    }
    Ok(())
}

#[cfg(feature = "with-csv")]
fn write_csv_rows<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    rows: &[EmailResult],
) -> Result<()> {
    wtr.write_record(["address", "canonical_address", "status"])?;
    for row in rows {
        wtr.write_record([
            row.address.as_str(),
            row.canonical_address.as_str(),
            row.status.as_str(),
        ])?;
    }
    Ok(())
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[EmailResult], _: &Cli) -> Result<()> {
    bail!("format=csv requires the 'with-csv' feature")
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;

    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}
