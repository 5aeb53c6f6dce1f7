use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A mailbox as written in a header: an address with an optional display name.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub display_name: Option<String>,
    pub address: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MailboxParseError {
    #[error("mailbox is empty")]
    Empty,
    #[error("unterminated '<' in mailbox")]
    UnterminatedAngle,
    #[error("mailbox has no address between '<' and '>'")]
    MissingAddress,
}

impl Mailbox {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            display_name: None,
            address: address.into(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.display_name = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
        self
    }
}

impl FromStr for Mailbox {
    type Err = MailboxParseError;

    /// Accepts `addr` or `Display Name <addr>`; the name may be double-quoted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MailboxParseError::Empty);
        }

        let Some(open) = trimmed.rfind('<') else {
            return Ok(Self::new(trimmed));
        };
        if !trimmed.ends_with('>') {
            return Err(MailboxParseError::UnterminatedAngle);
        }

        let address = trimmed[open + 1..trimmed.len() - 1].trim();
        if address.is_empty() {
            return Err(MailboxParseError::MissingAddress);
        }

        let name = trimmed[..open].trim();
        let name = name
            .strip_prefix('"')
            .and_then(|n| n.strip_suffix('"'))
            .unwrap_or(name);

        Ok(Self::new(address).with_display_name(name))
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "\"{}\" <{}>", name, self.address),
            None => f.write_str(&self.address),
        }
    }
}
