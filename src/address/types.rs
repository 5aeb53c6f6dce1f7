use std::fmt;

/// Lower-cased `local@domain` pair split from an address with exactly one `@`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    pub local: String,
    pub domain: String,
}

impl EmailAddress {
    /// Lower-cases `input` and splits it on `@`.
    ///
    /// Returns `None` unless the input holds exactly one `@`. No other syntax
    /// check is made: empty local parts or domains are accepted as-is.
    pub fn parse(input: &str) -> Option<Self> {
        let lowered = input.to_lowercase();
        let parts: Vec<&str> = lowered.split('@').collect();
        if parts.len() != 2 {
            return None;
        }
        Some(Self::new(parts[0], parts[1]))
    }

    pub(crate) fn new(local: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            domain: domain.into(),
        }
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

/// Terminal classification of one canonicalization request.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailResultStatus {
    /// Missing or blank input, or not exactly one `@`.
    InvalidEmail,
    /// The MX lookup failed at the DNS level.
    DnsFailure,
    /// No MX host matched a known provider (including no MX host at all).
    UnknownProvider,
    Success,
}

impl EmailResultStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidEmail => "invalid_email",
            Self::DnsFailure => "dns_failure",
            Self::UnknownProvider => "unknown_provider",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for EmailResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailResult {
    /// The input, casing untouched.
    pub address: String,
    pub canonical_address: String,
    pub status: EmailResultStatus,
}

impl EmailResult {
    pub(crate) fn new(
        address: impl Into<String>,
        canonical_address: impl Into<String>,
        status: EmailResultStatus,
    ) -> Self {
        Self {
            address: address.into(),
            canonical_address: canonical_address.into(),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == EmailResultStatus::Success
    }
}
