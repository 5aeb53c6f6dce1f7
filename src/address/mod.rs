//! Address model: parsed addresses, the canonicalization result and the
//! argument type accepted by every `canonicalize*` entry point.

mod mailbox;
mod types;

pub use mailbox::{Mailbox, MailboxParseError};
pub use types::{EmailAddress, EmailResult, EmailResultStatus};

/// What a caller hands to the canonicalizer.
///
/// `Missing` stands for an absent value and yields an empty `InvalidEmail`
/// result. Conversions exist from `&str`, `&String`, `&Mailbox` and from
/// `Option` of any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressInput<'a> {
    Missing,
    Text(&'a str),
    Mailbox(&'a Mailbox),
}

impl<'a> AddressInput<'a> {
    /// Textual form of the input, `None` when missing.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Missing => None,
            Self::Text(text) => Some(text),
            Self::Mailbox(mailbox) => Some(mailbox.address.as_str()),
        }
    }
}

impl<'a> From<&'a str> for AddressInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for AddressInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a> From<&'a Mailbox> for AddressInput<'a> {
    fn from(value: &'a Mailbox) -> Self {
        Self::Mailbox(value)
    }
}

impl<'a, T> From<Option<T>> for AddressInput<'a>
where
    T: Into<AddressInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// An address that passed the shape check and is ready for MX resolution.
#[derive(Debug, Clone)]
pub(crate) struct Prepared {
    pub original: String,
    pub lowered: String,
    pub address: EmailAddress,
}

impl Prepared {
    pub(crate) fn finish(
        &self,
        status: EmailResultStatus,
        canonical: Option<String>,
    ) -> EmailResult {
        let canonical = canonical.unwrap_or_else(|| self.lowered.clone());
        EmailResult::new(self.original.clone(), canonical, status)
    }
}

/// Shape check shared by the blocking and suspending paths.
///
/// `Err` carries the terminal `InvalidEmail` result.
pub(crate) fn prepare(input: AddressInput<'_>) -> Result<Prepared, EmailResult> {
    let Some(text) = input.as_text() else {
        return Err(EmailResult::new("", "", EmailResultStatus::InvalidEmail));
    };

    if text.trim().is_empty() {
        return Err(EmailResult::new(text, text, EmailResultStatus::InvalidEmail));
    }

    let lowered = text.to_lowercase();
    match EmailAddress::parse(text) {
        Some(address) => Ok(Prepared {
            original: text.to_string(),
            lowered,
            address,
        }),
        None => Err(EmailResult::new(text, lowered, EmailResultStatus::InvalidEmail)),
    }
}
