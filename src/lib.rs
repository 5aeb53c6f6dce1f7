#![forbid(unsafe_code)]
//! canonical_email — canonical e-mail addresses from mailbox provider rules.
//!
//! An address is lower-cased and split, the MX records of its domain are
//! resolved through an injected resolver, the MX hosts are matched against a
//! static table of known mailbox providers and the matched provider's rules
//! rewrite the local part. See [`EmailCanonicalizer`].

macro_rules! debug_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "with-tracing")]
        tracing::debug!($($arg)*);
    };
}

pub mod address;
pub mod canonicalizer;
pub mod mx;
pub mod provider;

pub use address::{
    AddressInput, EmailAddress, EmailResult, EmailResultStatus, Mailbox, MailboxParseError,
};
pub use canonicalizer::{Cancelled, EmailCanonicalizer};
pub use mx::{AsyncLookupMx, Error as MxError, LookupMx, MxLookupOptions, MxRecord};
pub use provider::{MailboxProvider, Rule, RuleSet, match_provider, provider, providers};

#[cfg(feature = "with-mx")]
pub use mx::{async_resolver, blocking_resolver};
