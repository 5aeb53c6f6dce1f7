//! MX resolution seam.
//!
//! The canonicalizer talks to DNS only through [`LookupMx`] (blocking) and
//! [`AsyncLookupMx`] (suspending). With the `with-mx` feature both traits are
//! implemented for the `trust-dns-resolver` resolvers, which
//! [`blocking_resolver`] and [`async_resolver`] build from
//! [`MxLookupOptions`].

mod error;
mod options;
mod resolver;
mod types;

pub use error::{BoxError, MxError as Error};
pub use options::MxLookupOptions;
pub use resolver::{AsyncLookupMx, LookupMx};
pub use types::MxRecord;

#[cfg(feature = "with-mx")]
pub use resolver::{async_resolver, blocking_resolver};

pub(crate) use resolver::{resolve_with, resolve_with_async};
pub(crate) use types::DnsResolution;

#[cfg(test)]
pub(crate) mod tests;
