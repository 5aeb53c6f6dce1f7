//! Canonicalization engine.
//!
//! One request runs parse → MX resolution → provider match → rule
//! application and stops at the first terminal state: `InvalidEmail`,
//! `DnsFailure`, `UnknownProvider` or `Success`. The blocking and suspending
//! paths share the same preparation and completion steps, so they only
//! differ in how the DNS outcome is obtained.

use std::future::Future;

use thiserror::Error;

use crate::address::{self, AddressInput, EmailResult, EmailResultStatus, Prepared};
use crate::mx::{AsyncLookupMx, DnsResolution, LookupMx, resolve_with, resolve_with_async};
use crate::provider::match_provider;

/// Returned by [`EmailCanonicalizer::canonicalize_cancellable`] when the
/// cancel signal fires before the MX lookup completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("canonicalization was cancelled")]
pub struct Cancelled;

/// Maps e-mail addresses to their canonical form using an injected MX resolver.
///
/// Holds no mutable state: one instance can serve any number of concurrent
/// callers when `R` allows it.
#[derive(Debug, Clone)]
pub struct EmailCanonicalizer<R> {
    resolver: R,
}

impl<R> EmailCanonicalizer<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn into_resolver(self) -> R {
        self.resolver
    }
}

impl<R: LookupMx> EmailCanonicalizer<R> {
    /// Canonicalizes `input`, blocking on the MX lookup.
    ///
    /// ```
    /// use canonical_email::{EmailCanonicalizer, EmailResultStatus, LookupMx, MxError, MxRecord};
    ///
    /// struct Fixed;
    /// impl LookupMx for Fixed {
    ///     fn lookup_mx(&self, _: &str) -> Result<Vec<MxRecord>, MxError> {
    ///         Ok(vec![MxRecord::new(10, "mx01.mail.icloud.com")])
    ///     }
    /// }
    ///
    /// let result = EmailCanonicalizer::new(Fixed).canonicalize("EXAMPLE+test@EXample.COM");
    /// assert_eq!(result.status, EmailResultStatus::Success);
    /// assert_eq!(result.canonical_address, "example@example.com");
    /// ```
    pub fn canonicalize<'a>(&self, input: impl Into<AddressInput<'a>>) -> EmailResult {
        let prepared = match address::prepare(input.into()) {
            Ok(prepared) => prepared,
            Err(rejected) => return rejected,
        };
        let resolution = resolve_with(&self.resolver, &prepared.address.domain);
        complete(&prepared, &resolution)
    }
}

impl<R: AsyncLookupMx> EmailCanonicalizer<R> {
    /// Suspending form of [`canonicalize`](Self::canonicalize).
    ///
    /// Dropping the returned future cancels the lookup.
    pub async fn canonicalize_async<'a>(&self, input: impl Into<AddressInput<'a>>) -> EmailResult {
        let prepared = match address::prepare(input.into()) {
            Ok(prepared) => prepared,
            Err(rejected) => return rejected,
        };
        let resolution = resolve_with_async(&self.resolver, &prepared.address.domain).await;
        complete(&prepared, &resolution)
    }

    /// Like [`canonicalize_async`](Self::canonicalize_async), raced against
    /// `cancel`.
    ///
    /// `cancel` is polled before the lookup starts and on every wake-up while
    /// it runs; once it completes the call returns `Err(Cancelled)` instead of
    /// a result. Inputs rejected before the lookup still yield their
    /// `InvalidEmail` result.
    pub async fn canonicalize_cancellable<'a, C>(
        &self,
        input: impl Into<AddressInput<'a>>,
        cancel: C,
    ) -> Result<EmailResult, Cancelled>
    where
        C: Future<Output = ()>,
    {
        let prepared = match address::prepare(input.into()) {
            Ok(prepared) => prepared,
            Err(rejected) => return Ok(rejected),
        };

        tokio::select! {
            biased;
            _ = cancel => {
                debug_event!(domain = %prepared.address.domain, "canonicalization cancelled");
                Err(Cancelled)
            }
            resolution = resolve_with_async(&self.resolver, &prepared.address.domain) => {
                Ok(complete(&prepared, &resolution))
            }
        }
    }
}

fn complete(prepared: &Prepared, resolution: &DnsResolution) -> EmailResult {
    let result = if !resolution.succeeded {
        prepared.finish(EmailResultStatus::DnsFailure, None)
    } else {
        match match_provider(resolution.mx_hosts()) {
            None => prepared.finish(EmailResultStatus::UnknownProvider, None),
            Some(provider) => {
                debug_event!(
                    domain = %prepared.address.domain,
                    provider = provider.name(),
                    "matched mailbox provider"
                );
                let canonical = provider.canonicalize(&prepared.address);
                prepared.finish(EmailResultStatus::Success, Some(canonical.to_string()))
            }
        }
    };
    debug_event!(
        domain = %prepared.address.domain,
        status = %result.status,
        "canonicalization finished"
    );
    result
}

#[cfg(feature = "with-mx")]
mod system {
    use trust_dns_resolver::{Resolver, TokioAsyncResolver};

    use super::EmailCanonicalizer;
    use crate::mx::{Error, MxLookupOptions, async_resolver, blocking_resolver};

    impl EmailCanonicalizer<Resolver> {
        /// Blocking canonicalizer over the system resolver configuration.
        pub fn from_system_conf() -> Result<Self, Error> {
            Self::with_options(&MxLookupOptions::default())
        }

        pub fn with_options(options: &MxLookupOptions) -> Result<Self, Error> {
            blocking_resolver(options).map(Self::new)
        }
    }

    impl EmailCanonicalizer<TokioAsyncResolver> {
        /// Suspending canonicalizer over the system resolver configuration.
        /// Must be called from within a tokio runtime.
        pub fn tokio_from_system_conf() -> Result<Self, Error> {
            Self::tokio_with_options(&MxLookupOptions::default())
        }

        pub fn tokio_with_options(options: &MxLookupOptions) -> Result<Self, Error> {
            async_resolver(options).map(Self::new)
        }
    }
}
