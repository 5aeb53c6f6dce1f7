use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    AsyncLookupMx, DnsResolution, Error, LookupMx, MxRecord, resolve_with, resolve_with_async,
};
use crate::mx::resolver::normalize_exchange;

type LookupResult = Result<Vec<MxRecord>, Error>;
type LookupFn = dyn Fn(&str) -> LookupResult + Send + Sync;

pub(crate) struct StubResolver {
    pub on_lookup: Box<LookupFn>,
}

impl StubResolver {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> LookupResult + Send + Sync + 'static,
    {
        Self {
            on_lookup: Box::new(f),
        }
    }

    /// Answers every query with one MX record per host, preference 10, 20, ...
    pub(crate) fn answering(hosts: &[&str]) -> Self {
        let records: Vec<MxRecord> = hosts
            .iter()
            .zip(1u16..)
            .map(|(host, i)| MxRecord::new(i * 10, *host))
            .collect();
        Self::new(move |_| Ok(records.clone()))
    }

    pub(crate) fn failing() -> Self {
        Self::new(|domain| Err(Error::lookup(domain, "dns broke")))
    }
}

#[test]
fn resolve_with_sorts_and_dedups_records() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "example.com");
        Ok(vec![
            MxRecord::new(20, "mx2.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(30, "mx3.example.com"),
        ])
    });

    let resolution = resolve_with(&stub, "example.com");
    assert!(resolution.succeeded);
    assert_eq!(resolution.records.len(), 3);
    assert_eq!(
        resolution.mx_hosts().collect::<Vec<_>>(),
        ["mx1.example.com", "mx2.example.com", "mx3.example.com"]
    );
}

#[test]
fn equal_preferences_keep_answer_order() {
    let stub = StubResolver::new(|_| {
        Ok(vec![
            MxRecord::new(20, "backup.example.com"),
            MxRecord::new(10, "zeta.example.com"),
            MxRecord::new(10, "alpha.example.com"),
            MxRecord::new(10, "zeta.example.com"),
        ])
    });

    let resolution = resolve_with(&stub, "example.com");
    assert_eq!(
        resolution.mx_hosts().collect::<Vec<_>>(),
        ["zeta.example.com", "alpha.example.com", "backup.example.com"]
    );
}

#[test]
fn empty_answer_is_a_success() {
    let stub = StubResolver::new(|_| Ok(Vec::new()));
    let resolution = resolve_with(&stub, "example.com");
    assert_eq!(resolution, DnsResolution::resolved(Vec::new()));
    assert!(resolution.succeeded);
}

#[test]
fn lookup_error_collapses_to_failure() {
    let resolution = resolve_with(&StubResolver::failing(), "example.com");
    assert_eq!(resolution, DnsResolution::failed());
    assert!(resolution.records.is_empty());
}

#[test]
fn empty_domain_fails_without_querying() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let stub = StubResolver::new(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    });

    let resolution = resolve_with(&stub, "  ");
    assert!(!resolution.succeeded);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn lookup_error_names_domain() {
    let err = LookupMx::lookup_mx(&StubResolver::failing(), "example.com")
        .expect_err("stub always fails");
    assert_eq!(err.to_string(), "MX lookup failed for example.com: dns broke");
}

#[test]
fn normalize_exchange_trims_dot_and_lowercases() {
    let out = normalize_exchange("Mail.EXAMPLE.com.".to_string());
    assert_eq!(out, "mail.example.com");
}

#[test]
fn blanket_impls_delegate() {
    let stub = Arc::new(StubResolver::answering(&["mx.example.com"]));
    assert!(resolve_with(&stub, "example.com").succeeded);
    assert!(resolve_with(&&*stub, "example.com").succeeded);
}

#[tokio::test]
async fn async_resolution_matches_blocking() {
    let stub = StubResolver::answering(&["b.example.com", "a.example.com"]);
    let blocking = resolve_with(&stub, "example.com");
    let suspending = resolve_with_async(&stub, "example.com").await;
    assert_eq!(blocking, suspending);

    let failing = StubResolver::failing();
    assert_eq!(
        resolve_with(&failing, "example.com"),
        resolve_with_async(&failing, "example.com").await
    );
}

#[tokio::test]
async fn async_blanket_impl_over_arc() {
    let stub: Arc<StubResolver> = Arc::new(StubResolver::answering(&["mx.example.com"]));
    let records = AsyncLookupMx::lookup_mx(&stub, "example.com")
        .await
        .expect("stub answers");
    assert_eq!(records, vec![MxRecord::new(10, "mx.example.com")]);
}
