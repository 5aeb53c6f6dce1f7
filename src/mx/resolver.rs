use std::sync::Arc;

use async_trait::async_trait;

use super::{DnsResolution, Error, MxRecord};

/// Blocking MX lookup.
///
/// A successful answer with no MX records is `Ok(vec![])`; only DNS-level
/// failures (timeouts, NXDOMAIN, SERVFAIL, malformed answers) are errors.
pub trait LookupMx {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error>;
}

/// Suspending MX lookup with the same contract as [`LookupMx`].
#[async_trait]
pub trait AsyncLookupMx: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error>;
}

impl<T: LookupMx + ?Sized> LookupMx for &T {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        (**self).lookup_mx(domain)
    }
}

impl<T: LookupMx + ?Sized> LookupMx for Arc<T> {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        (**self).lookup_mx(domain)
    }
}

#[async_trait]
impl<T: AsyncLookupMx + ?Sized> AsyncLookupMx for &T {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        (**self).lookup_mx(domain).await
    }
}

#[async_trait]
impl<T: AsyncLookupMx + ?Sized> AsyncLookupMx for Arc<T> {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        (**self).lookup_mx(domain).await
    }
}

pub(crate) fn resolve_with<R>(resolver: &R, domain: &str) -> DnsResolution
where
    R: LookupMx + ?Sized,
{
    debug_event!(domain, "resolving MX records");
    let outcome = checked_domain(domain).and_then(|domain| resolver.lookup_mx(domain));
    classify(domain, outcome)
}

pub(crate) async fn resolve_with_async<R>(resolver: &R, domain: &str) -> DnsResolution
where
    R: AsyncLookupMx + ?Sized,
{
    debug_event!(domain, "resolving MX records");
    let outcome = match checked_domain(domain) {
        Ok(domain) => resolver.lookup_mx(domain).await,
        Err(err) => Err(err),
    };
    classify(domain, outcome)
}

fn checked_domain(domain: &str) -> Result<&str, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    Ok(trimmed)
}

#[cfg_attr(not(feature = "with-tracing"), allow(unused_variables))]
fn classify(domain: &str, outcome: Result<Vec<MxRecord>, Error>) -> DnsResolution {
    match outcome {
        Ok(records) => {
            debug_event!(domain, records = records.len(), "MX lookup succeeded");
            DnsResolution::resolved(records)
        }
        Err(err) => {
            debug_event!(domain, error = %err, "MX lookup failed");
            DnsResolution::failed()
        }
    }
}

#[cfg_attr(not(feature = "with-mx"), allow(dead_code))]
pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

#[cfg(feature = "with-mx")]
mod system {
    use async_trait::async_trait;
    use trust_dns_resolver::{
        Resolver, TokioAsyncResolver,
        config::{ResolverConfig, ResolverOpts},
        error::{ResolveError, ResolveErrorKind},
        lookup::MxLookup,
        proto::op::ResponseCode,
    };

    use super::{AsyncLookupMx, LookupMx, normalize_exchange};
    use crate::mx::{Error, MxLookupOptions, MxRecord};

    /// Builds a blocking resolver configured from `options`.
    pub fn blocking_resolver(options: &MxLookupOptions) -> Result<Resolver, Error> {
        let (config, opts) = resolver_config(options)?;
        Resolver::new(config, opts).map_err(Error::resolver_init)
    }

    /// Builds a tokio-backed resolver configured from `options`.
    ///
    /// The resolver must be used from within a tokio runtime.
    pub fn async_resolver(options: &MxLookupOptions) -> Result<TokioAsyncResolver, Error> {
        let (config, opts) = resolver_config(options)?;
        Ok(TokioAsyncResolver::tokio(config, opts))
    }

    fn resolver_config(options: &MxLookupOptions) -> Result<(ResolverConfig, ResolverOpts), Error> {
        let (config, mut opts) = if options.use_system_conf {
            trust_dns_resolver::system_conf::read_system_conf().map_err(Error::resolver_init)?
        } else {
            (ResolverConfig::default(), ResolverOpts::default())
        };
        opts.timeout = options.timeout;
        opts.attempts = options.attempts;
        Ok((config, opts))
    }

    impl LookupMx for Resolver {
        fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
            collect(domain, Resolver::mx_lookup(self, domain))
        }
    }

    #[async_trait]
    impl AsyncLookupMx for TokioAsyncResolver {
        async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
            collect(domain, self.mx_lookup(domain).await)
        }
    }

    fn collect(
        domain: &str,
        lookup: Result<MxLookup, ResolveError>,
    ) -> Result<Vec<MxRecord>, Error> {
        let lookup = match lookup {
            Ok(lookup) => lookup,
            Err(err) if is_empty_answer(&err) => return Ok(Vec::new()),
            Err(err) => return Err(Error::lookup(domain, err)),
        };
        let mut records = Vec::new();
        for mx in lookup.iter() {
            let exchange = normalize_exchange(mx.exchange().to_utf8());
            records.push(MxRecord::new(mx.preference(), exchange));
        }
        Ok(records)
    }

    // NOERROR with an empty answer section; NXDOMAIN stays a failure
    fn is_empty_answer(err: &ResolveError) -> bool {
        matches!(
            err.kind(),
            ResolveErrorKind::NoRecordsFound { response_code, .. }
                if *response_code == ResponseCode::NoError
        )
    }

}

#[cfg(feature = "with-mx")]
pub use system::{async_resolver, blocking_resolver};

#[cfg(test)]
impl LookupMx for crate::mx::tests::StubResolver {
    fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        (self.on_lookup)(domain)
    }
}

#[cfg(test)]
#[async_trait]
impl AsyncLookupMx for crate::mx::tests::StubResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, Error> {
        (self.on_lookup)(domain)
    }
}
