use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by MX resolvers and resolver construction.
///
/// The canonicalizer never surfaces these: any lookup error classifies the
/// request as a DNS failure.
#[derive(Debug, Error)]
pub enum MxError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
    #[error("MX lookup failed for {domain}: {source}")]
    Lookup {
        domain: String,
        #[source]
        source: BoxError,
    },
}

impl MxError {
    pub fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }

    /// Wraps any error (or message) raised while querying `domain`.
    pub fn lookup(domain: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Lookup {
            domain: domain.into(),
            source: source.into(),
        }
    }
}
