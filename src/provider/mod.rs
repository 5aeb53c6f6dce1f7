//! Static registry of mailbox providers and their normalization rules.
//!
//! Providers are identified by the MX hosts of a domain: a host matches a
//! provider when it equals one of the provider's MX suffixes or is a
//! subdomain of one.

mod registry;
mod rules;

pub use rules::{Rule, RuleSet};

use crate::address::EmailAddress;
use registry::PROVIDERS;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxProvider {
    name: &'static str,
    rules: RuleSet,
    mx_suffixes: &'static [&'static str],
}

impl MailboxProvider {
    pub const fn new(
        name: &'static str,
        rules: RuleSet,
        mx_suffixes: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            rules,
            mx_suffixes,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn mx_suffixes(&self) -> &'static [&'static str] {
        self.mx_suffixes
    }

    /// `true` when `host` equals one of the MX suffixes or ends with
    /// `.suffix`. ASCII case-insensitive; a trailing root dot on either side
    /// is ignored.
    pub fn matches_host(&self, host: &str) -> bool {
        self.mx_suffixes
            .iter()
            .any(|suffix| host_matches_suffix(host, suffix))
    }

    /// Applies the provider's rules, in [`Rule::APPLICATION_ORDER`], to `address`.
    pub fn canonicalize(&self, address: &EmailAddress) -> EmailAddress {
        self.rules.apply(address)
    }
}

fn host_matches_suffix(host: &str, suffix: &str) -> bool {
    let host = host.trim_end_matches('.').as_bytes();
    let suffix = suffix.trim_end_matches('.').as_bytes();
    if suffix.is_empty() || host.len() < suffix.len() {
        return false;
    }

    let split = host.len() - suffix.len();
    if !host[split..].eq_ignore_ascii_case(suffix) {
        return false;
    }
    split == 0 || host[split - 1] == b'.'
}

/// All registered providers, in registry order.
pub fn providers() -> impl Iterator<Item = &'static MailboxProvider> {
    PROVIDERS.values()
}

/// Looks a provider up by its exact name (`"Proton Mail"`, `"Google"`, ...).
pub fn provider(name: &str) -> Option<&'static MailboxProvider> {
    PROVIDERS.get(name)
}

/// First provider matched by the MX hosts, scanning hosts in the given order
/// and providers in registry order for each host.
pub fn match_provider<I, S>(mx_hosts: I) -> Option<&'static MailboxProvider>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    mx_hosts.into_iter().find_map(|host| {
        let host = host.as_ref();
        providers().find(|provider| provider.matches_host(host))
    })
}

#[cfg(test)]
mod tests;
