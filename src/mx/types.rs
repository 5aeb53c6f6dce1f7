use std::collections::HashSet;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Outcome of one MX lookup as seen by the canonicalizer.
///
/// `succeeded` with no records is a valid answer and differs from a failed
/// lookup, which always carries no records. Records are ordered by
/// preference; hosts sharing a preference keep the resolver's answer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DnsResolution {
    pub succeeded: bool,
    pub records: Vec<MxRecord>,
}

impl DnsResolution {
    pub(crate) fn resolved(mut records: Vec<MxRecord>) -> Self {
        let mut seen = HashSet::new();
        records.retain(|record| seen.insert(record.clone()));
        records.sort_by_key(|record| record.preference);
        Self {
            succeeded: true,
            records,
        }
    }

    pub(crate) fn failed() -> Self {
        Self {
            succeeded: false,
            records: Vec::new(),
        }
    }

    /// Exchange hosts, lowest preference first.
    pub(crate) fn mx_hosts(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.exchange.as_str())
    }
}
