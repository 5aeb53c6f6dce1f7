use std::fmt;

use crate::address::EmailAddress;

/// One normalization convention a mailbox provider applies to incoming mail.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `-` separates the mailbox from a tag: `abc-news@yahoo.com` is `abc@yahoo.com`.
    DashAddressing,
    /// `+` separates the mailbox from a tag: `abc+news@gmail.com` is `abc@gmail.com`.
    PlusAddressing,
    /// The first label of a 3+ label domain is the mailbox:
    /// `anything@abc.example.com` is `abc@example.com`.
    LocalPartAsHostname,
    /// Periods in the local part are cosmetic: `a.b.c@gmail.com` is `abc@gmail.com`.
    StripPeriods,
}

impl Rule {
    /// Order in which active rules are applied. Not commutative:
    /// `LocalPartAsHostname` replaces the local part the others work on.
    pub const APPLICATION_ORDER: [Rule; 4] = [
        Rule::LocalPartAsHostname,
        Rule::StripPeriods,
        Rule::PlusAddressing,
        Rule::DashAddressing,
    ];

    const fn bit(self) -> u8 {
        match self {
            Rule::DashAddressing => 1,
            Rule::PlusAddressing => 1 << 1,
            Rule::LocalPartAsHostname => 1 << 2,
            Rule::StripPeriods => 1 << 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::DashAddressing => "dash-addressing",
            Rule::PlusAddressing => "plus-addressing",
            Rule::LocalPartAsHostname => "local-part-as-hostname",
            Rule::StripPeriods => "strip-periods",
        }
    }

    pub(crate) fn apply(self, address: &mut EmailAddress) {
        match self {
            Rule::LocalPartAsHostname => {
                // silently a no-op for domains with two labels or fewer
                let labels: Vec<&str> = address.domain.split('.').collect();
                if labels.len() > 2 {
                    let local = labels[0].to_string();
                    let domain = labels[1..].join(".");
                    address.local = local;
                    address.domain = domain;
                }
            }
            Rule::StripPeriods => address.local.retain(|c| c != '.'),
            Rule::PlusAddressing => truncate_at(&mut address.local, '+'),
            Rule::DashAddressing => truncate_at(&mut address.local, '-'),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn truncate_at(local: &mut String, delimiter: char) {
    if let Some(idx) = local.find(delimiter) {
        local.truncate(idx);
    }
}

/// Set of [`Rule`]s active for a provider.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuleSet(u8);

impl RuleSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn of(rules: &[Rule]) -> Self {
        let mut set = Self::empty();
        let mut i = 0;
        while i < rules.len() {
            set = set.with(rules[i]);
            i += 1;
        }
        set
    }

    pub const fn with(self, rule: Rule) -> Self {
        Self(self.0 | rule.bit())
    }

    pub const fn contains(self, rule: Rule) -> bool {
        self.0 & rule.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Active rules in [`Rule::APPLICATION_ORDER`].
    pub fn iter(self) -> impl Iterator<Item = Rule> {
        Rule::APPLICATION_ORDER
            .into_iter()
            .filter(move |rule| self.contains(*rule))
    }

    pub(crate) fn apply(self, address: &EmailAddress) -> EmailAddress {
        let mut out = address.clone();
        for rule in self.iter() {
            rule.apply(&mut out);
        }
        out
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

#[cfg(feature = "with-serde")]
impl serde::Serialize for RuleSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
