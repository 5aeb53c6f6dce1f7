use phf::phf_ordered_map;

use super::{MailboxProvider, Rule, RuleSet};

const PLUS: RuleSet = RuleSet::of(&[Rule::PlusAddressing]);

/// Known providers keyed by name. Iteration order is significant: it is the
/// tie-break order of [`match_provider`](super::match_provider).
pub(super) static PROVIDERS: phf::OrderedMap<&'static str, MailboxProvider> = phf_ordered_map! {
    "Apple" => MailboxProvider::new("Apple", PLUS, &["icloud.com"]),
    "Fastmail" => MailboxProvider::new(
        "Fastmail",
        RuleSet::of(&[Rule::PlusAddressing, Rule::LocalPartAsHostname]),
        &["messagingengine.com"],
    ),
    "Google" => MailboxProvider::new(
        "Google",
        RuleSet::of(&[Rule::PlusAddressing, Rule::StripPeriods]),
        &["google.com", "googlemail.com"],
    ),
    "Microsoft" => MailboxProvider::new("Microsoft", PLUS, &["outlook.com"]),
    "Proton Mail" => MailboxProvider::new("Proton Mail", PLUS, &["protonmail.ch"]),
    "Rackspace" => MailboxProvider::new("Rackspace", PLUS, &["emailsrvr.com"]),
    "Yahoo" => MailboxProvider::new(
        "Yahoo",
        RuleSet::of(&[Rule::DashAddressing, Rule::StripPeriods]),
        &["yahoodns.net"],
    ),
    "Yandex" => MailboxProvider::new("Yandex", PLUS, &["mx.yandex.net", "yandex.ru"]),
    "Zoho" => MailboxProvider::new("Zoho", PLUS, &["zoho.com"]),
};
