use super::{Rule, RuleSet, match_provider, provider, providers};
use crate::address::EmailAddress;

fn addr(local: &str, domain: &str) -> EmailAddress {
    EmailAddress::new(local, domain)
}

#[test]
fn registry_order_and_contents() {
    let names: Vec<_> = providers().map(|p| p.name()).collect();
    assert_eq!(
        names,
        [
            "Apple",
            "Fastmail",
            "Google",
            "Microsoft",
            "Proton Mail",
            "Rackspace",
            "Yahoo",
            "Yandex",
            "Zoho"
        ]
    );

    let google = provider("Google").expect("google registered");
    assert_eq!(google.mx_suffixes(), ["google.com", "googlemail.com"]);
    assert!(google.rules().contains(Rule::StripPeriods));
    assert!(google.rules().contains(Rule::PlusAddressing));
    assert!(!google.rules().contains(Rule::DashAddressing));

    let yahoo = provider("Yahoo").expect("yahoo registered");
    assert_eq!(
        yahoo.rules(),
        RuleSet::of(&[Rule::DashAddressing, Rule::StripPeriods])
    );
    assert!(provider("gmail").is_none());
}

#[test]
fn host_match_exact_subdomain_and_case() {
    let apple = provider("Apple").unwrap();
    assert!(apple.matches_host("icloud.com"));
    assert!(apple.matches_host("icloud.com."));
    assert!(apple.matches_host("mx01.mail.ICLOUD.com"));
    assert!(!apple.matches_host("noticloud.com"));
    assert!(!apple.matches_host("icloud.com.evil.net"));
    assert!(!apple.matches_host("com"));
}

#[test]
fn subdomain_classifies_like_suffix() {
    let direct = match_provider(["icloud.com"]).map(|p| p.name());
    let sub = match_provider(["sub.icloud.com"]).map(|p| p.name());
    assert_eq!(direct, Some("Apple"));
    assert_eq!(direct, sub);
}

#[test]
fn first_matching_host_wins() {
    let hosts = ["mx.unknown.org", "alt1.aspmx.l.google.com", "mx1.icloud.com"];
    assert_eq!(match_provider(hosts).map(|p| p.name()), Some("Google"));
    assert!(match_provider(["mx.unknown.org"]).is_none());
    assert!(match_provider(Vec::<String>::new()).is_none());
}

#[test]
fn yandex_matches_either_suffix() {
    assert_eq!(
        match_provider(["mx.yandex.net."]).map(|p| p.name()),
        Some("Yandex")
    );
    assert_eq!(
        match_provider(["mx.yandex.ru"]).map(|p| p.name()),
        Some("Yandex")
    );
    // `yandex.net` alone is not a registered suffix
    assert!(match_provider(["yandex.net"]).is_none());
}

#[test]
fn rule_set_iterates_in_application_order() {
    let set: RuleSet = [
        Rule::DashAddressing,
        Rule::PlusAddressing,
        Rule::StripPeriods,
        Rule::LocalPartAsHostname,
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 4);
    assert_eq!(set.iter().collect::<Vec<_>>(), Rule::APPLICATION_ORDER);
    assert!(RuleSet::empty().is_empty());
}

#[test]
fn plus_and_dash_truncate_at_first_delimiter() {
    let plus = RuleSet::of(&[Rule::PlusAddressing]);
    assert_eq!(plus.apply(&addr("a+b+c", "x.com")), addr("a", "x.com"));
    assert_eq!(plus.apply(&addr("a-b", "x.com")), addr("a-b", "x.com"));

    let dash = RuleSet::of(&[Rule::DashAddressing]);
    assert_eq!(dash.apply(&addr("a-b-c", "x.com")), addr("a", "x.com"));
    assert_eq!(dash.apply(&addr("+a", "x.com")), addr("+a", "x.com"));
}

#[test]
fn local_part_as_hostname_needs_three_labels() {
    let rules = RuleSet::of(&[Rule::LocalPartAsHostname]);
    assert_eq!(
        rules.apply(&addr("anything", "test.example.com")),
        addr("test", "example.com")
    );
    assert_eq!(
        rules.apply(&addr("anything", "a.b.example.com")),
        addr("a", "b.example.com")
    );
    assert_eq!(
        rules.apply(&addr("anything", "example.com")),
        addr("anything", "example.com")
    );
}

#[test]
fn hostname_label_is_plus_truncated() {
    // only holds when the hostname label replaces the local part first
    let expected = addr("a", "example.com");
    let fastmail = provider("Fastmail").unwrap();
    assert_eq!(fastmail.canonicalize(&addr("x", "a+b.example.com")), expected);

    let rules = RuleSet::of(&[Rule::PlusAddressing, Rule::LocalPartAsHostname]);
    assert_eq!(rules.apply(&addr("x", "a+b.example.com")), expected);
}

#[test]
fn periods_are_stripped_before_plus_truncation() {
    let google = provider("Google").unwrap();
    assert_eq!(
        google.canonicalize(&addr("exa.mp.le+tes.t", "example.com")),
        addr("example", "example.com")
    );
}

#[test]
fn fastmail_canonicalizes_hostname_local_part() {
    let fastmail = provider("Fastmail").unwrap();
    assert_eq!(
        fastmail.canonicalize(&addr("test", "example.example.com")),
        addr("example", "example.com")
    );
    assert_eq!(
        fastmail.canonicalize(&addr("example+test", "example.com")),
        addr("example", "example.com")
    );
}
