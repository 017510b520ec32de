use super::*;

fn table(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(p, n)| (p.to_string(), n.to_string()))
        .collect()
}

#[test]
fn plain_domain_component() {
    assert_eq!(resolve("alice@example.com", &[], None), "example");
}

#[test]
fn strips_trailing_question_mark() {
    assert_eq!(resolve("user@domain?", &[], None), "domain");
}

#[test]
fn no_at_sign_is_unknown() {
    assert_eq!(resolve("not-an-email", &[], None), UNKNOWN);
}

#[test]
fn empty_domain_is_unknown() {
    assert_eq!(resolve("user@", &[], None), UNKNOWN);
    assert_eq!(resolve("user@.com", &[], None), UNKNOWN);
}

#[test]
fn last_at_sign_wins() {
    // Malformed doubled '@': the domain is whatever follows the last one.
    assert_eq!(resolve("weird@middle@nokia.com", &[], None), "nokia");
}

#[test]
fn aggregation_prefix_match() {
    let t = table(&[("nok", "Nokia")]);
    assert_eq!(resolve("dev@nokia.com", &t, None), "Nokia");
}

#[test]
fn aggregation_substring_match() {
    let t = table(&[("nokia", "Nokia")]);
    assert_eq!(resolve("dev@exnokia.example", &t, None), "Nokia");
}

#[test]
fn aggregation_last_match_wins() {
    // Both entries match "nokia"; the walk does not short-circuit, so the
    // later entry overwrites the earlier one.
    let t = table(&[("nok", "First"), ("nokia", "Second")]);
    assert_eq!(resolve("dev@nokia.com", &t, None), "Second");
}

#[test]
fn aggregation_no_match_keeps_domain_component() {
    let t = table(&[("apple", "Apple")]);
    assert_eq!(resolve("dev@nokia.com", &t, None), "nokia");
}

#[test]
fn filtered_email_returns_sentinel() {
    let filter: std::collections::HashSet<String> = ["spam@bot.com".to_string()].into();
    assert_eq!(
        resolve("spam@bot.com", &[], Some(&filter)),
        "filtered - included in file passed with -f argument"
    );
}

#[test]
fn filter_checked_before_domain_extraction() {
    // Even an address that would fail extraction hits the sentinel first.
    let filter: std::collections::HashSet<String> = ["garbage".to_string()].into();
    assert_eq!(resolve("garbage", &[], Some(&filter)), FILTERED);
}

#[test]
fn resolution_is_deterministic() {
    let t = table(&[("nok", "Nokia"), ("app", "Apple")]);
    let first = resolve("dev@nokia.com", &t, None);
    for _ in 0..10 {
        assert_eq!(resolve("dev@nokia.com", &t, None), first);
    }
}

#[test]
fn never_empty() {
    for email in ["", "@", "a@b", "x@y.z", "no-at", "user@?"] {
        assert!(!resolve(email, &[], None).is_empty(), "empty for {email:?}");
    }
}
