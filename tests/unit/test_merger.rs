use paramgen::core::merger::{fresh_only, merge};
use paramgen::core::types::{Parameter, ParameterList};

fn list(entries: &[(&str, &str)]) -> ParameterList {
    entries
        .iter()
        .map(|(key, value)| Parameter::with_value(*key, *value))
        .collect()
}

#[test]
fn test_union_of_keys_without_prune() {
    let existing = list(&[("C", "c"), ("A", "a")]);
    let fresh = list(&[("B", ""), ("A", ""), ("D", "")]);

    let outcome = merge(existing, &fresh, false);

    assert_eq!(
        outcome.parameters,
        list(&[("A", "a"), ("B", ""), ("C", "c"), ("D", "")])
    );
    assert_eq!(outcome.added, vec!["B".to_string(), "D".to_string()]);
    assert!(outcome.pruned.is_empty());
}

#[test]
fn test_prune_keeps_exactly_declared_keys() {
    let existing = list(&[("A", "a"), ("Stale", "s"), ("Older", "o")]);
    let fresh = list(&[("A", ""), ("New", "")]);

    let outcome = merge(existing, &fresh, true);

    assert_eq!(outcome.parameters, list(&[("A", "a"), ("New", "")]));
    assert_eq!(
        outcome.pruned,
        vec![
            Parameter::with_value("Stale", "s"),
            Parameter::with_value("Older", "o")
        ]
    );
}

#[test]
fn test_persisted_value_wins_over_annotation() {
    let existing = list(&[("A", "user value")]);
    let fresh = list(&[("A", "Type: String")]);

    let outcome = merge(existing, &fresh, true);

    assert_eq!(outcome.parameters, list(&[("A", "user value")]));
    assert!(outcome.added.is_empty());
}

#[test]
fn test_merge_into_empty_list() {
    let fresh = list(&[("B", ""), ("A", "")]);

    let outcome = merge(ParameterList::new(), &fresh, false);

    assert_eq!(outcome.parameters, list(&[("A", ""), ("B", "")]));
    assert_eq!(outcome.added.len(), 2);
}

#[test]
fn test_prune_with_empty_template_empties_list() {
    let existing = list(&[("A", "a")]);

    let outcome = merge(existing, &ParameterList::new(), true);

    assert!(outcome.parameters.is_empty());
    assert_eq!(outcome.pruned.len(), 1);
}

#[test]
fn test_sort_is_bytewise() {
    let fresh = list(&[("b", ""), ("B", ""), ("a", ""), ("A", "")]);

    let outcome = fresh_only(&fresh);

    let keys: Vec<&str> = outcome.parameters.keys().collect();
    assert_eq!(keys, vec!["A", "B", "a", "b"]);
    assert!(outcome.parameters.is_sorted_by_key());
}
