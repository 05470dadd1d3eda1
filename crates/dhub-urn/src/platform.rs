//! Platform-instance substitution.
//!
//! Unlike URN hashing this is a literal substring replacement driven by
//! `MutationConfig::platform_instance_mapping`.

use std::collections::BTreeMap;

/// Replace every configured `from` with its `to` inside `value`.
///
/// Pairs apply in key order, each to the output of the previous one. Empty
/// `from` keys are ignored. Returns `None` when nothing changed.
#[must_use]
pub fn apply_instance_mapping(value: &str, mapping: &BTreeMap<String, String>) -> Option<String> {
    let mut current = value.to_string();
    for (from, to) in mapping {
        if !from.is_empty() && current.contains(from.as_str()) {
            current = current.replace(from.as_str(), to);
        }
    }
    (current != value).then_some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mapping(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
            .collect()
    }

    #[test]
    fn replaces_inside_dataset_urn() {
        let m = mapping(&[("dev_warehouse", "prod_warehouse")]);
        let urn = "urn:li:dataset:(urn:li:dataPlatform:snowflake,dev_warehouse.sales.orders,PROD)";
        assert_eq!(
            apply_instance_mapping(urn, &m).as_deref(),
            Some("urn:li:dataset:(urn:li:dataPlatform:snowflake,prod_warehouse.sales.orders,PROD)")
        );
    }

    #[test]
    fn no_match_returns_none() {
        let m = mapping(&[("dev_warehouse", "prod_warehouse")]);
        assert_eq!(apply_instance_mapping("urn:li:tag:pii", &m), None);
        assert_eq!(apply_instance_mapping("anything", &BTreeMap::new()), None);
    }

    #[test]
    fn empty_key_is_ignored() {
        let m = mapping(&[("", "x")]);
        assert_eq!(apply_instance_mapping("abc", &m), None);
    }

    #[test]
    fn replaces_every_occurrence() {
        let m = mapping(&[("dev", "prod")]);
        assert_eq!(
            apply_instance_mapping("dev-a,dev-b", &m).as_deref(),
            Some("prod-a,prod-b")
        );
    }

    #[test]
    fn pairs_apply_in_key_order() {
        // "a" -> "b" runs before "b" -> "c", so "a" ends up as "c".
        let m = mapping(&[("b", "c"), ("a", "b")]);
        assert_eq!(apply_instance_mapping("a", &m).as_deref(), Some("c"));
    }
}
