//! End-to-end filter tests
//!
//! Definitions are compiled through the public entry points and the
//! serialized result records are pinned with inline snapshots.

use insta::{assert_json_snapshot, assert_snapshot};
use jsonfilter::{Operator, Parser};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

const ORDER_FILTER: &str = "\
jsonFilter:
  and:
    - eq:
        field: status
        value: paid
    - or:
        - rx:
            field: customer.email
            value: '@example\\.com$'
        - eq:
            field: customer.vip
            value: true
";

fn order_filter() -> Box<dyn Operator> {
    jsonfilter::from_yaml(ORDER_FILTER.as_bytes()).unwrap()
}

// === Evaluation ===

#[rstest]
#[case::example_domain(json!({"status": "paid", "customer": {"email": "a@example.com", "vip": false}}), true)]
#[case::vip(json!({"status": "paid", "customer": {"email": "a@other.org", "vip": true}}), true)]
#[case::vip_as_string(json!({"status": "paid", "customer": {"email": "a@other.org", "vip": "true"}}), true)]
#[case::unpaid(json!({"status": "open", "customer": {"email": "a@example.com"}}), false)]
#[case::neither(json!({"status": "paid", "customer": {"email": "a@other.org", "vip": false}}), false)]
#[case::empty(json!({}), false)]
fn test_order_filter(#[case] document: serde_json::Value, #[case] expected: bool) {
    let doc = document.to_string();
    assert_eq!(order_filter().evaluate(doc.as_bytes()).is_match(), expected);
}

#[test]
fn test_json_and_yaml_compile_alike() {
    let json = json!({"jsonFilter": {"and": [
        {"eq": {"field": "status", "value": "paid"}},
        {"or": [
            {"rx": {"field": "customer.email", "value": "@example\\.com$"}},
            {"eq": {"field": "customer.vip", "value": true}}
        ]}
    ]}});
    let from_json = jsonfilter::from_json(json.to_string().as_bytes()).unwrap();
    let from_yaml = order_filter();

    let doc = br#"{"status":"paid","customer":{"email":"x@other.org","vip":true}}"#;
    assert_eq!(from_json.evaluate(doc), from_yaml.evaluate(doc));
    assert_eq!(from_json.validate(), from_yaml.validate());
}

#[test]
fn test_non_object_document_never_matches() {
    let filter = order_filter();
    for doc in ["", "[]", "42", "not json"] {
        assert!(!filter.evaluate(doc.as_bytes()).is_match());
    }
}

// === Result records ===

#[test]
fn snapshot_short_circuit_and() {
    let result = order_filter().evaluate(br#"{"status":"open"}"#);
    assert_json_snapshot!(result, @r#"
    {
      "match": false,
      "operatorName": "and",
      "causeDescription": "value did not equal expected paid",
      "childOperators": [
        {
          "match": false,
          "operatorName": "eq",
          "causeDescription": "value did not equal expected paid"
        }
      ]
    }
    "#);
}

#[test]
fn snapshot_nested_match() {
    let result = order_filter()
        .evaluate(br#"{"status":"paid","customer":{"email":"x@other.org","vip":true}}"#);
    assert_json_snapshot!(result, @r#"
    {
      "match": true,
      "operatorName": "and",
      "childOperators": [
        {
          "match": true,
          "operatorName": "eq"
        },
        {
          "match": true,
          "operatorName": "or",
          "childOperators": [
            {
              "match": false,
              "operatorName": "rx",
              "causeDescription": "value does not match regex @example\\.com$"
            },
            {
              "match": true,
              "operatorName": "eq"
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn snapshot_validation() {
    let result = order_filter().validate();
    assert_json_snapshot!(result, @r#"
    {
      "valid": true,
      "operatorName": "and",
      "childOperators": [
        {
          "valid": true,
          "operatorName": "eq"
        },
        {
          "valid": true,
          "operatorName": "or",
          "childOperators": [
            {
              "valid": true,
              "operatorName": "rx"
            },
            {
              "valid": true,
              "operatorName": "eq"
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn test_result_round_trips_through_json() {
    let result = order_filter().evaluate(br#"{"status":"open"}"#);
    let encoded = serde_json::to_string(&result).unwrap();
    let decoded: jsonfilter::EvaluationResult = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, result);
}

// === Errors ===

#[test]
fn snapshot_error_messages() {
    let parser = Parser::new(2);

    let err = parser
        .from_json(br#"{"eq":{"field":"a","value":1},"rx":{"field":"a","value":"x"}}"#)
        .unwrap_err();
    assert_snapshot!(err.to_string(), @"JF0002: operator definition contains multiple entries: [eq, rx]");

    let err = parser
        .from_json(br#"{"gt":{"field":"a","value":1}}"#)
        .unwrap_err();
    assert_snapshot!(err.to_string(), @"JF0004: comparison operator gt is not implemented");

    let err = parser
        .from_json(br#"{"near":{"field":"a","value":1}}"#)
        .unwrap_err();
    assert_snapshot!(err.to_string(), @"JF0003: operator near is not supported");

    let err = parser
        .from_json(br#"{"eq":{"value":1}}"#)
        .unwrap_err();
    assert_snapshot!(err.to_string(), @"JF0006: comparison operator eq requires field attribute");

    let err = parser.from_yaml(ORDER_FILTER.as_bytes()).unwrap_err();
    assert_snapshot!(err.to_string(), @"JF0200: filter complexity 3 exceeds limit 2");
}

#[test]
fn test_error_code_metadata() {
    let err = jsonfilter::from_json(br#"{"rx":{"field":"a","value":"["}}"#).unwrap_err();
    assert!(err.code().is_compilation_error());
    assert_eq!(err.description(), "Invalid regular expression");
    assert!(err.help().is_some());

    let err = Parser::new(1).from_yaml(ORDER_FILTER.as_bytes()).unwrap_err();
    assert!(err.code().is_resource_error());
    assert_snapshot!(
        err.help().unwrap_or_default(),
        @"Reduce the number of operators or raise the parser complexity ceiling"
    );
}

// === Properties ===

proptest! {
    #[test]
    fn prop_evaluation_is_idempotent(status in "[a-z]{0,6}", vip in any::<bool>()) {
        let filter = order_filter();
        let doc = json!({"status": status, "customer": {"vip": vip}}).to_string();
        let first = filter.evaluate(doc.as_bytes());
        for _ in 0..3 {
            prop_assert_eq!(&first, &filter.evaluate(doc.as_bytes()));
        }
    }

    #[test]
    fn prop_non_positive_ceiling_behaves_as_default(ceiling in i64::MIN..=0) {
        let parser = Parser::new(ceiling);
        prop_assert_eq!(parser.max_complexity(), Parser::default().max_complexity());
    }
}
