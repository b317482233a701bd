//! Integration tests for the boolean query builder
//!
//! Tests end-to-end query construction from builders through to encoded request bodies.

use serde_json::{json, Value};
use squidex_dsl::query::{
    BoolQuery, MatchAllQuery, MatchQuery, Occur, PrefixQuery, Query, QueryEncoder, RangeQuery,
    RawQuery, TermQuery, TermsQuery,
};
use squidex_dsl::EncoderSettings;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_empty_bool_query() {
    init_tracing();
    assert_eq!(BoolQuery::new().source(), json!({"bool": {}}));
}

#[test]
fn test_single_must_clause() {
    let query = BoolQuery::new().must(TermQuery::new("user", "kimchy"));
    assert_eq!(
        query.source(),
        json!({"bool": {"must": {"term": {"user": "kimchy"}}}})
    );
}

#[test]
fn test_two_should_clauses_with_minimum_should_match() {
    let query = BoolQuery::new()
        .should(TermQuery::new("tag", "wow"))
        .should(TermQuery::new("tag", "elasticsearch"))
        .with_minimum_should_match("1");

    assert_eq!(
        query.source(),
        json!({"bool": {
            "should": [
                {"term": {"tag": "wow"}},
                {"term": {"tag": "elasticsearch"}}
            ],
            "minimum_should_match": "1"
        }})
    );
}

#[test]
fn test_boost_without_clauses() {
    let query = BoolQuery::new().with_boost(2.0);
    assert_eq!(query.source(), json!({"bool": {"boost": 2.0}}));
}

#[test]
fn test_full_bool_query() {
    init_tracing();

    let query = BoolQuery::new()
        .must(TermQuery::new("user", "kimchy"))
        .must_not(RangeQuery::new("age").gte(10).lte(20))
        .should(TermQuery::new("tag", "wow"))
        .should(TermQuery::new("tag", "elasticsearch"))
        .with_minimum_should_match("1")
        .with_boost(1.0)
        .with_disable_coord(true);

    assert_eq!(
        query.source(),
        json!({"bool": {
            "must": {"term": {"user": "kimchy"}},
            "must_not": {"range": {"age": {"gte": 10, "lte": 20}}},
            "should": [
                {"term": {"tag": "wow"}},
                {"term": {"tag": "elasticsearch"}}
            ],
            "minimum_should_match": "1",
            "boost": 1.0,
            "disable_coord": true
        }})
    );
}

#[test]
fn test_no_modifiers_emitted_by_default() {
    let query = BoolQuery::new()
        .must(MatchQuery::new("content", "rust"))
        .should(PrefixQuery::new("title", "prog"))
        .must_not(MatchAllQuery::new());

    let source = query.source();
    let inner = source["bool"].as_object().unwrap();
    for key in ["boost", "disable_coord", "minimum_should_match"] {
        assert!(!inner.contains_key(key), "unexpected key {}", key);
    }
}

#[test]
fn test_mixed_leaf_kinds_in_one_clause_list() {
    let query = BoolQuery::new()
        .must(MatchQuery::new("content", "rust programming").with_and_operator())
        .must(TermsQuery::new("tags", ["systems", "cli"]))
        .must(RangeQuery::new("published").gte_str("now-1y"))
        .must(RawQuery::new(json!({"exists": {"field": "author"}})));

    assert_eq!(
        query.source(),
        json!({"bool": {"must": [
            {"match": {"content": {"query": "rust programming", "operator": "and"}}},
            {"terms": {"tags": ["systems", "cli"]}},
            {"range": {"published": {"gte": "now-1y"}}},
            {"exists": {"field": "author"}}
        ]}})
    );
}

#[test]
fn test_deeply_nested_bool_queries() {
    let mut query = BoolQuery::new().must(TermQuery::new("level", 0));
    for level in 1..=5 {
        query = BoolQuery::new()
            .must(query)
            .must_not(TermQuery::new("level", level));
    }

    // Walk back down: each level wraps the previous one as its first must clause
    let mut current = query.source();
    for level in (1..=5).rev() {
        let inner = current["bool"].clone();
        assert_eq!(inner["must_not"], json!({"term": {"level": level}}));
        current = inner["must"].clone();
    }
    assert_eq!(current, json!({"bool": {"must": {"term": {"level": 0}}}}));
}

#[test]
fn test_boxed_clauses_from_dynamic_list() {
    let filters: Vec<Box<dyn Query>> = vec![
        Box::new(TermQuery::new("status", "draft")),
        Box::new(TermQuery::new("status", "deleted")),
    ];

    let query = filters
        .into_iter()
        .fold(BoolQuery::new(), |q, clause| q.must_not_boxed(clause));

    assert_eq!(query.clauses(Occur::MustNot).len(), 2);
    assert_eq!(
        query.source()["bool"]["must_not"],
        json!([
            {"term": {"status": "draft"}},
            {"term": {"status": "deleted"}}
        ])
    );
}

#[test]
fn test_template_reuse_across_requests() {
    let base = BoolQuery::new()
        .must(TermQuery::new("tenant", "acme"))
        .with_boost(1.5);

    let rust = base.clone().should(MatchQuery::new("content", "rust"));
    let go = base.clone().should(MatchQuery::new("content", "go"));

    assert_eq!(rust.source()["bool"]["should"], json!({"match": {"content": "rust"}}));
    assert_eq!(go.source()["bool"]["should"], json!({"match": {"content": "go"}}));
    assert!(base.source()["bool"].get("should").is_none());
}

#[test]
fn test_queries_render_on_other_threads() {
    let query = BoolQuery::new()
        .must(TermQuery::new("user", "kimchy"))
        .should(TermQuery::new("tag", "wow"));
    let expected = query.source();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let query = query.clone();
            std::thread::spawn(move || query.source())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_encoded_request_body() {
    init_tracing();

    let query = BoolQuery::new()
        .must(TermQuery::new("user", "kimchy"))
        .must_not(TermQuery::new("status", "draft"))
        .should(TermQuery::new("tag", "wow"))
        .with_minimum_should_match("1")
        .with_boost(2.0)
        .with_disable_coord(false);

    let encoder = QueryEncoder::new(EncoderSettings::request_body());
    let encoded = encoder.to_string(&query).unwrap();

    // Keys come out in builder order
    assert_eq!(
        encoded,
        concat!(
            r#"{"query":{"bool":{"must":{"term":{"user":"kimchy"}},"#,
            r#""must_not":{"term":{"status":"draft"}},"should":{"term":{"tag":"wow"}},"#,
            r#""minimum_should_match":"1","boost":2.0,"disable_coord":false}}}"#
        )
    );

    let decoded: Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded["query"], query.source());
}
