use super::*;
use futures::executor::block_on;
use rand::SeedableRng;
use rand::rngs::SmallRng;

// =============================================================
// parse_quotable
// =============================================================

#[test]
fn parse_quotable_reads_content_and_author() {
    let body = r#"{"_id":"abc","content":"Well begun is half done.","author":"Aristotle","tags":["famous-quotes"]}"#;
    let quote = parse_quotable(body).unwrap();
    assert_eq!(quote.content(), "Well begun is half done.");
    assert_eq!(quote.author(), "Aristotle");
}

#[test]
fn parse_quotable_missing_author_is_incomplete() {
    let body = r#"{"content":"Orphaned words."}"#;
    assert_eq!(parse_quotable(body), Err(FetchError::Incomplete));
}

#[test]
fn parse_quotable_empty_content_is_incomplete() {
    let body = r#"{"content":"","author":"Nobody"}"#;
    assert_eq!(parse_quotable(body), Err(FetchError::Incomplete));
}

#[test]
fn parse_quotable_rejects_non_json() {
    let err = parse_quotable("<html>Service Unavailable</html>").unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[test]
fn parse_quotable_rejects_array_body() {
    let err = parse_quotable(r#"[{"content":"a","author":"b"}]"#).unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

// =============================================================
// parse_type_fit
// =============================================================

#[test]
fn parse_type_fit_maps_text_to_content() {
    let mut rng = SmallRng::seed_from_u64(1);
    let body = r#"[{"text":"Genius is one percent inspiration.","author":"Thomas Edison"}]"#;
    let quote = parse_type_fit(body, &mut rng).unwrap();
    assert_eq!(quote.content(), "Genius is one percent inspiration.");
    assert_eq!(quote.author(), "Thomas Edison");
}

#[test]
fn parse_type_fit_defaults_missing_author_to_unknown() {
    let mut rng = SmallRng::seed_from_u64(1);
    let quote = parse_type_fit(r#"[{"text":"Anonymous wisdom."}]"#, &mut rng).unwrap();
    assert_eq!(quote.author(), UNKNOWN_AUTHOR);
}

#[test]
fn parse_type_fit_defaults_null_and_empty_author_to_unknown() {
    let mut rng = SmallRng::seed_from_u64(1);
    let quote = parse_type_fit(r#"[{"text":"A","author":null}]"#, &mut rng).unwrap();
    assert_eq!(quote.author(), UNKNOWN_AUTHOR);
    let quote = parse_type_fit(r#"[{"text":"B","author":""}]"#, &mut rng).unwrap();
    assert_eq!(quote.author(), UNKNOWN_AUTHOR);
}

#[test]
fn parse_type_fit_empty_list_is_empty_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(parse_type_fit("[]", &mut rng), Err(FetchError::Empty));
}

#[test]
fn parse_type_fit_entry_without_text_is_incomplete() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(parse_type_fit(r#"[{"author":"Ghost"}]"#, &mut rng), Err(FetchError::Incomplete));
}

#[test]
fn parse_type_fit_picks_from_the_whole_list() {
    let mut rng = SmallRng::seed_from_u64(99);
    let body = r#"[{"text":"one","author":"a"},{"text":"two","author":"b"},{"text":"three","author":"c"}]"#;
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        seen.insert(parse_type_fit(body, &mut rng).unwrap().content().to_owned());
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn parse_type_fit_ignores_malformed_siblings() {
    let body = r#"[{"text":null,"author":"x"},{"text":"ok","author":"y"},{"text":"ok2","author":7}]"#;
    let mut rng = SmallRng::seed_from_u64(5);
    let mut good = 0;
    for _ in 0..60 {
        match parse_type_fit(body, &mut rng) {
            Ok(quote) => {
                assert_eq!(quote.content(), "ok");
                assert_eq!(quote.author(), "y");
                good += 1;
            }
            Err(err) => assert_eq!(err, FetchError::Incomplete),
        }
    }
    assert!(good > 0);
}

#[test]
fn parse_type_fit_non_object_sibling_does_not_spoil_the_list() {
    let body = r#"[{"text":"only good one","author":"z"},"not-an-object"]"#;
    let mut rng = SmallRng::seed_from_u64(11);
    let results: Vec<_> = (0..40).map(|_| parse_type_fit(body, &mut rng)).collect();
    assert!(results.iter().any(|r| r.as_ref().is_ok_and(|q| q.content() == "only good one")));
    assert!(results.iter().all(|r| r.is_ok() || *r == Err(FetchError::Incomplete)));
}

#[test]
fn parse_type_fit_non_array_body_is_parse_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    let result = parse_type_fit(r#"{"text":"lonely"}"#, &mut rng);
    assert!(matches!(result, Err(FetchError::Parse(_))));
}

// =============================================================
// HttpSource / SourceConfig
// =============================================================

#[test]
fn http_source_decodes_by_shape() {
    let mut rng = SmallRng::seed_from_u64(3);
    let single = HttpSource::new("a", "/x", ResponseShape::Quotable);
    let list = HttpSource::new("c", "/y", ResponseShape::TypeFit);
    assert!(single.decode(r#"{"content":"c","author":"a"}"#, &mut rng).is_ok());
    assert!(list.decode(r#"{"content":"c","author":"a"}"#, &mut rng).is_err());
    assert!(list.decode(r#"[{"text":"t"}]"#, &mut rng).is_ok());
}

#[test]
fn http_source_uses_default_timeout_unless_overridden() {
    let source = HttpSource::new("a", "/x", ResponseShape::Quotable);
    assert_eq!(source.timeout_ms(), DEFAULT_SOURCE_TIMEOUT_MS);
    assert_eq!(source.with_timeout(250).timeout_ms(), 250);
}

#[test]
fn http_source_is_unavailable_outside_the_browser() {
    let mut rng = SmallRng::seed_from_u64(3);
    let source = HttpSource::new("a", "/x", ResponseShape::Quotable);
    assert_eq!(block_on(source.fetch(&mut rng)), Err(FetchError::Unavailable));
}

#[test]
fn cors_proxied_url_encodes_the_upstream() {
    let config = SourceConfig::default();
    assert_eq!(
        config.cors_proxied_url(),
        "https://api.allorigins.win/raw?url=https%3A%2F%2Fapi.quotable.io%2Frandom"
    );
}

#[test]
fn default_chain_is_ordered_proxy_cors_list() {
    let sources = SourceConfig::default().sources();
    let labels: Vec<&str> = sources.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["quotable", "quotable-cors", "type.fit"]);
}

#[test]
fn default_http_sources_target_the_configured_endpoints() {
    let config = SourceConfig { timeout_ms: 1_500, ..SourceConfig::default() };
    let sources = config.http_sources();
    let targets: Vec<(&str, ResponseShape)> = sources.iter().map(|s| (s.url(), s.shape())).collect();

    assert_eq!(
        targets,
        [
            (QUOTABLE_PROXY_URL, ResponseShape::Quotable),
            ("https://api.allorigins.win/raw?url=https%3A%2F%2Fapi.quotable.io%2Frandom", ResponseShape::Quotable),
            (TYPE_FIT_URL, ResponseShape::TypeFit),
        ]
    );
    assert!(sources.iter().all(|s| s.timeout_ms() == 1_500));
}

// =============================================================
// FnSource
// =============================================================

#[test]
fn closure_source_reports_label_and_result() {
    use futures::FutureExt;

    let fixed = Quote::new("Simplicity is prerequisite for reliability.", "Edsger Dijkstra").unwrap();
    let source = FnSource::new("fixed", move |_rng: &mut dyn RngCore| {
        let quote = fixed.clone();
        async move { Ok(quote) }.boxed_local()
    });
    let mut rng = SmallRng::seed_from_u64(1);

    assert_eq!(source.label(), "fixed");
    let quote = block_on(source.fetch(&mut rng)).unwrap();
    assert_eq!(quote.author(), "Edsger Dijkstra");
}

#[test]
fn closure_source_can_use_the_injected_rng() {
    use futures::FutureExt;

    let source = FnSource::new("dice", |rng: &mut dyn RngCore| {
        let roll = rng.random_range(1..=6_u32);
        async move { Quote::new(format!("rolled {roll}"), "Dice") }.boxed_local()
    });
    let mut rng = SmallRng::seed_from_u64(9);

    let quote = block_on(source.fetch(&mut rng)).unwrap();
    assert!(quote.content().starts_with("rolled "));
}
