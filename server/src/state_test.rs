use super::*;

#[test]
fn new_strips_trailing_slash_from_upstream() {
    let state = AppState::new("http://127.0.0.1:9000/", Duration::from_secs(1)).unwrap();
    assert_eq!(&*state.quotable_upstream, "http://127.0.0.1:9000");
}

#[test]
fn from_config_uses_configured_upstream() {
    let config = ServerConfig::from_lookup(|_| None).unwrap();
    let state = AppState::from_config(&config).unwrap();
    assert_eq!(&*state.quotable_upstream, crate::config::DEFAULT_QUOTABLE_UPSTREAM);
}
