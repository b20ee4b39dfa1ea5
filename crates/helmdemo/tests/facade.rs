#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use helmdemo::core::metrics::RegistryBuilder;
use helmdemo::server::{app_state::AppState, config::AppConfig, obs};

#[test]
fn facade_exposes_core_and_server() {
    let mut b = RegistryBuilder::new();
    b.counter("facade_total", "Facade smoke test").unwrap();
    let reg = b.build();
    reg.increment("facade_total").unwrap();
    assert!(reg.render().contains("facade_total 1\n"));

    let state = AppState::new(AppConfig::default()).unwrap();
    assert_eq!(state.metrics().value(obs::INDEX_REQUESTS_TOTAL).unwrap(), 0);
}
