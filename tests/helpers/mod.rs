//! Test helpers module
//!
//! Utilities shared by the integration tests: a mock backend built on
//! wiremock and tracing setup.

#![allow(dead_code)]

pub mod backend_mock;

pub use backend_mock::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("plais_client=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Session cookie used by authenticated tests
pub fn test_session_cookie() -> &'static str {
    ".AspNetCore.Cookies=test-session"
}
