//! Shared helpers for the HTTP client tests

#![allow(dead_code)]

use domain_tracker_api::{ApiConfig, DomainPayload, RestDomainApi};

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub const TOKEN: &str = "test-token";

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}

/// Client pointed at a mock server, with short timeouts.
pub fn client_for(server_url: &str, max_retries: u32) -> RestDomainApi {
    let config = ApiConfig {
        base_url: server_url.to_string(),
        request_timeout_secs: 5,
        connect_timeout_secs: 2,
        max_retries,
    };
    match RestDomainApi::new(&config) {
        Ok(api) => api,
        Err(e) => panic!("failed to build client: {e}"),
    }
}

pub fn sample_payload(name: &str) -> DomainPayload {
    DomainPayload {
        name: name.to_string(),
        expire_date: chrono::NaiveDate::from_ymd_opt(2030, 6, 1),
        company: "GFC SP. Z.O.O".to_string(),
        registrar: "OVH".to_string(),
        resignation: false,
        archived: false,
        requested_by: None,
    }
}
