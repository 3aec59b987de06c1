//! Log sanitization
//!
//! Response bodies are logged at debug level. Login responses carry the bearer
//! token, so credential fields are masked and long bodies are cut short.

use serde_json::Value;

/// Maximum number of bytes of a body kept in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// JSON keys whose values never reach the log.
const SENSITIVE_KEYS: &[&str] = &["token", "password", "authorization"];

const MASK: &str = "***";

/// Mask credentials in a JSON body and truncate it for logging.
///
/// Bodies that are not JSON are only truncated.
pub fn sanitize_for_log(body: &str) -> String {
    let masked = match serde_json::from_str::<Value>(body) {
        Ok(mut value) => {
            if mask_sensitive(&mut value) {
                value.to_string()
            } else {
                body.to_string()
            }
        }
        Err(_) => body.to_string(),
    };
    truncate_for_log(&masked)
}

/// Replace sensitive values in place; returns whether anything was masked.
fn mask_sensitive(value: &mut Value) -> bool {
    match value {
        Value::Object(map) => {
            let mut masked = false;
            for (key, field) in map.iter_mut() {
                if SENSITIVE_KEYS.iter().any(|k| key.eq_ignore_ascii_case(k)) {
                    *field = Value::String(MASK.to_string());
                    masked = true;
                } else {
                    masked |= mask_sensitive(field);
                }
            }
            masked
        }
        Value::Array(items) => items.iter_mut().fold(false, |acc, v| mask_sensitive(v) | acc),
        _ => false,
    }
}

/// Cut `s` to at most `TRUNCATE_LIMIT` bytes on a char boundary.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut cut = TRUNCATE_LIMIT;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
