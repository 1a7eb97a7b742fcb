//! Remote user directory access.
//!
//! The directory is a read-only HTTP endpoint returning a JSON array of user
//! records. The request itself is issued by the Zellij host (`web_request`),
//! so this module only describes it and decodes the answer.
//!
//! # Request Identification
//!
//! Zellij echoes the request's context map back in `WebRequestResult`. The
//! plugin tags its load with [`request_context`] and accepts a result only if
//! [`is_directory_response`] recognizes the tag.

pub mod decode;

pub use decode::decode_response;

use std::collections::BTreeMap;

/// Endpoint used when the plugin configuration does not set `endpoint`.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

const CONTEXT_KEY: &str = "rolodex_request";
const CONTEXT_LOAD_USERS: &str = "load_users";

/// Headers sent with the directory GET.
#[must_use]
pub fn request_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("Accept".to_string(), "application/json".to_string())])
}

/// Context map tagging the directory load request.
#[must_use]
pub fn request_context() -> BTreeMap<String, String> {
    BTreeMap::from([(CONTEXT_KEY.to_string(), CONTEXT_LOAD_USERS.to_string())])
}

/// Whether a `WebRequestResult` context belongs to the directory load.
#[must_use]
pub fn is_directory_response(context: &BTreeMap<String, String>) -> bool {
    context.get(CONTEXT_KEY).map(String::as_str) == Some(CONTEXT_LOAD_USERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_its_own_context() {
        assert!(is_directory_response(&request_context()));
        assert!(!is_directory_response(&BTreeMap::new()));

        let foreign = BTreeMap::from([(CONTEXT_KEY.to_string(), "other".to_string())]);
        assert!(!is_directory_response(&foreign));
    }

    #[test]
    fn asks_for_json() {
        assert_eq!(
            request_headers().get("Accept").map(String::as_str),
            Some("application/json")
        );
    }
}
