/// URL helpers for template rendering
use url::form_urlencoded;

/// Encodes a value for use in a URL query string
pub fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Removes trailing slashes from a base URL
pub fn trim_base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}
