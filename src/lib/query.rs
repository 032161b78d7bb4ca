//! Query-string helpers for API paths.

use url::form_urlencoded;

/// Appends URL-encoded query parameters to `path`. Pairs with an empty value
/// are dropped so optional filters do not end up as `status=`.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        if !value.trim().is_empty() {
            serializer.append_pair(name, value);
        }
    }
    let query = serializer.finish();

    if query.is_empty() {
        path.to_string()
    } else {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{path}{separator}{query}")
    }
}

/// Joins a base URL and a path with exactly one slash between them.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_query_encodes_values() {
        assert_eq!(
            with_query("/auth/verify", &[("token", "a+b/c d")]),
            "/auth/verify?token=a%2Bb%2Fc+d"
        );
    }

    #[test]
    fn with_query_skips_empty_values() {
        assert_eq!(
            with_query("/service/contracts", &[("page", "0"), ("status", ""), ("size", "10")]),
            "/service/contracts?page=0&size=10"
        );
        assert_eq!(with_query("/service/contracts", &[("status", " ")]), "/service/contracts");
    }

    #[test]
    fn with_query_extends_existing_query() {
        assert_eq!(with_query("/a?x=1", &[("y", "2")]), "/a?x=1&y=2");
    }

    #[test]
    fn build_url_with_base_normalizes_slashes() {
        assert_eq!(
            build_url_with_base("http://localhost:8080/api/", "/auth/login"),
            "http://localhost:8080/api/auth/login"
        );
        assert_eq!(
            build_url_with_base("http://localhost:8080/api", "staff/profile/3"),
            "http://localhost:8080/api/staff/profile/3"
        );
        assert_eq!(build_url_with_base("  ", "/auth/login"), "/auth/login");
    }
}
