/// Makes a backend image path absolute.
///
/// URLs that already start with `http` are returned untouched; anything else
/// is treated as a path on the backend origin.
pub fn resolve_image_url(base_url: &str, url: &str) -> String {
    if url.starts_with("http") || base_url.is_empty() {
        return url.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{}{}", base, url)
    } else {
        format!("{}/{}", base, url)
    }
}

/// `path` with `?force=true` appended when the duplicate check must be skipped.
pub fn with_force(path: &str, force: bool) -> String {
    if force {
        format!("{}?force=true", path)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("http://localhost:8080", "/api/gallery/1/image" => "http://localhost:8080/api/gallery/1/image")]
    #[test_case("http://localhost:8080/", "api/gallery/1/image" => "http://localhost:8080/api/gallery/1/image")]
    #[test_case("http://localhost:8080", "https://cdn.example/p.png" => "https://cdn.example/p.png")]
    #[test_case("", "/api/gallery/1/image" => "/api/gallery/1/image" ; "relative when proxied")]
    fn test_resolve_image_url(base: &str, url: &str) -> String {
        resolve_image_url(base, url)
    }

    #[test]
    fn test_with_force() {
        assert_eq!(with_force("/api/register", true), "/api/register?force=true");
        assert_eq!(with_force("/api/register", false), "/api/register");
    }
}
