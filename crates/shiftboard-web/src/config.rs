//! Build-time configuration

/// Production API root used when no override is configured.
const DEFAULT_BASE_URL: &str = "https://productionb.univa.cloud/";

/// Remote API root, always with a trailing slash.
///
/// Override at build time via `API_BASE_URL` (environment or a `.env`
/// file next to the crate, see `build.rs`).
pub fn api_base_url() -> String {
    let url = option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL);
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_has_trailing_slash() {
        assert!(api_base_url().ends_with('/'));
    }
}
