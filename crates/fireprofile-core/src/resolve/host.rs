use crate::{Error, Result};
use url::{ParseError, Url};

/// Extract the host of a URL given to the URL handler.
///
/// Input without a scheme (`example.com/path`) is retried as `https://`.
/// Returns the normalized URL together with its host.
pub fn host_from_url(input: &str) -> Result<(Url, String)> {
    let input = input.trim();

    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", input))
            .map_err(|e| invalid(input, e.to_string()))?,
        Err(e) => return Err(invalid(input, e.to_string())),
    };

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => return Err(invalid(input, "URL has no host".to_string())),
    };

    tracing::debug!("Extracted host {} from {}", host, url);
    Ok((url, host))
}

fn invalid(url: &str, reason: String) -> Error {
    Error::InvalidUrl {
        url: url.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_from_full_url() {
        let (url, host) = host_from_url("https://mail.example.com/inbox?x=1").unwrap();
        assert_eq!(host, "mail.example.com");
        assert_eq!(url.as_str(), "https://mail.example.com/inbox?x=1");
    }

    #[test]
    fn test_host_excludes_port_and_credentials() {
        let (_, host) = host_from_url("http://user:pw@localhost:8080/").unwrap();
        assert_eq!(host, "localhost");
    }

    #[test]
    fn test_url_without_scheme_gets_https() {
        let (url, host) = host_from_url("example.com/path").unwrap();
        assert_eq!(host, "example.com");
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_url_without_host_is_rejected() {
        let err = host_from_url("mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(host_from_url("").is_err());
    }
}
