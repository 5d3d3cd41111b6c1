use once_cell::sync::OnceCell;

use crate::error::ContextError;

/// Snapshot of the inbound request used to seed URL defaults.
///
/// Mirrors the usual server variables: protocol line, TLS flag, Host header,
/// server name and port, and the request target. The embedder fills in
/// whatever it has; every derivation degrades to a sane fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Protocol line, e.g. `HTTP/1.1`; the text before `/` becomes the scheme.
    pub protocol: Option<String>,
    /// TLS indicator; upgrades a derived `http` scheme to `https`.
    pub secure: bool,
    /// Host header value, possibly carrying a trailing `:port`.
    pub http_host: Option<String>,
    /// Configured server name, used when no Host header is present.
    pub server_name: Option<String>,
    /// Port the request arrived on.
    pub server_port: Option<u16>,
    /// Request target: path plus optional `?query`.
    pub request_uri: Option<String>,
    /// Machine hostname supplied by the embedder; the last host fallback.
    pub local_hostname: Option<String>,
}

impl RequestContext {
    /// Scheme of the current request, defaulting to `http`.
    pub fn scheme(&self) -> String {
        let mut scheme = match &self.protocol {
            Some(protocol) => match protocol.find('/') {
                Some(split) => protocol[..split].to_ascii_lowercase(),
                None => protocol.to_ascii_lowercase(),
            },
            None => String::from("http"),
        };
        if scheme == "http" && self.secure {
            scheme = String::from("https");
        }
        scheme
    }

    /// Host of the current request: the Host header with any `:port`
    /// stripped, then the server name, then the machine hostname.
    pub fn host(&self) -> String {
        if let Some(host) = &self.http_host {
            return strip_port_suffix(host).to_string();
        }
        self.server_name
            .clone()
            .or_else(|| self.local_hostname.clone())
            .unwrap_or_else(|| String::from("localhost"))
    }

    /// Port the request arrived on, if known.
    pub fn port(&self) -> Option<u16> {
        self.server_port
    }

    /// Path portion of the request target, defaulting to `/`.
    pub fn path(&self) -> String {
        match &self.request_uri {
            Some(uri) => match uri.split_once('?') {
                Some((path, _)) => path.to_string(),
                None => uri.clone(),
            },
            None => String::from("/"),
        }
    }

    /// Query portion of the request target; empty when absent.
    pub fn query(&self) -> String {
        match &self.request_uri {
            Some(uri) => match uri.split_once('?') {
                Some((_, query)) => query.to_string(),
                None => String::new(),
            },
            None => String::new(),
        }
    }
}

/// Strip a trailing `:digits` port from a Host header value.
fn strip_port_suffix(host: &str) -> &str {
    match host.rfind(':') {
        Some(split)
            if split + 1 < host.len()
                && host[split + 1..].bytes().all(|b| b.is_ascii_digit()) =>
        {
            &host[..split]
        }
        _ => host,
    }
}

static DEFAULT_CONTEXT: OnceCell<RequestContext> = OnceCell::new();

/// Install the process-wide default request context.
///
/// Call once at startup, before the first default-seeded [`crate::Url`] is
/// constructed. The first read pins the context for the rest of the process,
/// so a later installation attempt reports
/// [`ContextError::AlreadyInstalled`].
///
/// # Errors
///
/// Returns an error when a default context is already in place.
pub fn set_default_context(context: RequestContext) -> Result<(), ContextError> {
    DEFAULT_CONTEXT
        .set(context)
        .map_err(|_| ContextError::AlreadyInstalled)
}

/// The process-wide default context; empty if none was installed.
pub fn default_context() -> &'static RequestContext {
    DEFAULT_CONTEXT.get_or_init(RequestContext::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_from_protocol_line() {
        let context = RequestContext {
            protocol: Some(String::from("HTTP/1.1")),
            ..RequestContext::default()
        };
        assert_eq!(context.scheme(), "http");
    }

    #[test]
    fn test_scheme_upgrade_when_secure() {
        let context = RequestContext {
            protocol: Some(String::from("HTTP/1.1")),
            secure: true,
            ..RequestContext::default()
        };
        assert_eq!(context.scheme(), "https");
    }

    #[test]
    fn test_scheme_defaults_to_http() {
        assert_eq!(RequestContext::default().scheme(), "http");
    }

    #[test]
    fn test_host_strips_port_from_host_header() {
        let context = RequestContext {
            http_host: Some(String::from("www.example.com:8080")),
            ..RequestContext::default()
        };
        assert_eq!(context.host(), "www.example.com");
    }

    #[test]
    fn test_host_fallback_chain() {
        let context = RequestContext {
            server_name: Some(String::from("example.com")),
            local_hostname: Some(String::from("devbox")),
            ..RequestContext::default()
        };
        assert_eq!(context.host(), "example.com");

        let context = RequestContext {
            local_hostname: Some(String::from("devbox")),
            ..RequestContext::default()
        };
        assert_eq!(context.host(), "devbox");

        assert_eq!(RequestContext::default().host(), "localhost");
    }

    #[test]
    fn test_path_and_query_split() {
        let context = RequestContext {
            request_uri: Some(String::from("/search?q=test&page=2")),
            ..RequestContext::default()
        };
        assert_eq!(context.path(), "/search");
        assert_eq!(context.query(), "q=test&page=2");

        let context = RequestContext {
            request_uri: Some(String::from("/search")),
            ..RequestContext::default()
        };
        assert_eq!(context.path(), "/search");
        assert_eq!(context.query(), "");

        assert_eq!(RequestContext::default().path(), "/");
        assert_eq!(RequestContext::default().query(), "");
    }

    #[test]
    fn test_strip_port_suffix_edge_cases() {
        assert_eq!(strip_port_suffix("example.com"), "example.com");
        assert_eq!(strip_port_suffix("example.com:"), "example.com:");
        assert_eq!(strip_port_suffix("example.com:80"), "example.com");
        assert_eq!(strip_port_suffix("example.com:80x"), "example.com:80x");
    }
}
