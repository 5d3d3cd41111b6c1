/// Get the registered default port for a scheme, if it has one.
/// Expects an already-lowercased scheme.
/// Filters by length + first byte to minimize comparisons.
pub fn default_port(scheme: &str) -> Option<u16> {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (3, Some(b'f')) if bytes == b"ftp" => Some(21),
        (3, Some(b's')) if bytes == b"ssh" => Some(22),
        (4, Some(b's')) if bytes == b"sftp" => Some(22),
        (4, Some(b's')) if bytes == b"smtp" => Some(25),
        (4, Some(b'h')) if bytes == b"http" => Some(80),
        (4, Some(b'p')) if bytes == b"pop3" => Some(110),
        (4, Some(b'i')) if bytes == b"imap" => Some(143),
        (5, Some(b'h')) if bytes == b"https" => Some(443),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(default_port("http"), Some(80));
        assert_eq!(default_port("https"), Some(443));
        assert_eq!(default_port("ftp"), Some(21));
        assert_eq!(default_port("sftp"), Some(22));
        assert_eq!(default_port("ssh"), Some(22));
        assert_eq!(default_port("smtp"), Some(25));
        assert_eq!(default_port("pop3"), Some(110));
        assert_eq!(default_port("imap"), Some(143));
        assert_eq!(default_port("gopher"), None);
        assert_eq!(default_port(""), None);
    }

    #[test]
    fn test_default_port_expects_lowercase() {
        // Callers lowercase first; mixed case is not a registered scheme.
        assert_eq!(default_port("HTTP"), None);
    }
}
