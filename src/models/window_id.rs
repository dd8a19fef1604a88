use crate::constants::ESCAPED_COLON;

/// Window identifier persisted in a window capture source's settings.
///
/// The host stores it as `<title>:<executable>`, escaping colons inside the
/// title as `#3A`. `raw` keeps the stored string untouched; it is the key of
/// the window handle cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowIdentifier {
    pub raw: String,
    pub title: String,
    pub executable: Option<String>,
}

impl WindowIdentifier {
    pub fn parse(raw: &str) -> Self {
        let (title, executable) = match raw.split_once(':') {
            Some((title, executable)) => (title, Some(executable.to_string())),
            None => (raw, None),
        };

        Self {
            raw: raw.to_string(),
            title: title.replace(ESCAPED_COLON, ":"),
            executable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unescapes_title() {
        let id = WindowIdentifier::parse(r"Foo#3ABar:C:\app.exe");
        assert_eq!(id.title, "Foo:Bar");
        assert_eq!(id.executable.as_deref(), Some(r"C:\app.exe"));
        assert_eq!(id.raw, r"Foo#3ABar:C:\app.exe");
    }

    #[test]
    fn test_parse_title_only() {
        let id = WindowIdentifier::parse("Untitled - Notepad");
        assert_eq!(id.title, "Untitled - Notepad");
        assert_eq!(id.executable, None);
    }

    #[test]
    fn test_parse_empty() {
        let id = WindowIdentifier::parse("");
        assert_eq!(id.title, "");
        assert_eq!(id.raw, "");
    }
}
