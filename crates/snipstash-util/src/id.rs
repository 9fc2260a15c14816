//! ULID-based identifier generation with prefixes.
//!
//! Identifiers in snipstash follow the pattern: `prefix_ulid`
//! For example: `snp_01HQXYZ...` for snippets, `fil_01HQXYZ...` for files.

use ulid::Ulid;

/// Known identifier prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPrefix {
    Snippet,
    File,
}

impl IdPrefix {
    /// Get the string prefix for this identifier type.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdPrefix::Snippet => "snp",
            IdPrefix::File => "fil",
        }
    }

    /// Parse a prefix from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "snp" => Some(IdPrefix::Snippet),
            "fil" => Some(IdPrefix::File),
            _ => None,
        }
    }
}

/// Identifier generation and parsing utilities.
pub struct Identifier;

impl Identifier {
    /// Generate a new ascending identifier (newer = larger).
    ///
    /// File keys are ascending so files added later sort after
    /// earlier ones when keyed storage is listed.
    pub fn ascending(prefix: IdPrefix) -> String {
        let ulid = Ulid::new();
        format!("{}_{}", prefix.as_str(), ulid.to_string().to_lowercase())
    }

    /// Generate an identifier with a specific ULID (for testing or imports).
    pub fn with_ulid(prefix: IdPrefix, ulid: Ulid) -> String {
        format!("{}_{}", prefix.as_str(), ulid.to_string().to_lowercase())
    }

    /// Parse an identifier into its prefix and ULID parts.
    pub fn parse(id: &str) -> Option<(IdPrefix, Ulid)> {
        let parts: Vec<&str> = id.splitn(2, '_').collect();
        if parts.len() != 2 {
            return None;
        }
        let prefix = IdPrefix::parse(parts[0])?;
        let ulid = Ulid::from_string(parts[1]).ok()?;
        Some((prefix, ulid))
    }

    /// Check if an identifier has the expected prefix.
    pub fn has_prefix(id: &str, prefix: IdPrefix) -> bool {
        id.starts_with(prefix.as_str()) && id.chars().nth(prefix.as_str().len()) == Some('_')
    }

    /// Generate a snippet ID.
    pub fn snippet() -> String {
        Self::ascending(IdPrefix::Snippet)
    }

    /// Generate a file key.
    pub fn file() -> String {
        Self::ascending(IdPrefix::File)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_id() {
        let id = Identifier::snippet();
        assert!(id.starts_with("snp_"));
        assert_eq!(id.len(), 30); // "snp_" (4) + ULID (26)
    }

    #[test]
    fn test_file_key() {
        let key = Identifier::file();
        assert!(key.starts_with("fil_"));
        assert_eq!(key.len(), 30);
    }

    #[test]
    fn test_file_keys_unique() {
        let a = Identifier::file();
        let b = Identifier::file();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ascending_order() {
        let id1 = Identifier::ascending(IdPrefix::File);
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = Identifier::ascending(IdPrefix::File);
        assert!(id1 < id2, "Ascending IDs should increase over time");
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = Identifier::snippet();
        let (prefix, _ulid) = Identifier::parse(&id).unwrap();
        assert_eq!(prefix, IdPrefix::Snippet);
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        assert!(Identifier::parse("ses_01hqxyzabcdefghjkmnpqrstvwx").is_none());
        assert!(Identifier::parse("no-separator").is_none());
    }

    #[test]
    fn test_has_prefix() {
        let id = Identifier::file();
        assert!(Identifier::has_prefix(&id, IdPrefix::File));
        assert!(!Identifier::has_prefix(&id, IdPrefix::Snippet));
    }
}
