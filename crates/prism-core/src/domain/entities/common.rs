use super::SchemaViolation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

/// Longest name accepted; slugs end up in URLs and file names.
pub const MAX_NAME_LEN: usize = 64;

/// A catalog entry name that is also its URL slug.
///
/// Invariant: lowercase ASCII letters, digits and single hyphens, no leading
/// or trailing hyphen. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryName(String);

impl EntryName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, SchemaViolation> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(SchemaViolation::EmptyName);
        }
        if let Some(reason) = slug_defect(&raw) {
            return Err(SchemaViolation::InvalidName { name: raw, reason });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path segment used by docs URLs. Identical to the name.
    pub fn slug(&self) -> &str {
        &self.0
    }

    /// Display title: `chat-input` → `Chat Input`.
    pub fn title(&self) -> String {
        humanize(&self.0)
    }
}

fn slug_defect(s: &str) -> Option<String> {
    if s.len() > MAX_NAME_LEN {
        return Some(format!("longer than {MAX_NAME_LEN} characters"));
    }
    if let Some(c) = s
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Some(format!("character '{c}' is not allowed"));
    }
    if s.starts_with('-') || s.ends_with('-') {
        return Some("must not start or end with '-'".into());
    }
    if s.contains("--") {
        return Some("must not contain consecutive hyphens".into());
    }
    None
}

impl TryFrom<String> for EntryName {
    type Error = SchemaViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EntryName> for String {
    fn from(name: EntryName) -> Self {
        name.0
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A manifest path where an install artifact is placed.
///
/// Invariant: relative, forward-slash separated, no `..`, ends in a file
/// extension. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ManifestPath(String);

impl ManifestPath {
    pub fn parse(raw: impl Into<String>) -> Result<Self, SchemaViolation> {
        let raw = raw.into();
        match path_defect(&raw) {
            Some(reason) => Err(SchemaViolation::MalformedPath { path: raw, reason }),
            None => Ok(Self(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

fn path_defect(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        return Some("path is empty".into());
    }
    if s.contains('\\') {
        return Some("use '/' as the separator".into());
    }
    if s.starts_with('/') || Path::new(s).is_absolute() {
        return Some("absolute paths are not allowed".into());
    }
    let path = Path::new(s);
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::CurDir))
    {
        return Some("'.' and '..' segments are not allowed".into());
    }
    if s.split('/').any(str::is_empty) {
        return Some("empty path segment".into());
    }
    match path.extension() {
        Some(ext) if !ext.is_empty() => None,
        _ => Some("path must name a file with an extension".into()),
    }
}

impl TryFrom<String> for ManifestPath {
    type Error = SchemaViolation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ManifestPath> for String {
    fn from(path: ManifestPath) -> Self {
        path.0
    }
}

impl fmt::Display for ManifestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Title Helpers
// ============================================================================

/// Turn an identifier into a display title.
///
/// | Input | Output |
/// |-------|--------|
/// | "chat-input" | "Chat Input" |
/// | "expandableCard" | "Expandable Card" |
/// | "getting_started" | "Getting Started" |
pub fn humanize(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on `_`, `-`, whitespace and lower→upper case transitions.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        current.push(c);

        // "expandableCard" → "expandable" + "Card"
        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                words.push(current.to_lowercase());
                current.clear();
            }
        }
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_name_accepts_slugs() {
        assert!(EntryName::parse("chat-input").is_ok());
        assert!(EntryName::parse("card2").is_ok());
    }

    #[test]
    fn entry_name_rejects_unsafe() {
        assert_eq!(EntryName::parse(""), Err(SchemaViolation::EmptyName));
        assert!(EntryName::parse("Chat-Input").is_err());
        assert!(EntryName::parse("chat input").is_err());
        assert!(EntryName::parse("-chat").is_err());
        assert!(EntryName::parse("chat--input").is_err());
        assert!(EntryName::parse("a".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn manifest_path_rules() {
        assert!(ManifestPath::parse("components/prismui/chat-input.tsx").is_ok());
        assert!(ManifestPath::parse("/components/x.tsx").is_err());
        assert!(ManifestPath::parse("../x.tsx").is_err());
        assert!(ManifestPath::parse("components\\x.tsx").is_err());
        assert!(ManifestPath::parse("components/prismui").is_err());
        assert!(ManifestPath::parse("components//x.tsx").is_err());
        assert!(ManifestPath::parse("  ").is_err());
    }

    #[test]
    fn manifest_path_file_name() {
        let p = ManifestPath::parse("components/prismui/chat-input.tsx").unwrap();
        assert_eq!(p.file_name(), "chat-input.tsx");
    }

    #[test]
    fn humanize_titles() {
        assert_eq!(humanize("chat-input"), "Chat Input");
        assert_eq!(humanize("expandableCard"), "Expandable Card");
        assert_eq!(humanize("getting_started"), "Getting Started");
    }
}
