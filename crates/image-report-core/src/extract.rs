use crate::error::Error;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

/// Pulls filename-like image tokens out of source and markup text.
///
/// A token is the longest run of characters free of quotes, `>` and `/`
/// that ends in `.<extension>`. The extension is stripped from the result.
pub struct ReferenceExtractor {
    pattern: Regex,
    suffix_len: usize,
}

impl ReferenceExtractor {
    pub fn new(image_extension: &str) -> Result<Self, Error> {
        let pattern = Regex::new(&format!(
            r#"[^">/\r\n]*\.{}"#,
            regex::escape(image_extension)
        ))?;
        Ok(Self {
            pattern,
            suffix_len: image_extension.len() + 1,
        })
    }

    /// Tokens in text order, duplicates kept.
    pub fn extract_from_text(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| {
                let matched = m.as_str();
                matched[..matched.len() - self.suffix_len].to_string()
            })
            .collect()
    }

    /// Like `extract_from_text`, reading the file first. A file that cannot
    /// be read yields no tokens.
    pub fn extract_from_file(&self, path: &Path) -> Vec<String> {
        match fs::read(path) {
            Ok(bytes) => {
                let tokens = self.extract_from_text(&String::from_utf8_lossy(&bytes));
                trace!("{}: {} references", path.display(), tokens.len());
                tokens
            }
            Err(err) => {
                warn!("Skipping unreadable source file {}: {}", path.display(), err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn png() -> ReferenceExtractor {
        ReferenceExtractor::new("png").unwrap()
    }

    #[test]
    fn test_objc_string_literal() {
        let tokens = png().extract_from_text(r#"[UIImage imageNamed:@"icon.png"];"#);
        assert_eq!(tokens, vec!["icon"]);
    }

    #[test]
    fn test_xib_attribute_and_element() {
        let text = r#"<string key="NSResourceName">background@2x.png</string>
<image name="tab_home.png" width="30"/>"#;
        let tokens = png().extract_from_text(text);
        assert_eq!(tokens, vec!["background@2x", "tab_home"]);
    }

    #[test]
    fn test_path_prefix_is_dropped() {
        let tokens = png().extract_from_text(r#"path = "images/buttons/ok.png";"#);
        assert_eq!(tokens, vec!["ok"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let text = "\"b.png\" \"a.png\"\n\"b.png\"";
        let tokens = png().extract_from_text(text);
        assert_eq!(tokens, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_extension_is_escaped() {
        let tokens = png().extract_from_text(r#""iconXpng" "real.png""#);
        assert_eq!(tokens, vec!["real"]);
    }

    #[test]
    fn test_unreadable_file_yields_nothing() {
        let tmp = tempdir().unwrap();
        let tokens = png().extract_from_file(&tmp.path().join("Gone.m"));
        assert!(tokens.is_empty());
    }
}
