//! Deterministic label colouring.
//!
//! The colour is purely aesthetic: the first three bytes of the SHA-256
//! digest of the label become the red, green and blue channels. Distinct
//! labels may share a colour.

use sha2::{Digest, Sha256};

/// Derive a `#rrggbb` colour (lowercase hex) from a label.
///
/// # Example
/// ```rust
/// let color = graph_html::derive_color("");
/// assert_eq!(color, "#e3b0c4");
/// ```
pub fn derive_color(label: &str) -> String {
    let digest = Sha256::digest(label.as_bytes());
    format!("#{:02x}{:02x}{:02x}", digest[0], digest[1], digest[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_known_labels() {
        assert_eq!(derive_color("Alpha"), "#b1a96d");
        assert_eq!(derive_color("Beta"), "#703390");
        assert_eq!(derive_color("Alpha Centauri"), "#980556");
    }

    #[test]
    fn test_alpha_matches_digest_prefix() {
        let digest = Sha256::digest("Alpha".as_bytes());
        let expected = format!("#{:02x}{:02x}{:02x}", digest[0], digest[1], digest[2]);
        assert_eq!(derive_color("Alpha"), expected);
    }

    #[test]
    fn test_hashes_utf8_bytes() {
        assert_eq!(derive_color("Ωmega"), "#57b72b");
    }

    #[test]
    fn test_deterministic_and_well_formed() {
        let re = Regex::new(r"^#[0-9a-f]{6}$").unwrap();
        for label in ["", " ", "a", "A", "node with spaces", "\u{0}\u{0}", "日本語", "name"] {
            let first = derive_color(label);
            let second = derive_color(label);
            assert_eq!(first, second, "colour for {:?} changed between calls", label);
            assert!(re.is_match(&first), "{:?} produced {:?}", label, first);
        }
    }
}
