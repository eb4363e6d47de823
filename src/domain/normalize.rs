//! Ingredient Identity Normalizer
//!
//! Canonicalizes an ingredient's display name into a comparison key so that
//! "Farinha de trigo" and "farinha de trigo" collide during aggregation.
//! Intentionally shallow: no stemming, no accent folding.

/// Leading articles stripped from ingredient names (closed set)
const ARTICLES: [&str; 6] = ["o", "a", "os", "as", "um", "uma"];

/// Normalize an ingredient name into its comparison key.
///
/// Lowercases, trims, collapses internal whitespace runs to a single space
/// and strips a single leading article token if present. Always returns a
/// string; an empty result means the input was empty/whitespace, which the
/// caller must reject before aggregating.
pub fn normalize(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut words = lowered.split_whitespace();

    let first = match words.next() {
        Some(w) => w,
        None => return String::new(),
    };

    let mut parts: Vec<&str> = Vec::new();
    if !ARTICLES.contains(&first) {
        parts.push(first);
    }
    parts.extend(words);

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_trim() {
        assert_eq!(normalize("  Farinha de Trigo "), "farinha de trigo");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("farinha   de \t trigo"), "farinha de trigo");
    }

    #[test]
    fn test_strips_single_leading_article() {
        assert_eq!(normalize("o leite"), "leite");
        assert_eq!(normalize("A Farinha"), "farinha");
        assert_eq!(normalize("os ovos"), "ovos");
        assert_eq!(normalize("uma cebola"), "cebola");
    }

    #[test]
    fn test_article_only_stripped_at_start() {
        assert_eq!(normalize("creme de leite a gosto"), "creme de leite a gosto");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for s in ["  O Leite  ", "farinha   de trigo", "", "um ovo", "xícara"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
