use serde::{Deserialize, Serialize};

/// How a character fared after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharMark {
    Unchanged,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkedChar {
    /// The normalized character
    pub ch: char,
    pub mark: CharMark,
}

/// Mark each aligned character of `normalized` against `original`.
///
/// A changed character is `Correct` when there is no reference, when the
/// reference is too short to cover it, or when it matches the reference at
/// that position; otherwise it is `Incorrect`. Output stops at the shorter
/// of `original` and `normalized`.
pub fn classify_changes(original: &str, normalized: &str, reference: Option<&str>) -> Vec<MarkedChar> {
    let reference: Option<Vec<char>> = reference.map(|r| r.chars().collect());
    original
        .chars()
        .zip(normalized.chars())
        .enumerate()
        .map(|(i, (orig, norm))| {
            let mark = if orig == norm {
                CharMark::Unchanged
            } else {
                match reference.as_ref().and_then(|r| r.get(i)) {
                    Some(&expected) if expected != norm => CharMark::Incorrect,
                    _ => CharMark::Correct,
                }
            };
            MarkedChar { ch: norm, mark }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(chars: &[MarkedChar]) -> Vec<CharMark> {
        chars.iter().map(|c| c.mark).collect()
    }

    #[test]
    fn test_without_reference() {
        let out = classify_changes("uia", "via", None);
        assert_eq!(out[0], MarkedChar { ch: 'v', mark: CharMark::Correct });
        assert_eq!(marks(&out)[1..], [CharMark::Unchanged, CharMark::Unchanged]);
    }

    #[test]
    fn test_against_reference() {
        use CharMark::*;
        let out = classify_changes("uua", "vua", Some("uva"));
        assert_eq!(marks(&out), vec![Incorrect, Unchanged, Unchanged]);

        let out = classify_changes("uiuus", "vivus", Some("vivus"));
        assert_eq!(marks(&out), vec![Correct, Unchanged, Correct, Unchanged, Unchanged]);
    }

    #[test]
    fn test_short_reference_counts_as_correct() {
        let out = classify_changes("nouus", "novus", Some("no"));
        assert_eq!(out[2].mark, CharMark::Correct);
    }

    #[test]
    fn test_zips_to_shorter() {
        assert_eq!(classify_changes("uiuus", "vi", None).len(), 2);
        assert!(classify_changes("", "via", None).is_empty());
    }
}
