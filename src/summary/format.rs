//! Rendering of a ranked selection into the newsletter strings.
//!
//! Two renderers exist and deliberately do not share the "others" phrasing:
//! the plain renderer says "and {n} others reporting", the markup renderer
//! says "and {n}". The divergence is inherited behavior that downstream
//! consumers depend on; do not unify without a product decision.

use crate::models::{Bucket, RankedSelection};

/// Plain-text rendering: bare comma-joined symbols, no markup wrapping.
pub fn plain(selection: &RankedSelection, bucket: Bucket) -> String {
    if selection.symbols.is_empty() {
        return bucket.empty_sentence().to_string();
    }

    let mut out = selection.symbols.join(", ");
    if let Some(n) = selection.others {
        out.push_str(&format!(", and {} others reporting", n));
    }
    out
}

/// Markup rendering: heading-tagged line for direct embedding in a larger
/// document. Embedded newlines/tabs are stripped and the result trimmed.
pub fn markup(selection: &RankedSelection, bucket: Bucket) -> String {
    if selection.symbols.is_empty() {
        return bucket.empty_sentence().to_string();
    }

    let mut body = selection.symbols.join(", ");
    if let Some(n) = selection.others {
        body.push_str(&format!(", and {}", n));
    }

    let line = format!("<h6>{}: {}</h6>", bucket.heading(), body);
    line.trim().replace(['\n', '\t'], "")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(symbols: &[&str], others: Option<usize>) -> RankedSelection {
        RankedSelection {
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            others,
        }
    }

    #[test]
    fn test_empty_sentences() {
        assert_eq!(
            plain(&selection(&[], None), Bucket::Am),
            "There are no notable earnings before the bell."
        );
        assert_eq!(
            plain(&selection(&[], None), Bucket::Pm),
            "There are no notable earnings after the bell."
        );
        // markup mode uses the same untagged sentences
        assert_eq!(
            markup(&selection(&[], None), Bucket::Am),
            "There are no notable earnings before the bell."
        );
        assert_eq!(
            markup(&selection(&[], None), Bucket::Pm),
            "There are no notable earnings after the bell."
        );
    }

    #[test]
    fn test_plain_joins_without_trailing_separator() {
        assert_eq!(plain(&selection(&["AAPL", "MSFT"], None), Bucket::Am), "AAPL, MSFT");
        assert_eq!(plain(&selection(&["AAPL"], None), Bucket::Pm), "AAPL");
    }

    #[test]
    fn test_plain_appends_others_reporting() {
        assert_eq!(
            plain(&selection(&["AAPL", "MSFT", "GOOG"], Some(3)), Bucket::Am),
            "AAPL, MSFT, GOOG, and 3 others reporting"
        );
    }

    #[test]
    fn test_markup_wraps_single_symbol() {
        assert_eq!(
            markup(&selection(&["AAPL"], None), Bucket::Pm),
            "<h6>After the Bell: AAPL</h6>"
        );
    }

    #[test]
    fn test_markup_headings_per_bucket() {
        assert_eq!(
            markup(&selection(&["AAPL", "MSFT"], None), Bucket::Am),
            "<h6>Before the Bell: AAPL, MSFT</h6>"
        );
        assert_eq!(
            markup(&selection(&["AAPL", "MSFT"], None), Bucket::Pm),
            "<h6>After the Bell: AAPL, MSFT</h6>"
        );
    }

    #[test]
    fn test_markup_others_omits_the_word_others() {
        // Inherited quirk: markup mode appends just "and {n}".
        assert_eq!(
            markup(&selection(&["AAPL", "MSFT"], Some(4)), Bucket::Am),
            "<h6>Before the Bell: AAPL, MSFT, and 4</h6>"
        );
    }

    #[test]
    fn test_markup_strips_embedded_whitespace() {
        let sel = selection(&["AA\nPL", "MS\tFT"], None);
        let out = markup(&sel, Bucket::Pm);
        assert!(!out.contains('\n'));
        assert!(!out.contains('\t'));
        assert_eq!(out, "<h6>After the Bell: AAPL, MSFT</h6>");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let sel = selection(&["AAPL", "MSFT", "GOOG"], Some(2));
        assert_eq!(plain(&sel, Bucket::Am), plain(&sel, Bucket::Am));
        assert_eq!(markup(&sel, Bucket::Pm), markup(&sel, Bucket::Pm));
    }
}
