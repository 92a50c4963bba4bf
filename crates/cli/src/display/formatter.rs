use runlet_core::{ConfidenceLevel, DetectionResult, HighlightSpan};

/// Renders ranked detection results as an aligned table
pub fn format_detection_table(results: &[(DetectionResult, ConfidenceLevel)]) -> String {
    let mut out = String::new();
    out.push_str("LANGUAGE      CONFIDENCE  LEVEL\n");
    for (result, level) in results {
        let level = match level {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        };
        out.push_str(&format!(
            "{:<12}  {:>10.2}  {}\n",
            result.language.as_str(),
            result.confidence,
            level
        ));
    }
    out
}

/// Renders highlight spans one per line, with the covered text
pub fn format_spans(code: &str, spans: &[HighlightSpan]) -> String {
    let mut out = String::new();
    if spans.is_empty() {
        out.push_str("No spans\n");
        return out;
    }
    for span in spans {
        out.push_str(&format!(
            "{:>5}..{:<5} {:<8} {}\n",
            span.start,
            span.end(),
            format!("{:?}", span.token_type).to_lowercase(),
            preview(span.text(code))
        ));
    }
    out
}

/// First line of the span text, truncated for display
fn preview(text: &str) -> String {
    const MAX: usize = 40;
    let first_line = text.lines().next().unwrap_or("");
    let mut preview: String = first_line.chars().take(MAX).collect();
    if first_line.chars().count() > MAX || text.lines().count() > 1 {
        preview.push('…');
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;
    use runlet_core::{Language, TokenType};

    #[test]
    fn test_detection_table_lists_every_row() {
        let rows = vec![
            (
                DetectionResult::new(Language::Python, 0.92),
                ConfidenceLevel::High,
            ),
            (
                DetectionResult::new(Language::Go, 0.0),
                ConfidenceLevel::Low,
            ),
        ];
        let table = format_detection_table(&rows);
        assert!(table.contains("python"));
        assert!(table.contains("0.92"));
        assert!(table.contains("high"));
        assert!(table.contains("go"));
    }

    #[test]
    fn test_span_listing_includes_offsets_and_text() {
        let code = "def x():";
        let spans = vec![HighlightSpan::new(0, 3, TokenType::Keyword)];
        let listing = format_spans(code, &spans);
        assert!(listing.contains("0..3"));
        assert!(listing.contains("keyword"));
        assert!(listing.contains("def"));
    }

    #[test]
    fn test_multiline_span_preview_is_truncated() {
        let code = "/* one\ntwo */";
        let spans = vec![HighlightSpan::new(0, code.len(), TokenType::Comment)];
        let listing = format_spans(code, &spans);
        assert!(listing.contains("/* one…"));
        assert!(!listing.contains("two"));
    }
}
