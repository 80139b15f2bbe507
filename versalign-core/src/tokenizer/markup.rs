//! Markup segmentation
//!
//! Splits marked-up verse text into plain text runs, opaque notes and other
//! markers. Only the segment schema matters to the rest of the crate; the
//! grammar below is the small subset of USFM that appears inside a verse.

use crate::config::TokenizerConfig;

/// A raw segment of marked-up text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text to be split into words and punctuation
    Text(String),
    /// A note whose body is kept verbatim
    Footnote {
        /// Opening marker name, e.g. `f`
        tag: String,
        /// Closing marker name, e.g. `f*`
        end_tag: String,
        /// Body between the markers
        content: String,
    },
    /// Any other marker, kept verbatim and never split into words
    Marker(String),
}

/// Turns marked-up text into ordered segments
pub trait MarkupSegmenter: Send + Sync {
    /// Segment `text` in document order
    fn segment(&self, text: &str) -> Vec<Segment>;
}

/// Segmenter for backslash markers (`\f ... \f*`, `\p`, ...)
#[derive(Debug, Clone)]
pub struct UsfmSegmenter {
    note_markers: Vec<String>,
}

impl UsfmSegmenter {
    /// Create a segmenter recognising the configured note markers
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            note_markers: config.note_markers.clone(),
        }
    }

    fn is_note(&self, name: &str) -> bool {
        self.note_markers.iter().any(|marker| marker == name)
    }
}

impl Default for UsfmSegmenter {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}

impl MarkupSegmenter for UsfmSegmenter {
    fn segment(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut pending = String::new();
        let mut rest = text;

        while let Some(pos) = rest.find('\\') {
            pending.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let name_len = marker_name_len(after);
            if name_len == 0 {
                // a lone backslash is plain text
                pending.push('\\');
                rest = after;
                continue;
            }

            let name = &after[..name_len];
            let body = skip_one_space(&after[name_len..]);

            if !pending.is_empty() {
                segments.push(Segment::Text(std::mem::take(&mut pending)));
            }

            if self.is_note(name) {
                let end_tag = format!("{name}*");
                let closing = format!("\\{end_tag}");
                let (content, remainder) = match body.find(&closing) {
                    Some(end) => (&body[..end], &body[end + closing.len()..]),
                    None => (body, ""),
                };
                segments.push(Segment::Footnote {
                    tag: name.to_string(),
                    end_tag,
                    content: content.trim().to_string(),
                });
                rest = remainder;
            } else {
                let consumed = after.len() - body.len();
                segments.push(Segment::Marker(format!("\\{}", &after[..consumed])));
                rest = body;
            }
        }

        pending.push_str(rest);
        if !pending.is_empty() {
            segments.push(Segment::Text(pending));
        }
        segments
    }
}

/// Length of the marker name at the start of `s`: alphanumerics, `-`, `+`,
/// then an optional closing `*`
fn marker_name_len(s: &str) -> usize {
    let mut len = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '+'))
        .map_or(s.len(), |(i, _)| i);
    if len > 0 && s[len..].starts_with('*') {
        len += 1;
    }
    len
}

fn skip_one_space(s: &str) -> &str {
    match s.chars().next() {
        Some(c) if c.is_whitespace() => &s[c.len_utf8()..],
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_one_segment() {
        let segments = UsfmSegmenter::default().segment("son of David");
        assert_eq!(segments, vec![Segment::Text("son of David".to_string())]);
    }

    #[test]
    fn test_footnote_body_is_opaque() {
        let segments =
            UsfmSegmenter::default().segment("of Abraham. \\f Footnote body here.\\f*");
        assert_eq!(
            segments,
            vec![
                Segment::Text("of Abraham. ".to_string()),
                Segment::Footnote {
                    tag: "f".to_string(),
                    end_tag: "f*".to_string(),
                    content: "Footnote body here.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_text_after_footnote() {
        let segments = UsfmSegmenter::default().segment("a \\f + \\ft note\\f* b");
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[1],
            Segment::Footnote {
                tag: "f".to_string(),
                end_tag: "f*".to_string(),
                content: "+ \\ft note".to_string(),
            }
        );
        assert_eq!(segments[2], Segment::Text(" b".to_string()));
    }

    #[test]
    fn test_unterminated_note_runs_to_end() {
        let segments = UsfmSegmenter::default().segment("a \\x cross ref");
        assert_eq!(
            segments[1],
            Segment::Footnote {
                tag: "x".to_string(),
                end_tag: "x*".to_string(),
                content: "cross ref".to_string(),
            }
        );
    }

    #[test]
    fn test_other_markers_kept_verbatim() {
        let segments = UsfmSegmenter::default().segment("first \\p second");
        assert_eq!(
            segments,
            vec![
                Segment::Text("first ".to_string()),
                Segment::Marker("\\p ".to_string()),
                Segment::Text("second".to_string()),
            ]
        );
    }

    #[test]
    fn test_lone_backslash_is_text() {
        let segments = UsfmSegmenter::default().segment("a \\ b");
        assert_eq!(segments, vec![Segment::Text("a \\ b".to_string())]);
    }

    #[test]
    fn test_unconfigured_note_marker_is_plain_marker() {
        let config = TokenizerConfig {
            note_markers: vec!["x".to_string()],
            ..TokenizerConfig::default()
        };
        let segments = UsfmSegmenter::new(&config).segment("a \\f*");
        assert_eq!(segments[1], Segment::Marker("\\f*".to_string()));
    }
}
