//! Fixed-width segmentation of token text into card display lines.
//!
//! Widths are counted in characters (Unicode scalar values), so a chunk
//! boundary never lands inside a multi-byte UTF-8 sequence.

/// Maximum characters on one display line of the card.
pub const LINE_WIDTH: usize = 45;

/// Placeholder emitted for an intentionally blank line.
///
/// A no-break space keeps the row visible when the card is drawn, whereas an
/// empty text run would collapse.
pub const BLANK_LINE_MARKER: char = '\u{00A0}';

/// Split `text` into display lines of at most [`LINE_WIDTH`] characters.
///
/// Each `\n`-separated line is hard-wrapped left to right with no regard for
/// word boundaries. An empty line becomes one [`BLANK_LINE_MARKER`] unless it
/// is the last line of the input, in which case it is dropped.
pub fn segment(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len().saturating_sub(1);
    let mut segments = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if line.is_empty() {
            if idx != last {
                segments.push(BLANK_LINE_MARKER.to_string());
            }
            continue;
        }
        segments.extend(chunk_by_chars(line, LINE_WIDTH));
    }

    segments.retain(|segment| !segment.is_empty());
    segments
}

/// Hard-wrap one line into consecutive chunks of `width` characters.
fn chunk_by_chars(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Undo [`segment`] for display: markers become empty lines again.
///
/// Chunks that came from one wrapped source line are not re-merged; this is
/// the row-by-row view the card shows.
pub fn unmark(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .map(|line| {
            if is_blank_marker(line) {
                ""
            } else {
                line.as_str()
            }
        })
        .collect()
}

/// True when `line` is exactly one blank-line marker.
pub fn is_blank_marker(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some(BLANK_LINE_MARKER) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rebuild the original input from segments produced for `input`.
    ///
    /// Wrapped chunks are glued back onto their source line by walking the
    /// input's own line lengths.
    fn reconstruct(input: &str, segments: &[String]) -> String {
        let mut out = Vec::new();
        let mut iter = segments.iter();
        let lines: Vec<&str> = input.split('\n').collect();
        for (idx, line) in lines.iter().enumerate() {
            if line.is_empty() {
                if idx != lines.len() - 1 {
                    let marker = iter.next().expect("marker for blank line");
                    assert!(is_blank_marker(marker));
                }
                out.push(String::new());
                continue;
            }
            let mut rebuilt = String::new();
            while rebuilt.chars().count() < line.chars().count() {
                rebuilt.push_str(iter.next().expect("chunk for line"));
            }
            out.push(rebuilt);
        }
        assert!(iter.next().is_none(), "unconsumed segments");
        out.join("\n")
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn short_line_is_a_single_chunk() {
        assert_eq!(segment("hello"), vec!["hello".to_string()]);
    }

    #[test]
    fn exactly_line_width_stays_on_one_line() {
        let out = segment(&"A".repeat(45));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].chars().count(), 45);
    }

    #[test]
    fn one_past_line_width_wraps() {
        let out = segment(&"A".repeat(46));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].chars().count(), 45);
        assert_eq!(out[1], "A");
    }

    #[test]
    fn wraps_without_word_boundaries() {
        let input = format!("{} tail", "x".repeat(43));
        let out = segment(&input);
        assert_eq!(out[0], format!("{} t", "x".repeat(43)));
        assert_eq!(out[1], "ail");
    }

    #[test]
    fn interior_blank_line_becomes_marker() {
        let out = segment("a\n\nb");
        assert_eq!(
            out,
            vec!["a".to_string(), BLANK_LINE_MARKER.to_string(), "b".to_string()]
        );
    }

    #[test]
    fn trailing_blank_line_is_dropped() {
        assert_eq!(segment("a\n"), vec!["a".to_string()]);
        let out = segment("a\n\n");
        assert_eq!(out, vec!["a".to_string(), BLANK_LINE_MARKER.to_string()]);
    }

    #[test]
    fn leading_newline_is_a_marker() {
        assert_eq!(
            segment("\nx"),
            vec![BLANK_LINE_MARKER.to_string(), "x".to_string()]
        );
        assert_eq!(segment("\n"), vec![BLANK_LINE_MARKER.to_string()]);
    }

    #[test]
    fn multibyte_text_wraps_on_char_boundaries() {
        let input = "é".repeat(50);
        let out = segment(&input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].chars().count(), 45);
        assert_eq!(out[1], "é".repeat(5));
    }

    #[test]
    fn segments_reconstruct_the_input() {
        let input = "Tokenized Rare Item Certificates\n\
                     --------------------------------\n\
                     \n\
                     Certificate ID: 2356-RT87 / Owner: John Doe / Item: Legendary Sword\n\
                     end\n";
        let out = segment(input);
        assert!(out.iter().all(|line| line.chars().count() <= LINE_WIDTH));
        assert_eq!(reconstruct(input, &out), input);
    }

    #[test]
    fn unmark_restores_blank_rows() {
        let out = segment("a\n\nb");
        assert_eq!(unmark(&out), vec!["a", "", "b"]);
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn segment_preserves_characters_and_width(
                lines in proptest::collection::vec(
                    proptest::string::string_regex("[ -~é]{0,120}").expect("regex"),
                    0..12
                )
            ) {
                let input = lines.join("\n");
                let out = segment(&input);
                prop_assert!(out.iter().all(|line| line.chars().count() <= LINE_WIDTH));
                prop_assert!(out.iter().all(|line| !line.is_empty()));
                prop_assert_eq!(reconstruct(&input, &out), input);
            }
        }
    }
}
