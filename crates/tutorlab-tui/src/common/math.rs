//! Math-delimiter splitting for learner/tutor messages.
//!
//! The backend writes TeX-style delimiters into message text: `$$…$$` for
//! display math and `$…$` for inline math. We don't interpret the math, we
//! only split the text into segments so the renderer can style them.
//!
//! Matching rules:
//! - Display segments are matched first and may span newlines.
//! - Inline segments are matched within the remaining text and must open and
//!   close on the same line.
//! - Both are non-greedy (closed by the nearest delimiter).
//! - Unmatched delimiters stay literal text.

/// One piece of a message after delimiter splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathSegment {
    /// Plain text, rendered as-is.
    Text(String),
    /// `$…$` content, styled inline.
    Inline(String),
    /// `$$…$$` content, rendered on its own line.
    Display(String),
}

/// Splits message content into text, inline-math, and display-math segments.
pub fn split_math(content: &str) -> Vec<MathSegment> {
    let mut segments = Vec::new();

    let mut rest = content;
    while let Some(open) = rest.find("$$") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("$$") else {
            // No closing $$: everything from here on is plain text.
            break;
        };

        push_inline_split(&mut segments, &rest[..open]);
        segments.push(MathSegment::Display(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }
    push_inline_split(&mut segments, rest);

    segments
}

/// Splits a display-free run of text on single `$` pairs.
///
/// An opening `$` only pairs with a closing `$` on the same line; a lone `$`
/// (or one whose closer is past a newline) is treated as literal text and the
/// scan continues from the next `$`.
fn push_inline_split(segments: &mut Vec<MathSegment>, text: &str) {
    let mut start = 0;
    let mut search_from = 0;

    while let Some(rel_open) = text[search_from..].find('$') {
        let open = search_from + rel_open;
        let after_open = &text[open + 1..];

        let close_rel = after_open
            .find(['$', '\n'])
            .filter(|&i| after_open.as_bytes()[i] == b'$');

        match close_rel {
            Some(close) => {
                push_text(segments, &text[start..open]);
                segments.push(MathSegment::Inline(after_open[..close].to_string()));
                start = open + 1 + close + 1;
                search_from = start;
            }
            None => {
                // Unpaired on this line; keep it literal, scan past it.
                search_from = open + 1;
            }
        }
    }

    push_text(segments, &text[start..]);
}

fn push_text(segments: &mut Vec<MathSegment>, text: &str) {
    if !text.is_empty() {
        segments.push(MathSegment::Text(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MathSegment {
        MathSegment::Text(s.to_string())
    }
    fn inline(s: &str) -> MathSegment {
        MathSegment::Inline(s.to_string())
    }
    fn display(s: &str) -> MathSegment {
        MathSegment::Display(s.to_string())
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(split_math("no math here"), vec![text("no math here")]);
    }

    #[test]
    fn test_empty_content_yields_no_segments() {
        assert!(split_math("").is_empty());
    }

    #[test]
    fn test_inline_math() {
        assert_eq!(
            split_math("Solve for $x$ in the equation."),
            vec![text("Solve for "), inline("x"), text(" in the equation.")]
        );
    }

    #[test]
    fn test_display_math() {
        assert_eq!(
            split_math("The equation is $$2x + 5 = 13$$ as given."),
            vec![
                text("The equation is "),
                display("2x + 5 = 13"),
                text(" as given.")
            ]
        );
    }

    #[test]
    fn test_display_math_spans_newlines() {
        assert_eq!(
            split_math("Steps:$$2x = 8\nx = 4$$done"),
            vec![text("Steps:"), display("2x = 8\nx = 4"), text("done")]
        );
    }

    #[test]
    fn test_display_takes_precedence_over_inline() {
        // $$x$$ must not be parsed as two empty inline segments around x.
        assert_eq!(split_math("$$x$$"), vec![display("x")]);
    }

    #[test]
    fn test_mixed_display_and_inline() {
        assert_eq!(
            split_math("First $$a + b$$ then $c$ inline"),
            vec![
                text("First "),
                display("a + b"),
                text(" then "),
                inline("c"),
                text(" inline")
            ]
        );
    }

    #[test]
    fn test_unclosed_display_falls_through_to_inline_pass() {
        // With no closing $$, the inline pass sees the pair as an empty $…$.
        assert_eq!(
            split_math("half $$open and $x$ after"),
            vec![
                text("half "),
                inline(""),
                text("open and "),
                inline("x"),
                text(" after")
            ]
        );
    }

    #[test]
    fn test_lone_dollar_stays_literal() {
        assert_eq!(split_math("costs $5"), vec![text("costs $5")]);
    }

    #[test]
    fn test_inline_does_not_cross_newlines() {
        // Neither $ finds a same-line partner, so both stay literal.
        assert_eq!(split_math("a $x\ny$ b"), vec![text("a $x\ny$ b")]);
        // A pair on the second line still matches.
        assert_eq!(
            split_math("a $x\n$y$ b"),
            vec![text("a $x\n"), inline("y"), text(" b")]
        );
    }

    #[test]
    fn test_empty_display_segment() {
        assert_eq!(split_math("a$$$$b"), vec![text("a"), display(""), text("b")]);
    }

    #[test]
    fn test_adjacent_inline_segments() {
        // The middle $$ has no closing pair, so the display pass leaves it
        // for the inline pass, which reads it as close-then-open.
        assert_eq!(split_math("$a$$b$"), vec![inline("a"), inline("b")]);
    }
}
