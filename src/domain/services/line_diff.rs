/// Renders a positional line-by-line diff of two text bodies.
///
/// Lines are compared by index up to the longer file's length; a side with no
/// line at that index renders as `[deleted]` / `[added]`. This is not a
/// minimal-edit-script diff: a single inserted line shifts every subsequent
/// line into a changed block.
pub fn render_line_diff(text_a: &str, text_b: &str) -> String {
    let lines_a: Vec<&str> = text_a.lines().collect();
    let lines_b: Vec<&str> = text_b.lines().collect();
    let max_len = lines_a.len().max(lines_b.len());

    let mut blocks = Vec::new();
    for i in 0..max_len {
        let line_a = lines_a.get(i).copied();
        let line_b = lines_b.get(i).copied();
        if line_a == line_b {
            continue;
        }

        blocks.push(format!(
            "Line {}:\n- {}\n+ {}",
            i + 1,
            line_a.map(str::trim).unwrap_or("[deleted]"),
            line_b.map(str::trim).unwrap_or("[added]"),
        ));
    }

    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_yields_empty_diff() {
        assert_eq!(render_line_diff("a\nb\nc\n", "a\nb\nc\n"), "");
    }

    #[test]
    fn test_single_changed_line() {
        let diff = render_line_diff("hello\nworld\n", "hello\nthere\n");
        assert_eq!(diff, "Line 2:\n- world\n+ there");
    }

    #[test]
    fn test_trailing_lines_render_markers() {
        let diff = render_line_diff("a\nb\n", "a\n");
        assert_eq!(diff, "Line 2:\n- b\n+ [added]");

        let diff = render_line_diff("a\n", "a\nb\n");
        assert_eq!(diff, "Line 2:\n- [deleted]\n+ b");
    }

    #[test]
    fn test_insertion_shifts_following_lines() {
        // Positional comparison: inserting "x" at the top marks every line.
        let diff = render_line_diff("a\nb\n", "x\na\nb\n");
        assert_eq!(
            diff,
            "Line 1:\n- a\n+ x\nLine 2:\n- b\n+ a\nLine 3:\n- [deleted]\n+ b"
        );
    }

    #[test]
    fn test_lines_are_trimmed_in_output() {
        let diff = render_line_diff("  indented\n", "\tother\n");
        assert_eq!(diff, "Line 1:\n- indented\n+ other");
    }

    #[test]
    fn test_whitespace_only_difference_is_reported() {
        // Compared raw, rendered trimmed.
        let diff = render_line_diff("word \n", "word\n");
        assert_eq!(diff, "Line 1:\n- word\n+ word");
    }
}
