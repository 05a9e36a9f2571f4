//! Fixed-width text helpers for receipt layout.
//!
//! Widths count characters, not bytes, so names with non-ASCII letters line
//! up the same as ASCII ones.

/// Cut `text` to at most `len` characters.
pub fn cut_text(text: &str, len: usize) -> String {
    text.chars().take(len).collect()
}

/// Horizontal rule of `width` repetitions of `ch`.
pub fn hr(width: usize, ch: char) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Left text and right text on one line of `width` columns.
///
/// At least one space separates the two. When they do not fit, the left text
/// is cut (and the right text too if it alone is wider than the line) so the
/// result never exceeds `width`.
pub fn line_lr(left: &str, right: &str, width: usize) -> String {
    let right = cut_text(right, width.saturating_sub(1));
    let right_len = right.chars().count();
    let left = cut_text(left, width.saturating_sub(right_len + 1));
    let left_len = left.chars().count();
    let gap = width.saturating_sub(left_len + right_len).max(1);

    let mut line = String::with_capacity(width);
    line.push_str(&left);
    line.extend(std::iter::repeat(' ').take(gap));
    line.push_str(&right);
    line
}

/// Greedy word wrap at `width` columns. Words longer than a line are cut.
///
/// Always returns at least one (possibly empty) line.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if candidate_len <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = cut_text(word, width);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Escape text for interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_text_counts_chars() {
        assert_eq!(cut_text("abcdef", 3), "abc");
        assert_eq!(cut_text("ab", 3), "ab");
        assert_eq!(cut_text("Çağrı", 2), "Ça");
    }

    #[test]
    fn test_line_lr_pads_to_width() {
        let line = line_lr("NETTO  :", "50.000", 32);
        assert_eq!(line.chars().count(), 32);
        assert!(line.starts_with("NETTO  :"));
        assert!(line.ends_with("50.000"));
    }

    #[test]
    fn test_line_lr_never_exceeds_width() {
        let line = line_lr(&"X".repeat(40), "1.000.000", 32);
        assert_eq!(line.chars().count(), 32);
        assert!(line.ends_with(" 1.000.000"));

        let only_right = line_lr("", &"9".repeat(50), 32);
        assert!(only_right.chars().count() <= 32);
    }

    #[test]
    fn test_line_lr_left_only_keeps_one_space() {
        let left = format!("NOMOR   : {}", "A".repeat(21));
        let line = line_lr(&left, "", 32);
        assert_eq!(line.chars().count(), 32);
    }

    #[test]
    fn test_word_wrap() {
        assert_eq!(word_wrap("Infak - Terikat", 32), vec!["Infak - Terikat"]);
        assert_eq!(
            word_wrap("Campaign - Pembangunan Sumur Wakaf Nusa Tenggara Barat", 32),
            vec!["Campaign - Pembangunan Sumur", "Wakaf Nusa Tenggara Barat"]
        );
        assert_eq!(word_wrap("", 32), vec![""]);
        assert_eq!(word_wrap(&"x".repeat(40), 32), vec!["x".repeat(32)]);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_hr() {
        assert_eq!(hr(4, '-'), "----");
    }
}
