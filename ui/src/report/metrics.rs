//! Text measurement for report layout.
//!
//! The PDF uses the built-in Helvetica face, so we approximate its advance
//! widths from the AFM tables (units per 1000 em) instead of loading a font
//! file. Vertical metrics follow the same ratios the screen layout uses.

/// Millimetres per typographic point.
pub const MM_PER_PT: f32 = 0.352_778;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Baseline-to-baseline distance in mm.
    pub line_h: f32,
    /// Ascender height above the baseline in mm.
    pub asc: f32,
    /// Descender depth below the baseline in mm (positive).
    pub desc: f32,
}

pub fn metrics(size_pt: f32) -> TextMetrics {
    let size_mm = size_pt * MM_PER_PT;
    let line_h = size_mm * 1.35;
    let asc = size_mm * 0.72;
    let desc = (line_h - asc).max(size_mm * 0.08);
    TextMetrics { line_h, asc, desc }
}

/// Advance width of one glyph in thousandths of an em.
fn advance(ch: char) -> u16 {
    match ch {
        ' ' | '!' | ',' | '.' | '/' | ':' | ';' | 'I' | '[' | ']' | 'f' | 't' => 278,
        '\'' | 'i' | 'j' | 'l' => 222,
        '|' => 260,
        '(' | ')' | '-' | '`' | 'r' => 333,
        '"' => 355,
        '*' => 389,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' => 500,
        'm' => 833,
        'w' => 722,
        'M' => 833,
        'W' => 944,
        '%' => 889,
        '@' => 1015,
        'A' | 'B' | 'E' | 'K' | 'P' | 'S' | 'V' | 'X' | 'Y' => 667,
        'C' | 'D' | 'H' | 'N' | 'R' | 'U' => 722,
        'G' | 'O' | 'Q' => 778,
        'F' | 'T' | 'Z' => 611,
        'L' | '_' => 556,
        '0'..='9' => 556,
        'a'..='z' => 556,
        _ => 556,
    }
}

/// Rendered width of `text` at `size_pt`, in mm.
pub fn text_width(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| advance(ch) as u32).sum();
    units as f32 / 1000.0 * size_pt * MM_PER_PT
}

/// Greedy word wrap to `max_width` mm. Words wider than a full line are split
/// at character boundaries. Always returns at least one (possibly empty) line.
pub fn wrap_text(text: &str, size_pt: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if text_width(&candidate, size_pt) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if text_width(word, size_pt) <= max_width {
            current = word.to_string();
        } else {
            let mut pieces = split_long_word(word, size_pt, max_width);
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_long_word(word: &str, size_pt: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for ch in word.chars() {
        piece.push(ch);
        if piece.chars().count() > 1 && text_width(&piece, size_pt) > max_width {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(ch);
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_increase_with_size() {
        let small = metrics(9.0);
        let large = metrics(20.0);
        assert!(large.line_h > small.line_h);
        assert!(large.asc > small.asc);
    }

    #[test]
    fn width_scales_linearly() {
        let w10 = text_width("Emotion Distribution", 10.0);
        let w20 = text_width("Emotion Distribution", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-3);
    }

    #[test]
    fn wrapped_lines_fit_width() {
        let text = "Maintain regular sleep and short outdoor walks; note recurring triggers \
                    in a journal and revisit them with someone you trust over the next week.";
        let lines = wrap_text(text, 10.0, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 10.0) <= 60.0, "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn unbroken_text_is_hard_split() {
        let blob = "x".repeat(400);
        let lines = wrap_text(&blob, 10.0, 50.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), blob);
        for line in &lines {
            assert!(text_width(line, 10.0) <= 50.0);
        }
    }

    #[test]
    fn empty_text_yields_single_empty_line() {
        assert_eq!(wrap_text("   ", 10.0, 50.0), vec![String::new()]);
    }
}
