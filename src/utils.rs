use unicode_width::UnicodeWidthChar;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    // Cut on a char boundary; a byte slice would panic inside a
    // multibyte character.
    let budget = max_len.saturating_sub(3);
    let cut = s
        .char_indices()
        .map(|(idx, _)| idx)
        .take_while(|idx| *idx <= budget)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..cut])
}

/// Picker/prompt label for a category value. The store reports empty
/// categories as-is; only the presentation names them.
pub fn category_label(category: &str) -> &str {
    if category.is_empty() {
        "(uncategorized)"
    } else {
        category
    }
}

/// Display column of a byte-indexed cursor within a single-line input,
/// accounting for wide characters. Used to place the terminal cursor in
/// the add-card dialog fields.
pub fn cursor_column(text: &str, cursor_index: usize) -> usize {
    text.char_indices()
        .take_while(|(idx, _)| *idx < cursor_index)
        .map(|(_, ch)| ch.width().unwrap_or(1))
        .sum()
}
