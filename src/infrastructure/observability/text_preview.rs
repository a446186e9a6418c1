const MAX_VISIBLE_CHARS: usize = 100;

/// Short, single-line rendering of document text for log fields.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let visible: String = trimmed
        .chars()
        .take(MAX_VISIBLE_CHARS)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if total > MAX_VISIBLE_CHARS {
        format!("{}... ({} chars total)", visible, total)
    } else {
        visible
    }
}
