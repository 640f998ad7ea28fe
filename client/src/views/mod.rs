// Text renderings of the two views

pub mod detail;
pub mod list;

/// Shortens a detail blurb to at most `max_chars` characters, on a char
/// boundary, with a trailing ellipsis when cut.
pub fn truncate_detail(detail: &str, max_chars: usize) -> String {
    if detail.chars().count() <= max_chars {
        return detail.to_string();
    }

    let cut: String = detail.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
