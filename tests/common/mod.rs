//! Helpers for reading values back out of rendered pages.

#![allow(dead_code)]

/// Text between the first `start` marker and the next `end` after it.
pub fn text_after<'a>(html: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = html.find(start)? + start.len();
    let len = html[from..].find(end)?;
    Some(&html[from..from + len])
}

/// Value shown in the statistics row labeled `label`.
pub fn stat_value<'a>(html: &'a str, label: &str) -> Option<&'a str> {
    let label_at = html.find(&format!(">{label}</span>"))?;
    text_after(&html[label_at..], "<span class=\"text-lg font-bold\">", "</span>")
}

/// Title of the message panel, if the page shows one.
pub fn panel_title(html: &str) -> Option<&str> {
    text_after(html, "<p data-role=\"title\">", "</p>")
}

/// Byte offset of `needle`, panicking with the needle when it is missing.
pub fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?}"))
}
