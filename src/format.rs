//! Display helpers for link data.

/// Shorten an href for display, keeping `left_max` leading and `right_max`
/// trailing characters around an ellipsis.
///
/// Returns `None` for an empty href. Lengths count `char`s.
///
/// ```
/// use slate_html::format::shorten_href;
///
/// assert_eq!(shorten_href("http://1234567890", 4, 4).as_deref(), Some("http...7890"));
/// assert_eq!(shorten_href("http://x", 4, 4).as_deref(), Some("http://x"));
/// ```
pub fn shorten_href(href: &str, left_max: usize, right_max: usize) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    let len = href.chars().count();
    if len > left_max + right_max {
        let left: String = href.chars().take(left_max).collect();
        let right: String = href.chars().skip(len - right_max).collect();
        Some(format!("{left}...{right}"))
    } else {
        Some(href.to_string())
    }
}

/// [`shorten_href`] with the 20/20 split the link toolbar uses.
pub fn shorten_href_default(href: &str) -> Option<String> {
    shorten_href(href, 20, 20)
}
