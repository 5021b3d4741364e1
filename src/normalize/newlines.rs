//! Pass 1: newline stripping (string level, before parsing).

use crate::diagnostics::{Diagnostics, Warning};

/// Remove every `\n` except those inside `<pre>…</pre>`.
///
/// Tags are found by plain text search for `<pre` and `</pre`, tracking
/// nesting depth; newlines between an outermost opening and its matching
/// closing are kept. If the tags do not pair up the input is returned as is
/// and [`Warning::UnbalancedPre`] is raised.
///
/// `<p>\n<pre>\n<pre>\n</pre></pre>` becomes `<p><pre>\n<pre>\n</pre></pre>`.
pub fn strip_newlines(html: &str, diag: &mut Diagnostics) -> String {
    let mut keep: Vec<(usize, usize)> = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    let mut pos = 0;

    while pos < html.len() {
        let next_open = find_from(html, "<pre", pos);
        if open.is_empty() {
            match next_open {
                Some(start) => {
                    open.push(start);
                    pos = start + 1;
                }
                None => break,
            }
            continue;
        }

        match (next_open, find_from(html, "</pre", pos)) {
            (Some(start), Some(end)) if start < end => {
                open.push(start);
                pos = start + 1;
            }
            (_, Some(end)) => {
                if let Some(start) = open.pop()
                    && open.is_empty()
                {
                    keep.push((start, end));
                }
                pos = end + 1;
            }
            (Some(start), None) => {
                open.push(start);
                pos = start + 1;
            }
            (None, None) => break,
        }
    }

    if !open.is_empty() {
        diag.warn(Warning::UnbalancedPre);
        return html.to_string();
    }

    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;
    for (start, end) in keep {
        out.extend(html[cursor..start].chars().filter(|&c| c != '\n'));
        out.push_str(&html[start..end]);
        cursor = end;
    }
    out.extend(html[cursor..].chars().filter(|&c| c != '\n'));
    out
}

fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack[from..].find(needle).map(|i| i + from)
}
