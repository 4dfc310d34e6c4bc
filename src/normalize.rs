//! Turns the raw fragment sequence scraped from one restaurant page into a
//! flat list of display-ready lines.
//!
//! The index arithmetic below encodes the markup shape of the scraped site
//! and is deliberately kept exact, oddities included:
//!
//! - fragment 2 is the page's date/subtitle line;
//! - fragment 3 is dropped when non-empty (some pages carry a duplicate
//!   header there, others a blank separator that the empty-filter removes
//!   anyway; dropping a non-empty fragment 3 re-aligns the pairing);
//! - from fragment 2 onward, empty fragments are filtered out;
//! - the remainder pairs up two at a time starting at index 1 of the
//!   filtered list, each pair joined into one "category item" line, with a
//!   trailing unpaired fragment discarded.
//!
//! Output position 0 is the place name, position 1 the subtitle, and the
//! rest the merged lines. Storage treats position 0 as the category for the
//! whole menu and every following line as one item row.

/// Normalize one restaurant's fragments. Never panics: pages with too few
/// fragments produce a short (possibly item-less) menu.
pub fn normalize_menu(name: &str, fragments: &[String]) -> Vec<String> {
    let mut lines = vec![name.to_string()];

    let Some(subtitle) = fragments.get(2) else {
        return lines;
    };
    lines.push(subtitle.clone());

    // Work on the tail from fragment 2; the original sequence's fragment 3
    // sits at index 1 here.
    let mut rest: Vec<&str> = fragments[2..].iter().map(String::as_str).collect();
    if rest.get(1).is_some_and(|f| !f.is_empty()) {
        rest.remove(1);
    }
    let filtered: Vec<&str> = rest.into_iter().filter(|f| !f.is_empty()).collect();

    let mut i = 1;
    while i + 1 < filtered.len() {
        lines.push(format!("{} {}", filtered[i], filtered[i + 1]));
        i += 2;
    }

    lines
}
