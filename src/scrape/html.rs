//! Minimal HTML scanning helpers for the one page shape we scrape.
//!
//! This is not a general HTML parser: it lowercases for case-insensitive
//! matching, locates an element by class token, and walks `<div>` blocks
//! with explicit depth tracking because the scraped container nests them.

fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Whether the attribute text of one tag carries `class` containing `want`
/// as a whitespace-separated token. `attrs` must already be lowercased.
fn class_attr_has_token(attrs: &str, want: &str) -> bool {
    let mut from = 0;
    while let Some(rel) = attrs[from..].find("class") {
        let idx = from + rel;
        let boundary = attrs[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_ascii_whitespace());
        let rest = attrs[idx + "class".len()..].trim_start();
        if boundary && rest.starts_with('=') {
            let rest = rest[1..].trim_start();
            if let Some(quote @ ('"' | '\'')) = rest.chars().next() {
                if let Some(end) = rest[1..].find(quote) {
                    let value = &rest[1..1 + end];
                    return value.split_whitespace().any(|token| token == want);
                }
            }
            return false;
        }
        from = idx + "class".len();
    }
    false
}

/// Next `<tag` opening at or after `from`, checked against a tag-name
/// boundary so `<div` does not match `<divx`.
fn find_open(lower: &str, tag: &str, mut from: usize) -> Option<usize> {
    let pat = format!("<{tag}");
    loop {
        let rel = lower.get(from..)?.find(&pat)?;
        let start = from + rel;
        let after = start + pat.len();
        match lower.as_bytes().get(after) {
            Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => return Some(start),
            None => return None,
            _ => from = after,
        }
    }
}

/// Inner span of the element whose opening tag starts at `open_start`,
/// depth-aware for same-named nested tags. Returns (inner_start, inner_end).
fn block_at(lower: &str, tag: &str, open_start: usize) -> Option<(usize, usize)> {
    let open_end = lower[open_start..].find('>')? + open_start + 1;
    let close_pat = format!("</{tag}");
    let mut depth = 1usize;
    let mut cursor = open_end;
    loop {
        let next_open = find_open(lower, tag, cursor);
        let next_close = lower.get(cursor..)?.find(&close_pat).map(|rel| rel + cursor);
        match (next_open, next_close) {
            (_, None) => return None,
            (Some(open), Some(close)) if open < close => {
                depth += 1;
                cursor = lower[open..].find('>')? + open + 1;
            }
            (_, Some(close)) => {
                depth -= 1;
                if depth == 0 {
                    return Some((open_end, close));
                }
                cursor = lower[close..].find('>')? + close + 1;
            }
        }
    }
}

/// Inner HTML of the first element whose class attribute contains `class`
/// as a token, case-insensitively. None when no such element exists.
pub fn find_class_inner<'a>(html: &'a str, class: &str) -> Option<&'a str> {
    let lower = to_lower(html);
    let want = to_lower(class);
    let mut cursor = 0;
    loop {
        let rel = lower.get(cursor..)?.find('<')?;
        let lt = cursor + rel;
        let first = *lower.as_bytes().get(lt + 1)?;
        if !first.is_ascii_alphabetic() {
            cursor = lt + 1;
            continue;
        }
        let gt = lower[lt..].find('>')? + lt;
        let tag_text = &lower[lt + 1..gt];
        let name_end = tag_text
            .find(|c: char| c.is_ascii_whitespace())
            .unwrap_or(tag_text.len());
        if class_attr_has_token(&tag_text[name_end..], &want) {
            let tag = tag_text[..name_end].to_string();
            let (start, end) = block_at(&lower, &tag, lt)?;
            return Some(&html[start..end]);
        }
        cursor = gt + 1;
    }
}

/// Every `<div>` block inside `inner` in document order, nested blocks
/// included (a nested div shows up both in its parent's text and on its
/// own, matching how the original site was scraped).
pub fn div_blocks(inner: &str) -> Vec<&str> {
    let lower = to_lower(inner);
    let mut out = Vec::new();
    let mut cursor = 0;
    while let Some(open) = find_open(&lower, "div", cursor) {
        let Some((start, end)) = block_at(&lower, "div", open) else {
            break;
        };
        out.push(&inner[start..end]);
        // resume right after the opening tag so nested divs are visited
        cursor = start;
    }
    out
}

pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decode numeric character references and the handful of named entities
/// the scraped pages use. Other named entities pass through untouched;
/// the pages themselves are UTF-8 and rarely carry any.
pub fn normalize_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        // references are short; a distant or missing ';' means a bare '&'
        let semi = match rest[1..].find(';') {
            Some(pos) if pos <= 8 => pos + 1,
            _ => {
                out.push('&');
                rest = &rest[1..];
                continue;
            }
        };
        let decoded = match &rest[1..semi] {
            "nbsp" => Some(' '),
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            name => decode_numeric(name),
        };
        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_numeric(name: &str) -> Option<char> {
    let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse().ok()?
    } else {
        return None;
    };
    char::from_u32(code)
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Stripped, entity-decoded, whitespace-collapsed text of one block.
pub fn text_of(block: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(block)))
}
