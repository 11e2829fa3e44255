// src/core/html.rs
//
// Case-insensitive slicing helpers for the fixed quotes markup.
// ASCII-only lowering keeps byte offsets valid between `s` and its lowered copy.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Inner text between the end of the tag opened by `open_pat` and the next `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let o = lc.find(&to_lower(open_pat))?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&to_lower(close_pat))?;
    Some(&s[after..after + cr])
}

/// Next `<open …>…close` block at or after `from`, as byte offsets into `s`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let start = lc.get(from..)?.find(&to_lower(o))? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&to_lower(c))?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Split `s` into the segments that each begin at an occurrence of `open`.
/// Each segment runs up to the next occurrence (or the end). Nested markup
/// inside a segment is left alone, which a close-tag search would trip over.
pub fn segments_ci<'a>(s: &'a str, open: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let pat = to_lower(open);
    let starts: Vec<usize> = lc.match_indices(&pat).map(|(i, _)| i).collect();

    starts
        .iter()
        .enumerate()
        .map(|(k, &a)| {
            let b = starts.get(k + 1).copied().unwrap_or(s.len());
            &s[a..b]
        })
        .collect()
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of `attr="…"` in the first tag of `s`, if present.
pub fn attr_value<'a>(s: &'a str, attr: &str) -> Option<&'a str> {
    let tag_end = s.find('>').unwrap_or(s.len());
    let tag = &s[..tag_end];
    let needle = join!(attr, "=\"");
    let at = to_lower(tag).find(&to_lower(&needle))? + needle.len();
    let len = tag[at..].find('"')?;
    Some(&tag[at..at + len])
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

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
    super::sanitize::normalize_ws(&out)
}

/// Tags stripped, entities decoded, whitespace collapsed.
pub fn visible_text(fragment: &str) -> String {
    use super::sanitize::{normalize_entities, normalize_ws};
    normalize_ws(&normalize_entities(&strip_tags(fragment)))
}
