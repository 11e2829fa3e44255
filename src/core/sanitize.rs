// src/core/sanitize.rs

/// Decode the handful of entities the quotes site emits, plus numeric ones.
/// Unknown named entities are kept verbatim.
pub fn normalize_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let Some(semi) = tail.find(';').filter(|&i| i <= 10) else {
            out.push('&');
            rest = &tail[1..];
            continue;
        };
        let name = &tail[1..semi];
        let decoded = match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            _ => decode_numeric(name),
        };
        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_numeric(name: &str) -> Option<char> {
    let num = name.strip_prefix('#')?;
    let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => num.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop one pair of surrounding typographic or straight double quotes.
pub fn strip_outer_quotes(s: &str) -> String {
    let t = s.trim();
    let inner = t
        .strip_prefix('\u{201C}')
        .and_then(|x| x.strip_suffix('\u{201D}'))
        .or_else(|| t.strip_prefix('"').and_then(|x| x.strip_suffix('"')));
    inner.unwrap_or(t).trim().to_string()
}

/// Tag names are compared case-insensitively: trim and lowercase.
pub fn normalize_tag(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}
