//! Markup hygiene for widget output.
//!
//! # Design
//! - Sanitization is the widget's only defensive measure: titles are
//!   tag-stripped at save time, descriptions are filtered to a safe HTML
//!   subset at render time.
//! - The filter keeps the text content of disallowed tags; only the tags
//!   themselves are dropped.

/// Elements the description filter keeps, with the attributes each may
/// carry. Everything else is stripped.
const ALLOWED_ELEMENTS: &[(&str, &[&str])] = &[
    ("a", &["href", "title", "rel"]),
    ("abbr", &["title"]),
    ("b", &[]),
    ("blockquote", &["cite"]),
    ("br", &[]),
    ("cite", &[]),
    ("code", &[]),
    ("del", &["datetime"]),
    ("em", &[]),
    ("h1", &[]),
    ("h2", &[]),
    ("h3", &[]),
    ("h4", &[]),
    ("h5", &[]),
    ("h6", &[]),
    ("i", &[]),
    ("ins", &["datetime"]),
    ("li", &[]),
    ("ol", &[]),
    ("p", &[]),
    ("pre", &[]),
    ("q", &["cite"]),
    ("s", &[]),
    ("span", &[]),
    ("strike", &[]),
    ("strong", &[]),
    ("u", &[]),
    ("ul", &[]),
];

/// Chunks already starting with one of these are not wrapped by [`autop`].
const BLOCK_ELEMENTS: &[&str] = &[
    "blockquote",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "ol",
    "p",
    "pre",
    "table",
    "ul",
];

/// Escape a value for use in HTML text or attribute position.
#[must_use]
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Remove every tag, keeping the text around them.
///
/// An unterminated `<` swallows the remainder of the input; titles pass
/// through this once at save time.
#[must_use]
pub fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('>') {
            Some(close) => rest = &tail[close + 1..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Filter markup down to the allowlisted safe subset.
///
/// Disallowed tags are dropped while their inner text is kept, HTML
/// comments are removed wholesale, attribute values are re-escaped, and a
/// stray `<` that opens no tag is escaped.
#[must_use]
pub fn filter_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        if let Some(comment) = tail.strip_prefix("<!--") {
            rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
            continue;
        }
        let Some(close) = tail.find('>') else {
            out.push_str("&lt;");
            rest = &tail[1..];
            continue;
        };
        if let Some(tag) = rebuild_tag(&tail[1..close]) {
            out.push_str(&tag);
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Paragraph autoformat applied to descriptions before filtering.
///
/// Normalizes line endings, wraps blank-line-separated chunks in `<p>`
/// unless they already start with a block-level tag, and turns remaining
/// single newlines into `<br />`.
#[must_use]
pub fn autop(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(normalized.len() + 16);
    for chunk in normalized.split("\n\n") {
        let trimmed = chunk.trim();
        if trimmed.is_empty() {
            continue;
        }
        if starts_with_block_element(trimmed) {
            out.push_str(trimmed);
        } else {
            out.push_str("<p>");
            out.push_str(&trimmed.replace('\n', "<br />\n"));
            out.push_str("</p>");
        }
        out.push('\n');
    }
    out
}

fn starts_with_block_element(chunk: &str) -> bool {
    let Some(body) = chunk.strip_prefix('<') else {
        return false;
    };
    let end = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    BLOCK_ELEMENTS.contains(&body[..end].to_ascii_lowercase().as_str())
}

fn allowed_attributes(element: &str) -> Option<&'static [&'static str]> {
    ALLOWED_ELEMENTS
        .iter()
        .find(|(name, _)| *name == element)
        .map(|(_, attrs)| *attrs)
}

/// Rebuild one tag body (the text between `<` and `>`) in normalized form,
/// or drop it entirely when the element is not allowed.
fn rebuild_tag(body: &str) -> Option<String> {
    let (closing, body) = body
        .strip_prefix('/')
        .map_or((false, body), |after| (true, after));
    let body = body.trim();
    let (self_closing, body) = body
        .strip_suffix('/')
        .map_or((false, body), |before| (true, before.trim_end()));
    let end = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    if end == 0 {
        return None;
    }
    let element = body[..end].to_ascii_lowercase();
    let allowed = allowed_attributes(&element)?;
    if closing {
        return Some(format!("</{element}>"));
    }
    let mut tag = format!("<{element}");
    for (name, value) in parse_attributes(&body[end..]) {
        let name = name.to_ascii_lowercase();
        if !allowed.contains(&name.as_str()) {
            continue;
        }
        match value {
            Some(value) => {
                tag.push(' ');
                tag.push_str(&name);
                tag.push_str("=\"");
                tag.push_str(&escape_attr(&value));
                tag.push('"');
            }
            None => {
                tag.push(' ');
                tag.push_str(&name);
            }
        }
    }
    if self_closing {
        tag.push_str(" />");
    } else {
        tag.push('>');
    }
    Some(tag)
}

fn parse_attributes(raw: &str) -> Vec<(String, Option<String>)> {
    let mut attrs = Vec::new();
    let mut rest = raw;
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let end = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        if end == 0 {
            // Stray separator, e.g. a lone quote or equals sign.
            rest = &rest[1..];
            continue;
        }
        let name = rest[..end].to_string();
        rest = rest[end..].trim_start();
        let value = rest.strip_prefix('=').map(|after| {
            let (value, remaining) = take_attribute_value(after.trim_start());
            rest = remaining;
            value
        });
        attrs.push((name, value));
    }
    attrs
}

fn take_attribute_value(raw: &str) -> (String, &str) {
    for quote in ['"', '\''] {
        if let Some(inner) = raw.strip_prefix(quote) {
            return inner.find(quote).map_or_else(
                || (inner.to_string(), ""),
                |end| (inner[..end].to_string(), &inner[end + 1..]),
            );
        }
    }
    let end = raw.find(char::is_whitespace).unwrap_or(raw.len());
    (raw[..end].to_string(), &raw[end..])
}
