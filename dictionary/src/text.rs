/// Inline markup tokens Merriam-Webster embeds in text fields. Each field
/// type carries its own closed token set; the sets intentionally differ.
pub const ETYMOLOGY_TAGS: &[&str] = &["{it}", "{/it}", "{et_link|", "|}"];
pub const DEFINITION_TAGS: &[&str] = &["{bc}", "{sx|", "|}", "{a_link|", "}"];
pub const EXAMPLE_TAGS: &[&str] = &["{wi}", "{/wi}", "{it}", "{/it}"];

/// Removes every occurrence of each token, then trims surrounding whitespace.
pub fn strip_tags(text: &str, tags: &[&str]) -> String {
    let mut out = text.to_string();
    for tag in tags {
        out = out.replace(tag, "");
    }
    out.trim().to_string()
}

/// Capitalizes the first letter of every alphabetic run and lowercases the
/// rest, like Python's `str.title()` which the original wire format used.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}
