pub(crate) fn js_prop_to_css_name(prop: &str) -> String {
    let mut out = String::new();
    for ch in prop.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub(crate) fn parse_style_declarations(style_attr: Option<&str>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let Some(style_attr) = style_attr else {
        return out;
    };

    let mut start = 0usize;
    let mut i = 0usize;
    let bytes = style_attr.as_bytes();
    let mut paren_depth = 0isize;
    let mut quote: Option<u8> = None;

    while i < bytes.len() {
        let ch = bytes[i];
        match (quote, ch) {
            (Some(_), b'\\') => {
                if i + 1 < bytes.len() {
                    i += 2;
                    continue;
                }
            }
            (Some(q), _) if ch == q => {
                quote = None;
            }
            (Some(_), _) => {}
            (None, b'\'') | (None, b'"') => {
                quote = Some(ch);
            }
            (None, b'(') => paren_depth += 1,
            (None, b')') => paren_depth = (paren_depth - 1).max(0),
            (None, b';') if paren_depth == 0 => {
                push_style_declaration(&style_attr[start..i], &mut out);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    push_style_declaration(&style_attr[start..], &mut out);
    out
}

fn push_style_declaration(raw_decl: &str, out: &mut Vec<(String, String)>) {
    let decl = raw_decl.trim();
    if decl.is_empty() {
        return;
    }

    let bytes = decl.as_bytes();
    let mut colon = None;
    let mut paren_depth = 0isize;
    let mut quote: Option<u8> = None;
    let mut i = 0usize;

    while i < bytes.len() {
        let ch = bytes[i];
        match (quote, ch) {
            (Some(_), b'\\') => {
                if i + 1 < bytes.len() {
                    i += 2;
                    continue;
                }
            }
            (Some(q), _) if ch == q => quote = None,
            (Some(_), _) => {}
            (None, b'\'') | (None, b'"') => quote = Some(ch),
            (None, b'(') => paren_depth += 1,
            (None, b')') => paren_depth = (paren_depth - 1).max(0),
            (None, b':') if paren_depth == 0 => {
                colon = Some(i);
                break;
            }
            _ => {}
        }
        i += 1;
    }

    let Some(colon) = colon else {
        return;
    };

    let name = decl[..colon].trim().to_ascii_lowercase();
    if name.is_empty() {
        return;
    }
    let value = decl[colon + 1..].trim().to_string();

    // Later declarations of the same property win.
    if let Some(pos) = out.iter().position(|(existing, _)| existing == &name) {
        out[pos].1 = value;
    } else {
        out.push((name, value));
    }
}

pub(crate) fn serialize_style_declarations(decls: &[(String, String)]) -> String {
    let mut out = String::new();
    for (idx, (name, value)) in decls.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push(';');
    }
    out
}

pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated = chars.by_ref().take(max_chars).collect::<String>();
    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}

/// Accepts `#id` only and returns the id.
pub(crate) fn parse_id_selector(selector: &str) -> Option<&str> {
    let id = selector.trim().strip_prefix('#')?;
    let compound = id.chars().any(|ch| {
        ch.is_whitespace() || matches!(ch, '#' | '.' | '[' | ']' | ':' | '>' | '+' | '~' | ',')
    });
    if id.is_empty() || compound {
        return None;
    }
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_parser_keeps_last_duplicate_and_lowercases_names() {
        let decls = parse_style_declarations(Some("DISPLAY: block; color: red; display: inline"));
        assert_eq!(
            decls,
            vec![
                ("display".to_string(), "inline".to_string()),
                ("color".to_string(), "red".to_string()),
            ]
        );
    }

    #[test]
    fn style_parser_supports_quoted_semicolon_and_parentheses() {
        let decls = parse_style_declarations(Some(
            "content: 'a;b'; background: url(data:image/png;base64,AAA); display: none",
        ));
        assert_eq!(decls.len(), 3);
        assert_eq!(decls[0].1, "'a;b'");
        assert_eq!(decls[1].1, "url(data:image/png;base64,AAA)");
        assert_eq!(decls[2], ("display".to_string(), "none".to_string()));
    }

    #[test]
    fn style_parser_skips_fragments_without_colon() {
        assert!(parse_style_declarations(Some(" ; garbage ; ")).is_empty());
        assert!(parse_style_declarations(None).is_empty());
    }

    #[test]
    fn serialize_matches_css_text_shape() {
        let decls = vec![
            ("display".to_string(), "block".to_string()),
            ("background-color".to_string(), "red".to_string()),
        ];
        assert_eq!(
            serialize_style_declarations(&decls),
            "display: block; background-color: red;"
        );
    }

    #[test]
    fn id_selector_rejects_compound_selectors() {
        assert_eq!(parse_id_selector("#music"), Some("music"));
        assert_eq!(parse_id_selector("  #output "), Some("output"));
        assert_eq!(parse_id_selector("music"), None);
        assert_eq!(parse_id_selector("#"), None);
        assert_eq!(parse_id_selector("#a .b"), None);
        assert_eq!(parse_id_selector("#a.b"), None);
    }

    #[test]
    fn js_prop_names_map_to_css_names() {
        assert_eq!(js_prop_to_css_name("display"), "display");
        assert_eq!(js_prop_to_css_name("backgroundColor"), "background-color");
    }
}
