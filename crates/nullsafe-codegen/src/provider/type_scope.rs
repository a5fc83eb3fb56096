//! Type-name rewriting for signatures moved out of their declaring scope.
//!
//! Wrapper classes live beside the marked type, not inside it, so simple
//! names that resolved through the origin's member types, enclosing types,
//! or another file's imports must be qualified before they are copied.

/// Rewrite the leading segment of every dotted name in `text`.
///
/// `resolve` receives the first identifier of each name (`Map` in
/// `Map.Entry<K, V>`) and returns its replacement, if any. Segments after a
/// `.` and type annotation names after `@` are never passed.
pub fn rewrite_type_names(text: &str, mut resolve: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();
    let mut prev: Option<char> = None;

    while let Some((start, c)) = chars.next() {
        if !is_ident_start(c) {
            out.push(c);
            if !c.is_whitespace() {
                prev = Some(c);
            }
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(i, n)) = chars.peek() {
            if !is_ident_part(n) {
                break;
            }
            end = i + n.len_utf8();
            chars.next();
        }
        let ident = &text[start..end];

        let replacement = match prev {
            Some('.') | Some('@') => None,
            _ => resolve(ident),
        };
        out.push_str(replacement.as_deref().unwrap_or(ident));
        prev = Some('a');
    }
    out
}

/// Names declared by a type parameter clause: `<K, V extends List<K>>` gives
/// `["K", "V"]`.
pub fn type_parameter_names(clause: &str) -> Vec<String> {
    let inner = clause
        .trim()
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(clause);

    let mut names = Vec::new();
    let mut depth = 0usize;
    let mut part_start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                names.extend(declared_name(&inner[part_start..i]));
                part_start = i + 1;
            }
            _ => {}
        }
    }
    names.extend(declared_name(&inner[part_start..]));
    names
}

/// `@A T extends X` declares `T`.
fn declared_name(part: &str) -> Option<String> {
    let token = part.split_whitespace().find(|t| !t.starts_with('@'))?;
    let name: String = token.chars().take_while(|&c| is_ident_part(c)).collect();
    (!name.is_empty()).then_some(name)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
