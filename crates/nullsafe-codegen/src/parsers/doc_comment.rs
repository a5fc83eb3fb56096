//! Javadoc extraction.

/// Strip comment syntax from a `/** ... */` block, the way `javac` exposes
/// doc comments: delimiters removed, leading `*` and one following space
/// removed per line, surrounding blank lines dropped.
///
/// Returns `None` for non-Javadoc comments and for Javadoc with no text.
pub fn strip_javadoc(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix("/**")?.strip_suffix("*/")?;

    let lines: Vec<&str> = inner
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = line.strip_prefix('*').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line).trim_end()
        })
        .collect();

    let start = lines.iter().position(|l| !l.is_empty())?;
    let end = lines.iter().rposition(|l| !l.is_empty())?;
    Some(lines[start..=end].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiline_javadoc() {
        let raw = "/**\n     * Greets someone.\n     *\n     * @param name who\n     */";
        assert_eq!(
            strip_javadoc(raw).as_deref(),
            Some("Greets someone.\n\n@param name who")
        );
    }

    #[test]
    fn test_single_line_javadoc() {
        assert_eq!(strip_javadoc("/** Short. */").as_deref(), Some("Short."));
    }

    #[test]
    fn test_non_javadoc_and_empty() {
        assert_eq!(strip_javadoc("/* plain */"), None);
        assert_eq!(strip_javadoc("/**/"), None);
        assert_eq!(strip_javadoc("/**\n *\n */"), None);
    }
}
