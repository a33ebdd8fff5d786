//! Filename sanitization for user-supplied upload names.

/// Reduce a client-supplied filename to a safe display name: strip any
/// path components, collapse whitespace to underscores and drop every
/// character outside ASCII alphanumerics, `.`, `_` and `-`. Returns `None`
/// when nothing safe remains.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let base = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(raw)
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Extract the lowercased extension including the leading dot, or an empty
/// string when the name has no extension.
pub fn file_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!(".{}", ext.to_ascii_lowercase())
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd").unwrap(), "passwd");
        assert_eq!(sanitize_filename("C:\\temp\\scan.png").unwrap(), "scan.png");
    }

    #[test]
    fn replaces_whitespace_and_drops_odd_characters() {
        assert_eq!(sanitize_filename("my report.pdf").unwrap(), "my_report.pdf");
        assert_eq!(sanitize_filename("x-ray (left).jpg").unwrap(), "x-ray_left.jpg");
    }

    #[test]
    fn hidden_files_lose_the_leading_dot() {
        assert_eq!(sanitize_filename(".hidden").unwrap(), "hidden");
    }

    #[test]
    fn empty_and_hostile_names_yield_none() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("   "), None);
        assert_eq!(sanitize_filename("../.."), None);
    }

    #[test]
    fn extension_is_lowercased_with_dot() {
        assert_eq!(file_extension("report.PDF"), ".pdf");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("noext"), "");
        assert_eq!(file_extension(".hidden"), "");
    }
}
