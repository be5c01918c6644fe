//! Text extraction for uploaded note files.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteKind {
    Txt,
    Pdf,
    Docx,
}

impl NoteKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "txt" => Some(NoteKind::Txt),
            "pdf" => Some(NoteKind::Pdf),
            "docx" => Some(NoteKind::Docx),
            _ => None,
        }
    }
}

/// Extraction failures degrade to an empty string; upstream treats empty
/// notes as "no notes" rather than an error.
pub fn extract_text(bytes: &[u8], kind: NoteKind) -> String {
    match kind {
        NoteKind::Txt => String::from_utf8_lossy(bytes).into_owned(),
        NoteKind::Pdf | NoteKind::Docx => {
            log::warn!(
                "no text extractor available for {:?} files, treating upload as empty notes",
                kind
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_supported_kinds_case_insensitively() {
        assert_eq!(NoteKind::parse("TXT"), Some(NoteKind::Txt));
        assert_eq!(NoteKind::parse(" pdf "), Some(NoteKind::Pdf));
        assert_eq!(NoteKind::parse("docx"), Some(NoteKind::Docx));
        assert_eq!(NoteKind::parse("pptx"), None);
    }

    #[test]
    fn txt_decodes_lossily() {
        let text = extract_text(b"machine learning\xff notes", NoteKind::Txt);
        assert!(text.starts_with("machine learning"));
        assert!(text.ends_with("notes"));
    }

    #[test]
    fn unsupported_kinds_degrade_to_empty_notes() {
        assert_eq!(extract_text(b"%PDF-1.4 ...", NoteKind::Pdf), "");
        assert_eq!(extract_text(b"PK...docx bytes", NoteKind::Docx), "");
    }
}
