use std::io::Write;
use std::path::{Path, PathBuf};

use citescout_core::Collection;

/// Output format for a single citation export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    Bibtex,
    Ris,
    /// Pre-formatted citation text for a named style ("Standard", ...).
    Styled(String),
}

impl ExportFormat {
    /// Output filename: the two raw formats have fixed names, styled text
    /// is named after the style.
    pub fn filename(&self) -> String {
        match self {
            Self::Bibtex => "citation.bib".to_string(),
            Self::Ris => "citation.ris".to_string(),
            Self::Styled(style) => format!("{}.txt", style.to_lowercase()),
        }
    }
}

/// Directory exports land in: downloads, else home, else CWD.
pub fn default_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Write one pre-formatted citation to `<dir>/<format filename>`.
pub fn export_citation(dir: &Path, format: &ExportFormat, content: &str) -> Result<PathBuf, String> {
    write_file(&dir.join(format.filename()), content)
}

/// Write the whole collection (standard-style text, one entry per block)
/// to `<dir>/collection.txt`.
pub fn export_collection(dir: &Path, collection: &Collection) -> Result<PathBuf, String> {
    let mut content = String::new();
    for entry in collection.entries() {
        content.push_str(&entry.standard);
        content.push_str("\n\n");
    }
    write_file(&dir.join("collection.txt"), &content)
}

fn write_file(path: &Path, content: &str) -> Result<PathBuf, String> {
    let mut file = std::fs::File::create(path)
        .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use citescout_core::CollectedCitation;

    #[test]
    fn format_filenames() {
        assert_eq!(ExportFormat::Bibtex.filename(), "citation.bib");
        assert_eq!(ExportFormat::Ris.filename(), "citation.ris");
        assert_eq!(
            ExportFormat::Styled("Standard".to_string()).filename(),
            "standard.txt"
        );
    }

    #[test]
    fn exports_citation_content_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            export_citation(dir.path(), &ExportFormat::Bibtex, "@article{x,\n}").unwrap();
        assert_eq!(path.file_name().unwrap(), "citation.bib");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "@article{x,\n}");
    }

    #[test]
    fn exports_collection_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let collection = Collection::from_entries(vec![
            CollectedCitation {
                title: "A".to_string(),
                standard: "A standard".to_string(),
                bibtex: None,
                doi: None,
            },
            CollectedCitation {
                title: "B".to_string(),
                standard: "B standard".to_string(),
                bibtex: None,
                doi: None,
            },
        ]);

        let path = export_collection(dir.path(), &collection).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "A standard\n\nB standard\n\n");
    }

    #[test]
    fn unwritable_dir_reports_error() {
        let err = export_citation(
            Path::new("/nonexistent-citescout-dir"),
            &ExportFormat::Ris,
            "TY  - JOUR",
        )
        .unwrap_err();
        assert!(err.starts_with("Failed to create"));
    }
}
