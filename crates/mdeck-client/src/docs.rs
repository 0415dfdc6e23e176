//! Opening a knowledge source's linked document.
//!
//! Documents are served by the backend under `GET /docs/{file_url}` and are
//! opened in the platform's default viewer. A source without a `file_url` is
//! a no-op surfaced as a notice, not an error state.

use std::process::Command;

use mdeck_core::prelude::*;
use mdeck_core::KnowledgeSource;

/// Build the document URL for a source, if it links one.
pub fn doc_url(base: &str, source: &KnowledgeSource) -> Result<String> {
    let file_url = source.file_url.as_deref().ok_or(Error::NoDocument)?;
    Ok(format!(
        "{}/docs/{}",
        base.trim_end_matches('/'),
        file_url.trim_start_matches('/')
    ))
}

/// Open a URL in the platform's default viewer.
///
/// Spawns and detaches; the viewer's lifetime is not ours to manage.
pub fn open_document(url: &str) -> Result<()> {
    info!("opening document: {url}");
    opener_command(url).spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(file_url: Option<&str>) -> KnowledgeSource {
        KnowledgeSource {
            title: "Motor Manual".to_string(),
            kind: "Technical Manual".to_string(),
            excerpt: "...".to_string(),
            page: None,
            source_id: None,
            file_url: file_url.map(String::from),
        }
    }

    #[test]
    fn test_doc_url_joins_base_and_file() {
        let url = doc_url("http://localhost:8000", &source(Some("manuals/m3aa.pdf"))).unwrap();
        assert_eq!(url, "http://localhost:8000/docs/manuals/m3aa.pdf");
    }

    #[test]
    fn test_doc_url_normalizes_slashes() {
        let url = doc_url("http://localhost:8000/", &source(Some("/m3aa.pdf"))).unwrap();
        assert_eq!(url, "http://localhost:8000/docs/m3aa.pdf");
    }

    #[test]
    fn test_missing_file_url_is_no_document() {
        let err = doc_url("http://localhost:8000", &source(None)).unwrap_err();
        assert!(matches!(err, Error::NoDocument));
    }
}
