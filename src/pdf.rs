//! PDF conversion of the HTML sheets through a headless Chromium
//!
//! The stylesheet already sets letter-size pages with no margin, so the
//! browser only needs to print each file.

use crate::config::PdfConfig;
use crate::html::HtmlDocument;
use crate::logger::BuildLogger;
use crate::{CardGenError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tokio::task::JoinSet;

/// Browser executables tried, in order, when none is configured
pub const BROWSER_CANDIDATES: [&str; 3] = ["chromium", "chromium-browser", "google-chrome"];

/// Search `PATH` for the first available browser candidate
pub fn find_browser() -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path).find_map(|dir| {
        BROWSER_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Browser arguments for printing `input` (absolute) to `output`
pub fn browser_args(input: &Path, output: &Path) -> Vec<String> {
    vec![
        "--headless".to_string(),
        "--disable-gpu".to_string(),
        "--no-pdf-header-footer".to_string(),
        format!("--print-to-pdf={}", output.display()),
        format!("file://{}", input.display()),
    ]
}

/// PDF path for an HTML document
pub fn pdf_path(output_dir: &Path, html: &Path) -> PathBuf {
    let stem = html
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{stem}.pdf"))
}

pub struct PdfConverter<'a> {
    browser: PathBuf,
    output_dir: &'a Path,
    logger: &'a BuildLogger,
}

impl<'a> PdfConverter<'a> {
    /// Resolve the browser from config or `PATH`
    pub fn new(config: &PdfConfig, output_dir: &'a Path, logger: &'a BuildLogger) -> Result<Self> {
        let browser = match &config.browser {
            Some(path) => path.clone(),
            None => find_browser().ok_or_else(|| CardGenError::Browser {
                file: "-".to_string(),
                reason: format!(
                    "no browser found on PATH (tried {})",
                    BROWSER_CANDIDATES.join(", ")
                ),
            })?,
        };
        logger.verbose(&format!("Using browser: {}", browser.display()));
        Ok(PdfConverter {
            browser,
            output_dir,
            logger,
        })
    }

    /// Convert every document concurrently, returning the written PDFs
    ///
    /// The first failure is returned as soon as it happens; conversions
    /// still running are then aborted and their browsers killed.
    pub async fn convert(&self, documents: &[HtmlDocument]) -> Result<Vec<PathBuf>> {
        tokio::fs::create_dir_all(self.output_dir).await?;

        let mut tasks = JoinSet::new();
        for (index, doc) in documents.iter().enumerate() {
            if !doc.path.is_file() {
                self.logger
                    .warn(&format!("{} not found, skipping", doc.path.display()));
                continue;
            }
            let browser = self.browser.clone();
            let input = doc.path.clone();
            let output = pdf_path(self.output_dir, &input);
            let name = doc.file_name();
            tasks.spawn(async move {
                let output = print_to_pdf(browser, input, output).await?;
                Ok::<_, CardGenError>((index, name, output))
            });
        }

        let mut written = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let (index, name, output) = joined??;
            self.logger.normal(&format!("Converted: {name} -> {}", output.display()));
            written.push((index, output));
        }
        // Report in document order, not completion order
        written.sort_by_key(|(index, _)| *index);
        Ok(written.into_iter().map(|(_, output)| output).collect())
    }
}

async fn print_to_pdf(browser: PathBuf, input: PathBuf, output: PathBuf) -> Result<PathBuf> {
    let file = input.display().to_string();
    let absolute = tokio::fs::canonicalize(&input).await?;
    let result = Command::new(&browser)
        .args(browser_args(&absolute, &output))
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| CardGenError::Browser {
            file: file.clone(),
            reason: format!("could not run {}: {e}", browser.display()),
        })?;

    if !result.status.success() {
        return Err(CardGenError::Browser {
            file,
            reason: format!(
                "{} ({})",
                result.status,
                String::from_utf8_lossy(&result.stderr).trim()
            ),
        });
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_args() {
        let args = browser_args(
            Path::new("/tmp/html/judge-cards.html"),
            Path::new("out/pdf/judge-cards.pdf"),
        );
        assert_eq!(args[0], "--headless");
        assert!(args.contains(&"--no-pdf-header-footer".to_string()));
        assert!(args.contains(&"--print-to-pdf=out/pdf/judge-cards.pdf".to_string()));
        assert_eq!(args.last().unwrap(), "file:///tmp/html/judge-cards.html");
    }

    #[test]
    fn test_pdf_path_keeps_stem() {
        assert_eq!(
            pdf_path(Path::new("out/pdf"), Path::new("out/html/move-backs.html")),
            PathBuf::from("out/pdf/move-backs.pdf")
        );
    }

    #[tokio::test]
    async fn test_missing_input_is_skipped_with_warning() {
        let logger = BuildLogger::capturing();
        let config = PdfConfig {
            browser: Some(PathBuf::from("/nonexistent/chromium")),
        };
        let out = env::temp_dir().join("beat-cards-pdf-skip");
        let converter = PdfConverter::new(&config, &out, &logger).unwrap();
        let docs = vec![HtmlDocument {
            path: PathBuf::from("/nonexistent/stumble-cards.html"),
            sheets: 1,
        }];
        let written = converter.convert(&docs).await.unwrap();
        assert!(written.is_empty());
        assert!(logger
            .logs()
            .iter()
            .any(|l| l.category.as_deref() == Some("warning")));
    }

    #[tokio::test]
    async fn test_failing_browser_names_the_file() {
        let dir = env::temp_dir().join("beat-cards-pdf-fail");
        std::fs::create_dir_all(&dir).unwrap();
        let html = dir.join("rhythm-cards.html");
        std::fs::write(&html, "<html></html>").unwrap();

        let logger = BuildLogger::capturing();
        let config = PdfConfig {
            browser: Some(PathBuf::from("/nonexistent/chromium")),
        };
        let converter = PdfConverter::new(&config, &dir, &logger).unwrap();
        let docs = vec![HtmlDocument {
            path: html,
            sheets: 1,
        }];
        let err = converter.convert(&docs).await.unwrap_err();
        assert!(matches!(
            err,
            CardGenError::Browser { ref file, .. } if file.ends_with("rhythm-cards.html")
        ));
    }

    /// Shell script standing in for Chromium: documents named `slow-*` hang,
    /// `bad-*` fail, anything else gets a PDF written to its output path.
    #[cfg(unix)]
    fn fake_browser(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("fake-chromium");
        std::fs::write(
            &script,
            r#"#!/bin/sh
for arg in "$@"; do
  case "$arg" in
    *slow-*) exec sleep 30 ;;
    *bad-*) echo "cannot print" >&2; exit 1 ;;
    --print-to-pdf=*) printf '%%PDF-1.4' > "${arg#--print-to-pdf=}" ;;
  esac
done
"#,
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[cfg(unix)]
    fn html_documents(dir: &Path, names: &[&str]) -> Vec<HtmlDocument> {
        names
            .iter()
            .map(|name| {
                let path = dir.join(name);
                std::fs::write(&path, "<html></html>").unwrap();
                HtmlDocument { path, sheets: 1 }
            })
            .collect()
    }

    #[cfg(unix)]
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("beat-cards-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_converted_pdfs_follow_document_order() {
        let dir = scratch_dir("pdf-order");
        let logger = BuildLogger::capturing();
        let config = PdfConfig {
            browser: Some(fake_browser(&dir)),
        };
        let out = dir.join("pdf");
        let converter = PdfConverter::new(&config, &out, &logger).unwrap();
        let docs = html_documents(&dir, &["move-cards.html", "judge-cards.html"]);

        let written = converter.convert(&docs).await.unwrap();
        assert_eq!(
            written,
            vec![out.join("move-cards.pdf"), out.join("judge-cards.pdf")]
        );
        assert!(written.iter().all(|pdf| pdf.is_file()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failure_returns_without_waiting_for_other_documents() {
        let dir = scratch_dir("pdf-abort");
        let logger = BuildLogger::capturing();
        let config = PdfConfig {
            browser: Some(fake_browser(&dir)),
        };
        let pdf_dir = dir.join("pdf");
        let converter = PdfConverter::new(&config, &pdf_dir, &logger).unwrap();
        // The hanging document comes first, so awaiting in order would block on it
        let docs = html_documents(&dir, &["slow-cards.html", "bad-cards.html"]);

        let result = tokio::time::timeout(
            std::time::Duration::from_secs(10),
            converter.convert(&docs),
        )
        .await
        .expect("conversion should stop at the first failure");
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CardGenError::Browser { ref file, ref reason }
                if file.ends_with("bad-cards.html") && reason.contains("cannot print")
        ));
    }
}
