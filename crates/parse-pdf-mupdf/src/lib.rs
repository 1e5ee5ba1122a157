use std::path::Path;

use mupdf::{Document, TextPage, TextPageFlags};

use parse_pdf_core::{BackendError, PageText, PageVisitor, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the core crate does not transitively
/// depend on it.
///
/// Page text is rendered one MuPDF line per output line, in block order,
/// with no blank line between blocks. Text positioned outside the page's
/// MediaBox is clipped away.
pub struct MupdfBackend {
    flags: TextPageFlags,
}

impl Default for MupdfBackend {
    fn default() -> Self {
        Self {
            // Same defaults as PyMuPDF's `Page.get_text("text")`.
            flags: TextPageFlags::PRESERVE_LIGATURES
                | TextPageFlags::PRESERVE_WHITESPACE
                | TextPageFlags::CLIP
                | TextPageFlags::USE_CID_FOR_UNKNOWN_UNICODE,
        }
    }
}

impl MupdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the structured-text flags used when building each text page.
    pub fn with_flags(mut self, flags: TextPageFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl PdfBackend for MupdfBackend {
    fn for_each_page(
        &self,
        path: &Path,
        visit: &mut PageVisitor<'_>,
    ) -> Result<usize, BackendError> {
        let document = Document::open(path).map_err(|e| BackendError::Open(e.to_string()))?;
        tracing::debug!(path = %path.display(), "opened document");

        let mut count = 0;
        for (index, page_result) in document
            .pages()
            .map_err(|e| BackendError::Open(e.to_string()))?
            .enumerate()
        {
            let page_error = |e: mupdf::Error| BackendError::Page {
                index,
                message: e.to_string(),
            };

            let page = page_result.map_err(page_error)?;
            let text_page = page.to_text_page(self.flags).map_err(page_error)?;
            let text = render_text_page(&text_page);
            tracing::debug!(page = index, lines = text.lines().count(), "extracted page");

            visit(PageText { index, text })?;
            count += 1;
        }

        Ok(count)
    }
}

/// Flatten a structured text page to plain text, one MuPDF line per line.
fn render_text_page(text_page: &TextPage) -> String {
    // Block/line iteration matches PyMuPDF's get_text() behavior
    let mut page_text = String::new();
    for block in text_page.blocks() {
        for line in block.lines() {
            let line_text: String = line
                .chars()
                .map(|c| c.char().unwrap_or('\u{FFFD}'))
                .collect();
            page_text.push_str(&line_text);
            page_text.push('\n');
        }
    }
    page_text
}
