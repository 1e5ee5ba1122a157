use std::io::Write;
use std::path::Path;

pub mod backend;
#[cfg(test)]
mod mock;

pub use backend::{BackendError, PageVisitor, PdfBackend};

/// Text extracted from a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 0-based position of the page in the document.
    pub index: usize,
    pub text: String,
}

/// Print the text of every page of `pdf_path` to `out`, in document order.
///
/// Each page is written as its text followed by a newline and `out` is
/// flushed before the next page is extracted, so a failure part-way through
/// leaves the earlier pages printed. Errors are returned as-is.
pub fn print_pages<W: Write>(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
    out: &mut W,
) -> Result<usize, BackendError> {
    let count = backend.for_each_page(pdf_path, &mut |page: PageText| {
        tracing::debug!(page = page.index, chars = page.text.len(), "printing page");
        writeln!(out, "{}", page.text)?;
        out.flush()?;
        Ok(())
    })?;

    tracing::info!(path = %pdf_path.display(), pages = count, "extraction complete");
    Ok(count)
}
