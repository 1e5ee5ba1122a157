use std::path::Path;

use thiserror::Error;

use crate::PageText;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text from page {index}: {message}")]
    Page { index: usize, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Callback invoked once per page, in document order.
pub type PageVisitor<'a> = dyn FnMut(PageText) -> Result<(), BackendError> + 'a;

/// Trait for PDF text extraction backends.
///
/// Implementors open the document, then walk its pages lazily: page `i + 1`
/// is not loaded until `visit` has returned for page `i`. The first error,
/// whether raised by the library or by `visit`, ends the walk and is returned
/// unchanged.
pub trait PdfBackend: Send + Sync {
    /// Visit the text of every page of the PDF at `path`.
    ///
    /// Returns the number of pages visited.
    fn for_each_page(
        &self,
        path: &Path,
        visit: &mut PageVisitor<'_>,
    ) -> Result<usize, BackendError>;
}
