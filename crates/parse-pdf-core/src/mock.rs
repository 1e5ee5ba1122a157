//! Mock PDF backend for testing.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{BackendError, PageText, PageVisitor, PdfBackend};

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
///
/// Supports:
/// - A fixed list of page texts, visited in order.
/// - Failing at a given page index, after the earlier pages were visited.
/// - Failing to open the document at all.
/// - Call counting via [`call_count()`](MockBackend::call_count).
pub struct MockBackend {
    pages: Vec<String>,
    fail_at: Option<usize>,
    missing: bool,
    call_count: AtomicUsize,
    pages_extracted: AtomicUsize,
}

impl MockBackend {
    /// Create a mock document with the given page texts.
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            fail_at: None,
            missing: false,
            call_count: AtomicUsize::new(0),
            pages_extracted: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose document cannot be opened.
    pub fn missing() -> Self {
        Self {
            missing: true,
            ..Self::new(Vec::<String>::new())
        }
    }

    /// Fail with [`BackendError::Page`] when page `index` is reached.
    pub fn fail_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Number of times [`PdfBackend::for_each_page`] was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Total pages handed to a visitor, across all calls.
    pub fn pages_extracted(&self) -> usize {
        self.pages_extracted.load(Ordering::Relaxed)
    }
}

impl PdfBackend for MockBackend {
    fn for_each_page(
        &self,
        path: &Path,
        visit: &mut PageVisitor<'_>,
    ) -> Result<usize, BackendError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if self.missing {
            return Err(BackendError::Open(format!(
                "no such file: {}",
                path.display()
            )));
        }

        for (index, text) in self.pages.iter().enumerate() {
            if self.fail_at == Some(index) {
                return Err(BackendError::Page {
                    index,
                    message: "simulated failure".into(),
                });
            }
            self.pages_extracted.fetch_add(1, Ordering::Relaxed);
            visit(PageText {
                index,
                text: text.clone(),
            })?;
        }

        Ok(self.pages.len())
    }
}
