// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Page arithmetic.
//!
//! Everything here is a pure function of the collection size, the page size
//! and the current page. Pages past the end are not an error: they produce
//! an empty window.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Offset, page count and slice bounds for one page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// `(current_page - 1) * page_size`, saturating.
    pub current_offset: usize,
    /// `ceil(collection_size / page_size)`; zero for an empty collection.
    pub total_pages: usize,
    /// First index of the slice, never past the end of the collection.
    pub slice_start: usize,
    /// Number of items in the slice, at most `page_size`.
    pub slice_len: usize,
}

impl PageWindow {
    /// Computes the window for `current_page` of a collection.
    pub fn compute(collection_size: usize, page_size: NonZeroUsize, current_page: NonZeroUsize) -> Self {
        let page_size = page_size.get();
        let current_offset = (current_page.get() - 1).saturating_mul(page_size);
        let total_pages = collection_size.div_ceil(page_size);
        let slice_start = current_offset.min(collection_size);
        let slice_len = page_size.min(collection_size - slice_start);

        Self {
            current_offset,
            total_pages,
            slice_start,
            slice_len,
        }
    }

    /// Index range of the slice within the collection.
    pub fn range(&self) -> Range<usize> {
        self.slice_start..self.slice_start + self.slice_len
    }
}

/// Resolves the raw requested page into a page number.
///
/// Only plain ASCII digits are accepted. Anything else, including `"0"` and
/// numbers too large for `usize`, falls back to page 1.
pub fn resolve_current_page(raw: Option<&str>) -> NonZeroUsize {
    let Some(raw) = raw else {
        return NonZeroUsize::MIN;
    };

    match parse_page(raw) {
        Some(page) => page,
        None => {
            tracing::warn!("Ignoring invalid page {:?}, rendering page 1", raw);
            NonZeroUsize::MIN
        }
    }
}

fn parse_page(raw: &str) -> Option<NonZeroUsize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_first_page() {
        let w = PageWindow::compute(10, nz(3), nz(1));
        assert_eq!(w.current_offset, 0);
        assert_eq!(w.total_pages, 4);
        assert_eq!(w.range(), 0..3);
    }

    #[test]
    fn test_last_partial_page() {
        let w = PageWindow::compute(10, nz(3), nz(4));
        assert_eq!(w.current_offset, 9);
        assert_eq!(w.range(), 9..10);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let w = PageWindow::compute(10, nz(3), nz(99));
        assert_eq!(w.current_offset, 294);
        assert_eq!(w.slice_start, 10);
        assert_eq!(w.slice_len, 0);
    }

    #[test]
    fn test_empty_collection() {
        let w = PageWindow::compute(0, nz(5), nz(1));
        assert_eq!(w.total_pages, 0);
        assert_eq!(w.range(), 0..0);
    }

    #[test]
    fn test_huge_page_saturates() {
        let w = PageWindow::compute(4, nz(2), nz(usize::MAX));
        assert_eq!(w.current_offset, usize::MAX);
        assert_eq!(w.slice_len, 0);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for size in 0..50usize {
            for page_size in 1..8usize {
                let w = PageWindow::compute(size, nz(page_size), nz(1));
                let expected = size / page_size + usize::from(size % page_size != 0);
                assert_eq!(w.total_pages, expected, "size={size} page_size={page_size}");
                assert_eq!(w.total_pages == 0, size == 0);
            }
        }
    }

    #[test]
    fn test_slice_never_reads_past_end() {
        for size in 0..30usize {
            for page_size in 1..6usize {
                for page in 1..12usize {
                    let w = PageWindow::compute(size, nz(page_size), nz(page));
                    assert!(w.slice_start + w.slice_len <= size);
                    assert!(w.slice_len <= page_size);
                }
            }
        }
    }

    #[test]
    fn test_pages_partition_collection() {
        let lens: Vec<usize> = (1..=5)
            .map(|p| PageWindow::compute(23, nz(5), nz(p)).slice_len)
            .collect();
        assert_eq!(lens, vec![5, 5, 5, 5, 3]);

        let covered: Vec<usize> = (1..=5)
            .flat_map(|p| PageWindow::compute(23, nz(5), nz(p)).range())
            .collect();
        assert_eq!(covered, (0..23).collect::<Vec<_>>());
    }

    #[test]
    fn test_resolve_current_page() {
        assert_eq!(resolve_current_page(Some("3")).get(), 3);
        assert_eq!(resolve_current_page(Some("007")).get(), 7);
        assert_eq!(resolve_current_page(None).get(), 1);
        assert_eq!(resolve_current_page(Some("")).get(), 1);
        assert_eq!(resolve_current_page(Some("abc")).get(), 1);
        assert_eq!(resolve_current_page(Some("2.5")).get(), 1);
        assert_eq!(resolve_current_page(Some("-2")).get(), 1);
        assert_eq!(resolve_current_page(Some("+2")).get(), 1);
        assert_eq!(resolve_current_page(Some(" 2")).get(), 1);
        assert_eq!(resolve_current_page(Some("0")).get(), 1);
        assert_eq!(resolve_current_page(Some("99999999999999999999999999")).get(), 1);
    }
}
