//! Offset pagination shared by every list operation.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Limit and offset of a list request.
///
/// Fields are signed to match the RPC contract; negative values are treated
/// as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

impl PageRequest {
    /// Creates a page request.
    pub fn new(limit: i32, offset: i32) -> Self {
        Self { limit, offset }
    }

    /// Returns the slice bounds of this page over `len` candidates.
    ///
    /// `start = min(offset, len)`, `end = min(start + limit, len)`.
    pub fn window(&self, len: usize) -> Range<usize> {
        let offset = usize::try_from(self.offset).unwrap_or(0);
        let limit = usize::try_from(self.limit).unwrap_or(0);

        let start = offset.min(len);
        let end = start.saturating_add(limit).min(len);
        start..end
    }
}

/// One page of results plus the size of the full candidate set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    /// Returns an empty page over an empty candidate set.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Cuts one page out of `candidates`.
pub fn paginate<T: Clone>(candidates: &[T], request: PageRequest) -> Page<T> {
    Page {
        items: candidates[request.window(candidates.len())].to_vec(),
        total: candidates.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let page = paginate(&[1, 2, 3, 4, 5], PageRequest::new(2, 0));
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(&[1, 2, 3, 4, 5], PageRequest::new(2, 4));
        assert_eq!(page.items, vec![5]);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let page = paginate(&[1, 2, 3], PageRequest::new(10, 7));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_zero_limit_is_empty_with_total() {
        let page = paginate(&[1, 2, 3], PageRequest::default());
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_negative_values_clamp_to_zero() {
        let candidates = [1, 2, 3];

        assert_eq!(PageRequest::new(2, -5).window(3), 0..2);
        assert_eq!(PageRequest::new(-1, 1).window(3), 1..1);
        assert_eq!(PageRequest::new(i32::MIN, i32::MIN).window(3), 0..0);

        let page = paginate(&candidates, PageRequest::new(2, -5));
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_large_limit_does_not_overflow() {
        assert_eq!(PageRequest::new(i32::MAX, i32::MAX).window(3), 3..3);
        assert_eq!(PageRequest::new(i32::MAX, 1).window(3), 1..3);
    }

    #[test]
    fn test_pages_reconstruct_candidates() {
        let candidates: Vec<u32> = (0..23).collect();

        for limit in 1..=25 {
            let mut collected = Vec::new();
            let mut offset = 0;
            while offset < 30 {
                let page = paginate(&candidates, PageRequest::new(limit, offset));
                assert_eq!(page.total, candidates.len());
                collected.extend(page.items);
                offset += limit;
            }
            assert_eq!(collected, candidates, "limit {limit}");
        }
    }

    #[test]
    fn test_empty_candidates() {
        let page = paginate::<u8>(&[], PageRequest::new(5, 0));
        assert_eq!(page, Page::empty());
    }
}
