//! Power-set enumeration over small slices.
//!
//! Subsets are identified by a bitmask over item positions (bit `i` selects
//! `items[i]`). Masks are visited in ascending numeric order, which is the same
//! order a fold that starts from the empty selection and, for each item,
//! appends "every earlier selection plus this item" would produce. Callers that
//! break ties by generation order rely on this.

/// Widest slice the enumerator accepts; 2^24 subsets is already far past any hand.
pub const MAX_ITEMS: usize = 24;

/// Iterator over the masks of every non-empty subset whose size lies in
/// `[min_len, max_len]`, in ascending mask order.
#[derive(Debug, Clone)]
pub struct SubsetMasks {
    next: u32,
    end: u32,
    min_len: u32,
    max_len: u32,
}

impl SubsetMasks {
    /// # Panics
    ///
    /// Panics if `item_count` exceeds [`MAX_ITEMS`].
    pub fn new(item_count: usize, min_len: Option<usize>, max_len: Option<usize>) -> Self {
        assert!(
            item_count <= MAX_ITEMS,
            "subset enumeration over {item_count} items exceeds the limit of {MAX_ITEMS}"
        );
        let min_len = min_len.unwrap_or(1).max(1).min(MAX_ITEMS + 1) as u32;
        let max_len = max_len.unwrap_or(item_count).min(item_count) as u32;
        Self {
            next: 1,
            end: 1u32 << item_count,
            min_len,
            max_len,
        }
    }
}

impl Iterator for SubsetMasks {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while self.next < self.end {
            let mask = self.next;
            self.next += 1;
            let len = mask.count_ones();
            if len >= self.min_len && len <= self.max_len {
                return Some(mask);
            }
        }
        None
    }
}

/// Materialises the subset selected by `mask`, keeping input order.
pub fn select<T: Clone>(items: &[T], mask: u32) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1u32 << i) != 0)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Every non-empty subset of `items`, optionally bounded by length (inclusive).
///
/// Identity is positional: equal values at different positions still yield
/// distinct subsets.
pub fn enumerate_subsets<T: Clone>(
    items: &[T],
    min_len: Option<usize>,
    max_len: Option<usize>,
) -> Vec<Vec<T>> {
    SubsetMasks::new(items.len(), min_len, max_len)
        .map(|mask| select(items, mask))
        .collect()
}

/// Every subset of exactly `k` items.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 || k > items.len() {
        return Vec::new();
    }
    enumerate_subsets(items, Some(k), Some(k))
}
