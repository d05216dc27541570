//! Page-window slicing for list views.

/// Slice `items` to the window for 1-based `page_number`.
///
/// Pages past the end of the list yield an empty vec rather than an error;
/// pagination controls are expected not to offer them, but nothing breaks if
/// they do. Page 0 and a zero page size also yield an empty vec.
pub fn paginate<T: Clone>(items: &[T], page_number: usize, page_size: usize) -> Vec<T> {
    if page_number == 0 || page_size == 0 {
        return Vec::new();
    }

    let start = (page_number - 1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).cloned().collect()
}
