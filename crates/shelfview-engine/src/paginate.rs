use shelfview_types::Item;

use crate::{Error, Result};

/// Total pages for a view of `len` items: `max(1, ceil(len / page_size))`.
pub fn total_pages(len: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize);
    }
    Ok(len.div_ceil(page_size).max(1))
}

/// Slice one fixed-size page out of a derived view.
///
/// The paginator never clamps: a page outside `[1, total_pages]` is a
/// caller error. UI controllers clamp before calling, and must reclamp
/// after every filter/sort change since the view may shrink.
pub fn paginate(view: &[Item], page: usize, page_size: usize) -> Result<(&[Item], usize)> {
    let total = total_pages(view.len(), page_size)?;
    if page < 1 || page > total {
        return Err(Error::PageOutOfRange {
            page,
            total_pages: total,
        });
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(view.len());
    Ok((&view[start..end], total))
}
