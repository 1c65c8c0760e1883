//! Page strip for the console's pagination control.

use serde::{Serialize, Serializer};

const EXTRA_PAGES: i64 = 1;

/// One entry of the pagination strip: a page index, or a marker collapsing a
/// run of hidden pages. Serializes as the page number or the string `"..."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageEntry::Page(page) => serializer.serialize_u64(*page as u64),
            PageEntry::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Compute the page indices to render for `pages` total pages with
/// `current_page` selected (both zero-based).
///
/// The strip always shows the first and last page and the current page with
/// [`EXTRA_PAGES`] neighbours on each side. A gap of exactly one page is
/// shown as that page, wider gaps collapse to a single [`PageEntry::Ellipsis`].
pub fn pages_list(pages: usize, current_page: usize) -> Vec<PageEntry> {
    let mut list = Vec::new();
    if pages == 0 {
        return list;
    }

    let total = pages as i64;
    let current = current_page as i64;
    // Last page number pushed so far; the gap checks below compare against it.
    let mut last_page: i64 = 0;
    list.push(PageEntry::Page(0));

    if current - EXTRA_PAGES == 2 {
        list.push(PageEntry::Page(1));
        last_page = 1;
    } else if current - EXTRA_PAGES > 2 {
        list.push(PageEntry::Ellipsis);
    }

    for i in (current - EXTRA_PAGES)..=(current + EXTRA_PAGES) {
        if i > 0 && i < total && !list.contains(&PageEntry::Page(i as usize)) {
            list.push(PageEntry::Page(i as usize));
            last_page = i;
        }
    }

    if last_page == total - 3 {
        list.push(PageEntry::Page((total - 2) as usize));
    } else if last_page < total - 2 {
        list.push(PageEntry::Ellipsis);
    }

    if list.last() != Some(&PageEntry::Page((total - 1) as usize)) {
        list.push(PageEntry::Page((total - 1) as usize));
    }

    list
}
