//! Pagination arithmetic and the control model for the pagination bar.

use crate::types::PAGE_SIZE;

/// Largest page count a response may report. The bar holds one control per
/// page, so anything beyond this is treated as a malformed response.
pub const MAX_PAGES: u32 = 10_000;

/// `ceil(total_results / PAGE_SIZE)`, saturating at `u32::MAX`.
pub fn total_pages(total_results: u64) -> u32 {
    u32::try_from(total_results.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControlKind {
    Previous,
    Number,
    Next,
}

/// One button in the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub kind: PageControlKind,
    /// Page requested when the control is activated.
    pub target: u32,
    pub disabled: bool,
    /// Set on the numbered control of the page being shown.
    pub active: bool,
}

impl PageControl {
    pub fn label(&self) -> String {
        match self.kind {
            PageControlKind::Previous => "Previous".to_string(),
            PageControlKind::Next => "Next".to_string(),
            PageControlKind::Number => self.target.to_string(),
        }
    }
}

/// Previous, one numbered control per page, Next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    /// Page the response reported.
    pub current: u32,
    pub total_pages: u32,
    pub total_results: u64,
    pub controls: Vec<PageControl>,
}

impl PaginationBar {
    /// Numbered controls only.
    pub fn numbered(&self) -> impl Iterator<Item = &PageControl> {
        self.controls.iter().filter(|c| c.kind == PageControlKind::Number)
    }

    pub fn previous(&self) -> Option<&PageControl> {
        self.controls.first().filter(|c| c.kind == PageControlKind::Previous)
    }

    pub fn next(&self) -> Option<&PageControl> {
        self.controls.last().filter(|c| c.kind == PageControlKind::Next)
    }

    /// Target of the control labelled `page`, if it exists.
    pub fn target_for(&self, page: u32) -> Option<u32> {
        self.numbered().find(|c| c.target == page).map(|c| c.target)
    }
}

/// Build the pagination bar for a response. `None` when everything fits on one
/// page or the page count exceeds [`MAX_PAGES`].
///
/// Previous is disabled on page 1 (or below), Next on the last page (or beyond).
pub fn pagination_bar(page: u32, total_results: u64) -> Option<PaginationBar> {
    let total = total_pages(total_results);
    if total <= 1 || total > MAX_PAGES {
        return None;
    }

    let mut controls = Vec::with_capacity(total as usize + 2);
    controls.push(PageControl {
        kind: PageControlKind::Previous,
        target: page.saturating_sub(1),
        disabled: page <= 1,
        active: false,
    });
    controls.extend((1..=total).map(|n| PageControl {
        kind: PageControlKind::Number,
        target: n,
        disabled: false,
        active: n == page,
    }));
    controls.push(PageControl {
        kind: PageControlKind::Next,
        target: page.saturating_add(1),
        disabled: page >= total,
        active: false,
    });

    Some(PaginationBar {
        current: page,
        total_pages: total,
        total_results,
        controls,
    })
}
