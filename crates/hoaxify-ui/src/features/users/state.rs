//! User directory paging state.

use hoaxify_api_models::UserPage;

/// Users shown per directory page.
pub const PAGE_SIZE: u32 = 3;

/// Paging cursor over `GET /api/v1/users`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserListState {
    /// Last page received.
    pub page: UserPage,
}

impl UserListState {
    /// Whether a page before the current one exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page.page > 0
    }

    /// Whether a page after the current one exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page.page.saturating_add(1) < self.page.total_pages
    }

    /// Index to request for "previous", if any.
    #[must_use]
    pub const fn previous_index(&self) -> Option<u32> {
        if self.has_previous() {
            Some(self.page.page - 1)
        } else {
            None
        }
    }

    /// Index to request for "next", if any.
    #[must_use]
    pub const fn next_index(&self) -> Option<u32> {
        if self.has_next() {
            Some(self.page.page + 1)
        } else {
            None
        }
    }
}
