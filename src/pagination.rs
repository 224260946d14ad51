//! Pagination state shared by all list controllers

/// Current page window plus the last known server-side total.
///
/// `offset` is reset to 0 whenever a search change triggers a reload.
/// `total` reflects the last successful response and is decremented
/// locally on a successful local delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationMeta {
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            total: 0,
        }
    }
}

/// Page override passed to `ListController::load` when the caller pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let meta = PaginationMeta::default();
        assert_eq!(meta.limit, 10);
        assert_eq!(meta.offset, 0);
        assert_eq!(meta.total, 0);
    }
}
