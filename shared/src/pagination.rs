//! Pagination state derived from the last loaded page.
//!
//! There is no total count: a page shorter than `limit` is taken to be the
//! last one. A final page of exactly `limit` rows therefore still enables
//! "next", and the following request comes back empty.

/// Where the loaded page sits in the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePosition {
    /// First page, more rows may follow
    AtStart,
    /// Neither first nor last
    Mid,
    /// Past the first page, nothing follows
    AtEnd,
    /// First page and nothing follows
    Single,
}

impl PagePosition {
    pub fn derive(offset: i64, returned: usize, limit: i64) -> Self {
        let first = offset <= 0;
        let last = i64::try_from(returned).is_ok_and(|count| count < limit);
        match (first, last) {
            (true, true) => PagePosition::Single,
            (true, false) => PagePosition::AtStart,
            (false, true) => PagePosition::AtEnd,
            (false, false) => PagePosition::Mid,
        }
    }

    pub fn has_previous(self) -> bool {
        matches!(self, PagePosition::Mid | PagePosition::AtEnd)
    }

    pub fn has_next(self) -> bool {
        matches!(self, PagePosition::AtStart | PagePosition::Mid)
    }

    pub fn buttons(self) -> PaginationButtons {
        PaginationButtons {
            prev_disabled: !self.has_previous(),
            next_disabled: !self.has_next(),
        }
    }
}

/// Enabled state of the prev/next button pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationButtons {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Default for PaginationButtons {
    /// Both disabled until the first page arrives
    fn default() -> Self {
        Self {
            prev_disabled: true,
            next_disabled: true,
        }
    }
}
