// crates/contacts-core/src/pager.rs - Fixed-size paging over table rows
//
// The pager is a tiny cursor: a window start, a page size and the row count.
// Interactive input is parsed into a `PageDirective` and applied to the pager,
// which keeps the arithmetic (and its edge cases) out of the command handler.
//
// DIRECTIVES:
// - ""        next page
// - "p"       previous page (never moves before the first row)
// - "<n>"     start the window at row n, 1-indexed, 1 <= n <= row count
// - other     stop paging

use std::ops::Range;

/// One step of user navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageDirective {
    Next,
    Previous,
    /// Jump to a 1-indexed row that is known to exist
    Jump(usize),
    /// A row number that does not exist; ends paging
    OutOfRange(String),
    Exit,
}

impl PageDirective {
    /// Interpret one line of input against a table of `row_count` rows
    pub fn parse(input: &str, row_count: usize) -> Self {
        match input {
            "" => Self::Next,
            "p" => Self::Previous,
            digits if digits.bytes().all(|b| b.is_ascii_digit()) => {
                match digits.parse::<usize>() {
                    Ok(row) if (1..=row_count).contains(&row) => Self::Jump(row),
                    _ => Self::OutOfRange(digits.to_string()),
                }
            }
            _ => Self::Exit,
        }
    }
}

/// Cursor over a table of `row_count` rows shown `page_size` at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    start: usize,
    page_size: usize,
    row_count: usize,
}

impl Pager {
    /// A page size of zero is treated as one
    pub fn new(row_count: usize, page_size: usize) -> Self {
        Self {
            start: 0,
            page_size: page_size.max(1),
            row_count,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Row range of the current page, or `None` once paging has run off the end
    pub fn window(&self) -> Option<Range<usize>> {
        if self.start >= self.row_count {
            return None;
        }
        let end = (self.start + self.page_size).min(self.row_count);
        Some(self.start..end)
    }

    /// Move the cursor; returns `false` when paging should stop
    pub fn apply(&mut self, directive: PageDirective) -> bool {
        match directive {
            PageDirective::Next => {
                self.start = (self.start + self.page_size).min(self.row_count);
                true
            }
            PageDirective::Previous => {
                self.start = self.start.saturating_sub(self.page_size);
                true
            }
            PageDirective::Jump(row) => {
                self.start = row.saturating_sub(1);
                true
            }
            PageDirective::OutOfRange(_) | PageDirective::Exit => false,
        }
    }
}
