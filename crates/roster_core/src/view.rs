//! List screen state: criteria, view mode and current page.
//!
//! # Invariants
//! - Changing search, department or view mode resets the page to 1.
//! - Rendering never mutates the collection it reads.

use crate::filter::{apply, FilterCriteria};
use crate::model::employee::Employee;
use crate::paginate::PageView;
use serde::{Deserialize, Serialize};

/// Layout of the list screen; each mode has its own page size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Table,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    criteria: FilterCriteria,
    page: usize,
    mode: ViewMode,
    table_page_size: usize,
    list_page_size: usize,
}

impl ListView {
    pub fn new(mode: ViewMode, table_page_size: usize, list_page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            mode,
            table_page_size,
            list_page_size,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn page_size(&self) -> usize {
        match self.mode {
            ViewMode::Table => self.table_page_size,
            ViewMode::List => self.list_page_size,
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.page = 1;
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.criteria.department = department.into();
        self.page = 1;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        self.page = 1;
    }

    /// Jumps to `page` as-is; pages past the end render empty.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Advances when a later page exists for `employees`.
    pub fn next_page(&mut self, employees: &[Employee]) -> bool {
        let view = self.render(employees);
        if view.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Filters then slices `employees` for the current page.
    pub fn render<'a>(&self, employees: &'a [Employee]) -> PageView<&'a Employee> {
        let matches = apply(employees, &self.criteria);
        PageView::build(&matches, self.page, self.page_size())
    }
}
