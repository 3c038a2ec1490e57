//! Page-number pagination for listing views.
//!
//! A listing is paginated in two steps: the store reports how many rows
//! match, [`Paginator::page`] turns the requested page into a
//! [`PageWindow`] (or a not-found error), and the store fetches exactly
//! that window. [`Listing`] is the resulting template context.

use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Items per listing page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest accepted `FOLIO_PAGE_SIZE`.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// A requested page, parsed from the `page` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(u64),
    Last,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::Number(1)
    }
}

impl PageRequest {
    /// Parse the raw query value. A missing or blank value means page 1,
    /// `last` means the final page, anything else must be a positive integer.
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(PageRequest::default()),
            Some(raw) => raw,
        };

        if raw == "last" {
            return Ok(PageRequest::Last);
        }

        let number: i64 = raw.parse().map_err(|_| {
            AppError::NotFound("Page is not 'last', nor can it be converted to an int.".to_string())
        })?;
        if number < 1 {
            return Err(AppError::NotFound(
                "That page number is less than 1".to_string(),
            ));
        }

        Ok(PageRequest::Number(number as u64))
    }
}

/// Offset/limit slice of the underlying rows for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub number: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Splits `count` rows into pages of `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: u64,
    per_page: u64,
}

impl Paginator {
    pub fn new(count: u64, per_page: u64) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Number of pages. An empty listing still has one (empty) page.
    pub fn num_pages(&self) -> u64 {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.per_page)
        }
    }

    /// Resolve a request to a window, or `NotFound` if the page is past the end.
    pub fn page(&self, request: PageRequest) -> AppResult<PageWindow> {
        let number = match request {
            PageRequest::Last => self.num_pages(),
            PageRequest::Number(n) => n,
        };

        if number < 1 {
            return Err(AppError::NotFound(
                "That page number is less than 1".to_string(),
            ));
        }
        if number > self.num_pages() {
            return Err(AppError::NotFound(
                "That page contains no results".to_string(),
            ));
        }

        Ok(PageWindow {
            number,
            offset: (number - 1) * self.per_page,
            limit: self.per_page,
        })
    }

    /// Page metadata exposed to templates as `page_obj`.
    pub fn page_info(&self, number: u64) -> PageInfo {
        let num_pages = self.num_pages();
        let has_next = number < num_pages;
        let has_previous = number > 1;

        let start_index = if self.count == 0 {
            0
        } else {
            self.per_page * (number - 1) + 1
        };
        let end_index = if number == num_pages {
            self.count
        } else {
            number * self.per_page
        };

        PageInfo {
            number,
            num_pages,
            has_next,
            has_previous,
            has_other_pages: has_next || has_previous,
            next_page_number: has_next.then_some(number + 1),
            previous_page_number: has_previous.then_some(number - 1),
            start_index,
            end_index,
        }
    }
}

/// Template-facing view of the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub number: u64,
    pub num_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub has_other_pages: bool,
    pub next_page_number: Option<u64>,
    pub previous_page_number: Option<u64>,
    pub start_index: u64,
    pub end_index: u64,
}

/// Template-facing view of the paginator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatorInfo {
    pub count: u64,
    pub num_pages: u64,
    pub per_page: u64,
}

/// Context of a paginated listing view.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    pub object_list: Vec<T>,
    pub page_obj: PageInfo,
    pub paginator: PaginatorInfo,
    pub is_paginated: bool,
}

impl<T> Listing<T> {
    pub fn new(paginator: &Paginator, window: PageWindow, object_list: Vec<T>) -> Self {
        let num_pages = paginator.num_pages();
        Self {
            object_list,
            page_obj: paginator.page_info(window.number),
            paginator: PaginatorInfo {
                count: paginator.count(),
                num_pages,
                per_page: paginator.per_page(),
            },
            is_paginated: num_pages > 1,
        }
    }
}
