use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::error::{TableError, TableResult};

/// Page size used until a caller picks another one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Color name used to filter people server-side.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the listing.
///
/// Only `color` is required. `name` is empty when the API omits it, and
/// every other field the API sends is kept in `attributes` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub color: Color,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Person {
    pub fn new(name: impl Into<String>, color: impl Into<Color>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Position within the full dataset: 1-based page number and a non-zero size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    page_number: usize,
    page_size: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageCursor {
    pub fn new(page_number: usize, page_size: usize) -> TableResult<Self> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        if page_number == 0 {
            return Err(TableError::InvalidPageNumber);
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// First page with the given size.
    pub fn first(page_size: usize) -> TableResult<Self> {
        Self::new(1, page_size)
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Same size, different page.
    pub fn with_page(self, page_number: usize) -> TableResult<Self> {
        Self::new(page_number, self.page_size)
    }

    pub fn rewind(self) -> Self {
        Self {
            page_number: 1,
            ..self
        }
    }
}

/// The slice of the dataset currently on screen, plus the dataset it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageState {
    pub total_items: usize,
    pub total_pages: usize,
    pub visible_rows: Vec<Person>,
    pub full_dataset: Vec<Person>,
}

impl PageState {
    pub fn has_previous(&self, cursor: PageCursor) -> bool {
        cursor.page_number() > 1
    }

    pub fn has_next(&self, cursor: PageCursor) -> bool {
        cursor.page_number() < self.total_pages
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterState {
    pub selected_color: Option<Color>,
    pub can_filter: bool,
    pub color_options: Vec<Color>,
}

impl FilterState {
    /// Replace the available options, dropping duplicates but keeping API order.
    pub(crate) fn replace_options(&mut self, options: Vec<Color>) {
        let mut unique: Vec<Color> = Vec::with_capacity(options.len());
        for color in options {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }
        self.color_options = unique;
    }
}

/// Snapshot of everything a table consumer can read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableState {
    pub page: PageState,
    pub cursor: PageCursor,
    pub filter: FilterState,
    pub is_loading: bool,
}

impl TableState {
    pub fn with_page_size(page_size: usize) -> TableResult<Self> {
        Ok(Self {
            cursor: PageCursor::first(page_size)?,
            ..Self::default()
        })
    }
}
