//! The people table controller.
//!
//! Owns the table state and is its only writer. Remote operations follow one
//! shape: mark the table as loading, call the API, recompute the page on
//! success, raise a notification on failure, clear the loading flag.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures_util::future::join;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use super::api::{ApiResult, PeopleApi};
use super::error::{Operation, TableError, TableResult};
use super::models::{Color, DEFAULT_PAGE_SIZE, PageCursor, PageState, Person, TableState};
use super::pagination::{PageChange, compute_page};
use super::store::{TableStore, TableView};
use crate::notify::{DEFAULT_NOTIFICATION_TIMEOUT, Notifier};

/// Status the API answers a successful create with.
const CREATED_STATUS: u16 = 200;

/// Controller settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Rows per page until a page change picks another size.
    pub page_size: usize,
    /// How long failure notifications stay visible.
    pub notification_timeout: Duration,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
        }
    }
}

/// Pagination and filter state for the people listing.
///
/// Generic over `A: PeopleApi` and `N: Notifier`; both are injected via the
/// constructor, so tests run against mocks.
///
/// Operations take `&self` and may interleave. `is_loading` stays true while
/// any list or create request is outstanding.
pub struct TableController<A, N> {
    api: A,
    notifier: N,
    store: TableStore,
    config: TableConfig,
    pending: AtomicUsize,
    shutdown: CancellationToken,
}

impl<A: PeopleApi, N: Notifier> TableController<A, N> {
    /// Controller with the default page size and notification timeout.
    pub fn new(api: A, notifier: N) -> Self {
        Self::build(api, notifier, TableConfig::default(), TableState::default())
    }

    pub fn with_config(api: A, notifier: N, config: TableConfig) -> TableResult<Self> {
        let initial = TableState::with_page_size(config.page_size)?;
        Ok(Self::build(api, notifier, config, initial))
    }

    fn build(api: A, notifier: N, config: TableConfig, initial: TableState) -> Self {
        Self {
            api,
            notifier,
            store: TableStore::new(initial),
            config,
            pending: AtomicUsize::new(0),
            shutdown: CancellationToken::new(),
        }
    }

    /// Read-only handle for consumers.
    pub fn view(&self) -> TableView {
        self.store.view()
    }

    /// Clone of the current state.
    pub fn state(&self) -> TableState {
        self.store.read(TableState::clone)
    }

    /// Tear the controller down and clear `is_loading`. Requests still in
    /// flight resolve as [`TableError::Cancelled`] and leave state and
    /// notifications alone.
    pub fn dispose(&self) {
        if self.shutdown.is_cancelled() {
            return;
        }
        debug!("disposing table controller");
        self.shutdown.cancel();
        self.store.update(|s| s.is_loading = false);
    }

    pub fn is_disposed(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    // -------------------------------------------------------------------------
    // Remote operations
    // -------------------------------------------------------------------------

    /// Fetch every person and show page 1.
    #[instrument(skip(self))]
    pub async fn load_all(&self) -> TableResult<PageState> {
        let operation = Operation::LoadAll;
        self.begin(operation)?;
        let result = self.call(operation, self.api.get_people()).await;
        self.settle_rows(operation, result)
    }

    /// Fetch the people matching the selected color and show page 1.
    ///
    /// Rejected without calling the API when filtering is disabled or no
    /// color is selected.
    #[instrument(skip(self))]
    pub async fn load_filtered(&self) -> TableResult<PageState> {
        let operation = Operation::LoadFiltered;
        let (can_filter, selected) = self
            .store
            .read(|s| (s.filter.can_filter, s.filter.selected_color.clone()));
        if !can_filter {
            debug!("filter requested while filtering is disabled");
            return Err(TableError::FilteringDisabled);
        }
        let color = selected.ok_or(TableError::NoColorSelected)?;

        self.begin(operation)?;
        let result = self
            .call(operation, self.api.get_people_by_color(&color))
            .await;
        self.settle_rows(operation, result)
    }

    /// Create a person.
    ///
    /// On success the filter is cleared and disabled, then people and color
    /// options are reloaded. Failures of those reloads are reported by the
    /// reloads themselves; the create still counts as done.
    #[instrument(skip(self, person), fields(name = %person.name, color = %person.color))]
    pub async fn add_record(&self, person: Person) -> TableResult<()> {
        let operation = Operation::AddRecord;
        self.begin(operation)?;

        let result = match self.call(operation, self.api.add_person(&person)).await {
            Ok(CREATED_STATUS) => {
                self.store.update(|s| {
                    s.filter.selected_color = None;
                    s.filter.can_filter = false;
                });
                let _ = join(self.load_all(), self.load_color_options()).await;
                Ok(())
            }
            Ok(status) => Err(TableError::NonSuccessStatus { operation, status }),
            Err(err) => Err(err),
        };

        self.end();
        self.report(result)
    }

    /// Fetch the colors offered by the filter.
    ///
    /// Unlike the other operations this does not touch `is_loading`.
    #[instrument(skip(self))]
    pub async fn load_color_options(&self) -> TableResult<Vec<Color>> {
        let operation = Operation::LoadColorOptions;
        if self.is_disposed() {
            return Err(TableError::Cancelled { operation });
        }

        let result = match self.call(operation, self.api.get_color_options()).await {
            Ok(Some(colors)) => {
                let mut options = Vec::new();
                self.store.update(|s| {
                    s.filter.replace_options(colors);
                    options = s.filter.color_options.clone();
                });
                debug!(count = options.len(), "color options loaded");
                Ok(options)
            }
            Ok(None) => Err(TableError::EmptyResponse { operation }),
            Err(err) => Err(err),
        };

        self.report(result)
    }

    // -------------------------------------------------------------------------
    // Local commands
    // -------------------------------------------------------------------------

    /// Apply a page-change request against the last fetched dataset.
    ///
    /// The page is not checked against `total_pages`; an out-of-range page is
    /// simply empty.
    pub fn on_page_change(&self, change: PageChange) -> TableResult<PageState> {
        let cursor = change.apply(self.store.read(|s| s.cursor))?;
        Ok(self.show_page(cursor))
    }

    /// Jump to `page` keeping the current page size.
    pub fn go_to_page(&self, page: usize) -> TableResult<PageState> {
        let cursor = self.store.read(|s| s.cursor).with_page(page)?;
        Ok(self.show_page(cursor))
    }

    /// Step back one page, stopping at page 1.
    pub fn previous_page(&self) -> PageState {
        let cursor = self.store.read(|s| s.cursor);
        let page = cursor.page_number().saturating_sub(1).max(1);
        self.show_page(cursor.with_page(page).unwrap_or(cursor))
    }

    pub fn select_color(&self, color: Option<Color>) {
        self.store.update(|s| s.filter.selected_color = color);
    }

    pub fn set_can_filter(&self, can_filter: bool) {
        self.store.update(|s| s.filter.can_filter = can_filter);
    }

    // -------------------------------------------------------------------------
    // Lifecycle helpers
    // -------------------------------------------------------------------------

    fn begin(&self, operation: Operation) -> TableResult<()> {
        if self.is_disposed() {
            return Err(TableError::Cancelled { operation });
        }
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.store.update(|s| s.is_loading = true);
        debug!(%operation, "request started");
        Ok(())
    }

    fn end(&self) {
        let remaining = self.pending.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        if remaining == 0 && !self.is_disposed() {
            self.store.update(|s| s.is_loading = false);
        }
    }

    /// Await the API call unless the controller is disposed first.
    ///
    /// A response that lands after disposal is discarded.
    async fn call<T>(
        &self,
        operation: Operation,
        request: impl Future<Output = ApiResult<T>>,
    ) -> TableResult<T> {
        let outcome = self.shutdown.run_until_cancelled(request).await;
        if self.is_disposed() {
            return Err(TableError::Cancelled { operation });
        }
        match outcome {
            Some(Ok(value)) => Ok(value),
            Some(Err(err)) => Err(TableError::Transport {
                operation,
                message: err.to_string(),
            }),
            None => Err(TableError::Cancelled { operation }),
        }
    }

    fn settle_rows(
        &self,
        operation: Operation,
        result: TableResult<Option<Vec<Person>>>,
    ) -> TableResult<PageState> {
        let result = match result {
            Ok(Some(rows)) => {
                let page = self.show_dataset(rows);
                debug!(%operation, total = page.total_items, "rows loaded");
                Ok(page)
            }
            Ok(None) => Err(TableError::EmptyResponse { operation }),
            Err(err) => Err(err),
        };
        self.end();
        self.report(result)
    }

    /// Log and notify failures; cancelled requests stay silent.
    fn report<T>(&self, result: TableResult<T>) -> TableResult<T> {
        if let Err(err) = &result {
            let operation = err.operation().map(|op| op.to_string());
            if matches!(err, TableError::Cancelled { .. }) {
                debug!(operation, error = %err, "request dropped");
            } else {
                warn!(operation, error = %err, "request failed");
            }
            if let Some(notification) = err.notification(self.config.notification_timeout) {
                self.notifier.show_notification(notification);
            }
        }
        result
    }

    /// Replace the dataset and go back to page 1.
    fn show_dataset(&self, rows: Vec<Person>) -> PageState {
        let mut page = PageState::default();
        self.store.update(|s| {
            s.cursor = s.cursor.rewind();
            s.page = compute_page(rows, s.cursor);
            page = s.page.clone();
        });
        page
    }

    fn show_page(&self, cursor: PageCursor) -> PageState {
        let mut page = PageState::default();
        self.store.update(|s| {
            s.cursor = cursor;
            let rows = std::mem::take(&mut s.page.full_dataset);
            s.page = compute_page(rows, cursor);
            page = s.page.clone();
        });
        page
    }
}

impl<A, N> Drop for TableController<A, N> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
