//! Observable state container.
//!
//! The controller is the only writer. Consumers hold a [`TableView`], which
//! can read snapshots, select fields, and wait for changes, but cannot mutate.

use tokio::sync::watch;

use super::models::TableState;

pub(crate) struct TableStore {
    tx: watch::Sender<TableState>,
}

impl TableStore {
    pub(crate) fn new(initial: TableState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Mutate the state in place and wake every view.
    pub(crate) fn update(&self, f: impl FnOnce(&mut TableState)) {
        self.tx.send_modify(f);
    }

    pub(crate) fn read<T>(&self, selector: impl FnOnce(&TableState) -> T) -> T {
        selector(&*self.tx.borrow())
    }

    pub(crate) fn view(&self) -> TableView {
        TableView {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read-only handle on the table state.
#[derive(Clone)]
pub struct TableView {
    rx: watch::Receiver<TableState>,
}

impl TableView {
    /// Clone of the current state.
    pub fn snapshot(&self) -> TableState {
        self.rx.borrow().clone()
    }

    /// Read a single value without cloning the whole state.
    ///
    /// ```ignore
    /// let loading = view.select(|s| s.is_loading);
    /// ```
    pub fn select<T>(&self, selector: impl FnOnce(&TableState) -> T) -> T {
        selector(&*self.rx.borrow())
    }

    /// Wait until the state changes after the last [`latest`](Self::latest).
    ///
    /// Returns `false` once the controller is gone and no further change can
    /// happen.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Current state, marking it as seen.
    pub fn latest(&mut self) -> TableState {
        self.rx.borrow_and_update().clone()
    }
}
