//! In-memory [`SheetGateway`] with failure injection and call recording.
//!
//! Write semantics mirror the remote API: only the first `columns.len()` cells
//! are replaced; wider rows keep their trailing cells.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use tabsync_core::{RemoteTabState, TabName};

use crate::error::GatewayError;
use crate::gateway::SheetGateway;

/// One recorded `write_header_row` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteCall {
    pub spreadsheet_id: String,
    pub tab: TabName,
    pub columns: Vec<String>,
}

#[derive(Debug, Default)]
pub struct RecordingGateway {
    tabs: RefCell<BTreeMap<TabName, Vec<String>>>,
    fetch_failures: BTreeMap<TabName, GatewayError>,
    write_failures: BTreeMap<TabName, GatewayError>,
    fetches: Cell<usize>,
    writes: RefCell<Vec<WriteCall>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a tab whose first row holds `header`.
    pub fn with_tab<I, S>(self, name: &str, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tabs.borrow_mut().insert(
            TabName::from(name),
            header.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Make every fetch of `name` fail with `err`.
    pub fn failing_fetch(mut self, name: &str, err: GatewayError) -> Self {
        self.fetch_failures.insert(TabName::from(name), err);
        self
    }

    /// Make every write to `name` fail with `err`.
    pub fn failing_write(mut self, name: &str, err: GatewayError) -> Self {
        self.write_failures.insert(TabName::from(name), err);
        self
    }

    /// Current first row of `name`, if the tab exists.
    pub fn header(&self, name: &str) -> Option<Vec<String>> {
        self.tabs.borrow().get(&TabName::from(name)).cloned()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub fn writes(&self) -> Vec<WriteCall> {
        self.writes.borrow().clone()
    }
}

impl SheetGateway for RecordingGateway {
    fn fetch_header_row(
        &self,
        _spreadsheet_id: &str,
        tab: &TabName,
    ) -> Result<RemoteTabState, GatewayError> {
        self.fetches.set(self.fetches.get() + 1);
        if let Some(err) = self.fetch_failures.get(tab) {
            return Err(err.clone());
        }
        Ok(match self.tabs.borrow().get(tab) {
            Some(row) => RemoteTabState::with_header(row.iter().cloned()),
            None => RemoteTabState::missing(),
        })
    }

    fn write_header_row(
        &self,
        spreadsheet_id: &str,
        tab: &TabName,
        columns: &[String],
    ) -> Result<(), GatewayError> {
        self.writes.borrow_mut().push(WriteCall {
            spreadsheet_id: spreadsheet_id.to_string(),
            tab: tab.clone(),
            columns: columns.to_vec(),
        });
        if let Some(err) = self.write_failures.get(tab) {
            return Err(err.clone());
        }

        let mut tabs = self.tabs.borrow_mut();
        let Some(row) = tabs.get_mut(tab) else {
            return Err(GatewayError::Status {
                code: 400,
                message: format!("Unable to parse range: '{tab}'!A1"),
            });
        };
        for (i, value) in columns.iter().enumerate() {
            match row.get_mut(i) {
                Some(cell) => *cell = value.clone(),
                None => row.push(value.clone()),
            }
        }
        Ok(())
    }
}
