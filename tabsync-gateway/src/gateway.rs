//! The spreadsheet capability consumed by the reconciler.

use tabsync_core::{RemoteTabState, TabName};

use crate::error::GatewayError;

/// Two remote operations on the first row of a named tab.
///
/// Implementations must report a missing tab as `Ok(RemoteTabState { exists:
/// false, .. })`, never as an error.
pub trait SheetGateway {
    fn fetch_header_row(
        &self,
        spreadsheet_id: &str,
        tab: &TabName,
    ) -> Result<RemoteTabState, GatewayError>;

    /// Overwrite cells `1..=columns.len()` of the first row with literal text.
    /// Cells to the right are left untouched.
    fn write_header_row(
        &self,
        spreadsheet_id: &str,
        tab: &TabName,
        columns: &[String],
    ) -> Result<(), GatewayError>;
}

impl<G: SheetGateway + ?Sized> SheetGateway for &G {
    fn fetch_header_row(
        &self,
        spreadsheet_id: &str,
        tab: &TabName,
    ) -> Result<RemoteTabState, GatewayError> {
        (**self).fetch_header_row(spreadsheet_id, tab)
    }

    fn write_header_row(
        &self,
        spreadsheet_id: &str,
        tab: &TabName,
        columns: &[String],
    ) -> Result<(), GatewayError> {
        (**self).write_header_row(spreadsheet_id, tab, columns)
    }
}

impl<G: SheetGateway + ?Sized> SheetGateway for Box<G> {
    fn fetch_header_row(
        &self,
        spreadsheet_id: &str,
        tab: &TabName,
    ) -> Result<RemoteTabState, GatewayError> {
        (**self).fetch_header_row(spreadsheet_id, tab)
    }

    fn write_header_row(
        &self,
        spreadsheet_id: &str,
        tab: &TabName,
        columns: &[String],
    ) -> Result<(), GatewayError> {
        (**self).write_header_row(spreadsheet_id, tab, columns)
    }
}
