//! Route table for the record dispatcher.
//!
//! Route keys combine the HTTP verb with the path template, e.g.
//! `GET /health-records/{recordId}`. Matching is a pure function of the key.

pub const LIST_RECORDS_ROUTE: &str = "GET /health-records";
pub const GET_RECORD_ROUTE: &str = "GET /health-records/{recordId}";
pub const CREATE_RECORD_ROUTE: &str = "POST /health-records";
pub const UPDATE_RECORD_PREFIX: &str = "PUT /health-records";
pub const DELETE_RECORD_PREFIX: &str = "DELETE /health-records";

/// Action selected for a route key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ListRecords,
    GetRecord,
    CreateRecord,
    UpdateRecord,
    DeleteRecord,
}

impl Route {
    /// Matches a route key against the table, first match wins.
    ///
    /// The three read/create keys match exactly. Update and delete match any
    /// key starting with their prefix.
    pub fn from_route_key(route_key: &str) -> Option<Self> {
        match route_key {
            LIST_RECORDS_ROUTE => Some(Self::ListRecords),
            GET_RECORD_ROUTE => Some(Self::GetRecord),
            CREATE_RECORD_ROUTE => Some(Self::CreateRecord),
            key if key.starts_with(UPDATE_RECORD_PREFIX) => Some(Self::UpdateRecord),
            key if key.starts_with(DELETE_RECORD_PREFIX) => Some(Self::DeleteRecord),
            _ => None,
        }
    }
}
