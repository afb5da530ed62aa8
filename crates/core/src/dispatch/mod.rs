mod dispatcher;
mod error;
mod http_mapping;
mod request;
mod response;
mod route;

pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use http_mapping::dispatch_error_to_status_code;
pub use request::RouteRequest;
pub use response::RouteResponse;
pub use route::{
    Route, CREATE_RECORD_ROUTE, DELETE_RECORD_PREFIX, GET_RECORD_ROUTE, LIST_RECORDS_ROUTE,
    UPDATE_RECORD_PREFIX,
};
