mod error;
mod patch;
mod types;

pub use error::PayloadError;
pub use patch::AttributePatch;
pub use types::{HealthRecord, ATTRIBUTE1_FIELD, ATTRIBUTE2_FIELD, RECORD_ID_FIELD};
