mod error;
mod record;
mod tabular_batch;

pub use error::InputError;
pub use record::{parse_record, record_for_schema, record_from_value};
pub use tabular_batch::{TabularBatch, TabularRecord};
