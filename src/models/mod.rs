pub mod record;
pub mod timestamp;

pub use record::Record;
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp};
