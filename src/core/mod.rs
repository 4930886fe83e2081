pub mod codec;
pub mod interval;
pub mod store;
pub mod termination;
pub mod total;
pub mod validate;

pub use interval::{Mutation, begin_interval, end_interval};
pub use total::{Tally, total, total_duration};
pub use validate::{Entry, Filter, Scan, read_entries};
