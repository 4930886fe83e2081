pub mod formatting;
pub mod path;

pub use formatting::readable_duration;
pub use formatting::spoken_list;
