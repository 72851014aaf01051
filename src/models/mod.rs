pub mod dataset;
pub mod record;
pub mod status;

pub use dataset::Dataset;
pub use record::{Field, Record, RecordKey};
pub use status::OutreachStatus;
