pub mod csv_io;
pub mod dataset_store;
pub mod remote;

pub use dataset_store::{DatasetStore, LoadSource};
pub use remote::{DirStore, HttpStore, RemoteStore};
