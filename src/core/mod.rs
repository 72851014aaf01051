pub mod backup;
pub mod gate;
pub mod locator;
pub mod log;
pub mod prompt;
pub mod session;
pub mod sync;
pub mod views;
pub mod workflow;
