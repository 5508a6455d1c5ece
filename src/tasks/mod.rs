//! Background Tasks Module
//!
//! # Tasks
//! - Cache cleanup: purges expired item snapshots at a configured interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
