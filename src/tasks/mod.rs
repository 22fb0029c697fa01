//! Background Tasks Module
//!
//! Contains background tasks that run periodically during service operation.
//!
//! # Tasks
//! - Stats reporter: logs mirror index statistics at configured intervals

mod report;

pub use report::spawn_stats_reporter;
