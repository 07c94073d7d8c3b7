//! Date-range filtering and attendance aggregation.
//!
//! Pure computations over a materialized snapshot of employees and records.
//! Fetching that snapshot is the caller's job (see [`crate::db::Store`]).

pub mod aggregate;
pub mod filter;

pub use aggregate::{Aggregation, StatusCounts, attendance_rate, summarize, summarize_per_employee};
pub use filter::{DateRange, filter_records, in_range};
