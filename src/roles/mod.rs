//! Role assignment.
//!
//! `Assignment` is built once per round from the roster and answers
//! case-insensitive role queries until the round is reset.

pub mod assignment;
pub mod status;

pub use assignment::Assignment;
pub use status::RoleStatus;
