//! Port definitions for the console client.

pub mod outbound;
