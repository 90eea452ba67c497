//! API route declarations (e.g., /api/*)

pub mod log_routes;
