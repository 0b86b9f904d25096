//! HTML views served by the API server

pub mod handlers;
