//! HRMS Lite: employee roster and daily attendance over a JSON API.

pub mod api;
pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;
pub mod stats;
pub mod utils;
