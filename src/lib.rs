//! Library exports for hello-backend, shared between the binary and tests.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod startup;
pub mod utils;
