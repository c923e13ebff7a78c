//! Client side of the restvpn route and tunnel management service.
//!
//! Each binary maps one command line invocation onto exactly one HTTP call
//! and prints the response body untouched.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod resource;
