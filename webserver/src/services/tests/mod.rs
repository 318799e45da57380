//! Service tests for the forum webserver

pub mod helpers;
