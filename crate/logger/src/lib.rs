//! Copyright 2024 Cosmian Tech SAS

//! Process-wide `tracing` subscriber setup shared by the workspace binaries and tests.

mod log_utils;

pub use log_utils::log_init;
