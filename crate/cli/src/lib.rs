pub mod actions;
pub mod commands;
pub mod config;
pub mod error;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic_in_result_fn, clippy::indexing_slicing)]
mod tests;
