pub mod app_state;
pub mod backends;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod services;

#[cfg(test)]
pub mod test_utils;
