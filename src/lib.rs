pub mod models;
pub mod error;
pub mod config;
pub mod api;
pub mod state;
pub mod card;
pub mod dashboard;

#[cfg(test)]
mod test_support;
