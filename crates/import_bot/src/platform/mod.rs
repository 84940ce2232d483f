pub mod app;
pub mod config;
mod dispatcher;
mod effects;
#[cfg(test)]
mod testing;
mod ui;
