pub mod commands;
mod context;
pub mod logging;

pub use context::AppContext;
