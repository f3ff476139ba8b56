pub mod commands;
pub mod context;
pub mod logging;
pub mod pacer;
pub mod presenter;
pub mod repl;

pub use context::CliContext;
pub use repl::readline;
