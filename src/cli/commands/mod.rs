pub mod check;
mod context;
pub mod init;
pub mod lookup;
pub mod resolve;

pub use context::CommandContext;
