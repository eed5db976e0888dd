//! Command Handlers 实现

mod post_handlers;

pub use post_handlers::*;
