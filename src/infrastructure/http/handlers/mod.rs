//! HTTP Handlers

mod ping;
mod post;

pub use ping::*;
pub use post::*;
