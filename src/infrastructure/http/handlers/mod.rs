//! HTTP Handlers

mod ping;
mod prompt;
mod removal_words;
mod script;

pub use ping::*;
pub use prompt::*;
pub use removal_words::*;
pub use script::*;
