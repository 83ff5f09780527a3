mod health;
mod url;

pub use health::{health_handler, index_handler};
pub use url::{redirect_handler, shorten_handler, ShortenPayload};
