pub mod fallback;
pub mod ping;

pub use fallback::not_found;
pub use ping::{delete_ping, get_ping, post_ping};
