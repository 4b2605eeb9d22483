pub mod api;
pub mod background;
pub mod live_feed;

pub use api::*;
pub use background::*;
pub use live_feed::*;
