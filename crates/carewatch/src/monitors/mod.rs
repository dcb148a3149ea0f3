pub mod charging;
pub mod clock;
pub mod cognitive;
pub mod environment;
pub mod feeds;
pub mod warehouse;

pub use clock::{Clock, FixedClock, SystemClock};
