mod repos;
mod time;

pub use repos::InMemoryStore;
pub use time::{FixedClock, fixed_now};
