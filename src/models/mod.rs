pub mod companion;
pub mod duration;
pub mod mood;
pub mod spot;

pub use companion::Companion;
pub use duration::DurationBucket;
pub use mood::Mood;
pub use spot::Spot;
