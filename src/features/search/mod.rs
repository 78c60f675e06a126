pub mod engine;

pub use engine::Dictionary;
