//! Value objects

mod viewer_key;

pub use viewer_key::{ViewerKey, ViewerKeyError};
