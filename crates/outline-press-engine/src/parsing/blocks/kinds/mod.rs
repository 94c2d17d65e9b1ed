pub mod code_fence;
pub mod property_block;

pub use code_fence::{CodeFence, FenceEvent, FenceState, FenceTracker};
pub use property_block::{Extraction, PropertyBlock};
