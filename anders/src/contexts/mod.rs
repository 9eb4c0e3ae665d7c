#![allow(missing_docs)]
pub mod frame_context;
pub mod input_context;
pub mod random_context;

pub use frame_context::{FrameContext, FrameReport, FrameStats};
pub use input_context::{held, InputContext, KeyState, KeyToggle, MouseLook};
pub use random_context::RandomContext;
