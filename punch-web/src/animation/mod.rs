//! Animation module - play state, scene updates and the frame clock
//!
//! Re-exports only. All logic in submodules.

mod state;
mod scene;
mod scheduler;
mod clock;

pub use state::AnimationState;
pub use scene::{Command, Scene};
pub use scheduler::{FrameScheduler, ManualScheduler, TickHandle};
#[cfg(target_arch = "wasm32")]
pub use scheduler::RafScheduler;
pub use clock::{AnimationClock, FRAME_STEP};
