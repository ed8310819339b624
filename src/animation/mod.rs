//! Frame scheduling and the per-frame animation loop.

pub use self::animation_loop::{AnimationLoop, LoopHandle};
pub use self::clock::Clock;
pub use self::scheduler::{FrameCallback, FrameScheduler, ManualScheduler};

mod animation_loop;
mod clock;
mod scheduler;
