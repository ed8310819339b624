use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Work to run on the next display refresh.
pub type FrameCallback = Box<dyn FnOnce()>;

/// The host's per-frame scheduling primitive (`requestAnimationFrame` on the web).
pub trait FrameScheduler {
    /// Runs `callback` once, at the next display refresh.
    fn request_frame(&self, callback: FrameCallback);
}

/// A scheduler whose refreshes are driven by the host calling [`run_frame`](Self::run_frame).
///
/// Useful for headless hosts, offline rendering and tests.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<FrameCallback>>,
    frames: Cell<u64>,
}

impl ManualScheduler {
    /// Creates a scheduler with nothing queued.
    pub fn new() -> ManualScheduler {
        ManualScheduler::default()
    }

    /// Number of callbacks waiting for the next refresh.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Number of refreshes run so far.
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    /// Simulates one display refresh: runs the callbacks queued so far.
    ///
    /// Callbacks requested while running wait for the next refresh. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let due: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        let count = due.len();

        for callback in due {
            callback();
        }

        self.frames.set(self.frames.get() + 1);
        count
    }

    /// Runs refreshes until nothing is queued or `max_frames` ran, sleeping so that refreshes
    /// are at least `min_frame_duration` apart.
    ///
    /// Returns the number of refreshes run.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn run(&self, max_frames: u64, min_frame_duration: Option<Duration>) -> u64 {
        let mut ran = 0;

        while ran < max_frames && self.pending() > 0 {
            let start = std::time::Instant::now();
            let _ = self.run_frame();
            ran += 1;

            if let Some(dur) = min_frame_duration {
                let elapsed = start.elapsed();
                if elapsed < dur {
                    std::thread::sleep(dur - elapsed);
                }
            }
        }

        ran
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push_back(callback);
    }
}
