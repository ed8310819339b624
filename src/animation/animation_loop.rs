use log::{error, info, trace, warn};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::animation::{Clock, FrameScheduler};
use crate::error::RenderError;
use crate::renderer::{Controls, Renderer3d};
use crate::scene::SceneComposer;

/// Handle to a running [`AnimationLoop`].
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl LoopHandle {
    /// Stops the loop. The frame already requested from the host still fires but does nothing.
    pub fn cancel(&self) {
        self.running.set(false);
    }

    /// `false` once the loop was cancelled or stopped on a render error.
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Number of frames rendered successfully so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames.get()
    }
}

/// Per-frame driver: moves the lights, updates the controls and renders.
///
/// Each frame requests the next one from the [`FrameScheduler`], so the loop runs as long as
/// the host keeps refreshing. A failed render stops it.
pub struct AnimationLoop {
    composer: Rc<RefCell<SceneComposer>>,
    renderer: Rc<RefCell<dyn Renderer3d>>,
    controls: RefCell<Option<Box<dyn Controls>>>,
    scheduler: Rc<dyn FrameScheduler>,
    clock: Cell<Clock>,
    // Bumped on every start; frames requested by an earlier start are dropped.
    epoch: Cell<u64>,
    running: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl AnimationLoop {
    /// Creates a stopped loop.
    pub fn new(
        composer: Rc<RefCell<SceneComposer>>,
        renderer: Rc<RefCell<dyn Renderer3d>>,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> AnimationLoop {
        AnimationLoop {
            composer,
            renderer,
            controls: RefCell::new(None),
            scheduler,
            clock: Cell::new(Clock::start()),
            epoch: Cell::new(0),
            running: Rc::new(Cell::new(false)),
            frames: Rc::new(Cell::new(0)),
        }
    }

    /// Sets the interactive controls updated before each render.
    pub fn with_controls(self, controls: Box<dyn Controls>) -> Self {
        *self.controls.borrow_mut() = Some(controls);
        self
    }

    /// A handle observing this loop.
    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            running: self.running.clone(),
            frames: self.frames.clone(),
        }
    }

    /// Starts the clock and renders the first frame right away.
    ///
    /// Starting a loop that already runs does nothing besides returning its handle.
    pub fn start(self: &Rc<Self>) -> LoopHandle {
        if self.running.get() {
            warn!("The animation loop is already running.");
            return self.handle();
        }

        info!("Starting the animation loop.");
        self.clock.set(Clock::start());
        self.epoch.set(self.epoch.get() + 1);
        self.running.set(true);
        self.tick(self.epoch.get());
        self.handle()
    }

    fn tick(self: &Rc<Self>, epoch: u64) {
        if !self.running.get() || epoch != self.epoch.get() {
            return;
        }

        let mut clock = self.clock.get();
        let elapsed = clock.elapsed_time();
        self.clock.set(clock);
        trace!("Frame at {:.3}s (+{:.4}s)", elapsed, clock.delta_time());

        match self.frame_at(elapsed) {
            Ok(_) => {
                self.frames.set(self.frames.get() + 1);
                let this = self.clone();
                self.scheduler.request_frame(Box::new(move || this.tick(epoch)));
            }
            Err(e) => {
                error!("Rendering failed, stopping the animation loop: {}", e);
                self.running.set(false);
            }
        }
    }

    /// Runs one frame as if `elapsed` seconds had passed since start.
    ///
    /// Returns the orbit angle the lights were moved to.
    pub fn frame_at(&self, elapsed: f32) -> Result<f32, RenderError> {
        let mut composer = self.composer.borrow_mut();
        let angle = composer.update_lights(elapsed);

        if let Some(controls) = self.controls.borrow_mut().as_mut() {
            controls.update(composer.camera_mut());
        }

        self.renderer
            .borrow_mut()
            .render(composer.scene(), composer.camera())?;

        Ok(angle)
    }
}
