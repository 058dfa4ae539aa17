//! Animation clock - Stopped / Playing state machine over a frame scheduler
//!
//! While playing, each fired frame advances time by [`FRAME_STEP`] and
//! requests the next frame. Pause and reset cancel the pending frame; a
//! frame that still fires after that does nothing.

use super::scene::{Command, Scene};
use super::scheduler::{FrameScheduler, TickHandle};

/// Nominal time step per frame (~60 fps)
pub const FRAME_STEP: f64 = 0.016;

pub struct AnimationClock<S: FrameScheduler> {
    scheduler: S,
    pending: Option<TickHandle>,
}

impl<S: FrameScheduler> AnimationClock<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, pending: None }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Handle of the frame currently waiting to fire
    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    /// Apply a UI command and start or stop the frame loop accordingly
    pub fn dispatch(&mut self, scene: Scene, command: Command) -> Scene {
        let scene = scene.apply(command);
        match command {
            // First tick runs immediately; a second Play must not start a second loop
            Command::Play if self.pending.is_none() => self.tick(scene),
            Command::Pause | Command::Reset => {
                self.cancel();
                scene
            }
            _ => scene,
        }
    }

    /// Host frame callback. `Some` means time advanced and a render is due;
    /// `None` means the clock is stopped and nothing else will be scheduled.
    pub fn on_frame(&mut self, scene: Scene) -> Option<Scene> {
        self.pending = None;
        if !scene.animation.is_playing() {
            return None;
        }
        Some(self.tick(scene))
    }

    fn tick(&mut self, scene: Scene) -> Scene {
        if !scene.animation.is_playing() {
            return scene;
        }
        let scene = scene.apply(Command::Advance(FRAME_STEP));

        match self.scheduler.request_frame() {
            Some(handle) => {
                self.pending = Some(handle);
                scene
            }
            None => {
                log::warn!("⚠️ Frame request refused - stopping animation");
                scene.apply(Command::Pause)
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}
