//! Scene store - the single thread-local home of the visualizer state
//!
//! Entry points swap in a new `Scene` value and then present it. The
//! borrow is released before rendering so a frame callback can never
//! observe a half-applied update.

use std::cell::RefCell;
use crate::animation::{AnimationClock, Command, Scene};
use crate::kinematics::spine_response_time;
use crate::renderer::{self, Viewport};

#[cfg(target_arch = "wasm32")]
type HostScheduler = crate::animation::RafScheduler;
#[cfg(not(target_arch = "wasm32"))]
type HostScheduler = crate::animation::ManualScheduler;

pub(crate) struct App {
    pub scene: Scene,
    pub clock: AnimationClock<HostScheduler>,
    pub viewport: Viewport,
}

impl App {
    fn new() -> Self {
        Self {
            scene: Scene::default(),
            clock: AnimationClock::new(host_scheduler()),
            viewport: Viewport::default(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn host_scheduler() -> HostScheduler {
    crate::animation::RafScheduler::new(|_timestamp| on_animation_frame())
}

#[cfg(not(target_arch = "wasm32"))]
fn host_scheduler() -> HostScheduler {
    crate::animation::ManualScheduler::new()
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static APP: RefCell<App> = RefCell::new(App::new());
}

/// Run `f` against the store, then present the resulting frame
pub(crate) fn update<R>(f: impl FnOnce(&mut App) -> R) -> R {
    let (result, scene, viewport) = APP.with(|cell| {
        let mut app = cell.borrow_mut();
        let result = f(&mut *app);
        (result, app.scene, app.viewport)
    });
    present(&scene, &viewport);
    result
}

/// Read-only view of the current scene and viewport
pub(crate) fn snapshot() -> (Scene, Viewport) {
    APP.with(|cell| {
        let app = cell.borrow();
        (app.scene, app.viewport)
    })
}

/// Route a UI command through the clock
pub(crate) fn dispatch(command: Command) -> Scene {
    update(|app| {
        app.scene = app.clock.dispatch(app.scene, command);
        app.scene
    })
}

/// Host frame callback: advance one tick and render, or do nothing once stopped
pub(crate) fn on_animation_frame() {
    let frame = APP.with(|cell| {
        let mut app = cell.borrow_mut();
        let app = &mut *app;
        let scene = app.clock.on_frame(app.scene)?;
        app.scene = scene;
        Some((scene, app.viewport))
    });

    if let Some((scene, viewport)) = frame {
        present(&scene, &viewport);
    }
}

/// Render the current state without changing it
pub(crate) fn render_current() {
    let (scene, viewport) = snapshot();
    present(&scene, &viewport);
}

fn present(scene: &Scene, viewport: &Viewport) {
    let pose = scene.pose();
    renderer::update_pose_metrics(
        scene.animation.is_playing(),
        scene.animation.elapsed(),
        pose.metrics(),
        spine_response_time(scene.parameters.spine_spring),
    );
    renderer::update_view_metrics(viewport.zoom());
    renderer::render_pose(&pose, viewport);
}
