//! Frame scheduling - one repeating task, cancellable through its handle
//!
//! In the browser frames come from `requestAnimationFrame`. Native builds
//! and tests use [`ManualScheduler`], which only records requests.

/// Handle of one pending frame request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickHandle(pub i32);

/// Host mechanism that calls back once on the next display refresh
pub trait FrameScheduler {
    /// Request one callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<TickHandle>;

    /// Abort a pending request
    fn cancel_frame(&mut self, handle: TickHandle);
}

/// Scheduler that records requests and lets the caller fire them
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Vec<TickHandle>,
    cancelled: Vec<TickHandle>,
    refuse: bool,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following request fail
    pub fn refuse_requests(&mut self, refuse: bool) {
        self.refuse = refuse;
    }

    /// Requests not yet fired or cancelled
    pub fn pending(&self) -> &[TickHandle] {
        &self.pending
    }

    pub fn cancelled(&self) -> &[TickHandle] {
        &self.cancelled
    }

    /// Take the oldest pending request, as if the host fired it
    pub fn fire(&mut self) -> Option<TickHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<TickHandle> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: TickHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

#[cfg(target_arch = "wasm32")]
pub use raf::RafScheduler;

#[cfg(target_arch = "wasm32")]
mod raf {
    use super::{FrameScheduler, TickHandle};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    /// `requestAnimationFrame` driven scheduler
    pub struct RafScheduler {
        callback: Closure<dyn FnMut(f64)>,
    }

    impl RafScheduler {
        /// `on_frame` receives the host timestamp (ms)
        pub fn new(on_frame: impl FnMut(f64) + 'static) -> Self {
            Self {
                callback: Closure::new(on_frame),
            }
        }
    }

    impl FrameScheduler for RafScheduler {
        fn request_frame(&mut self) -> Option<TickHandle> {
            let window = web_sys::window()?;
            match window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
                Ok(id) => Some(TickHandle(id)),
                Err(err) => {
                    log::error!("requestAnimationFrame failed: {:?}", err);
                    None
                }
            }
        }

        fn cancel_frame(&mut self, handle: TickHandle) {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.cancel_animation_frame(handle.0) {
                    log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_fire_and_cancel() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.request_frame().expect("accepted");
        let b = scheduler.request_frame().expect("accepted");
        assert_ne!(a, b);

        scheduler.cancel_frame(b);
        assert_eq!(scheduler.pending(), &[a]);
        assert_eq!(scheduler.cancelled(), &[b]);

        assert_eq!(scheduler.fire(), Some(a));
        assert_eq!(scheduler.fire(), None);
    }

    #[test]
    fn test_manual_scheduler_refuses() {
        let mut scheduler = ManualScheduler::new();
        scheduler.refuse_requests(true);
        assert_eq!(scheduler.request_frame(), None);
        assert!(scheduler.pending().is_empty());
    }
}
