//! Cancel-and-replace `requestAnimationFrame` scheduling.
//!
//! At most one frame request is outstanding. A new request cancels the
//! previous one first, so a burst of input events costs one callback.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type FrameJob = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// The outstanding request id and the closure it will invoke.
#[derive(Default)]
pub struct FrameScheduler {
    pending: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

pub type SharedFrameScheduler = Rc<RefCell<FrameScheduler>>;

impl FrameScheduler {
    fn cancel(&mut self, window: &web_sys::Window) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame({id}) failed: {e:?}");
            }
        }
    }
}

fn run_job(job: &FrameJob) {
    let run = job.borrow_mut().take();
    if let Some(run) = run {
        run();
    }
}

/// Replace any outstanding frame request with one that runs `on_frame`.
///
/// Runs `on_frame` immediately when no window is available or the request fails.
pub fn schedule_frame<F>(scheduler: &SharedFrameScheduler, on_frame: F)
where
    F: FnOnce() + 'static,
{
    let job: FrameJob = Rc::new(RefCell::new(Some(Box::new(on_frame))));
    let Some(window) = web_sys::window() else {
        run_job(&job);
        return;
    };
    let mut slot = scheduler.borrow_mut();
    slot.cancel(&window);

    let weak: Weak<RefCell<FrameScheduler>> = Rc::downgrade(scheduler);
    let job_for_cb = Rc::clone(&job);
    let callback = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
        if let Some(scheduler) = weak.upgrade() {
            if let Ok(mut slot) = scheduler.try_borrow_mut() {
                slot.pending = None;
            }
        }
        run_job(&job_for_cb);
    });

    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => {
            slot.pending = Some(id);
            // Replacing drops the previous closure, whose request was cancelled above.
            slot.callback = Some(callback);
        }
        Err(e) => {
            log::warn!("requestAnimationFrame failed: {e:?}");
            drop(slot);
            run_job(&job);
        }
    }
}
