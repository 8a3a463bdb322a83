use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for a repeating frame task.
///
/// Clones observe the same flag. The owner raises it on teardown; the task
/// checks it before running a frame and again before rescheduling.
#[derive(Clone, Debug, Default)]
pub struct StopGate {
    stopped: Rc<Cell<bool>>,
}

impl StopGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Run one frame unless stopped. Returns whether the next frame should be
    /// requested; a stop raised inside `frame` suppresses the reschedule.
    pub fn run_frame(&self, frame: impl FnOnce()) -> bool {
        if self.is_stopped() {
            return false;
        }
        frame();
        !self.is_stopped()
    }
}
