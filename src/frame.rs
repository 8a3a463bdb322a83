use crate::core::StopGate;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that runs until dropped.
///
/// The tick closure holds a handle to its own slot so it can reschedule
/// itself. Dropping the loop raises the stop flag, cancels the outstanding
/// frame request and empties the slot, which breaks that cycle.
pub struct FrameLoop {
    gate: StopGate,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
        }
    }
}

/// Call `frame` once per display refresh, starting with the next one.
/// Callers that need an immediate frame run it before starting the loop.
pub fn start_loop(mut frame: impl FnMut() + 'static) -> FrameLoop {
    let gate = StopGate::new();
    let pending = Rc::new(Cell::new(None::<i32>));
    let tick: TickSlot = Rc::new(RefCell::new(None));

    let gate_tick = gate.clone();
    let pending_tick = pending.clone();
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if gate_tick.run_frame(&mut frame) {
            request_frame(&tick_clone, &pending_tick);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending);
    FrameLoop {
        gate,
        pending,
        tick,
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.gate.stop();
        if let (Some(handle), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        self.tick.borrow_mut().take();
    }
}
