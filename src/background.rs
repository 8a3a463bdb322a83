use crate::constants::CANVAS_ID;
use crate::core::{gradient_stops, resize_target, AnimationClock, ViewportSize};
use crate::dom::{self, EventListener};
use crate::frame::{self, FrameLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Paints the two-stop color-cycling gradient onto a 2D canvas.
pub struct GradientPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    clock: AnimationClock,
}

impl GradientPainter {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext(2d): {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            clock: AnimationClock::new(),
        })
    }

    fn surface_size(&self) -> ViewportSize {
        ViewportSize::new(self.canvas.width(), self.canvas.height())
    }

    /// Match the canvas backing size to `viewport`. Returns false when it
    /// already matched and nothing was written.
    pub fn resize_to(&self, viewport: ViewportSize) -> bool {
        match resize_target(self.surface_size(), viewport) {
            Some(size) => {
                self.canvas.set_width(size.width);
                self.canvas.set_height(size.height);
                log::debug!("[background] canvas {}x{}", size.width, size.height);
                true
            }
            None => false,
        }
    }

    /// Advance the clock one step and repaint the full surface.
    pub fn paint(&mut self) -> Result<(), JsValue> {
        let t = self.clock.advance();
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        for (offset, color) in gradient_stops(t) {
            gradient.add_color_stop(offset, &color)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        Ok(())
    }
}

/// The mounted background: repaint loop plus the window resize hook.
/// Dropping it stops the loop and unregisters the listener.
pub struct Background {
    _frames: FrameLoop,
    _resize: EventListener,
}

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Background> {
    let canvas = dom::canvas_by_id(document, CANVAS_ID)?;
    let painter = Rc::new(RefCell::new(GradientPainter::new(canvas)?));
    painter.borrow().resize_to(dom::viewport_size(window));

    let painter_resize = painter.clone();
    let window_resize = window.clone();
    let resize = EventListener::new(window, "resize", move |_| {
        painter_resize
            .borrow()
            .resize_to(dom::viewport_size(&window_resize));
    })?;

    // First frame goes out synchronously so the canvas is never blank
    if let Err(e) = painter.borrow_mut().paint() {
        log::error!("paint error: {:?}", e);
    }

    let painter_frame = painter.clone();
    let frames = frame::start_loop(move || {
        if let Err(e) = painter_frame.borrow_mut().paint() {
            log::error!("paint error: {:?}", e);
        }
    });

    Ok(Background {
        _frames: frames,
        _resize: resize,
    })
}
