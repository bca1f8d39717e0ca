use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{status_label, Shape, VisualEvent, VisualEvents, VisualizationState, MAX_FRAME_DT_SEC};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, overlay, render};

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<VisualizationState>>,
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub overlay: web::Element,
    pub status: web::Element,
    pub compact: bool,
    pub events: VisualEvents,
    pub started: Instant,
    pub last_instant: Instant,
    pub status_text: String,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.events.clear();
        let mut scene = self.scene.borrow_mut();
        if let Err(e) = scene.tick(dt, &mut self.events) {
            log::error!("frame update failed: {e}");
        }
        for ev in &self.events {
            if let VisualEvent::SectionChanged(i) = *ev {
                overlay::show_section(&self.overlay, Shape::from_index(i), self.compact);
            }
        }

        let label = status_label(
            scene.current_shape(),
            scene.auto_advance(),
            self.compact,
            scene.is_morphing(),
        );
        if label != self.status_text {
            overlay::set_status(&self.status, &label);
            self.status_text = label;
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(&scene, self.started.elapsed().as_secs_f32()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                dom::sync_canvas_backing_size(&self.canvas);
            }
            Err(e) => log::warn!("surface error: {e:?}"),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {e:?}");
        }
    }
}
