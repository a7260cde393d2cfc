use crate::constants::{CAMERA_Z, FRAME_BUDGET_MS};
use crate::core::{
    aspect_ratio, Camera, GateTransition, InstanceData, MotionDriver, SceneLayout, VisibilityGate,
};
use crate::dom;
use crate::render::{FrameView, GpuState};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: MotionDriver,
    pub gate: VisibilityGate,
    layout: SceneLayout,
    camera: Camera,
    gpu: Option<GpuState>,
    canvas: web::HtmlCanvasElement,

    // Reused per frame
    spheres: Vec<InstanceData>,
    links: Vec<InstanceData>,
}

impl FrameContext {
    pub fn new(
        driver: MotionDriver,
        gate: VisibilityGate,
        layout: SceneLayout,
        camera: Camera,
        gpu: GpuState,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        let spheres = Vec::with_capacity(layout.sphere_count());
        let links = Vec::with_capacity(layout.link_count());
        Self {
            driver,
            gate,
            layout,
            camera,
            gpu: Some(gpu),
            canvas,
            spheres,
            links,
        }
    }

    /// Advance motion and draw one accepted frame.
    pub fn frame(&mut self, now_ms: f64, elapsed_sec: f64) {
        let started = Instant::now();
        _ = self.driver.advance(now_ms / 1000.0, elapsed_sec);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        self.layout
            .write_sphere_instances(&self.driver, &mut self.spheres);
        self.layout.write_link_instances(&self.driver, &mut self.links);
        gpu.upload_instances(&self.spheres, &self.links);

        self.camera.eye = self.driver.camera_eye(CAMERA_Z);
        let view = FrameView {
            view_proj: self.camera.view_proj(),
            group: self.driver.group_transform(),
            eye: self.camera.eye,
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&view) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }

        let cost_ms = started.elapsed().as_secs_f64() * 1000.0;
        if cost_ms > FRAME_BUDGET_MS {
            log::warn!("[helix] slow frame: {:.1} ms", cost_ms);
        }
    }

    /// Container changed size (CSS px).
    pub fn resize(&mut self, width: f64, height: f64) {
        dom::sync_canvas_backing_size(&self.canvas);
        match aspect_ratio(width, height) {
            Ok(aspect) => self.camera.aspect = aspect,
            Err(e) => log::warn!("[helix] resize ignored: {e}"),
        }
    }

    fn release_gpu(&mut self) {
        if let Some(gpu) = self.gpu.take() {
            gpu.dispose();
        }
    }
}

/// The `requestAnimationFrame` loop, driven by the visibility gate.
#[derive(Clone)]
pub struct FrameLoop {
    pub ctx: Rc<RefCell<FrameContext>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Self {
        let this = Self {
            ctx: Rc::new(RefCell::new(ctx)),
            tick: Rc::new(RefCell::new(None)),
            raf_id: Rc::new(Cell::new(None)),
        };
        let looper = this.clone();
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            looper.on_frame(now_ms);
        }) as Box<dyn FnMut(f64)>));
        this
    }

    pub fn set_visible(&self, visible: bool) {
        let transition = self.ctx.borrow_mut().gate.on_visibility(visible);
        match transition {
            GateTransition::Start => {
                log::info!("[gate] start");
                self.schedule();
            }
            GateTransition::Stop => {
                self.cancel();
                log::info!("[gate] stop");
            }
            GateTransition::Unchanged => {}
        }
    }

    /// Stop the loop, break the closure cycle and free GPU resources.
    pub fn dispose(&self) {
        self.ctx.borrow_mut().gate.on_visibility(false);
        self.cancel();
        self.ctx.borrow_mut().release_gpu();
        drop(self.tick.borrow_mut().take());
    }

    fn on_frame(&self, now_ms: f64) {
        self.raf_id.set(None);
        let again = {
            let mut ctx = self.ctx.borrow_mut();
            if let Some(elapsed) = ctx.gate.frame_fired(now_ms) {
                ctx.frame(now_ms, elapsed);
            }
            ctx.gate.wants_frame()
        };
        if again {
            self.schedule();
        }
    }

    fn schedule(&self) {
        if !self.ctx.borrow().gate.wants_frame() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(callback) = tick.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.raf_id.set(Some(id));
                self.ctx.borrow_mut().gate.frame_scheduled();
            }
            Err(e) => log::error!("[gate] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}
