use crate::constants::{CAMERA_FOV_DEG, CAMERA_Z, RESIZE_DEBOUNCE_MS};
use crate::core::{
    aspect_ratio, Camera, HelixError, MotionDriver, SceneLayout, VisibilityGate, WidgetConfig,
    WidgetStage,
};
use crate::dom::{self, EventListener};
use crate::events::pointer;
use crate::events::visibility::ViewportObserver;
use crate::frame::{FrameContext, FrameLoop};
use crate::render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Build the widget configuration: defaults, then the container's `data-*`
/// overrides, then the reduced-motion preference and device limits.
pub fn load_config(document: &web::Document) -> (WidgetConfig, Option<web::HtmlElement>) {
    let mut config = WidgetConfig::default();
    let container = dom::query(document, &config.container_selector)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if let Some(el) = &container {
        for err in config.apply_overrides(|key| el.get_attribute(&format!("data-{key}"))) {
            log::warn!("[helix] {err}; keeping default");
        }
    }
    if dom::media_matches(REDUCED_MOTION_QUERY) {
        log::info!("[helix] reduced motion requested");
        config.apply_reduced_motion();
    }
    if let Some(window) = web::window() {
        let cores = window.navigator().hardware_concurrency();
        config.apply_device_limits(dom::viewport_width(), cores);
    }
    (config, container)
}

/// The hero helix. Nothing is built until the container first scrolls into
/// view; afterwards visibility only starts and stops the frame loop.
pub struct HelixWidget {
    container: web::HtmlElement,
    config: WidgetConfig,
    stage: Cell<WidgetStage>,
    looper: RefCell<Option<FrameLoop>>,
    visible: Cell<bool>,
    observer: RefCell<Option<ViewportObserver>>,
    listeners: RefCell<Vec<EventListener>>,
    resize: dom::Debounce,
}

impl HelixWidget {
    pub fn mount(
        container: Option<web::HtmlElement>,
        config: WidgetConfig,
    ) -> anyhow::Result<Rc<Self>> {
        let container = container.ok_or(HelixError::MissingContainer)?;
        let widget = Rc::new(Self {
            container,
            config,
            stage: Cell::new(WidgetStage::Waiting),
            looper: RefCell::new(None),
            visible: Cell::new(false),
            observer: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            resize: dom::Debounce::default(),
        });

        let weak = Rc::downgrade(&widget);
        let observer = ViewportObserver::new(0.0, None, move |entry, _| {
            if let Some(w) = weak.upgrade() {
                w.on_visibility(entry.is_intersecting());
            }
        })?;
        observer.observe(&widget.container);
        *widget.observer.borrow_mut() = Some(observer);

        if let Some(window) = web::window() {
            let weak = Rc::downgrade(&widget);
            let on_resize = EventListener::new(&window, "resize", move |_| {
                if let Some(w) = weak.upgrade() {
                    w.schedule_resize();
                }
            });
            widget.listeners.borrow_mut().push(on_resize);

            // The pagehide listener keeps the widget alive for the page lifetime
            let owner = widget.clone();
            EventListener::new(&window, "pagehide", move |_| owner.teardown()).forget();
        }
        Ok(widget)
    }

    fn on_visibility(self: &Rc<Self>, visible: bool) {
        self.visible.set(visible);
        let mut stage = self.stage.get();
        let start_build = stage.request_build(visible);
        self.stage.set(stage);
        if start_build {
            self.start_build();
        } else if let Some(looper) = self.looper.borrow().as_ref() {
            looper.set_visible(visible);
        }
    }

    fn start_build(self: &Rc<Self>) {
        let widget = self.clone();
        spawn_local(async move {
            let result = widget.build().await;
            let mut stage = widget.stage.get();
            let keep = stage.finish_build(result.is_ok());
            widget.stage.set(stage);
            match result {
                Ok(looper) if keep => {
                    looper.set_visible(widget.visible.get());
                    *widget.looper.borrow_mut() = Some(looper);
                }
                Ok(looper) => looper.dispose(),
                Err(_) if stage == WidgetStage::TornDown => {}
                Err(e) if e.downcast_ref::<HelixError>().is_some() => {
                    log::warn!("[helix] not built: {e}");
                }
                Err(e) => log::error!("[helix] build failed: {:?}", e),
            }
        });
    }

    async fn build(&self) -> anyhow::Result<FrameLoop> {
        let (width, height) = dom::element_size(&self.container);
        let aspect = aspect_ratio(width, height)?;

        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::set_style(&canvas, "width", "100%");
        dom::set_style(&canvas, "height", "100%");
        dom::set_style(&canvas, "display", "block");
        self.container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas);

        let layout = SceneLayout::build(&self.config.helix, self.config.palette);
        let gpu = match GpuState::new(&canvas, &layout).await {
            Ok(gpu) => gpu,
            Err(e) => {
                canvas.remove();
                return Err(e);
            }
        };
        // The page may have been hidden while the adapter was requested
        if !self.stage.get().build_wanted() {
            gpu.dispose();
            canvas.remove();
            anyhow::bail!("torn down during build");
        }
        log::info!(
            "[helix] built {} samples per strand, {} cross-links",
            layout.strands.len(),
            layout.link_count()
        );

        let camera = Camera::new(CAMERA_Z, CAMERA_FOV_DEG.to_radians(), aspect);
        let ctx = FrameContext::new(
            MotionDriver::new(self.config.motion),
            VisibilityGate::new(self.config.target_fps),
            layout,
            camera,
            gpu,
            canvas,
        );
        let looper = FrameLoop::new(ctx);
        self.listeners
            .borrow_mut()
            .extend(pointer::wire_pointer(&self.container, &looper.ctx));
        dom::set_class(&self.container, "loaded", true);
        Ok(looper)
    }

    /// Resizes settle for `RESIZE_DEBOUNCE_MS` before the canvas follows.
    fn schedule_resize(self: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(self);
        self.resize.call(RESIZE_DEBOUNCE_MS, move || {
            if let Some(w) = weak.upgrade() {
                w.apply_resize();
            }
        });
    }

    fn apply_resize(&self) {
        if let Some(looper) = self.looper.borrow().as_ref() {
            let (width, height) = dom::element_size(&self.container);
            looper.ctx.borrow_mut().resize(width, height);
        }
    }

    /// Remove listeners, stop the loop and release GPU resources.
    pub fn teardown(&self) {
        self.observer.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        let mut stage = self.stage.get();
        stage.tear_down();
        self.stage.set(stage);
        if let Some(looper) = self.looper.borrow_mut().take() {
            looper.dispose();
        }
        log::info!("[helix] torn down");
    }
}
