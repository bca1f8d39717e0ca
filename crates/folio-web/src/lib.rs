#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{is_compact_width, BackgroundParams, FolioConfig, VisualEvents, VisualizationState};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// `?particles=8000&auto=off` style overrides from the page URL.
fn config_from_query(window: &web::Window, compact: bool) -> anyhow::Result<FolioConfig> {
    let search = window.location().search().unwrap_or_default();
    let params = web::UrlSearchParams::new_with_str(&search)
        .map_err(|e| anyhow::anyhow!("bad query string: {e:?}"))?;
    let base = if compact {
        FolioConfig::default().mobile_profile()
    } else {
        FolioConfig::default()
    };
    Ok(base.with_overrides(|key| params.get(key))?)
}

async fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas = canvas.clone();
        dom::listen(window.as_ref(), "resize", true, move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas);
        });
    }

    let compact = is_compact_width(dom::viewport_size(&window).0);
    let cfg = config_from_query(&window, compact)?;
    log::info!(
        "{} particles, auto-advance {}, compact layout {}",
        cfg.particle_count,
        cfg.auto_advance,
        compact
    );
    let scene = Rc::new(RefCell::new(VisualizationState::new(&cfg)?));

    let overlay_el = dom::ensure_div(&document, overlay::OVERLAY_ID)?;
    let status_el = dom::ensure_div(&document, overlay::STATUS_ID)?;
    overlay::show_section(&overlay_el, scene.borrow().current_shape(), compact);

    let background = if compact {
        BackgroundParams::default().compact()
    } else {
        BackgroundParams::default()
    };
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas, &cfg, background).await?;

    events::wire_desktop(&window, &scene);
    events::wire_touch(&window, &document, &scene);
    events::wire_motion(&window, &scene);
    events::wire_status_toggle(&status_el, &scene);

    let now = Instant::now();
    let ctx = frame::FrameContext {
        scene,
        gpu,
        canvas,
        overlay: overlay_el,
        status: status_el,
        compact,
        events: VisualEvents::new(),
        started: now,
        last_instant: now,
        status_text: String::new(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
