use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    Ok((window, document))
}

/// CSS pixel size of the browser viewport.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    (px(window.inner_width()), px(window.inner_height()))
}

/// Attach `handler` for `kind` events on `target`, downcasting to `E`.
/// Non-passive listeners may call `prevent_default`.
pub fn listen<E>(
    target: &web::EventTarget,
    kind: &str,
    passive: bool,
    mut handler: impl FnMut(E) + 'static,
) where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("could not listen for {kind}: {e:?}");
    }
    closure.forget();
}

/// Look up `#id`, creating a `<div>` under `<body>` when the page lacks one.
pub fn ensure_div(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(id) {
        return Ok(el);
    }
    let js_err = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{e:?}");
    let el = document.create_element("div").map_err(js_err)?;
    el.set_id(id);
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(&el).map_err(js_err)?;
    Ok(el)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        canvas.set_width(((rect.width() * dpr) as u32).max(1));
        canvas.set_height(((rect.height() * dpr) as u32).max(1));
    }
}
