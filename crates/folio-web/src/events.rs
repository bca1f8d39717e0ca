use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    client_to_ndc, nav_for_key, orientation_to_rotation, pointer_to_rotation, KeyAction,
    Navigation, ShakeDetector, SwipeTracker, VisualizationState,
};
use glam::{Vec2, Vec3};
use web_sys as web;

use crate::dom;

type Scene = Rc<RefCell<VisualizationState>>;

fn first_touch(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

fn pointer_rotation(window: &web::Window, x: f32, y: f32) -> Vec2 {
    let (w, h) = dom::viewport_size(window);
    pointer_to_rotation(client_to_ndc(x, y, w, h))
}

pub fn handle_keydown(ev: &web::KeyboardEvent, scene: &Scene) {
    if ev.repeat() {
        return;
    }
    match nav_for_key(&ev.key()) {
        Some(KeyAction::Navigate(nav)) => {
            ev.prevent_default();
            scene.borrow_mut().navigate(nav);
        }
        Some(KeyAction::ToggleAutoAdvance) => {
            ev.prevent_default();
            let on = scene.borrow_mut().toggle_auto_advance();
            log::info!("auto-advance {}", if on { "enabled" } else { "disabled" });
        }
        None => {}
    }
}

/// Mouse and keyboard.
pub fn wire_desktop(window: &web::Window, scene: &Scene) {
    {
        let scene = scene.clone();
        let w = window.clone();
        dom::listen(window.as_ref(), "mousemove", true, move |ev: web::MouseEvent| {
            let target = pointer_rotation(&w, ev.client_x() as f32, ev.client_y() as f32);
            scene.borrow_mut().set_target_rotation(target);
        });
    }
    {
        let scene = scene.clone();
        dom::listen(window.as_ref(), "keydown", false, move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &scene);
        });
    }
}

/// Swipe navigation plus drag-to-rotate on the whole page.
pub fn wire_touch(window: &web::Window, document: &web::Document, scene: &Scene) {
    let swipe = Rc::new(RefCell::new(SwipeTracker::default()));
    {
        let swipe = swipe.clone();
        dom::listen(document.as_ref(), "touchstart", true, move |ev: web::TouchEvent| {
            if let Some(at) = first_touch(&ev) {
                swipe.borrow_mut().begin(at);
            }
        });
    }
    {
        let swipe = swipe.clone();
        let scene = scene.clone();
        let w = window.clone();
        dom::listen(document.as_ref(), "touchmove", false, move |ev: web::TouchEvent| {
            let Some(at) = first_touch(&ev) else {
                return;
            };
            let nav = swipe.borrow_mut().moved(at);
            let mut scene = scene.borrow_mut();
            match nav {
                Some(nav) => {
                    ev.prevent_default();
                    scene.navigate(nav);
                }
                None => scene.set_target_rotation(pointer_rotation(&w, at.x, at.y)),
            }
        });
    }
    dom::listen(document.as_ref(), "touchend", true, move |_: web::TouchEvent| {
        swipe.borrow_mut().end();
    });
}

/// Tilt rotates the shape, a shake advances one section.
pub fn wire_motion(window: &web::Window, scene: &Scene) {
    {
        let scene = scene.clone();
        dom::listen(
            window.as_ref(),
            "deviceorientation",
            true,
            move |ev: web::DeviceOrientationEvent| {
                if let (Some(beta), Some(gamma)) = (ev.beta(), ev.gamma()) {
                    let target = orientation_to_rotation(beta as f32, gamma as f32);
                    scene.borrow_mut().set_target_rotation(target);
                }
            },
        );
    }
    let shake = RefCell::new(ShakeDetector::default());
    let scene = scene.clone();
    let performance = window.performance();
    dom::listen(
        window.as_ref(),
        "devicemotion",
        true,
        move |ev: web::DeviceMotionEvent| {
            let Some(a) = ev.acceleration_including_gravity() else {
                return;
            };
            let accel = Vec3::new(
                a.x().unwrap_or(0.0) as f32,
                a.y().unwrap_or(0.0) as f32,
                a.z().unwrap_or(0.0) as f32,
            );
            let now_ms = performance.as_ref().map(|p| p.now()).unwrap_or(0.0);
            if shake.borrow_mut().update(accel, now_ms) && scene.borrow_mut().navigate(Navigation::Next)
            {
                log::info!("shake: next section");
            }
        },
    );
}

/// Clicking the status line flips auto-advance.
pub fn wire_status_toggle(status: &web::Element, scene: &Scene) {
    let scene = scene.clone();
    dom::listen(status.as_ref(), "click", true, move |_: web::MouseEvent| {
        let on = scene.borrow_mut().toggle_auto_advance();
        log::info!("auto-advance {}", if on { "enabled" } else { "disabled" });
    });
}
