//! Browser host
//!
//! Owns every DOM subscription (pointer, resize, capability media query,
//! visibility) and the requestAnimationFrame loop, and releases all of them on
//! `unmount`. The engine stays platform-free; this module only forwards events
//! and timestamps and exposes the frame output at the JS boundary.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

use crate::engine::{Engine, Viewport};
use crate::field::{CatalogItem, ContainerRect, ExclusionZone};
use crate::tuning::Tuning;

fn window() -> web_sys::Window {
    web_sys::window().expect("no window")
}

fn viewport() -> Viewport {
    let w = window();
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width as f32, height as f32)
}

fn media_matches(query: &str) -> bool {
    window()
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn container_rect(el: &Element) -> ContainerRect {
    let r = el.get_bounding_client_rect();
    ContainerRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// One owned DOM listener; removed from its target on drop
struct Subscription {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Subscription {
    fn attach(
        target: &web_sys::EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Self {
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// requestAnimationFrame driver. The callback holds an `Rc` back to this
/// struct so it can reschedule itself; `cancel` breaks that cycle.
struct FrameLoop {
    handle: Cell<Option<i32>>,
    last_time: Cell<f64>,
    paused: Cell<bool>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            handle: Cell::new(None),
            last_time: Cell::new(0.0),
            paused: Cell::new(false),
            closure: RefCell::new(None),
        })
    }

    fn install(self: &Rc<Self>, engine: Rc<RefCell<Engine>>) {
        let this = self.clone();
        *self.closure.borrow_mut() = Some(Closure::new(move |time: f64| {
            let last = this.last_time.replace(time);
            if !this.paused.get() {
                // First frame assumes one 60 Hz interval; long gaps are capped
                let dt = if last > 0.0 {
                    ((time - last) / 1000.0) as f32
                } else {
                    1.0 / 60.0
                };
                engine.borrow_mut().frame(dt.min(0.1));
            }
            this.schedule();
        }));
        self.schedule();
    }

    fn schedule(&self) {
        if let Some(closure) = self.closure.borrow().as_ref() {
            if let Ok(handle) = window().request_animation_frame(closure.as_ref().unchecked_ref())
            {
                self.handle.set(Some(handle));
            }
        }
    }

    fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            let _ = window().cancel_animation_frame(handle);
        }
        self.closure.borrow_mut().take();
    }
}

#[derive(Serialize)]
struct PoolEntry {
    id: u32,
    catalog_index: usize,
    phase_offset: f32,
}

/// One mounted icon field: the engine plus every browser resource it holds
#[wasm_bindgen]
pub struct IconField {
    engine: Rc<RefCell<Engine>>,
    container: Element,
    subscriptions: Vec<Subscription>,
    frame_loop: Rc<FrameLoop>,
}

#[wasm_bindgen]
impl IconField {
    /// Mount on the element with id `container_id` and start the engine.
    ///
    /// `catalog_json` is the item list; `zones_json` the exclusion zones;
    /// `tuning_json` optional overrides (pass "" for defaults). The seed comes
    /// from the clock; pass work through `Engine` directly for a fixed one.
    pub fn mount(
        container_id: &str,
        catalog_json: &str,
        zones_json: &str,
        tuning_json: &str,
    ) -> Result<IconField, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let document = window()
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| js_err(format!("container #{container_id} not found")))?;

        let catalog: Vec<CatalogItem> = serde_json::from_str(catalog_json).map_err(js_err)?;
        let zones: Vec<ExclusionZone> = if zones_json.is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(zones_json).map_err(js_err)?
        };
        let mut tuning: Tuning = if tuning_json.is_empty() {
            Tuning::default()
        } else {
            serde_json::from_str(tuning_json).map_err(js_err)?
        };
        if media_matches("(prefers-reduced-motion: reduce)") {
            tuning.reduced_motion = true;
        }

        let seed = js_sys::Date::now() as u64;
        let engine = Rc::new(RefCell::new(Engine::new(catalog, zones, tuning, seed)));
        engine.borrow_mut().start(
            viewport(),
            Some(container_rect(&container)),
            media_matches("(pointer: fine)"),
        );

        let frame_loop = FrameLoop::new();
        frame_loop.install(engine.clone());

        let mut field = IconField {
            engine,
            container,
            subscriptions: Vec::new(),
            frame_loop,
        };
        field.subscribe();
        Ok(field)
    }

    /// Current per-icon transforms as a JSON array of
    /// `{id, x, y, scale, rotation}`
    pub fn placements_json(&self) -> String {
        let engine = self.engine.borrow();
        serde_json::to_string(&engine.placements().collect::<Vec<_>>())
            .unwrap_or_else(|_| "[]".into())
    }

    /// Pool composition as JSON (`{id, catalog_index, phase_offset}`).
    /// Re-read after resizes: a rebuild replaces every icon.
    pub fn pool_json(&self) -> String {
        let engine = self.engine.borrow();
        let entries: Vec<PoolEntry> = engine
            .icons()
            .iter()
            .map(|icon| PoolEntry {
                id: icon.id,
                catalog_index: icon.catalog_index,
                phase_offset: icon.phase_offset,
            })
            .collect();
        serde_json::to_string(&entries).unwrap_or_else(|_| "[]".into())
    }

    /// Tear down: stop the engine, cancel the pending frame, release every
    /// listener. Idempotent; the field cannot be remounted afterwards.
    pub fn unmount(&mut self) {
        self.frame_loop.cancel();
        self.subscriptions.clear();
        self.engine.borrow_mut().stop();
    }
}

impl IconField {
    fn subscribe(&mut self) {
        let win = window();

        // Pointer moves anywhere in the viewport; the tracker decides whether
        // the position is inside the container
        {
            let engine = self.engine.clone();
            let container = self.container.clone();
            let closure = Closure::new(move |event: Event| {
                let event: MouseEvent = event.unchecked_into();
                engine.borrow_mut().pointer_moved(
                    event.client_x() as f32,
                    event.client_y() as f32,
                    container_rect(&container),
                );
            });
            self.subscriptions
                .push(Subscription::attach(&win, "pointermove", closure));
        }

        // Window blur: the hover signal is gone
        {
            let engine = self.engine.clone();
            let closure = Closure::new(move |_: Event| {
                engine.borrow_mut().pointer_left();
            });
            self.subscriptions
                .push(Subscription::attach(&win, "blur", closure));
        }

        // Resize: re-measure and rebuild
        {
            let engine = self.engine.clone();
            let container = self.container.clone();
            let closure = Closure::new(move |_: Event| {
                engine.borrow_mut().environment_changed(
                    viewport(),
                    Some(container_rect(&container)),
                    media_matches("(pointer: fine)"),
                );
            });
            self.subscriptions
                .push(Subscription::attach(&win, "resize", closure));
        }

        // Pointer-capability flips (dock/undock, external mouse on a tablet)
        if let Ok(Some(query)) = win.match_media("(pointer: fine)") {
            let engine = self.engine.clone();
            let container = self.container.clone();
            let closure = Closure::new(move |_: Event| {
                engine.borrow_mut().environment_changed(
                    viewport(),
                    Some(container_rect(&container)),
                    media_matches("(pointer: fine)"),
                );
            });
            self.subscriptions
                .push(Subscription::attach(&query, "change", closure));
        }

        // Hidden tab: keep the loop alive but skip engine frames
        if let Some(document) = win.document() {
            let frame_loop = self.frame_loop.clone();
            let closure = Closure::new(move |_: Event| {
                let hidden = window()
                    .document()
                    .map(|d| d.visibility_state() == web_sys::VisibilityState::Hidden)
                    .unwrap_or(false);
                frame_loop.paused.set(hidden);
            });
            self.subscriptions
                .push(Subscription::attach(&document, "visibilitychange", closure));
        }
    }
}

impl Drop for IconField {
    fn drop(&mut self) {
        self.unmount();
    }
}
