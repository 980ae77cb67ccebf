use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::{INTERACTIVE_SELECTOR, RIPPLE_POOL_SIZE};
use crate::state::{CursorState, MoveGate, RippleKind, RipplePool};
use crate::util::{cwarn, is_touch_device};

/// Owns the cursor/ripple state and the DOM nodes the effects write to.
/// Constructed once at mount and shared into every event closure, so nothing
/// here lives in module globals.
struct EffectsRuntime {
    cursor: CursorState,
    pool: RipplePool,
    gate: MoveGate,
    touch: bool,
    marker: HtmlElement,
    halo: HtmlElement,
    ripples: Vec<HtmlElement>,
}

impl EffectsRuntime {
    /// One animation frame: ease toward the pointer and push the transforms.
    fn apply_frame(&mut self) {
        self.cursor.step();
        let _ = self
            .halo
            .style()
            .set_property("transform", &self.cursor.halo_transform());
        let _ = self
            .marker
            .style()
            .set_property("transform", &self.cursor.marker_transform());
    }

    fn show_cursor(&mut self) {
        if self.touch || self.cursor.visible {
            return;
        }
        self.marker.class_list().remove_1("cursor--hidden").ok();
        self.halo.class_list().remove_1("cursor--hidden").ok();
        self.cursor.visible = true;
    }

    fn hide_cursor(&mut self) {
        self.marker.class_list().add_1("cursor--hidden").ok();
        self.halo.class_list().add_1("cursor--hidden").ok();
        self.cursor.visible = false;
    }

    fn set_active(&self, active: bool) {
        for el in [&self.marker, &self.halo] {
            if active {
                el.class_list().add_1("cursor--active").ok();
            } else {
                el.class_list().remove_1("cursor--active").ok();
            }
        }
    }

    fn set_halo_active(&self, active: bool) {
        if active {
            self.halo.class_list().add_1("cursor--active").ok();
        } else {
            self.halo.class_list().remove_1("cursor--active").ok();
        }
    }

    /// Claims a pool slot and starts its animation. Move ripples are
    /// suppressed on touch devices; an exhausted pool drops the spawn.
    fn spawn(&mut self, x: f64, y: f64, kind: RippleKind) {
        if self.touch && kind == RippleKind::Move {
            return;
        }
        let Some(index) = self.pool.acquire(x, y, kind) else {
            return;
        };
        let (Some(el), Some(slot)) = (self.ripples.get(index), self.pool.slot(index)) else {
            return;
        };
        let style = el.style();
        let _ = style.set_property("left", &format!("{}px", slot.x));
        let _ = style.set_property("top", &format!("{}px", slot.y));
        let _ = style.set_property("width", &format!("{}px", slot.size));
        let _ = style.set_property("height", &format!("{}px", slot.size));
        let _ = style.set_property("animation-duration", &format!("{}ms", slot.duration_ms));
        if slot.large {
            el.class_list().add_1("ripple--large").ok();
        } else {
            el.class_list().remove_1("ripple--large").ok();
        }
        // force a reflow so re-adding the class restarts the animation
        let _ = el.offset_width();
        el.class_list().add_1("ripple--play").ok();
    }

    /// Fired by the slot's animationend listener, exactly once per play.
    fn release(&mut self, index: usize) {
        self.pool.release(index);
        if let Some(el) = self.ripples.get(index) {
            el.class_list().remove_1("ripple--play").ok();
            let style = el.style();
            for prop in ["width", "height", "left", "top"] {
                let _ = style.remove_property(prop);
            }
        }
    }
}

fn hits_interactive(e: &MouseEvent) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

fn init_effects() -> Result<Box<dyn FnOnce()>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let touch = is_touch_device();

    let make_div = |class: &str| -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = document.create_element("div")?.dyn_into()?;
        el.set_class_name(class);
        Ok(el)
    };

    let marker = make_div("cursor-follower cursor--hidden")?;
    let halo = make_div("cursor-halo cursor--hidden")?;
    body.append_child(&halo)?;
    body.append_child(&marker)?;

    let mut ripples = Vec::with_capacity(RIPPLE_POOL_SIZE);
    for _ in 0..RIPPLE_POOL_SIZE {
        let el = make_div("ripple")?;
        body.append_child(&el)?;
        ripples.push(el);
    }

    // keep handles for teardown; the runtime takes the originals
    let marker_node = marker.clone();
    let halo_node = halo.clone();
    let ripple_nodes = ripples.clone();

    let center_x = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) / 2.0;
    let center_y = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) / 2.0;

    let runtime = Rc::new(RefCell::new(EffectsRuntime {
        cursor: CursorState::new(center_x, center_y),
        pool: RipplePool::new(RIPPLE_POOL_SIZE),
        gate: MoveGate::new(),
        touch,
        marker,
        halo,
        ripples,
    }));

    // Each slot returns itself to the pool when its play finishes.
    let mut slot_cbs: Vec<Closure<dyn FnMut()>> = Vec::with_capacity(RIPPLE_POOL_SIZE);
    for index in 0..RIPPLE_POOL_SIZE {
        let runtime_slot = runtime.clone();
        let cb = Closure::wrap(Box::new(move || {
            runtime_slot.borrow_mut().release(index);
        }) as Box<dyn FnMut()>);
        ripple_nodes[index]
            .add_event_listener_with_callback("animationend", cb.as_ref().unchecked_ref())?;
        slot_cbs.push(cb);
    }

    // Pointer move: retarget the follower and maybe spawn a trail ripple.
    let mousemove_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let mut rt = runtime.borrow_mut();
            let x = e.client_x() as f64;
            let y = e.client_y() as f64;
            if !rt.touch {
                rt.cursor.point_to(x, y);
                rt.show_cursor();
            }
            if rt.gate.should_fire(js_sys::Date::now()) {
                rt.spawn(x, y, RippleKind::Move);
            }
        }) as Box<dyn FnMut(_)>)
    };
    document
        .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())?;

    // Hover over interactive elements grows the cursor.
    let mouseover_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if hits_interactive(&e) {
                let mut rt = runtime.borrow_mut();
                rt.cursor.hover_enter();
                rt.set_active(true);
            }
        }) as Box<dyn FnMut(_)>)
    };
    document
        .add_event_listener_with_callback("mouseover", mouseover_cb.as_ref().unchecked_ref())?;

    let mouseout_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            if hits_interactive(&e) {
                let mut rt = runtime.borrow_mut();
                rt.cursor.hover_exit();
                rt.set_active(false);
            }
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("mouseout", mouseout_cb.as_ref().unchecked_ref())?;

    let mouseleave_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            runtime.borrow_mut().hide_cursor();
        }) as Box<dyn FnMut(_)>)
    };
    document
        .add_event_listener_with_callback("mouseleave", mouseleave_cb.as_ref().unchecked_ref())?;

    let mouseenter_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let mut rt = runtime.borrow_mut();
            if !rt.touch {
                rt.cursor.point_to(e.client_x() as f64, e.client_y() as f64);
                rt.show_cursor();
            }
        }) as Box<dyn FnMut(_)>)
    };
    document
        .add_event_listener_with_callback("mouseenter", mouseenter_cb.as_ref().unchecked_ref())?;

    // Press feedback shrinks the marker; only the halo lights up.
    let mousedown_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            let mut rt = runtime.borrow_mut();
            rt.cursor.press();
            rt.set_halo_active(true);
        }) as Box<dyn FnMut(_)>)
    };
    document
        .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())?;

    let mouseup_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            let mut rt = runtime.borrow_mut();
            rt.cursor.release();
            rt.set_halo_active(false);
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())?;

    // Clicks and taps always attempt the large ripple, touch devices included.
    let click_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            runtime
                .borrow_mut()
                .spawn(e.client_x() as f64, e.client_y() as f64, RippleKind::Press);
        }) as Box<dyn FnMut(_)>)
    };
    document.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;

    let touchstart_cb = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                runtime.borrow_mut().spawn(
                    t0.client_x() as f64,
                    t0.client_y() as f64,
                    RippleKind::Press,
                );
            }
        }) as Box<dyn FnMut(_)>)
    };
    document
        .add_event_listener_with_callback("touchstart", touchstart_cb.as_ref().unchecked_ref())?;

    // Frame loop: the interpolation runs for the whole page session.
    let raf_id = Rc::new(RefCell::new(None));
    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let raf_id_loop = raf_id.clone();
        let closure_cell_loop = closure_cell.clone();
        let runtime_loop = runtime.clone();
        let window_loop = window.clone();
        *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            runtime_loop.borrow_mut().apply_frame();
            if let Some(cb) = closure_cell_loop.borrow().as_ref() {
                if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id_loop.borrow_mut() = Some(id);
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = closure_cell.borrow().as_ref() {
            let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            *raf_id.borrow_mut() = Some(id);
        }
    }

    if touch {
        runtime.borrow_mut().hide_cursor();
    }

    let cleanup: Box<dyn FnOnce()> = Box::new(move || {
        let _ = document
            .remove_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref());
        let _ = document
            .remove_event_listener_with_callback("mouseover", mouseover_cb.as_ref().unchecked_ref());
        let _ = document
            .remove_event_listener_with_callback("mouseout", mouseout_cb.as_ref().unchecked_ref());
        let _ = document.remove_event_listener_with_callback(
            "mouseleave",
            mouseleave_cb.as_ref().unchecked_ref(),
        );
        let _ = document.remove_event_listener_with_callback(
            "mouseenter",
            mouseenter_cb.as_ref().unchecked_ref(),
        );
        let _ = document
            .remove_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref());
        let _ = document
            .remove_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref());
        let _ = document
            .remove_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
        let _ = document.remove_event_listener_with_callback(
            "touchstart",
            touchstart_cb.as_ref().unchecked_ref(),
        );
        for (el, cb) in ripple_nodes.iter().zip(slot_cbs.iter()) {
            let _ = el
                .remove_event_listener_with_callback("animationend", cb.as_ref().unchecked_ref());
            let _ = body.remove_child(el);
        }
        let _ = body.remove_child(&marker_node);
        let _ = body.remove_child(&halo_node);
        if let Some(id) = *raf_id.borrow() {
            let _ = window.cancel_animation_frame(id);
        }
        closure_cell.borrow_mut().take();
        let _keep_alive = (
            &mousemove_cb,
            &mouseover_cb,
            &mouseout_cb,
            &mouseleave_cb,
            &mouseenter_cb,
            &mousedown_cb,
            &mouseup_cb,
            &click_cb,
            &touchstart_cb,
            &slot_cbs,
        );
    });
    Ok(cleanup)
}

/// Invisible component that layers the cursor follower and the ripple pool
/// over the page. Setup failures only log; the rest of the page keeps working.
#[function_component(CursorLayer)]
pub fn cursor_layer() -> Html {
    use_effect_with((), move |_| {
        let teardown = match init_effects() {
            Ok(t) => Some(t),
            Err(err) => {
                cwarn(&format!("cursor effects disabled: {err:?}"));
                None
            }
        };
        move || {
            if let Some(t) = teardown {
                t();
            }
        }
    });
    html! {}
}
