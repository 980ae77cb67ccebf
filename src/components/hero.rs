use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{
    CARET_BLINK_MS, CODE_CARD_FLOAT_HOLD_MS, CODE_CARD_FLOAT_PERIOD_MS, PARALLAX_SPEED,
    TYPE_CHAR_INTERVAL_MS, TYPE_START_DELAY_MS,
};
use crate::model::SectionId;
use crate::state::TypingState;
use crate::util::{clear_interval, clear_timeout, scroll_to_section, scroll_y, set_interval,
    set_timeout};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub name: String,
    pub tagline: String,
}

/// Landing section: the name types itself out, the particle backdrop drifts
/// with scroll, and the code card floats on a slow cycle.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let typed = use_state(String::new);
    let typing_done = use_state(|| false);
    let caret_on = use_state(|| true);
    let particles_ref = use_node_ref();
    let code_card_ref = use_node_ref();

    // Typing animation: delayed start, one character per interval tick, then
    // hand the caret over to a blink interval.
    {
        let typed = typed.clone();
        let typing_done = typing_done.clone();
        let caret_on = caret_on.clone();
        use_effect_with(props.name.clone(), move |name| {
            let machine = Rc::new(RefCell::new(TypingState::new(name)));
            let type_interval = Rc::new(RefCell::new(None::<i32>));
            let blink_interval = Rc::new(RefCell::new(None::<i32>));
            let blink_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

            let tick_cb = Rc::new(Closure::wrap(Box::new({
                let machine = machine.clone();
                let type_interval = type_interval.clone();
                let blink_interval = blink_interval.clone();
                let blink_cb = blink_cb.clone();
                let typed = typed.clone();
                let typing_done = typing_done.clone();
                let caret_on = caret_on.clone();
                move || {
                    let mut m = machine.borrow_mut();
                    if let Some(prefix) = m.tick() {
                        typed.set(prefix);
                    }
                    if m.is_done() {
                        clear_interval(type_interval.borrow_mut().take());
                        typing_done.set(true);
                        let caret_flag = Rc::new(RefCell::new(true));
                        let blink = Closure::wrap(Box::new({
                            let caret_on = caret_on.clone();
                            move || {
                                let next = !*caret_flag.borrow();
                                *caret_flag.borrow_mut() = next;
                                caret_on.set(next);
                            }
                        }) as Box<dyn FnMut()>);
                        *blink_interval.borrow_mut() = set_interval(&blink, CARET_BLINK_MS);
                        *blink_cb.borrow_mut() = Some(blink);
                    }
                }
            }) as Box<dyn FnMut()>));

            let start_cb = Closure::wrap(Box::new({
                let tick_cb = tick_cb.clone();
                let type_interval = type_interval.clone();
                move || {
                    *type_interval.borrow_mut() = set_interval(&tick_cb, TYPE_CHAR_INTERVAL_MS);
                }
            }) as Box<dyn FnMut()>);
            let start_id = set_timeout(&start_cb, TYPE_START_DELAY_MS);

            move || {
                clear_timeout(start_id);
                clear_interval(type_interval.borrow_mut().take());
                clear_interval(blink_interval.borrow_mut().take());
                blink_cb.borrow_mut().take();
                drop(start_cb);
                drop(tick_cb);
            }
        });
    }

    // Parallax backdrop.
    {
        let particles_ref = particles_ref.clone();
        use_effect_with((), move |_| {
            let scroll_cb = Closure::wrap(Box::new(move || {
                if let Some(el) = particles_ref.cast::<HtmlElement>() {
                    let offset = scroll_y() * PARALLAX_SPEED;
                    let _ = el
                        .style()
                        .set_property("transform", &format!("translateY({offset}px)"));
                }
            }) as Box<dyn FnMut()>);
            if let Some(win) = web_sys::window() {
                let _ = win
                    .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = web_sys::window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(scroll_cb);
            }
        });
    }

    // Slow float on the code card.
    {
        let code_card_ref = code_card_ref.clone();
        use_effect_with((), move |_| {
            let settle_id = Rc::new(RefCell::new(None::<i32>));
            let settle_cb = Rc::new(Closure::wrap(Box::new({
                let code_card_ref = code_card_ref.clone();
                move || {
                    if let Some(el) = code_card_ref.cast::<HtmlElement>() {
                        let _ = el.style().set_property("transform", "translateY(0px)");
                    }
                }
            }) as Box<dyn FnMut()>));
            let float_cb = Closure::wrap(Box::new({
                let settle_cb = settle_cb.clone();
                let settle_id = settle_id.clone();
                move || {
                    if let Some(el) = code_card_ref.cast::<HtmlElement>() {
                        let _ = el.style().set_property("transform", "translateY(-5px)");
                    }
                    *settle_id.borrow_mut() = set_timeout(&settle_cb, CODE_CARD_FLOAT_HOLD_MS);
                }
            }) as Box<dyn FnMut()>);
            let float_id = set_interval(&float_cb, CODE_CARD_FLOAT_PERIOD_MS);
            move || {
                clear_interval(float_id);
                clear_timeout(settle_id.borrow_mut().take());
                drop(float_cb);
                drop(settle_cb);
            }
        });
    }

    let view_work = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(SectionId::Projects.anchor());
    });
    let get_in_touch = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(SectionId::Contact.anchor());
    });

    let caret_visible = !*typing_done || *caret_on;

    html! {
        <section id={SectionId::Home.anchor()} class="hero">
            <div class="particles" ref={particles_ref}></div>
            <div class="hero-content">
                <p class="hero-greeting">{ "Hi, my name is" }</p>
                <h1 class="hero-title">
                    <span id="typing-name" class="typing-text">{ (*typed).clone() }</span>
                    <span class={classes!(
                        "typing-caret",
                        (!caret_visible).then_some("typing-caret--off"),
                    )}></span>
                </h1>
                <p class="hero-tagline">{ &props.tagline }</p>
                <div class="hero-actions">
                    <a href="#projects" class="btn btn--primary" onclick={view_work}>
                        { "View My Work" }
                    </a>
                    <a href="#contact" class="btn btn--ghost" onclick={get_in_touch}>
                        { "Get In Touch" }
                    </a>
                </div>
            </div>
            <div class="code-block" ref={code_card_ref}>
                <pre><code>
                    { "let developer = Developer::new()\n" }
                    { "    .passionate_about(\"clean code\")\n" }
                    { "    .fueled_by(Coffee::Espresso)\n" }
                    { "    .build()?;" }
                </code></pre>
            </div>
        </section>
    }
}
