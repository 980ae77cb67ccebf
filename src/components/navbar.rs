use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::model::SectionId;
use crate::state::scroll_spy::{self, SectionBounds};
use crate::util::{scroll_to_section, scroll_y};

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub brand: String,
}

/// Fixed top navigation: condenses after the page scrolls, highlights the
/// section currently in view, and collapses into a burger menu on small
/// screens. All measurement happens per scroll event; the pure pick lives in
/// `state::scroll_spy`.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let active = use_state(|| None::<SectionId>);
    let condensed = use_state(|| false);
    let menu_open = use_state(|| false);
    // last values seen by the scroll listener, so it only re-renders on change
    let last_active = use_mut_ref(|| None::<SectionId>);
    let last_condensed = use_mut_ref(|| false);

    {
        let active = active.clone();
        let condensed = condensed.clone();
        let last_active = last_active.clone();
        let last_condensed = last_condensed.clone();
        use_effect_with((), move |_| {
            let update: Rc<dyn Fn()> = Rc::new(move || {
                let y = scroll_y();

                let is_condensed = scroll_spy::navbar_condensed(y);
                if *last_condensed.borrow() != is_condensed {
                    *last_condensed.borrow_mut() = is_condensed;
                    condensed.set(is_condensed);
                }

                let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let mut ids = Vec::new();
                let mut bounds = Vec::new();
                for id in SectionId::ALL {
                    if let Some(el) = doc.get_element_by_id(id.anchor()) {
                        let rect = el.get_bounding_client_rect();
                        ids.push(id);
                        bounds.push(SectionBounds {
                            top: rect.top() + y,
                            height: rect.height(),
                        });
                    }
                }
                let now_active = scroll_spy::active_section(&bounds, y).map(|i| ids[i]);
                if *last_active.borrow() != now_active {
                    *last_active.borrow_mut() = now_active;
                    active.set(now_active);
                }
            });

            // settle the initial highlight before the first scroll
            update();

            let scroll_cb = {
                let update = update.clone();
                Closure::wrap(Box::new(move || update()) as Box<dyn FnMut()>)
            };
            let listener_ok = web_sys::window()
                .map(|win| {
                    win.add_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    )
                    .is_ok()
                })
                .unwrap_or(false);

            move || {
                if listener_ok {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            scroll_cb.as_ref().unchecked_ref(),
                        );
                    }
                }
                drop(scroll_cb);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_to = |id: SectionId| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id.anchor());
        })
    };

    html! {
        <nav id="navbar" class={classes!("navbar", condensed.then_some("scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={nav_to(SectionId::Home)}>
                    { &props.brand }
                </a>
                <ul id="nav-menu" class={classes!("nav-menu", menu_open.then_some("active"))}>
                    { for SectionId::ALL.iter().map(|id| {
                        let link_class = classes!(
                            "nav-link",
                            (*active == Some(*id)).then_some("active"),
                        );
                        html! {
                            <li class="nav-item">
                                <a
                                    class={link_class}
                                    href={format!("#{}", id.anchor())}
                                    onclick={nav_to(*id)}
                                >
                                    { id.label() }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <div
                    id="mobile-menu"
                    class={classes!("mobile-menu", menu_open.then_some("active"))}
                    onclick={toggle_menu}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
