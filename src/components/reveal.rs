use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Stagger for grouped items, in milliseconds.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that tags its root with `animate` the first time it scrolls into
/// view, then stops watching. If the observer cannot be constructed the
/// content simply renders un-animated.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let root_ref = use_node_ref();

    {
        let root_ref = root_ref.clone();
        use_effect_with((), move |_| {
            let cb = Closure::wrap(Box::new(
                move |entries: Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            let target = entry.target();
                            target.class_list().add_1("animate").ok();
                            observer.unobserve(&target);
                        }
                    }
                },
            )
                as Box<dyn FnMut(Array, IntersectionObserver)>);

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            init.set_root_margin(REVEAL_ROOT_MARGIN);
            let observer =
                IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init).ok();
            if let (Some(obs), Some(el)) = (observer.as_ref(), root_ref.cast::<Element>()) {
                obs.observe(&el);
            }

            move || {
                if let Some(obs) = observer {
                    obs.disconnect();
                }
                drop(cb);
            }
        });
    }

    let style = (props.delay_ms > 0)
        .then(|| format!("animation-delay: {}s", f64::from(props.delay_ms) / 1000.0));

    html! {
        <div ref={root_ref} class={classes!("reveal", props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}
