use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::config::{LOADER_FADE_MS, LOADER_HOLD_MS};
use crate::util::{clear_timeout, set_timeout};

#[derive(Clone, Copy, PartialEq)]
enum LoaderPhase {
    Visible,
    Fading,
    Gone,
}

/// Full-screen overlay shown while the page settles: held briefly, faded
/// out, then dropped from the tree entirely.
#[function_component(Loader)]
pub fn loader() -> Html {
    let phase = use_state(|| LoaderPhase::Visible);

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let fade = {
                let phase = phase.clone();
                Closure::wrap(Box::new(move || phase.set(LoaderPhase::Fading)) as Box<dyn FnMut()>)
            };
            let gone = {
                let phase = phase.clone();
                Closure::wrap(Box::new(move || phase.set(LoaderPhase::Gone)) as Box<dyn FnMut()>)
            };
            let fade_id = set_timeout(&fade, LOADER_HOLD_MS);
            let gone_id = set_timeout(&gone, LOADER_HOLD_MS + LOADER_FADE_MS);
            move || {
                clear_timeout(fade_id);
                clear_timeout(gone_id);
                drop(fade);
                drop(gone);
            }
        });
    }

    match *phase {
        LoaderPhase::Gone => html! {},
        current => {
            let class = classes!(
                "loader",
                (current == LoaderPhase::Fading).then_some("loader--fade-out"),
            );
            html! {
                <div id="loader" {class}>
                    <div class="loader__spinner"></div>
                </div>
            }
        }
    }
}
