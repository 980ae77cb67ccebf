use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::contact::Contact;
use super::cursor_layer::CursorLayer;
use super::hero::Hero;
use super::loader::Loader;
use super::navbar::NavBar;
use super::notifications::{Notification, NotificationContext, Notifications};
use super::sections::{About, Projects, Skills, Timeline};
use crate::config::EASTER_EGG_HOLD_MS;
use crate::model::Profile;
use crate::state::KonamiState;
use crate::util::{clear_timeout, clog, cwarn, set_timeout};

#[function_component(App)]
pub fn app() -> Html {
    let profile = use_memo((), |_| match Profile::load() {
        Ok(profile) => profile,
        Err(err) => {
            cwarn(&format!("content/profile.json is invalid: {err}"));
            Profile::default()
        }
    });

    let toasts = use_state(Vec::<(u32, Notification)>::new);
    let next_toast_id = use_mut_ref(|| 0u32);

    let notify = {
        let toasts = toasts.clone();
        let next_toast_id = next_toast_id.clone();
        Callback::from(move |n: Notification| {
            let mut next = next_toast_id.borrow_mut();
            *next += 1;
            let mut list = (*toasts).clone();
            list.push((*next, n));
            toasts.set(list);
        })
    };

    let dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| {
            let list: Vec<_> = (*toasts)
                .iter()
                .filter(|(tid, _)| *tid != id)
                .cloned()
                .collect();
            toasts.set(list);
        })
    };

    // Hidden keystroke sequence: tint the whole page for a moment, then own
    // up to it with a toast.
    {
        let notify = notify.clone();
        use_effect_with((), move |_| {
            let konami = Rc::new(RefCell::new(KonamiState::new()));
            let restore_id = Rc::new(RefCell::new(None::<i32>));

            let restore_cb = Rc::new(Closure::wrap(Box::new({
                let notify = notify.clone();
                move || {
                    if let Some(body) = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.body())
                    {
                        let _ = body.style().remove_property("filter");
                    }
                    notify.emit(Notification::success(
                        "Easter egg activated! Thanks for exploring!",
                    ));
                }
            }) as Box<dyn FnMut()>));

            let key_cb = Closure::wrap(Box::new({
                let konami = konami.clone();
                let restore_cb = restore_cb.clone();
                let restore_id = restore_id.clone();
                move |e: KeyboardEvent| {
                    if konami.borrow_mut().observe(&e.code()) {
                        clog("easter egg unlocked");
                        if let Some(body) = web_sys::window()
                            .and_then(|w| w.document())
                            .and_then(|d| d.body())
                        {
                            let _ = body.style().set_property("filter", "hue-rotate(180deg)");
                        }
                        *restore_id.borrow_mut() = set_timeout(&restore_cb, EASTER_EGG_HOLD_MS);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                let _ = doc
                    .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
            }

            move || {
                if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                    let _ = doc.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                clear_timeout(restore_id.borrow_mut().take());
                drop(key_cb);
                drop(restore_cb);
            }
        });
    }

    let notification_ctx = NotificationContext { notify };

    html! {
        <ContextProvider<NotificationContext> context={notification_ctx}>
            <Loader />
            <NavBar brand={profile.name.clone()} />
            <main>
                <Hero name={profile.name.clone()} tagline={profile.tagline.clone()} />
                <About paragraphs={profile.about.clone()} location={profile.location.clone()} />
                <Skills categories={profile.skills.clone()} />
                <Projects projects={profile.projects.clone()} />
                <Timeline entries={profile.timeline.clone()} />
                <Contact
                    email={profile.email.clone()}
                    location={profile.location.clone()}
                    socials={profile.socials.clone()}
                />
            </main>
            <Notifications toasts={(*toasts).clone()} on_done={dismiss} />
            <CursorLayer />
        </ContextProvider<NotificationContext>>
    }
}
