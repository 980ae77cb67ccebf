use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::config::{TOAST_ENTER_DELAY_MS, TOAST_EXIT_MS, TOAST_VISIBLE_MS};
use crate::util::{clear_timeout, set_timeout};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification--success",
            NotificationKind::Error => "notification--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Lets any component raise a toast without prop drilling, in the same way
/// the rest of the app shares callbacks through context.
#[derive(Clone, PartialEq)]
pub struct NotificationContext {
    pub notify: Callback<Notification>,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub id: u32,
    pub notification: Notification,
    pub on_done: Callback<u32>,
}

/// One toast: slides in shortly after mount, stays for a fixed time, slides
/// out, then asks the host to drop it.
#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        let on_done = props.on_done.clone();
        let id = props.id;
        use_effect_with((), move |_| {
            let enter = {
                let visible = visible.clone();
                Closure::wrap(Box::new(move || visible.set(true)) as Box<dyn FnMut()>)
            };
            let exit = {
                let visible = visible.clone();
                Closure::wrap(Box::new(move || visible.set(false)) as Box<dyn FnMut()>)
            };
            let done = Closure::wrap(Box::new(move || on_done.emit(id)) as Box<dyn FnMut()>);
            let enter_id = set_timeout(&enter, TOAST_ENTER_DELAY_MS);
            let exit_id = set_timeout(&exit, TOAST_ENTER_DELAY_MS + TOAST_VISIBLE_MS);
            let done_id = set_timeout(
                &done,
                TOAST_ENTER_DELAY_MS + TOAST_VISIBLE_MS + TOAST_EXIT_MS,
            );
            move || {
                clear_timeout(enter_id);
                clear_timeout(exit_id);
                clear_timeout(done_id);
                drop(enter);
                drop(exit);
                drop(done);
            }
        });
    }

    let class = classes!(
        "notification",
        props.notification.kind.class(),
        visible.then_some("notification--visible"),
    );
    html! {
        <div {class}>{ &props.notification.message }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationsProps {
    pub toasts: Vec<(u32, Notification)>,
    pub on_done: Callback<u32>,
}

/// Top-right toast stack rendered by the root component.
#[function_component(Notifications)]
pub fn notifications(props: &NotificationsProps) -> Html {
    html! {
        <div class="notifications">
            { for props.toasts.iter().map(|(id, n)| html! {
                <Toast key={*id} id={*id} notification={n.clone()} on_done={props.on_done.clone()} />
            }) }
        </div>
    }
}
