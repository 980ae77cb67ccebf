use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::events::SubmitEvent;
use yew::prelude::*;

use super::notifications::{Notification, NotificationContext};
use super::reveal::Reveal;
use crate::model::{SectionId, SocialLink, is_valid_email};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub email: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

/// Contact section with a client-side-only form: validation feedback goes
/// through the toast context, nothing is ever sent anywhere.
#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let notifications = use_context::<NotificationContext>();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let notifications = notifications.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let notify = |n: Notification| {
                if let Some(ctx) = &notifications {
                    ctx.notify.emit(n);
                }
            };

            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|f| f.value())
                .unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|f| f.value())
                .unwrap_or_default();

            if email.is_empty() || message.is_empty() {
                notify(Notification::error("Please fill in all fields"));
                return;
            }
            if !is_valid_email(&email) {
                notify(Notification::error("Please enter a valid email address"));
                return;
            }

            notify(Notification::success(
                "Thank you for your message! I'll get back to you soon.",
            ));
            if let Some(field) = name_ref.cast::<HtmlInputElement>() {
                field.set_value("");
            }
            if let Some(field) = email_ref.cast::<HtmlInputElement>() {
                field.set_value("");
            }
            if let Some(field) = message_ref.cast::<HtmlTextAreaElement>() {
                field.set_value("");
            }
        })
    };

    html! {
        <section id={SectionId::Contact.anchor()} class="section">
            <Reveal class={classes!("section-header")}>
                <h2>{ "Get In Touch" }</h2>
            </Reveal>
            <div class="contact-content">
                <Reveal class={classes!("contact-info")}>
                    <p>{ "Have a project in mind, or just want to say hello? My inbox is open." }</p>
                    <p class="contact-detail">{ &props.email }</p>
                    <p class="contact-detail">{ &props.location }</p>
                    <div class="social-links">
                        { for props.socials.iter().map(|s| html! {
                            <a class="social-link" href={s.href.clone()} target="_blank">
                                { &s.label }
                            </a>
                        }) }
                    </div>
                </Reveal>
                <Reveal class={classes!("contact-form")}>
                    <form id="contact-form" {onsubmit}>
                        <input
                            ref={name_ref}
                            class="form-input"
                            type="text"
                            name="name"
                            placeholder="Your name"
                        />
                        <input
                            ref={email_ref}
                            class="form-input"
                            type="text"
                            name="email"
                            placeholder="Your email"
                        />
                        <textarea
                            ref={message_ref}
                            class="form-input"
                            name="message"
                            rows="6"
                            placeholder="Your message"
                        ></textarea>
                        <button class="btn btn--primary" type="submit">{ "Send Message" }</button>
                    </form>
                </Reveal>
            </div>
        </section>
    }
}
