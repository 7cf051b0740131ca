use super::{use_section_classes, ResumeLink, SocialLinks, TiltCard};
use crate::contact::{submit_delay_ms, ContactForm, Field};
use crate::content::CONTACT;
use crate::motion::CONTACT_CARD_TILT;
use crate::navigation::SectionId;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Reads `(name, value)` from the input or textarea that fired `event`.
fn field_input(event: &InputEvent) -> Option<(String, String)> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    let area = target.dyn_ref::<HtmlTextAreaElement>()?;
    Some((area.name(), area.value()))
}

#[function_component(ContactFormView)]
fn contact_form_view() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let update = use_force_update();
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            // Unmounting mid-submit cancels the completion.
            move || drop(pending.borrow_mut().take())
        });
    }

    let on_input = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |event: InputEvent| {
            let Some((name, value)) = field_input(&event) else {
                return;
            };
            let Some(field) = Field::from_name(&name) else {
                log::debug!("ignoring input from unknown field {name:?}");
                return;
            };
            form.borrow_mut().set_field(field, value);
            update.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(payload) = form.borrow_mut().begin_submit() else {
                return;
            };
            update.force_update();

            let form = form.clone();
            let update = update.clone();
            let timeout = Timeout::new(submit_delay_ms(), move || {
                match serde_json::to_string(&payload) {
                    Ok(json) => log::info!("contact form submitted: {json}"),
                    Err(error) => log::warn!("contact payload not serializable: {error}"),
                }
                form.borrow_mut().finish_submit();
                update.force_update();
            });
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let form = form.borrow();
    let disabled = form.submit_disabled();

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            <h3 class="card-title">{"Send a Message"}</h3>
            <input
                type="text"
                name="name"
                placeholder="Your Name"
                required=true
                value={form.fields.name.clone()}
                oninput={on_input.clone()}
            />
            <input
                type="email"
                name="email"
                placeholder="Your Email"
                required=true
                value={form.fields.email.clone()}
                oninput={on_input.clone()}
            />
            <textarea
                name="message"
                rows="5"
                placeholder="Your Message"
                required=true
                value={form.fields.message.clone()}
                oninput={on_input}
            />
            <button class="button button-primary" type="submit" disabled={disabled}>
                if disabled {
                    <span class="spinner" aria-hidden="true" />
                    {" Sending..."}
                } else {
                    <span aria-hidden="true">{"➤"}</span>
                    {" Send Message"}
                }
            </button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let node = use_node_ref();
    let class = use_section_classes(node.clone(), "contact");

    html! {
        <section id={SectionId::Contact.as_str()} ref={node} class={class}>
            <header class="section-header">
                <h2 class="section-title">{"Let's Connect"}</h2>
                <p class="section-lead">{CONTACT.availability}</p>
            </header>

            <div class="contact-grid">
                <div class="contact-info">
                    <TiltCard profile={CONTACT_CARD_TILT} class="contact-card">
                        <h3 class="card-title">
                            <span aria-hidden="true">{"✉"}</span>{" Email"}
                        </h3>
                        <a class="contact-email" href={format!("mailto:{}", CONTACT.email)}>{CONTACT.email}</a>
                    </TiltCard>

                    <TiltCard profile={CONTACT_CARD_TILT} class="contact-card">
                        <h3 class="card-title">{"Languages"}</h3>
                        <ul class="chip-list">
                            { for CONTACT.languages.iter().map(|language| html! {
                                <li key={*language} class="chip">{*language}</li>
                            }) }
                        </ul>
                    </TiltCard>

                    <TiltCard profile={CONTACT_CARD_TILT} class="contact-card">
                        <h3 class="card-title">{"Interests"}</h3>
                        <ul class="chip-list">
                            { for CONTACT.interests.iter().map(|interest| html! {
                                <li key={*interest} class="chip">{*interest}</li>
                            }) }
                        </ul>
                    </TiltCard>

                    <TiltCard profile={CONTACT_CARD_TILT} class="contact-card">
                        <h3 class="card-title">{"Find Me Online"}</h3>
                        <SocialLinks />
                        <ResumeLink />
                    </TiltCard>
                </div>

                <TiltCard profile={CONTACT_CARD_TILT} class="contact-form-card">
                    <ContactFormView />
                </TiltCard>
            </div>
        </section>
    }
}
