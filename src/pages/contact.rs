use std::rc::Rc;

use log::info;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::config;

pub const SUBMIT_NOTICE: &str = "Thank you for your message! (Form submission coming in Phase 4)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn summary(&self) -> String {
        format!(
            "name={:?} email={:?} message_len={}",
            self.name,
            self.email,
            self.message.chars().count()
        )
    }
}

/// One field edit. Applied to whatever the form holds when it is reduced,
/// so edits dispatched before a re-render all land.
pub struct ContactEdit {
    pub field: ContactField,
    pub value: String,
}

impl Reducible for ContactForm {
    type Action = ContactEdit;

    fn reduce(self: Rc<Self>, edit: ContactEdit) -> Rc<Self> {
        Rc::new(self.with(edit.field, edit.value))
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = if field == ContactField::Message {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                area.value()
            } else {
                let input: HtmlInputElement = e.target_unchecked_into();
                input.value()
            };
            form.dispatch(ContactEdit { field, value });
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("contact form submitted: {}", form.summary());
            gloo_console::log!("Form submission:", form.summary());
            if let Some(window) = window() {
                let _ = window.alert_with_message(SUBMIT_NOTICE);
            }
        })
    };

    html! {
        <AnimatedSection>
            <section class="contact-section">
                <div class="contact-inner">
                    <div class="contact-heading">
                        <h2>{"Get In Touch"}</h2>
                        <p>{"Have a project in mind? Let's discuss how we can work together."}</p>
                    </div>

                    <form class="contact-form" onsubmit={on_submit}>
                        <div class="contact-row">
                            <div class="contact-field">
                                <label for="name">{"Name"}</label>
                                <input
                                    id="name"
                                    name="name"
                                    type="text"
                                    value={form.name.clone()}
                                    oninput={on_input(ContactField::Name)}
                                    placeholder="Your name"
                                    required=true
                                />
                            </div>
                            <div class="contact-field">
                                <label for="email">{"Email"}</label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    value={form.email.clone()}
                                    oninput={on_input(ContactField::Email)}
                                    placeholder="your.email@example.com"
                                    required=true
                                />
                            </div>
                        </div>
                        <div class="contact-field">
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="6"
                                value={form.message.clone()}
                                oninput={on_input(ContactField::Message)}
                                placeholder="Tell me about your project..."
                                required=true
                            />
                        </div>
                        <button type="submit" class="contact-submit">{"Send Message"}</button>
                    </form>

                    <div class="contact-direct">
                        <p>{"Prefer to reach out directly?"}</p>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </div>
                </div>
                <style>
                    {r#"
                    .contact-section {
                        padding: 6rem 1rem;
                        background: rgba(107, 114, 128, 0.05);
                    }
                    .contact-inner {
                        max-width: 42rem;
                        margin: 0 auto;
                    }
                    .contact-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .contact-heading h2 {
                        font-size: clamp(1.875rem, 5vw, 3rem);
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                    }
                    .contact-heading p {
                        font-size: 1.125rem;
                        color: var(--subtle-gray);
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-row {
                        display: grid;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .contact-row {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    .contact-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .contact-field label {
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .contact-field input,
                    .contact-field textarea {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid var(--border);
                        background: var(--page-bg);
                        color: var(--page-fg);
                        font: inherit;
                    }
                    .contact-field textarea {
                        resize: none;
                    }
                    .contact-submit {
                        width: 100%;
                        padding: 0.875rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: var(--accent-blue);
                        color: #fff;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .contact-submit:hover {
                        opacity: 0.9;
                    }
                    .contact-direct {
                        margin-top: 3rem;
                        padding-top: 2rem;
                        border-top: 1px solid var(--border);
                        text-align: center;
                    }
                    .contact-direct p {
                        color: var(--subtle-gray);
                    }
                    .contact-direct a {
                        color: var(--accent-blue);
                        font-weight: 500;
                        text-decoration: none;
                    }
                    "#}
                </style>
            </section>
        </AnimatedSection>
    }
}
