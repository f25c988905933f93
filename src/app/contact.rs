use leptos::{ev::SubmitEvent, prelude::*};

use crate::contact::{Feedback, Field, FormFields};
#[cfg(feature = "hydrate")]
use crate::contact::{BrowserTimer, ContactFormController, HttpMailer};

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-muted/50 bg-background focus:outline-none focus:ring-2 focus:ring-cyan";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-16">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-2xl font-bold text-center mb-12 section-title">"Contact Me"</h2>
                <div class="flex flex-col lg:flex-row gap-8 lg:gap-12">
                    <ContactInfo />
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="w-full lg:max-w-md">
            <h3 class="text-xl font-bold mb-4">"Get in Touch"</h3>
            <p class="mb-6 leading-relaxed">
                "Have a project in mind or want to discuss potential opportunities? Feel free to reach out through any of these channels or fill out the contact form."
            </p>
            <div class="flex flex-col gap-4">
                <div class="flex items-center gap-3">
                    <i class="extra-location text-cyan text-xl"></i>
                    <div>
                        <h4 class="font-bold">"Location"</h4>
                        <p>"Lagos, Nigeria"</p>
                    </div>
                </div>
                <div class="flex items-center gap-3">
                    <i class="extra-email text-cyan text-xl"></i>
                    <div>
                        <h4 class="font-bold">"Email"</h4>
                        <a href="mailto:geobene13@gmail.com" class="hover:text-cyan">
                            "geobene13@gmail.com"
                        </a>
                    </div>
                </div>
                <div class="flex items-center gap-3">
                    <i class="extra-phone text-cyan text-xl"></i>
                    <div>
                        <h4 class="font-bold">"Phone"</h4>
                        <p>"08133710863"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    // mirrors of the controller's state for rendering
    let fields = RwSignal::new(FormFields::default());
    let feedback = RwSignal::new(Feedback::Idle);
    let submitting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let controller = {
        let controller = ContactFormController::new(HttpMailer::from_env(), BrowserTimer);
        controller.on_change(move |form| {
            fields.set(form.fields().clone());
            feedback.set(form.feedback());
            submitting.set(form.is_submitting());
        });
        StoredValue::new_local(controller)
    };

    let on_input = move |field: Field, value: String| {
        #[cfg(feature = "hydrate")]
        controller.with_value(|c| c.update_field(field, value));
        #[cfg(not(feature = "hydrate"))]
        fields.update(|f| f.set(field, value));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let controller = controller.get_value();
            leptos::task::spawn_local(async move {
                controller.submit().await;
            });
        }
    };

    let value_of = move |field: Field| move || fields.with(|f| f.get(field).to_string());

    let text_input = move |field: Field, kind: &'static str, placeholder: &'static str| {
        view! {
            <div class="mb-4">
                <input
                    type=kind
                    name=field.name()
                    placeholder=placeholder
                    required=field.is_required()
                    class=INPUT_CLASS
                    prop:value=value_of(field)
                    on:input=move |ev| on_input(field, event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="relative w-full lg:max-w-2xl">
            <form on:submit=on_submit>
                {text_input(Field::Name, "text", "Your Name")}
                {text_input(Field::Email, "email", "Your Email")}
                {text_input(Field::Subject, "text", "Subject")}
                <div class="mb-4">
                    <textarea
                        name=Field::Message.name()
                        placeholder="Your Message"
                        required=Field::Message.is_required()
                        rows="6"
                        class=INPUT_CLASS
                        prop:value=value_of(Field::Message)
                        on:input=move |ev| on_input(Field::Message, event_target_value(&ev))
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30 disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
            <FeedbackView feedback />
        </div>
    }
}

#[component]
fn FeedbackView(feedback: RwSignal<Feedback>) -> impl IntoView {
    move || match feedback.get() {
        Feedback::Idle => None,
        Feedback::Success => Some(
            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-background/70">
                    <div class="bg-brightBlack p-8 rounded-lg text-center border border-green/40 shadow-2xl">
                        <p class="text-4xl text-green mb-4">"✔"</p>
                        <p>"Message received! Thank you for your submission."</p>
                    </div>
                </div>
            }
            .into_any(),
        ),
        Feedback::Error => Some(
            view! {
                <div class="mt-4 p-3 rounded-md bg-red/20 text-red border border-red/40">
                    <p>"Error submitting message. Please try again."</p>
                </div>
            }
            .into_any(),
        ),
    }
}
