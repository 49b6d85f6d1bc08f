use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::ContentConfig;
use crate::content::{ContactForm, ContentClient};
use crate::widgets::{ButtonSize, HoverEffect};

use super::gradient::{GradientButton, GradientTitle, TitleTag};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-input border border-gray-500/30 rounded-lg placeholder-gray-400 focus:outline-none focus:border-primary focus:ring-1 focus:ring-primary transition-colors";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="min-h-screen p-4">
            <div class="text-center pt-8 pb-12 px-4">
                <GradientTitle
                    text="Contact Us"
                    gradient_words=&["Contact"]
                    class="text-4xl md:text-5xl font-poppins font-bold mb-4"
                    tag=TitleTag::H1
                />
                <p class="text-lg max-w-2xl mx-auto text-muted-foreground">
                    "Ready to illuminate your digital presence? Let's start a conversation about bringing your vision to life."
                </p>
            </div>
            <div class="max-w-6xl mx-auto px-4 pb-16 grid grid-cols-1 lg:grid-cols-2 gap-12">
                <ContactDetails />
                <MessageForm />
            </div>
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let details = [
        ("Address", "129 Maybin Rd. Zirconia, NC 28790"),
        ("Phone", "(704) 453-3973"),
        ("Email", "tishdifresco@brightpathstudio.com"),
    ];

    view! {
        <div class="space-y-8">
            <div class="bg-card p-8 rounded-lg border border-primary">
                <h2 class="text-2xl font-poppins font-semibold text-primary mb-6">"Get In Touch"</h2>
                <div class="space-y-6">
                    <div>
                        <h3 class="font-poppins font-semibold text-lg text-primary">
                            "BrightPath Web Studio, LLC"
                        </h3>
                        <p class="text-muted-foreground">"Your beacon in the digital landscape"</p>
                    </div>
                    {details
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div>
                                    <h3 class="font-poppins font-semibold text-lg mb-1">{label}</h3>
                                    <p class="text-muted-foreground">{value}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="p-6 rounded-lg border border-primary/20 bg-muted">
                <h3 class="font-poppins font-semibold text-primary mb-3">"Why Choose BrightPath?"</h3>
                <p class="text-sm leading-relaxed text-muted-foreground">
                    "We're not just another web agency. We're your strategic partner in navigating the digital landscape, providing clear direction and brilliant solutions that help your business shine bright online."
                </p>
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let config = expect_context::<ContentConfig>();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (invalid, set_invalid) = signal(None::<String>);

    let submit = Action::new_local(move |form: &ContactForm| {
        let client = ContentClient::from_config(&config);
        let form = form.clone();
        async move {
            client
                .submit_contact_form(&form)
                .await
                .map_err(|e| e.message().to_string())
        }
    });
    let pending = submit.pending();
    let result = submit.value();

    Effect::new(move |_| {
        if let Some(Ok(())) = result.get() {
            full_name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
    });

    view! {
        <div class="bg-card p-8 rounded-lg border border-primary">
            <h2 class="text-2xl font-poppins font-semibold text-primary mb-6">"Send Us a Message"</h2>
            <form
                class="space-y-6"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    if pending.get_untracked() {
                        return;
                    }
                    let form = ContactForm {
                        full_name: full_name.get_untracked(),
                        email: email.get_untracked(),
                        message: message.get_untracked(),
                    };
                    if let Err(e) = form.validate() {
                        set_invalid.set(Some(e.to_string()));
                        return;
                    }
                    set_invalid.set(None);
                    submit.dispatch(form);
                }
            >
                <div>
                    <label for="fullName" class="block font-semibold mb-2">"Full Name"</label>
                    <input
                        type="text"
                        id="fullName"
                        name="fullName"
                        class=INPUT_CLASS
                        placeholder="Enter your full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="email" class="block font-semibold mb-2">"Email Address"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        class=INPUT_CLASS
                        placeholder="Enter your email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="message" class="block font-semibold mb-2">"Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="6"
                        class=format!("{INPUT_CLASS} resize-y")
                        placeholder="Tell us about your project and how we can help illuminate your path to success..."
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </div>

                {move || invalid.get().map(|msg| view! { <p class="text-center text-red-500">{msg}</p> })}
                {move || {
                    if pending.get() {
                        return Some(view! { <p class="text-center text-primary">"Sending message..."</p> }.into_any());
                    }
                    match result.get() {
                        Some(Ok(())) => {
                            Some(
                                view! {
                                    <p class="text-center text-green-500">
                                        "Thank you! Your message has been sent successfully."
                                    </p>
                                }
                                    .into_any(),
                            )
                        }
                        Some(Err(msg)) => {
                            Some(view! { <p class="text-center text-red-500">{msg}</p> }.into_any())
                        }
                        None => None,
                    }
                }}

                <GradientButton
                    button_type="submit"
                    size=ButtonSize::Lg
                    hover=HoverEffect::Scale
                    disabled=pending
                    class="w-full"
                >
                    {move || if pending.get() { "Sending..." } else { "Send Message" }}
                </GradientButton>
            </form>
            <p class="mt-6 pt-6 border-t border-primary text-sm text-center text-muted-foreground">
                "We typically respond within 24 hours. Let's start building something brilliant together!"
            </p>
        </div>
    }
}
