use leptos::prelude::*;
use leptos_meta::Title;

use crate::widgets::{ButtonSize, GradientStyle, HoverEffect};

use super::gradient::{GradientLink, GradientTitle, TitleTag};
use super::reviews::ReviewWidget;

const PILLARS: [(&str, &str); 3] = [
    (
        "Thoughtful Design",
        "Custom layouts that reflect your brand and guide visitors toward what matters.",
    ),
    (
        "Seamless Functionality",
        "Fast, responsive sites that work on every screen, from phones to wide monitors.",
    ),
    (
        "Strategic Branding",
        "A clear message and a consistent voice, so your business shines bright online.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <section class="hero min-h-[80vh] flex items-center justify-center px-4 text-center">
            <div class="max-w-4xl mx-auto">
                <GradientTitle
                    text="Illuminate Your Digital Path"
                    gradient_words=&["Illuminate", "Path"]
                    tag=TitleTag::H1
                    class="text-5xl md:text-6xl font-bold font-poppins mb-6"
                />
                <p class="text-xl leading-relaxed mb-10 text-muted-foreground">
                    "BrightPath Web Studio builds websites that engage, inspire, and convert. Let us be the beacon that guides your business through the digital landscape."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <GradientLink href="/services" size=ButtonSize::Lg>
                        "Explore Our Process"
                    </GradientLink>
                    <GradientLink href="/contact" size=ButtonSize::Lg hover=HoverEffect::Scale>
                        "Start Your Project"
                    </GradientLink>
                </div>
            </div>
        </section>
        <section class="py-16 px-4 bg-muted/30">
            <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-8">
                {PILLARS
                    .into_iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="p-6 rounded-xl bg-card border border-primary/40">
                                <GradientTitle
                                    text=title
                                    tag=TitleTag::H3
                                    gradient_style=GradientStyle::Primary
                                    class="text-xl font-semibold font-poppins mb-3"
                                />
                                <p class="text-muted-foreground leading-relaxed">{body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <section class="py-16">
            <GradientTitle
                text="Kind Words From Our Clients"
                gradient_words=&["Kind", "Words"]
                class="text-3xl font-bold font-poppins text-center mb-10"
            />
            <ReviewWidget />
        </section>
    }
}
