use leptos::prelude::*;
use leptos_meta::Title;

use crate::widgets::{ButtonSize, HoverEffect};

use super::gradient::{GradientLink, GradientTitle};

struct TimelineEvent {
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
}

const TIMELINE: [TimelineEvent; 3] = [
    TimelineEvent {
        title: "A Journey of Dedication and Achievement",
        description: "Graduating from Full Sail University was a defining moment in my journey. Combining creativity with technology led me to web development, and my dedication to the craft earned me the honor of class valedictorian.",
        image_url: "/images/boysandme.webp",
    },
    TimelineEvent {
        title: "The Lighthouse That Started It All",
        description: "At my graduation, one of my instructors gifted me a lighthouse, symbolizing guidance, resilience, and perseverance. It was a reminder that even in the darkest times, we can find our way forward. This symbol became the foundation for BrightPath Web Studio LLC, inspiring me to help businesses navigate the digital world with confidence and clarity.",
        image_url: "/images/lighthouse-gift.png",
    },
    TimelineEvent {
        title: "My Approach",
        description: "I believe in thoughtful design, seamless functionality, and strategic branding. A website should do more than just exist. It should engage, inspire, and convert.",
        image_url: "/images/brightpath-logo-dark.png",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <section class="about-hero min-h-screen flex items-center justify-center p-8 bg-cover bg-center">
            <div class="container mx-auto grid md:grid-cols-2 gap-8 items-center">
                <div class="text-white text-center md:text-left">
                    <p class="text-lg mb-2 tracking-wider">"ABOUT ME"</p>
                    <h1 class="font-poppins text-5xl md:text-6xl font-bold mb-6">"TISHA DI FRESCO"</h1>
                    <p class="text-xl mb-8 leading-relaxed">
                        "Like the mountains that shape my home, my journey in web development and design is built on strong foundations and endless creativity."
                    </p>
                    <a
                        href="#journey"
                        class="inline-block bg-primary text-white font-bold py-3 px-8 rounded-md text-lg hover:bg-yellow-400 transition-colors"
                    >
                        "Read My Story"
                    </a>
                </div>
                <div class="flex justify-center">
                    <img
                        src="/images/my-profile.png"
                        alt="Portrait of Tisha Di Fresco"
                        class="max-w-sm md:max-w-md w-full rounded-t-full shadow-2xl"
                    />
                </div>
            </div>
        </section>
        <section class="timeline relative py-20 px-8">
            <div class="container mx-auto space-y-16">
                <GradientTitle
                    id="journey"
                    text="My Digital Journey Timeline"
                    gradient_words=&["Digital", "Timeline"]
                    class="text-4xl md:text-5xl font-extrabold mb-12 font-poppins"
                />
                {TIMELINE
                    .into_iter()
                    .enumerate()
                    .map(|(i, event)| {
                        let side = if i % 2 == 0 {
                            "md:mr-auto md:pr-16 md:text-right"
                        } else {
                            "md:ml-auto md:pl-16 md:text-left"
                        };
                        view! {
                            <article class=format!("w-full md:w-5/12 text-center {side}")>
                                <div class="p-6 rounded-xl bg-card border border-primary/40 shadow-lg">
                                    <img
                                        src=event.image_url
                                        alt=event.title
                                        class="w-full h-56 object-cover rounded-lg mb-4"
                                    />
                                    <h3 class="text-2xl font-bold font-poppins text-primary mb-3">
                                        {event.title}
                                    </h3>
                                    <p class="leading-relaxed">{event.description}</p>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
                <div class="text-center pt-8">
                    <GradientLink href="/contact" size=ButtonSize::Lg hover=HoverEffect::Glow>
                        "Let's Work Together"
                    </GradientLink>
                </div>
            </div>
        </section>
    }
}
