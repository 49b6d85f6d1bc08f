use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::ContentConfig;
use crate::content::ContentClient;
use crate::widgets::{ButtonSize, HoverEffect};

use super::flip_card::FlipCard;
use super::gradient::{GradientLink, GradientTitle};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let config = expect_context::<ContentConfig>();
    // browser-only, and dropped together with the page
    let phases = LocalResource::new(move || {
        let client = ContentClient::from_config(&config);
        async move {
            client
                .fetch_phase_cards()
                .await
                .map_err(|e| e.message().to_string())
        }
    });

    view! {
        <Title text="Our Process" />
        <div class="services-backdrop py-12 sm:py-20 px-4 sm:px-8 min-h-screen">
            <div class="container mx-auto grid grid-cols-1 lg:grid-cols-[1fr_2fr] gap-8 lg:gap-12 items-center">
                <div class="text-white">
                    <GradientTitle
                        text="Our Process"
                        gradient_words=&["Process"]
                        class="text-4xl font-bold mb-4"
                        text_color="text-white"
                    />
                    <p class="text-lg mb-6 text-shadow-md">
                        "At BrightPath Web Studio, every website we create follows a clear, purposeful path, from the first spark of an idea to a seamless, fully launched experience."
                    </p>
                    <p class="text-lg text-shadow-md">
                        "Our six-phase approach ensures each project is thoughtfully planned, beautifully designed, and built to perform."
                    </p>
                    <GradientLink
                        href="/contact"
                        size=ButtonSize::Md
                        hover=HoverEffect::Bright
                        class="mt-8"
                    >
                        "Start Your Project"
                    </GradientLink>
                </div>
                <Suspense fallback=|| {
                    view! { <p class="text-center py-10 text-white">"Loading our process..."</p> }
                }>
                    {move || Suspend::new(async move {
                        match phases.await {
                            Ok(cards) => {
                                view! {
                                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 lg:gap-8">
                                        {cards
                                            .into_iter()
                                            .map(|card| view! { <FlipCard card=card /> })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(msg) => {
                                view! {
                                    <p class="text-center py-10 text-red-500">
                                        {format!("Error: {msg}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        }
                    })}
                </Suspense>
            </div>
        </div>
    }
}
