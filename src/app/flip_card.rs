use leptos::prelude::*;

use crate::content::PhaseCard;
use crate::widgets::ButtonSize;

use super::gradient::{GradientLink, GradientTitle, TitleTag};

/// One phase of the process. Flips on hover, or on tap for touch screens.
#[component]
pub fn FlipCard(card: PhaseCard) -> impl IntoView {
    let PhaseCard {
        main_heading,
        subheading,
        front_card_description,
        icon_url,
        icon_alt,
        back_card_title,
        back_card_button_text,
        bullet_points,
        ..
    } = card;
    let (flipped, set_flipped) = signal(false);

    view! {
        <div
            class="flip-card-container group w-full max-w-64 h-[22rem] sm:h-[24rem] mx-auto cursor-pointer"
            on:click=move |_| set_flipped.update(|f| *f = !*f)
        >
            <div class=move || {
                if flipped.get() { "flip-card is-flipped" } else { "flip-card" }
            }>
                <div class="flip-card-front rounded-xl p-4 sm:p-8 flex flex-col items-center justify-center text-white border border-primary shadow-glow-primary">
                    {(!icon_url.is_empty())
                        .then(|| {
                            view! {
                                <div class="mb-4 sm:mb-6">
                                    <img
                                        src=icon_url
                                        alt=icon_alt
                                        class="w-full max-w-[200px] h-20 sm:h-24 object-contain drop-shadow-lg"
                                    />
                                </div>
                            }
                        })}
                    <div class="flex flex-col items-center">
                        <GradientTitle
                            text=main_heading
                            tag=TitleTag::H3
                            class="text-[18px] font-bold mb-2 text-center leading-tight"
                        />
                        <p class="text-2xl text-primary text-center text-shadow-md">{subheading}</p>
                        {(!front_card_description.is_empty())
                            .then(|| {
                                view! {
                                    <p class="mt-2 text-sm text-gray-200 text-center text-shadow-md">
                                        {front_card_description}
                                    </p>
                                }
                            })}
                    </div>
                </div>
                <div class="flip-card-back rounded-xl p-4 sm:p-8 flex flex-col justify-center text-[#1A2238] shadow-glow-primary">
                    <h3 class="text-xl font-bold text-center mb-4 leading-tight">{back_card_title}</h3>
                    <ul class="space-y-2 list-disc list-inside">
                        {bullet_points
                            .into_iter()
                            .map(|point| {
                                view! { <li class="text-sm leading-relaxed">{point.text}</li> }
                            })
                            .collect_view()}
                    </ul>
                    <div class="mt-8 text-center">
                        <GradientLink href="/contact" size=ButtonSize::Sm>
                            {back_card_button_text}
                        </GradientLink>
                    </div>
                </div>
            </div>
        </div>
    }
}
