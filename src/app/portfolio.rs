use leptos::prelude::*;
use leptos_meta::Title;

use crate::widgets::{ButtonSize, HoverEffect};

use super::gradient::{GradientLink, GradientTitle, TitleTag};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen pt-12 pb-16">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <GradientTitle
                        text="Our Portfolio"
                        gradient_words=&["Portfolio"]
                        tag=TitleTag::H1
                        class="text-4xl font-bold mb-4 font-poppins"
                    />
                    <p class="text-muted-foreground max-w-xl mx-auto">
                        "Selected projects where we guided a business from an aging site to a modern platform."
                    </p>
                </div>
                <div class="max-w-md mx-auto">
                    <DaleTiffanyCard />
                </div>
            </div>
        </div>
    }
}

/// Project card that swaps the current site for the legacy one on hover.
#[component]
fn DaleTiffanyCard() -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    let fade = move |visible: bool| {
        if visible {
            "absolute inset-0 transition-opacity duration-500 opacity-100"
        } else {
            "absolute inset-0 transition-opacity duration-500 opacity-0"
        }
    };

    view! {
        <div
            class="group relative overflow-hidden rounded-lg bg-card border border-primary/50 transition-all duration-300 hover:shadow-xl hover:-translate-y-2"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="relative h-56 overflow-hidden">
                <div class=move || fade(hovered.get())>
                    <img
                        src="/dale-tiffany/before-home.png"
                        alt="Dale Tiffany - Before (Legacy Site)"
                        class="w-full h-full object-cover object-top grayscale"
                    />
                    <div class="absolute top-3 left-3 px-2 py-1 bg-red-600 text-white text-xs font-medium rounded">
                        "BEFORE"
                    </div>
                </div>
                <div class=move || fade(!hovered.get())>
                    <img
                        src="/dale-tiffany/after-home.png"
                        alt="Dale Tiffany - After (Modern Site)"
                        class="w-full h-full object-cover object-top"
                    />
                    <div class="absolute top-3 left-3 px-2 py-1 bg-primary text-primary-foreground text-xs font-medium rounded">
                        "AFTER"
                    </div>
                </div>
                <div class="absolute bottom-3 right-3 px-2 py-1 bg-background/80 backdrop-blur-sm text-xs rounded opacity-0 group-hover:opacity-100 transition-opacity">
                    "Hover to see before"
                </div>
            </div>
            <div class="p-5">
                <div class="flex items-center gap-2 mb-2 text-xs">
                    <span class="font-medium text-primary">"E-Commerce + B2B"</span>
                    <span class="text-muted-foreground">"•"</span>
                    <span class="text-muted-foreground">"Luxury Lighting"</span>
                </div>
                <GradientTitle
                    text="Dale Tiffany"
                    tag=TitleTag::H3
                    class="text-xl font-semibold mb-2 font-poppins"
                />
                <p class="text-sm text-muted-foreground mb-4 line-clamp-2">
                    "Complete digital transformation of a 20-year-old PHP site into a modern React platform with B2B portal and CRM."
                </p>
                <div class="flex items-center gap-4 mb-4 text-xs text-muted-foreground">
                    <span>"Responsive"</span>
                    <span>"B2B Portal"</span>
                    <span>"CRM"</span>
                </div>
                <div class="flex flex-wrap gap-1.5 mb-4">
                    {["React", "TypeScript", "Supabase", "Tailwind"]
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-0.5 text-xs bg-muted text-muted-foreground rounded-full">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <GradientLink
                    href="/case-study"
                    size=ButtonSize::Sm
                    hover=HoverEffect::Bright
                    class="w-full"
                >
                    "View Case Study →"
                </GradientLink>
            </div>
        </div>
    }
}
