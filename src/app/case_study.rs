use leptos::{
    ev::{MouseEvent, TouchEvent},
    html,
    prelude::*,
};
use leptos_meta::Title;
use leptos_router::components::*;

use crate::widgets::{ButtonSize, ComparisonSlider, Screenshot, ScreenshotTabs};

use super::gradient::{GradientLink, GradientTitle, TabButton, TitleTag};

const SCREENSHOTS: [Screenshot; 6] = [
    Screenshot {
        before: Some("/dale-tiffany/before-home.png"),
        after: "/dale-tiffany/after-home.png",
        label: "Homepage",
    },
    Screenshot {
        before: Some("/dale-tiffany/before-about.png"),
        after: "/dale-tiffany/after-about.png",
        label: "About Page",
    },
    Screenshot {
        before: Some("/dale-tiffany/before-contact.png"),
        after: "/dale-tiffany/after-contact.png",
        label: "Contact Page",
    },
    Screenshot {
        before: Some("/dale-tiffany/before-retailer.png"),
        after: "/dale-tiffany/after-retailer-logos.png",
        label: "Retailer Logos",
    },
    Screenshot {
        before: Some("/dale-tiffany/before-catalog.png"),
        after: "/dale-tiffany/after-retailer-portal.png",
        label: "Retailer Portal",
    },
    Screenshot {
        before: None,
        after: "/dale-tiffany/after-admin-crm.png",
        label: "CRM (New)",
    },
];

const TECH_STACK: [(&str, &str); 8] = [
    ("React 19", "Frontend"),
    ("TypeScript", "Frontend"),
    ("Tailwind CSS", "Frontend"),
    ("Framer Motion", "Frontend"),
    ("Supabase", "Backend"),
    ("Netlify Functions", "Backend"),
    ("WordPress Headless", "CMS"),
    ("Zustand", "State"),
];

const BEFORE_PROBLEMS: [&str; 6] = [
    "20-year-old PHP codebase",
    "No mobile responsiveness",
    "Broken retailer catalog system",
    "Outdated legacy CRM",
    "No modern e-commerce features",
    "Poor user experience",
];

const AFTER_SOLUTIONS: [&str; 6] = [
    "Modern React/TypeScript stack",
    "Fully responsive design",
    "Working B2B retailer portal",
    "Custom CRM with pipeline",
    "Full e-commerce capabilities",
    "Smooth, animated UX",
];

const STATS: [(&str, &str); 3] = [
    ("20+", "Years Modernized"),
    ("3", "Platforms in One"),
    ("100%", "Responsive"),
];

struct Feature {
    title: &'static str,
    description: &'static str,
    points: [&'static str; 4],
}

const KEY_FEATURES: [Feature; 3] = [
    Feature {
        title: "B2B Retailer Portal",
        description: "Secure wholesale ordering platform replacing the broken legacy catalog system.",
        points: [
            "Retailer authentication",
            "Wholesale pricing",
            "Order management",
            "Look book collections",
        ],
    },
    Feature {
        title: "Custom CRM System",
        description: "Full-featured CRM replacing their outdated legacy system with modern capabilities.",
        points: [
            "Lead management",
            "Kanban pipeline",
            "Email integration",
            "Analytics dashboard",
        ],
    },
    Feature {
        title: "Responsive Design",
        description: "Mobile-first approach ensuring perfect display across all devices.",
        points: [
            "Mobile-first CSS",
            "Touch-friendly UI",
            "Optimized images",
            "Fast load times",
        ],
    },
];

const EXTRAS: [(&str, &str); 4] = [
    ("Headless WordPress", "Content management"),
    ("Supabase", "Real-time database"),
    ("E-Commerce", "Product catalog"),
    ("Email System", "Resend integration"),
];

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    view! {
        <Title text="Dale Tiffany Case Study" />
        <div class="min-h-screen">
            <div class="sticky top-20 z-40 bg-background/80 backdrop-blur-sm border-b border-gray-500/20">
                <div class="container mx-auto px-4 py-3">
                    <A
                        href="/portfolio"
                        attr:class="text-sm font-medium text-muted-foreground hover:text-foreground transition-colors"
                    >
                        "← Back to Portfolio"
                    </A>
                </div>
            </div>
            <Hero />
            <BeforeAfter />
            <ChallengeAndSolution />
            <KeyFeatures />
            <TechStack />
            <section class="py-16 bg-primary/5">
                <div class="container mx-auto px-4 text-center">
                    <GradientTitle
                        text="Ready to Transform Your Digital Presence?"
                        gradient_words=&["Transform", "Digital", "Presence"]
                        class="text-2xl font-bold mb-4 font-poppins"
                    />
                    <p class="text-muted-foreground mb-8 max-w-xl mx-auto">
                        "Let's discuss how we can modernize your website and build custom solutions for your business."
                    </p>
                    <GradientLink href="/contact" size=ButtonSize::Lg>
                        "Get in Touch"
                    </GradientLink>
                </div>
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="py-16 lg:py-24">
            <div class="container mx-auto px-4 max-w-4xl text-center">
                <div class="inline-flex items-center gap-2 px-3 py-1 bg-primary/10 text-primary rounded-full text-sm font-medium mb-6">
                    "⚡ Digital Transformation"
                </div>
                <GradientTitle
                    text="Dale Tiffany"
                    tag=TitleTag::H1
                    class="text-4xl md:text-5xl lg:text-6xl font-bold mb-4 font-poppins"
                />
                <p class="text-xl text-muted-foreground max-w-2xl mx-auto">
                    "Transforming a 20-year-old legacy PHP site into a modern, responsive e-commerce platform with B2B portal and integrated CRM."
                </p>
                <div class="flex flex-wrap justify-center gap-8 mt-8">
                    {STATS
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="text-center">
                                    <div class="text-3xl font-bold text-primary">{value}</div>
                                    <div class="text-sm text-muted-foreground">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BeforeAfter() -> impl IntoView {
    let tabs = RwSignal::new(ScreenshotTabs::new(SCREENSHOTS.len()));
    let slider = RwSignal::new(ComparisonSlider::default());
    let frame = NodeRef::<html::Div>::new();

    let track = move |client_x: i32| {
        if let Some(el) = frame.get_untracked() {
            let rect = el.get_bounding_client_rect();
            slider.update(|s| s.track(f64::from(client_x), rect.left(), rect.width()));
        }
    };

    view! {
        <section class="py-12 bg-muted/30">
            <div class="container mx-auto px-4">
                <GradientTitle
                    text="Before & After"
                    gradient_words=&["After"]
                    class="text-2xl font-semibold text-center mb-8 font-poppins"
                />
                <div class="flex justify-center gap-2 mb-6 flex-wrap">
                    {SCREENSHOTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, shot)| {
                            view! {
                                <TabButton
                                    active=Signal::derive(move || tabs.with(|t| t.active() == i))
                                    on_select=move |_: ()| tabs.update(|t| {
                                        t.select(i);
                                    })
                                >
                                    {shot.label}
                                </TabButton>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="max-w-5xl mx-auto">
                    {move || {
                        let shot = SCREENSHOTS[tabs.with(|t| t.active())];
                        match shot.before {
                            Some(before) => {
                                view! {
                                    <div
                                        node_ref=frame
                                        class="relative aspect-[16/10] rounded-lg overflow-hidden border border-gray-500/30 shadow-xl select-none"
                                        on:mousemove=move |ev: MouseEvent| track(ev.client_x())
                                        on:touchmove=move |ev: TouchEvent| {
                                            if let Some(touch) = ev.touches().get(0) {
                                                track(touch.client_x());
                                            }
                                        }
                                    >
                                        <img
                                            src=shot.after
                                            alt="After - Modern Site"
                                            class="absolute inset-0 w-full h-full object-cover object-top"
                                        />
                                        <div
                                            class="absolute inset-0 overflow-hidden"
                                            style=move || format!("width: {}%", slider.get().position())
                                        >
                                            <img
                                                src=before
                                                alt="Before - Legacy Site"
                                                class="absolute inset-0 h-full max-w-none object-cover object-top grayscale"
                                                style=move || {
                                                    format!("width: {}%", slider.get().before_image_width())
                                                }
                                            />
                                        </div>
                                        <div
                                            class="absolute top-0 bottom-0 w-1 bg-primary cursor-ew-resize -translate-x-1/2"
                                            style=move || format!("left: {}%", slider.get().position())
                                        >
                                            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-10 h-10 bg-primary rounded-full flex items-center justify-center shadow-lg text-primary-foreground">
                                                "‹›"
                                            </div>
                                        </div>
                                        <div class="absolute top-4 left-4 px-3 py-1 bg-red-600 text-white text-sm font-medium rounded">
                                            "BEFORE"
                                        </div>
                                        <div class="absolute top-4 right-4 px-3 py-1 bg-primary text-primary-foreground text-sm font-medium rounded">
                                            "AFTER"
                                        </div>
                                    </div>
                                    <p class="text-center text-sm text-muted-foreground mt-4">
                                        "Drag or hover to compare before and after"
                                    </p>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <div class="relative aspect-[16/10] rounded-lg overflow-hidden border border-gray-500/30 shadow-xl">
                                        <img
                                            src=shot.after
                                            alt="New Feature"
                                            class="w-full h-full object-cover object-top"
                                        />
                                        <div class="absolute top-4 left-4 px-3 py-1 bg-primary text-primary-foreground text-sm font-medium rounded">
                                            "⚡ NEW FEATURE"
                                        </div>
                                    </div>
                                    <p class="text-center text-sm text-muted-foreground mt-4">
                                        "Brand new functionality - no legacy equivalent existed"
                                    </p>
                                }
                                    .into_any()
                            }
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ChallengeAndSolution() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="container mx-auto px-4 grid md:grid-cols-2 gap-8 max-w-5xl">
                <div class="p-6 rounded-lg bg-red-500/5 border border-primary/30">
                    <GradientTitle
                        text="The Challenge"
                        tag=TitleTag::H3
                        class="text-xl font-semibold mb-4 font-poppins"
                    />
                    <ul class="space-y-3">
                        {BEFORE_PROBLEMS
                            .into_iter()
                            .map(|problem| {
                                view! {
                                    <li class="flex items-start gap-3 text-muted-foreground">
                                        <span class="text-red-500">"✕"</span>
                                        {problem}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="p-6 rounded-lg bg-primary/5 border border-primary/20">
                    <GradientTitle
                        text="The Solution"
                        tag=TitleTag::H3
                        class="text-xl font-semibold mb-4 font-poppins"
                    />
                    <ul class="space-y-3">
                        {AFTER_SOLUTIONS
                            .into_iter()
                            .map(|solution| {
                                view! {
                                    <li class="flex items-start gap-3 text-muted-foreground">
                                        <span class="text-primary">"✓"</span>
                                        {solution}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn KeyFeatures() -> impl IntoView {
    view! {
        <section class="py-16 bg-muted/30">
            <div class="container mx-auto px-4">
                <GradientTitle
                    text="Key Features Delivered"
                    gradient_words=&["Delivered"]
                    class="text-3xl font-bold text-center mb-4 font-poppins"
                />
                <p class="text-center text-muted-foreground mb-12 max-w-2xl mx-auto">
                    "A complete digital ecosystem replacing outdated systems with modern solutions"
                </p>
                <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                    {KEY_FEATURES
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <div class="p-6 rounded-lg bg-card border border-primary/50 hover:shadow-lg transition-shadow">
                                    <GradientTitle
                                        text=feature.title
                                        tag=TitleTag::H3
                                        class="text-lg font-semibold mb-2 font-poppins"
                                    />
                                    <p class="text-sm text-muted-foreground mb-4">{feature.description}</p>
                                    <ul class="space-y-2 text-sm text-muted-foreground">
                                        {feature
                                            .points
                                            .into_iter()
                                            .map(|point| {
                                                view! {
                                                    <li class="flex items-center gap-2">
                                                        <span class="text-primary">"✓"</span>
                                                        {point}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid md:grid-cols-4 gap-4 max-w-5xl mx-auto mt-6">
                    {EXTRAS
                        .into_iter()
                        .map(|(name, caption)| {
                            view! {
                                <div class="p-4 rounded-lg bg-card border border-gray-500/20 text-center">
                                    <div class="text-sm font-medium">{name}</div>
                                    <div class="text-xs text-muted-foreground">{caption}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TechStack() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="container mx-auto px-4">
                <GradientTitle
                    text="Technology Stack"
                    gradient_words=&["Technology"]
                    class="text-3xl font-bold text-center mb-4 font-poppins"
                />
                <p class="text-center text-muted-foreground mb-12 max-w-2xl mx-auto">
                    "Built with modern, scalable technologies for long-term maintainability"
                </p>
                <div class="flex flex-wrap justify-center gap-3 max-w-3xl mx-auto">
                    {TECH_STACK
                        .into_iter()
                        .map(|(name, category)| {
                            view! {
                                <div class="px-4 py-2 rounded-full bg-card border border-primary/30 hover:border-primary transition-colors">
                                    <span class="text-sm font-medium">{name}</span>
                                    <span class="text-xs text-muted-foreground ml-2">
                                        {format!("({category})")}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screenshot_catalogue() {
        let new_features: Vec<&str> = SCREENSHOTS
            .iter()
            .filter(|s| s.is_new_feature())
            .map(|s| s.label)
            .collect();
        assert_eq!(new_features, vec!["CRM (New)"]);
        assert!(SCREENSHOTS
            .iter()
            .all(|s| s.after.starts_with("/dale-tiffany/")));

        let mut tabs = ScreenshotTabs::new(SCREENSHOTS.len());
        assert!(tabs.select(SCREENSHOTS.len() - 1));
        assert!(SCREENSHOTS[tabs.active()].before.is_none());
    }
}
