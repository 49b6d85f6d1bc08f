use leptos::prelude::*;
use leptos_router::components::*;

use crate::theme::Theme;
use crate::widgets::{
    mobile_nav_item_class, nav_item_class, nav_surface_class, ButtonSize, CONTACT_LINK,
    NAV_LINKS,
};

use super::gradient::GradientLink;
use super::theme_toggle::{ThemeContext, ThemeToggle};

fn logo_src(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "/images/brightpath-logo-dark.png",
        Theme::Light => "/images/brightpath-logo-light.png",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ThemeContext { theme, .. } = expect_context::<ThemeContext>();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 border-b-2 backdrop-blur-sm {}",
                nav_surface_class(theme.get()),
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    <A href="/" attr:class="flex items-center space-x-2">
                        <img
                            src=move || logo_src(theme.get())
                            alt="BrightPath Web Studio"
                            class="h-12 w-auto"
                        />
                    </A>
                    <div class="hidden md:flex items-center space-x-4">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <A
                                        href=link.href
                                        attr:class=move || {
                                            format!(
                                                "px-3 py-2 rounded-md font-medium font-poppins transition-colors duration-200 hover:text-primary {}",
                                                nav_item_class(theme.get()),
                                            )
                                        }
                                    >
                                        {link.label}
                                    </A>
                                }
                            })
                            .collect_view()}
                        <GradientLink href=CONTACT_LINK.href size=ButtonSize::Sm>
                            {CONTACT_LINK.label}
                        </GradientLink>
                        <ThemeToggle />
                    </div>
                    <div class="flex md:hidden items-center space-x-2">
                        <ThemeToggle />
                        <button
                            type="button"
                            class=move || {
                                format!("p-2 rounded-md text-2xl {}", nav_item_class(theme.get()))
                            }
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                // any click inside the panel is a navigation, so close it
                <div class="md:hidden px-2 pt-2 pb-3 space-y-1" on:click=move |_| set_menu_open.set(false)>
                    {NAV_LINKS
                        .into_iter()
                        .chain([CONTACT_LINK])
                        .map(|link| {
                            view! {
                                <A
                                    href=link.href
                                    attr:class=move || {
                                        format!(
                                            "block px-3 py-2 rounded-md text-base font-medium {}",
                                            mobile_nav_item_class(theme.get()),
                                        )
                                    }
                                >
                                    {link.label}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
