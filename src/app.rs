mod about;
mod case_study;
mod contact;
mod flip_card;
mod gradient;
mod homepage;
mod navbar;
mod portfolio;
mod reviews;
mod services;
mod theme_toggle;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::ContentConfig;

use about::AboutPage;
use case_study::CaseStudyPage;
use contact::ContactPage;
use homepage::HomePage;
use navbar::Navbar;
use portfolio::PortfolioPage;
use reviews::ReviewsPage;
use services::ServicesPage;
pub use theme_toggle::{provide_theme, ThemeContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/brightpath-site.css" />
                <MetaTags />
            </head>
            <body class="font-lato">
                <App />
            </body>
        </html>
    }
}

fn content_config() -> ContentConfig {
    ContentConfig::from_env().unwrap_or_else(|e| {
        log::error!("invalid content configuration, using defaults: {e}");
        ContentConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(content_config());
    let ThemeContext { theme, .. } = provide_theme();

    view! {
        <Title formatter=|title| format!("{title} | BrightPath Web Studio") />

        <Router>
            <div class=move || {
                format!("{} min-h-screen flex flex-col bg-background text-foreground", theme.get())
            }>
                <Navbar />
                <main class="flex-grow pt-20">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/services") view=ServicesPage />
                        <Route path=path!("/review") view=ReviewsPage />
                        <Route path=path!("/reviews") view=ReviewsPage />
                        <Route path=path!("/portfolio") view=PortfolioPage />
                        <Route path=path!("/case-study") view=CaseStudyPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-700/40 py-8 text-center text-sm text-muted-foreground">
            <p>"© BrightPath Web Studio, LLC. All rights reserved."</p>
            <p class="mt-1">"129 Maybin Rd. Zirconia, NC 28790"</p>
        </footer>
    }
}
