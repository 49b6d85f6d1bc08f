use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::ContentConfig;
use crate::content::{format_review_date, ContentClient, Review};
use crate::widgets::star_row;

use super::gradient::{GradientTitle, TitleTag};

#[component]
pub fn ReviewsPage() -> impl IntoView {
    view! {
        <Title text="Reviews" />
        <section class="py-16 px-4">
            <div class="text-center mb-12">
                <GradientTitle
                    text="What Our Clients Say"
                    gradient_words=&["Clients"]
                    class="text-4xl md:text-5xl font-bold font-poppins mb-4"
                    tag=TitleTag::H1
                />
                <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                    "Real words from the businesses we've helped find their way online."
                </p>
            </div>
            <ReviewWidget />
        </section>
    }
}

#[component]
pub fn ReviewWidget() -> impl IntoView {
    let config = expect_context::<ContentConfig>();
    let reviews = LocalResource::new(move || {
        let client = ContentClient::from_config(&config);
        async move { client.fetch_reviews().await.map_err(|e| e.message().to_string()) }
    });

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
            <Suspense fallback=|| view! { <p class="text-center p-8">"Loading reviews..."</p> }>
                {move || Suspend::new(async move {
                    match reviews.await {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="text-center p-8">"No reviews found."</p> }.into_any()
                        }
                        Ok(list) => {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                                    {list
                                        .into_iter()
                                        .map(|review| view! { <ReviewCard review=review /> })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                        Err(msg) => {
                            view! { <p class="text-center p-8 text-red-500">{msg}</p> }.into_any()
                        }
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let Review {
        author,
        quote,
        rating,
        photo_url,
        review_date,
        ..
    } = review;
    let initial = author.chars().next().unwrap_or('?').to_string();
    let photo = if photo_url.is_empty() {
        view! {
            <div class="w-12 h-12 rounded-full bg-primary text-[#1A2238] flex items-center justify-center font-bold text-lg">
                {initial}
            </div>
        }
        .into_any()
    } else {
        view! { <img src=photo_url alt=author.clone() class="w-12 h-12 rounded-full object-cover" /> }
            .into_any()
    };

    view! {
        <article class="flex flex-col h-full p-6 rounded-xl border border-primary/40 bg-card shadow-md">
            <p class="text-primary text-xl tracking-wide" aria-label=format!("{rating} out of 5 stars")>
                {star_row(rating)}
            </p>
            <blockquote class="flex-grow my-4 italic leading-relaxed">{format!("“{quote}”")}</blockquote>
            <div class="flex items-center gap-3">
                {photo}
                <div>
                    <p class="font-semibold font-poppins">{author}</p>
                    <p class="text-sm text-muted-foreground">{format_review_date(&review_date)}</p>
                </div>
            </div>
        </article>
    }
}
