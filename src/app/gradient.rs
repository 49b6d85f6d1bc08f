use leptos::prelude::*;
use leptos_router::components::*;

use crate::widgets::{
    gradient_segments, tab_button_class, ButtonSize, GradientStyle, HoverEffect, GOLD_GRADIENT,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleTag {
    H1,
    #[default]
    H2,
    H3,
    P,
}

/// A heading where the words listed in `gradient_words` (or the whole text,
/// when none are listed) are painted with the brand gradient.
#[component]
pub fn GradientTitle(
    #[prop(into)] text: String,
    #[prop(optional)] gradient_words: &'static [&'static str],
    #[prop(default = "text-4xl font-bold font-poppins")] class: &'static str,
    #[prop(default = "text-foreground")] text_color: &'static str,
    #[prop(optional)] gradient_style: GradientStyle,
    #[prop(optional)] tag: TitleTag,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    let gradient = gradient_style.class();
    let class = if gradient_words.is_empty() {
        format!("{class} {gradient}")
    } else {
        format!("{class} {text_color}")
    };
    let content = gradient_segments(&text, gradient_words)
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            let sep = if i == 0 { "" } else { " " };
            if segment.highlighted && !gradient_words.is_empty() {
                view! {
                    {sep}
                    <span class=gradient>{segment.text}</span>
                }
                .into_any()
            } else {
                view! {
                    {sep}
                    {segment.text}
                }
                .into_any()
            }
        })
        .collect_view();

    match tag {
        TitleTag::H1 => view! { <h1 id=id class=class>{content}</h1> }.into_any(),
        TitleTag::H2 => view! { <h2 id=id class=class>{content}</h2> }.into_any(),
        TitleTag::H3 => view! { <h3 id=id class=class>{content}</h3> }.into_any(),
        TitleTag::P => view! { <p id=id class=class>{content}</p> }.into_any(),
    }
}

fn gradient_button_class(size: ButtonSize, hover: HoverEffect, extra: &str) -> String {
    format!(
        "inline-flex items-center justify-center gap-2 rounded-lg font-semibold font-poppins text-primary-foreground shadow-md transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed {GOLD_GRADIENT} {} {} {extra}",
        size.class(),
        hover.class(),
    )
}

#[component]
pub fn GradientButton(
    children: Children,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] hover: HoverEffect,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=gradient_button_class(size, hover, class)
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}

/// [`GradientButton`] look for in-app navigation.
#[component]
pub fn GradientLink(
    children: Children,
    href: &'static str,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] hover: HoverEffect,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <A href=href attr:class=gradient_button_class(size, hover, class)>
            {children()}
        </A>
    }
}

#[component]
pub fn TabButton(
    children: Children,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || tab_button_class(active.get())
            aria-pressed=move || active.get().to_string()
            on:click=move |_| on_select.run(())
        >
            {children()}
        </button>
    }
}
