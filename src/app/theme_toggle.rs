use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(not(feature = "hydrate"))]
use crate::theme::NoPersistence;
use crate::theme::{Theme, ThemeStore};

#[cfg(feature = "hydrate")]
const THEME_KEY: &str = "brightpath-theme";

/// Theme choice kept in the browser's local storage.
#[cfg(feature = "hydrate")]
struct StoredTheme {
    stored: Signal<Option<Theme>>,
    set_stored: WriteSignal<Option<Theme>>,
}

#[cfg(feature = "hydrate")]
impl StoredTheme {
    fn new() -> Self {
        let (stored, set_stored, _) =
            use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>(THEME_KEY);
        Self { stored, set_stored }
    }
}

#[cfg(feature = "hydrate")]
impl crate::theme::ThemePersistence for StoredTheme {
    fn load(&self) -> Option<Theme> {
        self.stored.get_untracked()
    }

    fn save(&self, theme: Theme) {
        self.set_stored.set(Some(theme));
    }
}

#[derive(Clone)]
pub struct ThemeContext {
    pub store: ThemeStore,
    /// Mirrors the store for views. Starts at the default theme on both
    /// server and client so hydration matches, then follows the store.
    pub theme: ReadSignal<Theme>,
}

pub fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let store = ThemeStore::initialize(StoredTheme::new(), Theme::default());
    #[cfg(not(feature = "hydrate"))]
    let store = ThemeStore::initialize(NoPersistence, Theme::default());

    let (theme, set_theme) = signal(Theme::default());
    let id = store.subscribe(move |t| set_theme.set(t));
    on_cleanup({
        let store = store.clone();
        move || {
            store.unsubscribe(id);
        }
    });

    // effects only run in the browser, after hydration
    Effect::new({
        let store = store.clone();
        move |_| set_theme.set(store.current())
    });

    let ctx = ThemeContext { store, theme };
    provide_context(ctx.clone());
    ctx
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeContext { store, theme } = expect_context::<ThemeContext>();

    view! {
        <button
            type="button"
            class="p-2 rounded-full text-xl leading-none transition-colors duration-300 hover:bg-gray-500/20"
            aria-label=move || format!("Switch to {} mode", theme.get().toggled())
            on:click=move |_| {
                let next = store.toggle();
                log::debug!("theme toggled to {next}");
            }
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
