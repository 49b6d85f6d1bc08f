use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value backing for the user's theme choice.
pub trait ThemePersistence: Send + Sync {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// Remembers nothing. Used while rendering on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPersistence;

impl ThemePersistence for NoPersistence {
    fn load(&self) -> Option<Theme> {
        None
    }

    fn save(&self, _theme: Theme) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(Theme) + Send + Sync>;

struct Inner {
    theme: Theme,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    persistence: Box<dyn ThemePersistence>,
}

/// Application-wide light/dark state, handed to components through context.
///
/// Cloning is cheap and every clone shares the same state. Subscribers run
/// synchronously on change, outside the internal lock, so they may read the
/// store (or even change it) without deadlocking.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<Mutex<Inner>>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ThemeStore")
            .field("theme", &inner.theme)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl ThemeStore {
    /// Seeds the store from the persisted preference, or `fallback` when
    /// nothing was saved yet. Call once when the app mounts.
    pub fn initialize(persistence: impl ThemePersistence + 'static, fallback: Theme) -> Self {
        let theme = persistence.load().unwrap_or(fallback);
        log::debug!("theme initialized to {theme}");
        Self {
            inner: Arc::new(Mutex::new(Inner {
                theme,
                next_id: 0,
                subscribers: Vec::new(),
                persistence: Box::new(persistence),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a panicking subscriber never runs under the lock, so the state is intact
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> Theme {
        self.lock().theme
    }

    /// Stores and persists `theme`, then notifies subscribers. Setting the
    /// current value again is a no-op.
    pub fn set(&self, theme: Theme) {
        let subscribers = {
            let mut inner = self.lock();
            if inner.theme == theme {
                return;
            }
            inner.theme = theme;
            inner.persistence.save(theme);
            inner
                .subscribers
                .iter()
                .map(|(_, s)| Arc::clone(s))
                .collect::<Vec<_>>()
        };
        for subscriber in subscribers {
            subscriber(theme);
        }
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&self, subscriber: impl Fn(Theme) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(subscriber)));
        id
    }

    /// Returns whether `id` was still subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct MemoryPersistence(Arc<Mutex<Option<Theme>>>);

    impl ThemePersistence for MemoryPersistence {
        fn load(&self) -> Option<Theme> {
            *self.0.lock().unwrap()
        }

        fn save(&self, theme: Theme) {
            *self.0.lock().unwrap() = Some(theme);
        }
    }

    fn recorder(store: &ThemeStore) -> (SubscriptionId, Arc<Mutex<Vec<Theme>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |t| sink.lock().unwrap().push(t));
        (id, seen)
    }

    #[test]
    fn test_initialize_prefers_persisted_value() {
        let prefs = MemoryPersistence::default();
        prefs.save(Theme::Light);
        let store = ThemeStore::initialize(prefs, Theme::Dark);
        assert_eq!(store.current(), Theme::Light);

        let store = ThemeStore::initialize(MemoryPersistence::default(), Theme::Light);
        assert_eq!(store.current(), Theme::Light);
        let store = ThemeStore::initialize(NoPersistence, Theme::default());
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn test_set_persists_and_notifies() {
        let prefs = MemoryPersistence::default();
        let store = ThemeStore::initialize(prefs.clone(), Theme::Dark);
        let (_, seen) = recorder(&store);
        let (_, seen_too) = recorder(&store);

        store.set(Theme::Light);
        store.set(Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);

        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light, Theme::Dark]);
        assert_eq!(*seen_too.lock().unwrap(), vec![Theme::Light, Theme::Dark]);
        assert_eq!(prefs.load(), Some(Theme::Dark));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = ThemeStore::initialize(NoPersistence, Theme::Dark);
        let (id, seen) = recorder(&store);
        store.set(Theme::Light);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(Theme::Dark);
        assert_eq!(*seen.lock().unwrap(), vec![Theme::Light]);
    }

    #[test]
    fn test_clones_share_state_and_subscribers_may_read() {
        let store = ThemeStore::initialize(NoPersistence, Theme::Dark);
        let reader = store.clone();
        let observed = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&observed);
        store.subscribe(move |_| *sink.lock().unwrap() = Some(reader.current()));

        store.clone().set(Theme::Light);
        assert_eq!(*observed.lock().unwrap(), Some(Theme::Light));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_theme_serde_and_display() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert!(Theme::Light.toggled().is_dark());
    }
}
