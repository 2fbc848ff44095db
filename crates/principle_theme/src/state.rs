//! Active-theme context
//!
//! A [`ThemeProvider`] owns one `(theme, mode)` pair. Consumers either hold the
//! provider directly or reach the one installed in the process-wide registry
//! through [`use_theme`].
//!
//! The registry is the only global state in the crate. It is filled by
//! [`ThemeProvider::install`] (first mount) and emptied by
//! [`ThemeProvider::uninstall`] (shutdown). Asking for the theme while it is
//! empty is a wiring bug and fails with [`ThemeError::OutsideProvider`].

use crate::error::ThemeError;
use crate::store::{ModeStore, MODE_STORAGE_KEY};
use crate::theme::Theme;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, warn};

/// Installed provider
static ACTIVE_PROVIDER: RwLock<Option<Arc<ThemeProvider>>> = RwLock::new(None);

/// Global redraw callback - set by the app layer to re-render on mode changes
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// Called after every effective mode change, on whichever thread changed it.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Some(callback);
}

fn trigger_redraw() {
    let callback = *REDRAW_CALLBACK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(callback) = callback {
        callback();
    }
}

fn normalize_mode(mode: Option<&str>) -> Option<String> {
    mode.filter(|m| !m.is_empty()).map(str::to_string)
}

struct ActiveState {
    mode: Option<String>,
    /// Base theme with the current mode's colors applied
    active: Arc<Theme>,
}

/// Holder of the current theme and mode for one component tree
pub struct ThemeProvider {
    base: Arc<Theme>,
    state: RwLock<ActiveState>,
    store: Box<dyn ModeStore>,
}

/// Snapshot handed to consumers
#[derive(Clone)]
pub struct ThemeContext {
    /// Theme with the mode's colors applied
    pub theme: Arc<Theme>,
    pub mode: Option<String>,
    provider: Arc<ThemeProvider>,
}

impl ThemeContext {
    /// Change the provider's mode. See [`ThemeProvider::set_mode`].
    pub fn set_mode(&self, mode: Option<&str>) {
        self.provider.set_mode(mode);
    }

    pub fn provider(&self) -> &Arc<ThemeProvider> {
        &self.provider
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl ThemeProvider {
    /// Create a provider for `theme`.
    ///
    /// When `initial_mode` is `None` the store is read once to seed the mode.
    /// The resulting mode is then persisted (or the key removed when there
    /// is none).
    pub fn mount(theme: Theme, initial_mode: Option<&str>, store: Box<dyn ModeStore>) -> Self {
        let mut mode = normalize_mode(initial_mode);

        if mode.is_none() {
            match store.load(MODE_STORAGE_KEY) {
                Ok(saved) => {
                    debug!("ThemeProvider::mount - saved mode {:?}", saved);
                    mode = normalize_mode(saved.as_deref());
                }
                Err(e) => warn!("ThemeProvider::mount - could not read saved mode: {}", e),
            }
        }

        let active = Arc::new(theme.with_mode(mode.as_deref()));
        let provider = ThemeProvider {
            base: Arc::new(theme),
            state: RwLock::new(ActiveState { mode, active }),
            store,
        };
        provider.persist_mode();
        provider
    }

    /// Theme the provider was mounted with, before any mode is applied
    pub fn base_theme(&self) -> &Arc<Theme> {
        &self.base
    }

    /// Current theme with the mode's colors applied
    pub fn theme(&self) -> Arc<Theme> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .active
            .clone()
    }

    pub fn mode(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .mode
            .clone()
    }

    /// Switch the mode. `None` or an empty name clears it.
    ///
    /// A mode the theme does not define is kept as the selection but resolves
    /// to the base colors. The new mode is persisted best-effort: a store
    /// failure is logged, never returned.
    pub fn set_mode(&self, mode: Option<&str>) {
        let mode = normalize_mode(mode);
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            if state.mode == mode {
                return;
            }
            debug!(
                "ThemeProvider::set_mode - switching from {:?} to {:?}",
                state.mode, mode
            );
            state.active = Arc::new(self.base.with_mode(mode.as_deref()));
            state.mode = mode;
        }

        self.persist_mode();
        trigger_redraw();
    }

    fn persist_mode(&self) {
        let result = match self.mode() {
            Some(mode) => self.store.save(MODE_STORAGE_KEY, &mode),
            None => self.store.remove(MODE_STORAGE_KEY),
        };
        if let Err(e) = result {
            warn!("ThemeProvider - failed to persist mode: {}", e);
        }
    }

    /// Snapshot of the current theme and mode
    pub fn context(self: &Arc<Self>) -> ThemeContext {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        ThemeContext {
            theme: state.active.clone(),
            mode: state.mode.clone(),
            provider: Arc::clone(self),
        }
    }

    // ========== Registry ==========

    /// Install `provider` as the process-wide provider, replacing any previous one.
    pub fn install(provider: ThemeProvider) -> Arc<ThemeProvider> {
        let provider = Arc::new(provider);
        let mut slot = ACTIVE_PROVIDER
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            debug!("ThemeProvider::install - replacing the installed provider");
        }
        *slot = Some(Arc::clone(&provider));
        provider
    }

    /// Remove the process-wide provider, returning it if one was installed.
    pub fn uninstall() -> Option<Arc<ThemeProvider>> {
        ACTIVE_PROVIDER
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// The installed provider
    pub fn current() -> Result<Arc<ThemeProvider>, ThemeError> {
        ACTIVE_PROVIDER
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(ThemeError::OutsideProvider)
    }

    /// The installed provider, if any
    pub fn try_current() -> Option<Arc<ThemeProvider>> {
        Self::current().ok()
    }
}

/// Current theme and mode of the installed provider.
///
/// Fails with [`ThemeError::OutsideProvider`] when no provider is installed.
pub fn use_theme() -> Result<ThemeContext, ThemeError> {
    Ok(ThemeProvider::current()?.context())
}

/// Run `f` with the installed provider's active theme.
pub fn with_theme<R>(f: impl FnOnce(&Theme) -> R) -> Result<R, ThemeError> {
    let theme = ThemeProvider::current()?.theme();
    Ok(f(&theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryModeStore;
    use crate::tokens::{color_overrides, ColorToken};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn theme() -> Theme {
        let mut theme = Theme::default();
        theme.colors.set(ColorToken::Primary, "#66b3ff");
        theme.colors.set(ColorToken::Text, "#e4e4e4");
        theme.modes.insert(
            "light".into(),
            color_overrides([(ColorToken::Primary, "#0066cc")]),
        );
        theme
    }

    /// Shares its entries with the test so writes can be observed.
    struct SharedStore(Arc<MemoryModeStore>);

    impl ModeStore for SharedStore {
        fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
            self.0.load(key)
        }
        fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
            self.0.save(key, value)
        }
        fn remove(&self, key: &str) -> Result<(), ThemeError> {
            self.0.remove(key)
        }
    }

    struct FailingStore;

    impl ModeStore for FailingStore {
        fn load(&self, _: &str) -> Result<Option<String>, ThemeError> {
            Err(ThemeError::Store("unavailable".into()))
        }
        fn save(&self, _: &str, _: &str) -> Result<(), ThemeError> {
            Err(ThemeError::Store("read-only".into()))
        }
        fn remove(&self, _: &str) -> Result<(), ThemeError> {
            Err(ThemeError::Store("read-only".into()))
        }
    }

    #[test]
    fn initial_mode_applies_and_is_saved() {
        let shared = Arc::new(MemoryModeStore::with_mode("dark"));
        let provider =
            ThemeProvider::mount(theme(), Some("light"), Box::new(SharedStore(shared.clone())));

        assert_eq!(provider.mode().as_deref(), Some("light"));
        assert_eq!(provider.theme().colors.primary, "#0066cc");
        assert_eq!(provider.base_theme().colors.primary, "#66b3ff");
        assert_eq!(
            shared.load(MODE_STORAGE_KEY).unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn saved_mode_seeds_when_no_initial_mode() {
        let provider =
            ThemeProvider::mount(theme(), None, Box::new(MemoryModeStore::with_mode("light")));
        assert_eq!(provider.mode().as_deref(), Some("light"));
        assert_eq!(provider.theme().colors.primary, "#0066cc");
    }

    #[test]
    fn clearing_the_mode_removes_the_key() {
        let shared = Arc::new(MemoryModeStore::new());
        let provider =
            ThemeProvider::mount(theme(), Some("light"), Box::new(SharedStore(shared.clone())));

        provider.set_mode(Some(""));
        assert_eq!(provider.mode(), None);
        assert_eq!(provider.theme().colors.primary, "#66b3ff");
        assert_eq!(shared.load(MODE_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn unknown_mode_is_kept_but_uses_base_colors() {
        let provider = ThemeProvider::mount(theme(), None, Box::new(MemoryModeStore::new()));
        provider.set_mode(Some("sepia"));
        assert_eq!(provider.mode().as_deref(), Some("sepia"));
        assert_eq!(provider.theme().colors, provider.base_theme().colors);
    }

    #[test]
    fn store_failures_are_swallowed() {
        let provider = ThemeProvider::mount(theme(), None, Box::new(FailingStore));
        assert_eq!(provider.mode(), None);
        provider.set_mode(Some("light"));
        assert_eq!(provider.theme().colors.primary, "#0066cc");
    }

    static REDRAWS: AtomicUsize = AtomicUsize::new(0);

    fn count_redraw() {
        REDRAWS.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn redraw_fires_on_effective_changes_only() {
        set_redraw_callback(count_redraw);
        let provider = Arc::new(ThemeProvider::mount(
            theme(),
            None,
            Box::new(MemoryModeStore::new()),
        ));

        let before = REDRAWS.load(Ordering::SeqCst);
        let ctx = provider.context();
        ctx.set_mode(Some("light"));
        ctx.set_mode(Some("light"));
        assert!(REDRAWS.load(Ordering::SeqCst) > before);

        assert_eq!(ctx.mode, None);
        assert_eq!(provider.context().mode.as_deref(), Some("light"));
    }
}
