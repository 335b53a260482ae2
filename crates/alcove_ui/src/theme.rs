//! Theme mode context shared by every component under a [`ThemeProvider`].
//!
//! Components carry only semantic `data-ui-*` hooks; the provider stamps the
//! active mode token on a wrapper element and the stylesheet maps tokens to
//! visual values. The chosen mode is persisted to browser storage and
//! restored on the next mount.

use leptos::*;

/// Browser storage key for the persisted theme mode.
pub const THEME_STORAGE_KEY: &str = "alcove-ui-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual theme mode.
pub enum ThemeMode {
    /// Light surfaces, dark text.
    Light,
    /// Dark surfaces, light text.
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

impl ThemeMode {
    /// Stable token used for CSS hooks and storage.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[cfg(any(test, target_arch = "wasm32"))]
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Returns the persisted theme mode when browser storage holds a valid one.
fn restored_theme_mode() -> Option<ThemeMode> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(THEME_STORAGE_KEY).ok()??;
        ThemeMode::parse(&raw)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn persist_theme_mode(mode: ThemeMode) {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        let Some(storage) = storage else {
            return;
        };
        if storage.set_item(THEME_STORAGE_KEY, mode.token()).is_err() {
            logging::warn!("theme mode persistence failed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mode;
    }
}

#[component]
/// Provides the theme mode signal to descendants and stamps the active token
/// on a wrapper element.
pub fn ThemeProvider(
    /// Mode override applied instead of the persisted/default mode.
    #[prop(optional)]
    initial: Option<ThemeMode>,
    children: Children,
) -> impl IntoView {
    let mode = create_rw_signal(initial.or_else(restored_theme_mode).unwrap_or_default());
    provide_context(mode);

    create_effect(move |_| persist_theme_mode(mode.get()));

    view! {
        <div
            class="ui-theme-root"
            data-ui-primitive="true"
            data-ui-kind="theme-root"
            data-ui-theme=move || mode.get().token()
        >
            {children()}
        </div>
    }
}

/// Theme mode signal provided by the nearest [`ThemeProvider`].
///
/// Panics when called outside a provider, matching the contract of
/// [`expect_context`].
pub fn use_theme() -> RwSignal<ThemeMode> {
    expect_context::<RwSignal<ThemeMode>>()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_round_trip_through_parse() {
        assert_eq!(ThemeMode::parse(ThemeMode::Light.token()), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse(ThemeMode::Dark.token()), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("solarized"), None);
    }

    #[test]
    fn toggle_alternates_between_the_two_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }
}
