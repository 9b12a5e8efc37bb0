//! Light/dark theme resolution and persistence.
//!
//! The browser side lives behind [`ThemeHost`] so the resolution rules can be
//! exercised without a document or local storage.

pub const THEME_KEY: &str = "darkMode";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Value written under [`THEME_KEY`].
    pub fn stored_value(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    pub fn from_stored_value(value: &str) -> Option<Self> {
        match value {
            "true" => Some(Self::Dark),
            "false" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Instant,
    Animated,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("local storage rejected the operation: {0}")]
    Rejected(String),
}

pub trait ThemeHost {
    fn stored_preference(&self) -> Result<Option<String>, StorageError>;
    fn store_preference(&self, value: &str) -> Result<(), StorageError>;
    /// Ambient `prefers-color-scheme: dark` signal.
    fn prefers_dark(&self) -> bool;
    fn apply(&self, theme: Theme, transition: Transition);
}

pub fn resolve_theme(host: &impl ThemeHost) -> Theme {
    match host.stored_preference() {
        Ok(Some(value)) => {
            if let Some(theme) = Theme::from_stored_value(&value) {
                return theme;
            }
            tracing::debug!(%value, "ignoring unrecognized stored theme");
        }
        Ok(None) => {}
        Err(error) => tracing::debug!(%error, "theme preference unreadable"),
    }

    Theme::from_dark(host.prefers_dark())
}

pub fn apply_initial_theme(host: &impl ThemeHost, theme: Theme) {
    host.apply(theme, Transition::Instant);
}

/// Flips `current`, marks the document and persists the new value. The
/// returned theme is the flipped one even when the write fails.
pub fn toggle_theme(host: &impl ThemeHost, current: Theme) -> Theme {
    let next = current.toggled();
    host.apply(next, Transition::Animated);

    if let Err(error) = host.store_preference(next.stored_value()) {
        tracing::debug!(%error, theme = next.as_str(), "theme preference not persisted");
    }

    next
}
