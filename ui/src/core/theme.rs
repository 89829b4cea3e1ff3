//! Display mode, its persistence seam, and the mount-gated toggle icon.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Parsed the same way everywhere: `site.toml`, stored preferences and
/// `FromStr` all ignore case and surrounding whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme mode `{0}` (expected `light` or `dark`)")]
pub struct ParseThemeModeError(String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ParseThemeModeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for ThemeMode {
    type Error = ParseThemeModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("theme storage is unavailable on this platform")]
    Unavailable,
    #[error("theme storage rejected the write: {0}")]
    Rejected(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Where the chosen mode survives between visits. Platforms inject their own.
pub trait ThemeStore {
    fn load(&self) -> Option<ThemeMode>;
    fn save(&self, mode: ThemeMode) -> Result<(), ThemeStoreError>;
}

/// Process-local store; nothing outlives the app.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    mode: Cell<Option<ThemeMode>>,
}

impl MemoryThemeStore {
    pub fn with_mode(mode: ThemeMode) -> Self {
        Self {
            mode: Cell::new(Some(mode)),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        self.mode.get()
    }

    fn save(&self, mode: ThemeMode) -> Result<(), ThemeStoreError> {
        self.mode.set(Some(mode));
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_store::LocalStorageThemeStore;

#[cfg(target_arch = "wasm32")]
mod web_store {
    use super::{ThemeMode, ThemeStore, ThemeStoreError};

    /// Browser `localStorage` under a single key.
    #[derive(Debug, Clone)]
    pub struct LocalStorageThemeStore {
        key: &'static str,
    }

    impl LocalStorageThemeStore {
        pub fn new(key: &'static str) -> Self {
            Self { key }
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl Default for LocalStorageThemeStore {
        fn default() -> Self {
            Self::new("theme")
        }
    }

    impl ThemeStore for LocalStorageThemeStore {
        fn load(&self) -> Option<ThemeMode> {
            let raw = Self::storage()?.get_item(self.key).ok().flatten()?;
            raw.parse().ok()
        }

        fn save(&self, mode: ThemeMode) -> Result<(), ThemeStoreError> {
            let storage = Self::storage().ok_or(ThemeStoreError::Unavailable)?;
            storage
                .set_item(self.key, mode.as_str())
                .map_err(|err| ThemeStoreError::Rejected(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileThemeStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use std::fs;
    use std::path::PathBuf;

    use directories::ProjectDirs;

    use super::{ThemeMode, ThemeStore, ThemeStoreError};

    /// Plain-text file holding `light` or `dark`.
    #[derive(Debug, Clone)]
    pub struct FileThemeStore {
        path: PathBuf,
    }

    impl FileThemeStore {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<config dir>/theme` for the app, if the OS exposes a config dir.
        pub fn in_config_dir() -> Option<Self> {
            let dirs = ProjectDirs::from("in", "manuarora", "folio")?;
            Some(Self::at(dirs.config_dir().join("theme")))
        }

        pub fn path(&self) -> &std::path::Path {
            &self.path
        }
    }

    impl ThemeStore for FileThemeStore {
        fn load(&self) -> Option<ThemeMode> {
            let raw = fs::read_to_string(&self.path).ok()?;
            match raw.parse() {
                Ok(mode) => Some(mode),
                Err(err) => {
                    tracing::warn!("ignoring stored theme at {}: {err}", self.path.display());
                    None
                }
            }
        }

        fn save(&self, mode: ThemeMode) -> Result<(), ThemeStoreError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, mode.as_str())?;
            Ok(())
        }
    }
}

/// Whether the client has displayed at least once. The stored mode is only
/// trusted after that point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MountState {
    #[default]
    Unmounted,
    Mounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    pub const SUN_PATH: &'static str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
    pub const MOON_PATH: &'static str = "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";

    pub fn name(self) -> &'static str {
        match self {
            ThemeIcon::Sun => "sun",
            ThemeIcon::Moon => "moon",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ThemeIcon::Sun => Self::SUN_PATH,
            ThemeIcon::Moon => Self::MOON_PATH,
        }
    }
}

/// Icon shown in the toggle: none before mount, then the glyph for the mode
/// a click would switch to.
pub fn theme_icon(mount: MountState, mode: ThemeMode) -> Option<ThemeIcon> {
    match (mount, mode) {
        (MountState::Unmounted, _) => None,
        (MountState::Mounted, ThemeMode::Dark) => Some(ThemeIcon::Sun),
        (MountState::Mounted, ThemeMode::Light) => Some(ThemeIcon::Moon),
    }
}
