//! Light/dark theme flag: localStorage round-trip plus the `dark` class on
//! the document element. The flag itself is owned by the app shell and only
//! mutated through its toggle callback.

use web_sys::window;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Saved preference first, then the OS preference, then light.
pub fn load() -> Theme {
    if let Some(saved) = stored_preference() {
        return saved;
    }
    if system_prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

pub fn store(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Syncs the `dark` class on `<html>` with the flag.
pub fn apply(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = root.class_list();
        let _ = match theme {
            Theme::Dark => class_list.add_1("dark"),
            Theme::Light => class_list.remove_1("dark"),
        };
    }
}

fn stored_preference() -> Option<Theme> {
    let storage = window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Theme::from_str(&value)
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn unknown_storage_value_ignored() {
        assert_eq!(Theme::from_str("sepia"), None);
        assert_eq!(Theme::from_str(""), None);
    }

    #[test]
    fn toggle_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
