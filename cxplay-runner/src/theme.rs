//! Theme state
//!
//! Two fixed palettes, dark by default, toggled per session and never
//! persisted. The hex pairs are the ones the original surface used.

/// Color palette of one theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
}

const DARK: Palette = Palette {
    background: "#121212",
    foreground: "#e0e0e0",
};

const LIGHT: Palette = Palette {
    background: "#f0f0f0",
    foreground: "#000000",
};

/// Active theme of the session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Switch to the other theme in place
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// The other theme
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The fixed palette of this theme
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_is_the_default() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().palette().background, "#121212");
    }

    #[test]
    fn test_toggle_switches_palettes() {
        let mut theme = Theme::default();
        theme.toggle();
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.palette().background, "#f0f0f0");
        assert_eq!(theme.palette().foreground, "#000000");
    }

    #[test]
    fn test_double_toggle_restores_every_attribute() {
        let original = Theme::default();
        let before = original.palette();

        let mut theme = original;
        theme.toggle();
        theme.toggle();

        assert_eq!(theme, original);
        assert_eq!(theme.palette(), before);
    }
}
