use serde::Deserialize;

/// Appearance as written in the configuration or on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    System,
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    /// Accent color of the copyable values as `(r, g, b)`.
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        match self {
            Appearance::Dark => (0x4c, 0xaf, 0x50),
            Appearance::Light => (0x00, 0x00, 0xff),
        }
    }
}

impl From<AppearanceMode> for Appearance {
    // Terminals don't report their theme, so "system" starts out dark.
    fn from(mode: AppearanceMode) -> Self {
        match mode {
            AppearanceMode::System | AppearanceMode::Dark => Appearance::Dark,
            AppearanceMode::Light => Appearance::Light,
        }
    }
}
