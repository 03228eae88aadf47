use crate::domain::{Appearance, HeightResult};

/// Everything the handlers read and write: the two input fields, the last result and the appearance.
#[derive(Debug)]
pub struct AppState {
    latitude_text: String,
    longitude_text: String,
    result: Option<HeightResult>,
    appearance: Appearance,
}

impl AppState {
    pub fn new(appearance: Appearance) -> Self {
        AppState {
            latitude_text: String::new(),
            longitude_text: String::new(),
            result: None,
            appearance,
        }
    }

    pub fn set_inputs(&mut self, latitude_text: impl Into<String>, longitude_text: impl Into<String>) {
        self.latitude_text = latitude_text.into();
        self.longitude_text = longitude_text.into();
    }

    pub fn latitude_text(&self) -> &str {
        &self.latitude_text
    }

    pub fn longitude_text(&self) -> &str {
        &self.longitude_text
    }

    pub fn result(&self) -> Option<&HeightResult> {
        self.result.as_ref()
    }

    /// Replaces the previous result, the last lookup always wins.
    pub fn set_result(&mut self, result: HeightResult) {
        self.result = Some(result);
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn toggle_appearance(&mut self) -> Appearance {
        self.appearance = self.appearance.toggled();
        self.appearance
    }
}
