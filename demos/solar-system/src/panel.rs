//! Info panel model. The host renders it from the accessors; Rust only
//! decides what it says and whether it is up.

use crate::registry::CelestialBody;

pub const FALLBACK_DESCRIPTION: &str = "No description available yet.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPanel {
    visible: bool,
    title: String,
    description: String,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a body's name and description. A missing or unnamed body hides
    /// the panel instead.
    pub fn show(&mut self, body: Option<&CelestialBody>) {
        let Some(body) = body.filter(|b| !b.name.is_empty()) else {
            log::warn!("body data incomplete for info panel");
            self.hide();
            return;
        };
        self.title = capitalize(body.name);
        self.description = body.description.unwrap_or(FALLBACK_DESCRIPTION).to_string();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.title.clear();
        self.description.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
