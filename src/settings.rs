//! Game settings
//!
//! Read once at startup from page-embedded JSON (web) or the
//! `PONG_SETTINGS` environment variable (native). Never written back.

use serde::{Deserialize, Serialize};

use crate::consts::{COMPUTER_EASE, PADDLE_SPEED};
use crate::sim::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Computer paddle smoothing (lower = laggier, easier to beat)
    pub ease_factor: f32,
    /// Player paddle speed while an arrow key is held (px/tick)
    pub paddle_speed: f32,
    /// Fixed RNG seed; random per session when unset
    pub seed: Option<u64>,
    /// Draw the dashed center line
    pub show_net: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ease_factor: COMPUTER_EASE,
            paddle_speed: PADDLE_SPEED,
            seed: None,
            show_net: true,
        }
    }
}

impl Settings {
    /// Element id of the embedded `<script type="application/json">` block
    pub const ELEMENT_ID: &'static str = "pong-settings";
    /// Environment variable consulted by the native runner
    pub const ENV_VAR: &'static str = "PONG_SETTINGS";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Parse, falling back to defaults (with a warning) on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings: {:?}", settings);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Pull out-of-range values back to something playable
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.ease_factor.is_finite() || self.ease_factor <= 0.0 {
            self.ease_factor = defaults.ease_factor;
        }
        self.ease_factor = self.ease_factor.min(1.0);
        if !self.paddle_speed.is_finite() || self.paddle_speed < 0.0 {
            self.paddle_speed = defaults.paddle_speed;
        }
        self
    }

    /// Simulation knobs derived from these settings
    pub fn tuning(&self) -> Tuning {
        Tuning {
            ease_factor: self.ease_factor,
            paddle_speed: self.paddle_speed,
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) => Self::from_json_or_default(&json),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => Self::from_json_or_default(&json),
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
