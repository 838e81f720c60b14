//! Deserializable calculator configuration
//!
//! The window size arriving from text or JSON is untyped, so it is validated
//! here: anything that is not a positive integer is rejected with a
//! [`ConfigError`](crate::traits::ConfigError) message.
//!
//! ```
//! use flowhmean::config::HarmonicMeanConfig;
//!
//! let config: HarmonicMeanConfig = serde_json::from_str(r#"{ "window": 3 }"#).unwrap();
//! assert_eq!(config.build().window(), 3);
//!
//! assert!(serde_json::from_str::<HarmonicMeanConfig>(r#"{ "window": "3" }"#).is_err());
//! ```

use crate::window::{WindowSize, WindowedHarmonicMean};
use log::debug;

/// Settings for a [`WindowedHarmonicMean`]
///
/// A missing `window` key selects the default of 5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarmonicMeanConfig {
    #[serde(default)]
    pub window: WindowSize,
}

impl HarmonicMeanConfig {
    /// Configuration with the given window
    pub fn new(window: WindowSize) -> Self {
        Self { window }
    }

    /// Create an empty calculator with these settings
    pub fn build(&self) -> WindowedHarmonicMean {
        debug!("building harmonic mean calculator with window {}", self.window);
        WindowedHarmonicMean::from_window_size(self.window)
    }
}
