use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::{InputProcessor, KeyBindings, Sensitivity};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Mouse and keyboard control parameters.
pub struct ControlOptions {
    /// Input-to-camera scale factors.
    pub sensitivity: Sensitivity,
    /// Keyboard bindings.
    #[schemars(skip)]
    pub key_bindings: KeyBindings,
}

impl ControlOptions {
    /// Build an input processor from these settings.
    #[must_use]
    pub fn input_processor(&self) -> InputProcessor {
        InputProcessor::with_key_bindings(self.key_bindings.clone())
            .with_sensitivity(self.sensitivity)
    }
}
