//! Invocation options: parameters sent with every remote call.
//!
//! Loaded once at startup and shared read-only by every request.

use llm_qa_domain::{Model, ResponseShape};
use serde::{Deserialize, Serialize};

/// Parameters for one remote completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationOptions {
    /// Model identifier sent to the API.
    pub model: Model,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Endpoint family and answer location.
    pub shape: ResponseShape,
}

impl Default for InvocationOptions {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: 300,
            temperature: 0.2,
            shape: ResponseShape::default(),
        }
    }
}

impl InvocationOptions {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_shape(mut self, shape: ResponseShape) -> Self {
        self.shape = shape;
        self
    }
}
