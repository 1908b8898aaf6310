use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ticksmith_core::{EnvelopeMeta, ValidationError};

/// Request identifier (UUID v4) attached to every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Command metadata accumulated while a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub request_id: RequestId,
    pub latency_ms: u64,
    pub warnings: Vec<String>,
}

impl Metadata {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            request_id: RequestId::new_v4(),
            latency_ms,
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn into_envelope_meta(self, schema_version: &str) -> Result<EnvelopeMeta, ValidationError> {
        let mut meta = EnvelopeMeta::new(
            self.request_id.to_string(),
            schema_version,
            self.latency_ms,
        )?;

        for warning in self.warnings {
            meta.push_warning(warning);
        }

        Ok(meta)
    }
}
