use std::fmt::{Display, Formatter};

use tickwatch_core::EnvelopeMeta;
use uuid::Uuid;

/// Request identifier (UUID v4) attached to every command envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

/// Per-command metadata folded into the envelope.
#[derive(Debug, Clone)]
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

    pub fn into_envelope_meta(self) -> EnvelopeMeta {
        let mut meta = EnvelopeMeta::new(self.request_id.to_string(), self.latency_ms);
        for warning in self.warnings {
            meta.push_warning(warning);
        }
        meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_is_uuid_v4() {
        let request_id = RequestId::new_v4();
        assert_eq!(request_id.0.get_version_num(), 4);
    }

    #[test]
    fn warnings_survive_envelope_conversion() {
        let mut metadata = Metadata::new(12);
        metadata.push_warning("slow provider");

        let meta = metadata.into_envelope_meta();
        assert_eq!(meta.latency_ms, 12);
        assert_eq!(meta.warnings, vec![String::from("slow provider")]);
    }
}
