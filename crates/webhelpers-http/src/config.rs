use serde::{Deserialize, Serialize};

/// What a writer does when encoding or the sink fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log at debug level and carry on with the remaining steps.
    #[default]
    Discard,
    /// Stop at the first failure and return it.
    Propagate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    pub failure_policy: FailurePolicy,
}

impl WriterConfig {
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}
