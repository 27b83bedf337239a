use serde::{Deserialize, Serialize};

/// Flow is the direction of a transfer relative to the pool account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    // Tokens sent into the pool
    In,
    // Tokens sent out of the pool
    Out,
}

impl Flow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::In => "in",
            Flow::Out => "out",
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
