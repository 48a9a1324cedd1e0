//! Status enums for domain entities.

use serde::{Deserialize, Serialize};

/// Order status.
///
/// Payment here is simulated, so an order is `Completed` the moment it is
/// created; no further transitions are modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Completed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}
