//! Node role enum.

use std::str::FromStr;

use crate::CoreError;

/// What a node represents on the collection map.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NodeKind {
    /// Start and end point of every route.  Carries no service time.
    Depot,
    /// A stop where the vehicle spends service time emptying bins.
    #[default]
    CollectionPoint,
}

impl NodeKind {
    /// Label used in CSV tables and JSON payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Depot           => "depot",
            NodeKind::CollectionPoint => "collection_point",
        }
    }
}

impl FromStr for NodeKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "depot"            => Ok(NodeKind::Depot),
            "collection_point" => Ok(NodeKind::CollectionPoint),
            other              => Err(CoreError::UnknownNodeKind(other.to_owned())),
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
