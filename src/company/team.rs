//! Teams an employee can be assigned to

use serde::Serialize;

/// A team within the company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Builds the product
    Engineering,
    /// Sells the product
    Sales,
    /// Helps customers
    Support,
}

impl Team {
    /// Every team, in menu order
    pub const ALL: [Self; 3] = [Self::Engineering, Self::Sales, Self::Support];

    /// One-based position in the menu
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Engineering => 1,
            Self::Sales => 2,
            Self::Support => 3,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engineering => write!(f, "engineering"),
            Self::Sales => write!(f, "sales"),
            Self::Support => write!(f, "support"),
        }
    }
}

impl std::str::FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "engineering" | "eng" => Ok(Self::Engineering),
            "2" | "sales" => Ok(Self::Sales),
            "3" | "support" => Ok(Self::Support),
            _ => Err(format!("Unknown team: {s}. Use: engineering, sales, support (or 1-3)")),
        }
    }
}
