//! Order lifecycle status and user roles.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The lifecycle is strictly linear: `interest → paid → verified`.
/// [`Delivered`](Self::Delivered) is reserved in the data model for forward
/// compatibility but no transition currently reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Buyer expressed intent to purchase; no payment evidence yet.
    #[default]
    Interest,
    /// A payment receipt has been attached, awaiting admin verification.
    Paid,
    /// Admin confirmed the receipt; the order counts towards spend.
    Verified,
    /// Reserved terminal state; currently unreachable.
    Delivered,
}

impl OrderStatus {
    /// Whether the lifecycle allows advancing from `self` to `next`.
    ///
    /// There are no backward transitions and no cancellation.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Interest, Self::Paid) | (Self::Paid, Self::Verified)
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interest => write!(f, "interest"),
            Self::Paid => write!(f, "paid"),
            Self::Verified => write!(f, "verified"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "interest" => Ok(Self::Interest),
            "paid" => Ok(Self::Paid),
            "verified" => Ok(Self::Verified),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Store operator: catalog mutation, verification, reporting.
    Admin,
    /// Wholesale customer.
    Buyer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Buyer => write!(f, "buyer"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "buyer" => Ok(Self::Buyer),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
