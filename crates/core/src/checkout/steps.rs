//! Checkout steps

use std::fmt;

use serde::{Deserialize, Serialize};

/// Checkout steps in the order the customer completes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStepId {
    /// Email and phone.
    Contact,

    /// Delivery address.
    Address,

    /// Shipping method and COD choice.
    Shipping,

    /// Payment and order placement.
    Payment,
}

impl CheckoutStepId {
    /// Every step, in sequence.
    pub const ALL: [Self; 4] = [Self::Contact, Self::Address, Self::Shipping, Self::Payment];

    /// The first step of a fresh checkout.
    pub const FIRST: Self = Self::Contact;

    /// The step that follows this one, if any.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Contact => Some(Self::Address),
            Self::Address => Some(Self::Shipping),
            Self::Shipping => Some(Self::Payment),
            Self::Payment => None,
        }
    }

    /// Lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Address => "address",
            Self::Shipping => "shipping",
            Self::Payment => "payment",
        }
    }
}

impl fmt::Display for CheckoutStepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Done; may be revisited.
    Completed,

    /// Currently being filled in.
    Active,

    /// Not reached yet.
    Upcoming,
}

/// A step together with its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutStep {
    /// Which step.
    pub id: CheckoutStepId,

    /// Its progress.
    pub status: StepStatus,
}

impl CheckoutStep {
    /// Pair a step with a status.
    pub const fn new(id: CheckoutStepId, status: StepStatus) -> Self {
        Self { id, status }
    }
}
