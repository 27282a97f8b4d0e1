//! Checkout
//!
//! A four step wizard (contact, address, shipping, payment). [`StepSequencer`] tracks progress,
//! [`guards`] decide whether the active step may complete, and [`CheckoutSession`] ties both to
//! the data the customer enters.

pub mod guards;
mod sequencer;
mod session;
mod steps;

pub use guards::{
    Address, AddressId, ContactDetails, DOMESTIC_COUNTRY_CODE, GuardViolation, ShippingMethod,
    ShippingMethodId,
};
pub use sequencer::{SequencerError, StepSequencer};
pub use session::{CheckoutDraft, CheckoutError, CheckoutSession, StepCompletion};
pub use steps::{CheckoutStep, CheckoutStepId, StepStatus};
