//! Checkout Session
//!
//! Pairs the step sequencer with the data each step collects. Form data can only be edited while
//! its step is active, so changing an earlier answer means jumping back to it, which sends every
//! later step through its guard again.

use thiserror::Error;

use crate::{
    checkout::{
        guards::{
            self, Address, AddressId, ContactDetails, GuardViolation, ShippingMethod,
            ShippingMethodId,
        },
        sequencer::{SequencerError, StepSequencer},
        steps::{CheckoutStep, CheckoutStepId},
    },
    host::{CheckoutHost, OrderConfirmation, OrderRequest, PlaceOrderError},
    summary::{CodConfig, PaymentMode},
};

/// Errors returned by checkout operations. None of them change the session.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// The active step's guard failed.
    #[error("cannot continue: {0}")]
    Blocked(#[from] GuardViolation),

    /// Illegal sequencer transition.
    #[error(transparent)]
    Sequencer(#[from] SequencerError),

    /// The operation belongs to a step that is not active.
    #[error("{0} is not the active step")]
    NotActive(CheckoutStepId),

    /// The payment step completes by placing the order, not by advancing.
    #[error("the payment step completes when the order is placed")]
    AwaitingPlacement,

    /// The host could not place the order.
    #[error(transparent)]
    PlaceOrder(#[from] PlaceOrderError),

    /// The order has been placed.
    #[error("checkout is closed")]
    Closed,
}

/// Payload emitted when a step completes.
#[derive(Debug, Clone, PartialEq)]
pub enum StepCompletion {
    /// Contact details entered.
    Contact(ContactDetails),

    /// Address picked.
    Address(AddressId),

    /// Shipping method picked.
    Shipping {
        /// Chosen method.
        method: ShippingMethodId,

        /// Whether COD was chosen.
        cash_on_delivery: bool,
    },

    /// Order placed.
    Payment(OrderConfirmation),
}

/// Data collected across the checkout steps.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutDraft {
    contact: ContactDetails,
    addresses: Vec<Address>,
    selected_address: Option<AddressId>,
    shipping_methods: Vec<ShippingMethod>,
    selected_shipping: Option<ShippingMethodId>,
    cod: CodConfig,
    cash_on_delivery: bool,
}

impl CheckoutDraft {
    /// Empty draft for the given shipping options and COD configuration.
    pub fn new(shipping_methods: Vec<ShippingMethod>, cod: CodConfig) -> Self {
        Self {
            contact: ContactDetails::default(),
            addresses: Vec::new(),
            selected_address: None,
            shipping_methods,
            selected_shipping: None,
            cod,
            cash_on_delivery: false,
        }
    }

    /// Prefill contact details, e.g. from the signed-in customer.
    #[must_use]
    pub fn with_contact(mut self, contact: ContactDetails) -> Self {
        self.contact = contact;
        self
    }

    /// Prefill saved addresses.
    #[must_use]
    pub fn with_addresses(mut self, addresses: Vec<Address>) -> Self {
        self.addresses = addresses;
        self
    }

    /// Contact details.
    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    /// Saved and newly added addresses.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Selected address, if it exists.
    pub fn selected_address(&self) -> Option<&Address> {
        let selected = self.selected_address.as_ref()?;

        self.addresses.iter().find(|address| &address.id == selected)
    }

    /// Offered shipping methods.
    pub fn shipping_methods(&self) -> &[ShippingMethod] {
        &self.shipping_methods
    }

    /// Selected shipping method, if it exists.
    pub fn selected_shipping(&self) -> Option<&ShippingMethod> {
        let selected = self.selected_shipping.as_ref()?;

        self.shipping_methods
            .iter()
            .find(|method| &method.id == selected)
    }

    /// COD configuration.
    pub fn cod(&self) -> &CodConfig {
        &self.cod
    }

    /// Whether COD may currently be chosen.
    pub fn cod_eligible(&self) -> bool {
        guards::cod_eligible(&self.cod, &self.contact)
    }

    /// Payment mode implied by the COD choice.
    pub fn payment_mode(&self) -> PaymentMode {
        if self.cash_on_delivery {
            PaymentMode::CashOnDelivery
        } else {
            PaymentMode::Prepaid
        }
    }

    /// Evaluate the guard of a step against the current data.
    ///
    /// # Errors
    ///
    /// Returns the first violated condition.
    pub fn guard(&self, step: CheckoutStepId) -> Result<(), GuardViolation> {
        match step {
            CheckoutStepId::Contact => guards::contact(&self.contact),
            CheckoutStepId::Address => {
                guards::address(self.selected_address.as_ref(), &self.addresses)
            }
            CheckoutStepId::Shipping => guards::shipping(
                self.selected_shipping.as_ref(),
                &self.shipping_methods,
                self.cash_on_delivery,
                &self.cod,
                &self.contact,
            ),
            CheckoutStepId::Payment => Ok(()),
        }
    }

    fn completion(&self, step: CheckoutStepId) -> Option<StepCompletion> {
        match step {
            CheckoutStepId::Contact => Some(StepCompletion::Contact(self.contact.clone())),
            CheckoutStepId::Address => self.selected_address.clone().map(StepCompletion::Address),
            CheckoutStepId::Shipping => {
                self.selected_shipping
                    .clone()
                    .map(|method| StepCompletion::Shipping {
                        method,
                        cash_on_delivery: self.cash_on_delivery,
                    })
            }
            CheckoutStepId::Payment => None,
        }
    }

    fn order_request(&self) -> Result<OrderRequest, GuardViolation> {
        for step in CheckoutStepId::ALL {
            self.guard(step)?;
        }

        let address = self
            .selected_address()
            .cloned()
            .ok_or(GuardViolation::NoAddressSelected)?;

        let shipping_method = self
            .selected_shipping()
            .cloned()
            .ok_or(GuardViolation::NoShippingMethodSelected)?;

        Ok(OrderRequest {
            contact: self.contact.clone(),
            address,
            shipping_method,
            payment_mode: self.payment_mode(),
        })
    }
}

/// Checkout Session
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    sequencer: StepSequencer,
    draft: CheckoutDraft,
}

impl CheckoutSession {
    /// Start a checkout on the contact step.
    pub fn new(draft: CheckoutDraft) -> Self {
        Self {
            sequencer: StepSequencer::new(),
            draft,
        }
    }

    /// Resume a checkout from a rendered step list.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Sequencer`]: the step list is malformed.
    /// - [`CheckoutError::Blocked`]: the draft does not satisfy a step marked completed.
    /// - [`CheckoutError::Closed`]: every step is completed.
    pub fn resume(steps: &[CheckoutStep], draft: CheckoutDraft) -> Result<Self, CheckoutError> {
        let sequencer = StepSequencer::from_steps(steps)?;

        let Some(active) = sequencer.active() else {
            return Err(CheckoutError::Closed);
        };

        CheckoutStepId::ALL
            .into_iter()
            .take_while(|step| *step < active)
            .try_for_each(|step| draft.guard(step))?;

        Ok(Self { sequencer, draft })
    }

    /// Steps with their statuses.
    pub fn steps(&self) -> [CheckoutStep; 4] {
        self.sequencer.steps()
    }

    /// The active step, `None` once the order is placed.
    pub fn active(&self) -> Option<CheckoutStepId> {
        self.sequencer.active()
    }

    /// Whether the order has been placed.
    pub fn is_closed(&self) -> bool {
        self.sequencer.is_terminal()
    }

    /// Collected data.
    pub fn draft(&self) -> &CheckoutDraft {
        &self.draft
    }

    /// Replace the contact details. Switching to an international number drops a COD choice.
    ///
    /// # Errors
    ///
    /// Returns an error unless the contact step is active.
    pub fn set_contact(&mut self, contact: ContactDetails) -> Result<(), CheckoutError> {
        self.ensure_active(CheckoutStepId::Contact)?;

        self.draft.contact = contact;

        if !self.draft.cod_eligible() {
            self.draft.cash_on_delivery = false;
        }

        Ok(())
    }

    /// Add a new address, or replace the address with the same id, and select it.
    ///
    /// # Errors
    ///
    /// Returns an error unless the address step is active.
    pub fn add_address(&mut self, address: Address) -> Result<AddressId, CheckoutError> {
        self.ensure_active(CheckoutStepId::Address)?;

        let id = address.id.clone();

        match self
            .draft
            .addresses
            .iter_mut()
            .find(|existing| existing.id == id)
        {
            Some(existing) => *existing = address,
            None => self.draft.addresses.push(address),
        }

        self.draft.selected_address = Some(id.clone());

        Ok(id)
    }

    /// Pick the delivery address.
    ///
    /// # Errors
    ///
    /// Returns an error unless the address step is active.
    pub fn select_address(&mut self, id: AddressId) -> Result<(), CheckoutError> {
        self.ensure_active(CheckoutStepId::Address)?;

        self.draft.selected_address = Some(id);

        Ok(())
    }

    /// Pick the shipping method.
    ///
    /// # Errors
    ///
    /// Returns an error unless the shipping step is active.
    pub fn select_shipping(&mut self, id: ShippingMethodId) -> Result<(), CheckoutError> {
        self.ensure_active(CheckoutStepId::Shipping)?;

        self.draft.selected_shipping = Some(id);

        Ok(())
    }

    /// Toggle cash on delivery.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Blocked`]: COD is unavailable or the customer is not domestic.
    /// - [`CheckoutError::NotActive`]: the shipping step is not active.
    pub fn set_cash_on_delivery(&mut self, enabled: bool) -> Result<(), CheckoutError> {
        self.ensure_active(CheckoutStepId::Shipping)?;

        if enabled && !self.draft.cod_eligible() {
            return Err(GuardViolation::CodUnavailable.into());
        }

        self.draft.cash_on_delivery = enabled;

        Ok(())
    }

    /// Whether the continue action should be enabled.
    pub fn can_advance(&self) -> bool {
        self.active()
            .is_some_and(|step| self.draft.guard(step).is_ok())
    }

    /// Complete the active step and move to the next one.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Blocked`]: the active step's guard failed.
    /// - [`CheckoutError::AwaitingPlacement`]: the payment step is active.
    /// - [`CheckoutError::Closed`]: the order has been placed.
    pub fn advance<H>(&mut self, host: &mut H) -> Result<StepCompletion, CheckoutError>
    where
        H: CheckoutHost + ?Sized,
    {
        let step = self.sequencer.active().ok_or(CheckoutError::Closed)?;

        self.draft.guard(step)?;

        let completion = self
            .draft
            .completion(step)
            .ok_or(CheckoutError::AwaitingPlacement)?;

        self.sequencer.advance()?;

        host.step_completed(&completion);

        Ok(completion)
    }

    /// Reopen a completed step to edit it.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Sequencer`]: the step is not completed.
    /// - [`CheckoutError::Closed`]: the order has been placed.
    pub fn jump_to(&mut self, step: CheckoutStepId) -> Result<(), CheckoutError> {
        if self.is_closed() {
            return Err(CheckoutError::Closed);
        }

        self.sequencer.jump_to(step)?;

        Ok(())
    }

    /// Place the order from the payment step.
    ///
    /// Every guard is checked again first. If the host fails to place the order the payment step
    /// stays active and placement may be retried.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::NotActive`]: the payment step is not active.
    /// - [`CheckoutError::Blocked`]: collected data no longer satisfies an earlier step.
    /// - [`CheckoutError::PlaceOrder`]: the host failed to place the order.
    /// - [`CheckoutError::Closed`]: the order has already been placed.
    pub fn place_order<H>(&mut self, host: &mut H) -> Result<OrderConfirmation, CheckoutError>
    where
        H: CheckoutHost + ?Sized,
    {
        self.ensure_active(CheckoutStepId::Payment)?;

        let request = self.draft.order_request()?;
        let confirmation = host.place_order(&request)?;

        self.sequencer.advance()?;

        host.step_completed(&StepCompletion::Payment(confirmation.clone()));

        Ok(confirmation)
    }

    fn ensure_active(&self, step: CheckoutStepId) -> Result<(), CheckoutError> {
        match self.sequencer.active() {
            None => Err(CheckoutError::Closed),
            Some(active) if active == step => Ok(()),
            Some(_) => Err(CheckoutError::NotActive(step)),
        }
    }
}
