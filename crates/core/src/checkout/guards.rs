//! Step guards
//!
//! Conditions a step's form must meet before the customer may continue. A failed guard never
//! changes the sequencer; the caller disables the continue action instead.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{money::Price, summary::CodConfig};

/// Country calling code of customers served domestically.
pub const DOMESTIC_COUNTRY_CODE: &str = "+91";

/// Why a step cannot be completed yet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuardViolation {
    /// Email is blank.
    #[error("email is required")]
    MissingEmail,

    /// Phone is blank for a domestic customer.
    #[error("phone is required for domestic customers")]
    MissingPhone,

    /// No address has been picked.
    #[error("select a delivery address")]
    NoAddressSelected,

    /// The picked address is not in the address list.
    #[error("address {0} does not exist")]
    UnknownAddress(AddressId),

    /// No shipping method has been picked.
    #[error("select a shipping method")]
    NoShippingMethodSelected,

    /// The picked shipping method is not offered.
    #[error("shipping method {0} does not exist")]
    UnknownShippingMethod(ShippingMethodId),

    /// Cash on delivery was chosen but is not offered to this customer.
    #[error("cash on delivery is not available for this order")]
    CodUnavailable,
}

/// Contact step form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Email address.
    pub email: String,

    /// Phone number without the country code.
    pub phone: String,

    /// Country calling code, e.g. `+91`.
    pub country_code: String,
}

impl ContactDetails {
    /// Whether the customer is served domestically.
    pub fn is_domestic(&self) -> bool {
        self.country_code.trim() == DOMESTIC_COUNTRY_CODE
    }
}

/// Saved or newly entered address identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(pub String);

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AddressId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Identifier.
    pub id: AddressId,

    /// Recipient.
    pub name: String,

    /// First address line.
    pub line1: String,

    /// Second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    /// City.
    pub city: String,

    /// State or region.
    pub state: String,

    /// Postal code.
    pub postal_code: String,

    /// Country.
    pub country: String,
}

/// Shipping method identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingMethodId(pub String);

impl fmt::Display for ShippingMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShippingMethodId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Shipping option offered for the order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingMethod {
    /// Identifier.
    pub id: ShippingMethodId,

    /// Display name.
    pub name: String,

    /// Fee.
    pub price: Price,

    /// Delivery estimate shown beside the option.
    pub estimate: Option<String>,
}

/// Contact guard: email always, phone only for domestic customers.
///
/// # Errors
///
/// Returns the first violated condition.
pub fn contact(details: &ContactDetails) -> Result<(), GuardViolation> {
    if details.email.trim().is_empty() {
        return Err(GuardViolation::MissingEmail);
    }

    if details.is_domestic() && details.phone.trim().is_empty() {
        return Err(GuardViolation::MissingPhone);
    }

    Ok(())
}

/// Address guard: the selection must reference an entry in `addresses`.
///
/// # Errors
///
/// Returns the first violated condition.
pub fn address(
    selected: Option<&AddressId>,
    addresses: &[Address],
) -> Result<(), GuardViolation> {
    let selected = selected.ok_or(GuardViolation::NoAddressSelected)?;

    if addresses.iter().any(|address| &address.id == selected) {
        Ok(())
    } else {
        Err(GuardViolation::UnknownAddress(selected.clone()))
    }
}

/// Whether COD may be chosen at all.
pub fn cod_eligible(cod: &CodConfig, contact: &ContactDetails) -> bool {
    cod.available && contact.is_domestic()
}

/// Shipping guard: the selection must reference an offered method, and COD must be eligible when
/// chosen.
///
/// # Errors
///
/// Returns the first violated condition.
pub fn shipping(
    selected: Option<&ShippingMethodId>,
    methods: &[ShippingMethod],
    cash_on_delivery: bool,
    cod: &CodConfig,
    contact: &ContactDetails,
) -> Result<(), GuardViolation> {
    let selected = selected.ok_or(GuardViolation::NoShippingMethodSelected)?;

    if !methods.iter().any(|method| &method.id == selected) {
        return Err(GuardViolation::UnknownShippingMethod(selected.clone()));
    }

    if cash_on_delivery && !cod_eligible(cod, contact) {
        return Err(GuardViolation::CodUnavailable);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use crate::money::minor;

    use super::*;

    fn details(email: &str, phone: &str, country_code: &str) -> ContactDetails {
        ContactDetails {
            email: email.to_string(),
            phone: phone.to_string(),
            country_code: country_code.to_string(),
        }
    }

    fn home() -> Address {
        Address {
            id: "addr_home".into(),
            name: "Asha Rao".to_string(),
            line1: "12 MG Road".to_string(),
            line2: None,
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            postal_code: "560001".to_string(),
            country: "IN".to_string(),
        }
    }

    fn standard() -> ShippingMethod {
        ShippingMethod {
            id: "standard".into(),
            name: "Standard".to_string(),
            price: minor(49_00, iso::INR),
            estimate: Some("3-5 days".to_string()),
        }
    }

    fn cod(available: bool) -> CodConfig {
        CodConfig {
            available,
            fee: minor(40_00, iso::INR),
        }
    }

    #[test]
    fn contact_requires_email() {
        assert_eq!(
            contact(&details("  ", "9876543210", "+91")),
            Err(GuardViolation::MissingEmail)
        );
    }

    #[test]
    fn domestic_contact_requires_phone() {
        assert_eq!(
            contact(&details("asha@example.com", "", "+91")),
            Err(GuardViolation::MissingPhone)
        );
        assert_eq!(contact(&details("asha@example.com", "9876543210", " +91 ")), Ok(()));
    }

    #[test]
    fn international_contact_phone_is_optional() {
        assert_eq!(contact(&details("sam@example.com", "", "+1")), Ok(()));
    }

    #[test]
    fn address_must_be_selected_and_known() {
        let addresses = [home()];

        assert_eq!(
            address(None, &addresses),
            Err(GuardViolation::NoAddressSelected)
        );
        assert_eq!(
            address(Some(&"addr_work".into()), &addresses),
            Err(GuardViolation::UnknownAddress("addr_work".into()))
        );
        assert_eq!(address(Some(&"addr_home".into()), &addresses), Ok(()));
    }

    #[test]
    fn shipping_must_be_selected_and_offered() {
        let methods = [standard()];
        let domestic = details("asha@example.com", "9876543210", "+91");

        assert_eq!(
            shipping(None, &methods, false, &cod(true), &domestic),
            Err(GuardViolation::NoShippingMethodSelected)
        );
        assert_eq!(
            shipping(Some(&"express".into()), &methods, false, &cod(true), &domestic),
            Err(GuardViolation::UnknownShippingMethod("express".into()))
        );
        assert_eq!(
            shipping(Some(&"standard".into()), &methods, false, &cod(true), &domestic),
            Ok(())
        );
    }

    #[test]
    fn cod_requires_availability_and_domestic_customer() {
        let methods = [standard()];
        let domestic = details("asha@example.com", "9876543210", "+91");
        let international = details("sam@example.com", "", "+1");
        let selected = ShippingMethodId::from("standard");

        assert_eq!(
            shipping(Some(&selected), &methods, true, &cod(true), &domestic),
            Ok(())
        );
        assert_eq!(
            shipping(Some(&selected), &methods, true, &cod(false), &domestic),
            Err(GuardViolation::CodUnavailable)
        );
        assert_eq!(
            shipping(Some(&selected), &methods, true, &cod(true), &international),
            Err(GuardViolation::CodUnavailable)
        );
    }
}
