//! Order Summary Handler

use decimal_percentage::Percentage;
use rusty_money::{
    MoneyError,
    iso::{self, Currency},
};
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::{
    cart::{Cart, CartItem},
    money::{minor, zero},
    summary::{Charges, CodConfig, OrderSummary, PaymentMode, PrepaidDiscount},
};

use crate::extensions::*;

/// Cart line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SummaryItemRequest {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub max_quantity: u32,
    pub price_minor: i64,
    pub mrp_minor: i64,
}

/// Backend-supplied discounts and fees, in minor units
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct ChargesRequest {
    pub coupon_discount_minor: i64,
    pub gift_card_applied_minor: i64,
    pub shipping_fee_minor: i64,
    pub tax_amount_minor: i64,
}

/// Cash-on-delivery settings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CodRequest {
    pub available: bool,
    pub fee_minor: i64,
}

/// Prepaid discount settings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PrepaidDiscountRequest {
    /// Fraction of the subtotal, e.g. `0.05` for 5%.
    pub rate: f64,
    pub max_discount_minor: Option<i64>,
}

/// Payment mode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PaymentModeRequest {
    #[default]
    Prepaid,
    CashOnDelivery,
}

impl From<PaymentModeRequest> for PaymentMode {
    fn from(mode: PaymentModeRequest) -> Self {
        match mode {
            PaymentModeRequest::Prepaid => PaymentMode::Prepaid,
            PaymentModeRequest::CashOnDelivery => PaymentMode::CashOnDelivery,
        }
    }
}

/// Order Summary Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SummaryRequest {
    /// ISO 4217 code, e.g. `INR`.
    pub currency: String,
    pub items: Vec<SummaryItemRequest>,
    #[serde(default)]
    pub charges: ChargesRequest,
    #[serde(default)]
    pub payment_mode: PaymentModeRequest,
    pub cod: Option<CodRequest>,
    pub prepaid_discount: Option<PrepaidDiscountRequest>,
}

/// Rendered summary row
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct SummaryLineResponse {
    pub kind: String,
    pub label: String,
    pub amount_minor: i64,
    /// Shown with a minus sign and subtracted from the total.
    pub deduction: bool,
}

/// Order Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SummaryResponse {
    pub currency: String,
    pub item_count: u64,
    pub lines: Vec<SummaryLineResponse>,
    pub grand_total_minor: i64,
    pub savings_minor: i64,
}

fn currency(code: &str) -> Result<&'static Currency, StatusError> {
    iso::find(&code.trim().to_uppercase())
        .ok_or_else(|| StatusError::bad_request().brief(format!("unknown currency: {code}")))
}

fn cart(
    items: Vec<SummaryItemRequest>,
    currency: &'static Currency,
) -> Result<Cart, StatusError> {
    let items = items
        .into_iter()
        .map(|item| {
            CartItem::new(
                item.product_id,
                item.name,
                item.quantity,
                item.max_quantity,
                minor(item.price_minor, currency),
                minor(item.mrp_minor, currency),
            )
        })
        .collect::<Result<Vec<_>, _>>()
        .or_400("invalid cart item")?;

    Cart::with_items(items, currency).or_400("invalid cart")
}

fn prepaid_discount(
    request: Option<PrepaidDiscountRequest>,
    currency: &'static Currency,
) -> Result<Option<PrepaidDiscount>, StatusError> {
    let Some(request) = request else {
        return Ok(None);
    };

    if !(0.0..=1.0).contains(&request.rate) {
        return Err(
            StatusError::bad_request().brief("prepaid discount rate must be between 0 and 1")
        );
    }

    Ok(Some(PrepaidDiscount {
        percentage: Percentage::from(request.rate),
        max_discount: request
            .max_discount_minor
            .map(|amount| minor(amount, currency)),
    }))
}

/// Order Summary Handler
///
/// Computes the order summary breakdown for a cart, its charges and the chosen payment mode.
#[endpoint(
    tags("checkout"),
    summary = "Order summary",
    responses(
        (status_code = StatusCode::OK, description = "Summary breakdown"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid cart or charges"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SummaryRequest>,
) -> Result<Json<SummaryResponse>, StatusError> {
    let request = json.into_inner();

    let currency = currency(&request.currency)?;
    let cart = cart(request.items, currency)?;
    let subtotal = cart.subtotal().or_400("invalid cart")?;

    let cod = request.cod.map_or_else(
        || CodConfig::unavailable(currency),
        |cod| CodConfig {
            available: cod.available,
            fee: minor(cod.fee_minor, currency),
        },
    );

    let mode = PaymentMode::from(request.payment_mode);

    if mode == PaymentMode::CashOnDelivery && !cod.available {
        return Err(StatusError::bad_request().brief("cash on delivery is unavailable"));
    }

    let prepaid = prepaid_discount(request.prepaid_discount, currency)?;

    let charges = Charges {
        coupon_discount: minor(request.charges.coupon_discount_minor, currency),
        gift_card_applied: minor(request.charges.gift_card_applied_minor, currency),
        prepaid_discount: zero(currency),
        shipping_fee: minor(request.charges.shipping_fee_minor, currency),
        cod_fee: zero(currency),
        tax_amount: minor(request.charges.tax_amount_minor, currency),
    }
    .for_payment_mode(mode, &subtotal, &cod, prepaid.as_ref())
    .or_400("invalid prepaid discount")?;

    let summary = OrderSummary::for_cart(&cart, charges).or_400("invalid charges")?;

    let lines = summary
        .lines()
        .or_400("invalid charges")?
        .into_iter()
        .map(|line| {
            Ok(SummaryLineResponse {
                kind: line.kind.as_str().to_string(),
                label: line.kind.label().to_string(),
                amount_minor: line.amount.try_to_minor_units()?,
                deduction: line.kind.is_deduction(),
            })
        })
        .collect::<Result<Vec<_>, MoneyError>>()
        .or_400("invalid charges")?;

    let grand_total = summary.grand_total().or_400("invalid charges")?;
    let savings = summary.savings().or_400("invalid charges")?;

    Ok(Json(SummaryResponse {
        currency: currency.iso_alpha_code.to_string(),
        item_count: summary.item_count(),
        lines,
        grand_total_minor: grand_total.try_to_minor_units().or_400("invalid charges")?,
        savings_minor: savings.try_to_minor_units().or_400("invalid charges")?,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn make_service() -> Service {
        Service::new(Router::with_path("api/checkout/summary").post(handler))
    }

    fn kurta() -> serde_json::Value {
        json!({
            "product_id": "kurta-01",
            "name": "Cotton Kurta",
            "quantity": 2,
            "max_quantity": 5,
            "price_minor": 500_00,
            "mrp_minor": 800_00,
        })
    }

    #[tokio::test]
    async fn test_summary_for_simple_cart() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/checkout/summary")
            .json(&json!({
                "currency": "inr",
                "items": [kurta()],
                "charges": { "shipping_fee_minor": 49_00 },
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: SummaryResponse = res.take_json().await?;

        assert_eq!(body.currency, "INR");
        assert_eq!(body.item_count, 2);
        assert_eq!(body.grand_total_minor, 1_049_00);
        assert_eq!(body.savings_minor, 600_00);

        let kinds: Vec<&str> = body.lines.iter().map(|line| line.kind.as_str()).collect();

        assert_eq!(kinds, vec!["subtotal", "mrp_savings", "shipping", "tax", "total"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_applies_capped_prepaid_discount() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/checkout/summary")
            .json(&json!({
                "currency": "INR",
                "items": [kurta()],
                "payment_mode": "prepaid",
                "prepaid_discount": { "rate": 0.1, "max_discount_minor": 50_00 },
            }))
            .send(&make_service())
            .await;

        let body: SummaryResponse = res.take_json().await?;

        let prepaid = body
            .lines
            .iter()
            .find(|line| line.kind == "prepaid_discount")
            .ok_or("prepaid discount line missing")?;

        assert_eq!(prepaid.amount_minor, 50_00);
        assert!(prepaid.deduction);
        assert_eq!(body.grand_total_minor, 950_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_adds_cod_fee() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/checkout/summary")
            .json(&json!({
                "currency": "INR",
                "items": [kurta()],
                "payment_mode": "cash_on_delivery",
                "cod": { "available": true, "fee_minor": 40_00 },
                "prepaid_discount": { "rate": 0.1 },
            }))
            .send(&make_service())
            .await;

        let body: SummaryResponse = res.take_json().await?;

        assert_eq!(body.grand_total_minor, 1_040_00);
        assert!(body.lines.iter().all(|line| line.kind != "prepaid_discount"));

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_rejects_cod_when_unavailable() {
        let res = TestClient::post("http://example.com/api/checkout/summary")
            .json(&json!({
                "currency": "INR",
                "items": [kurta()],
                "payment_mode": "cash_on_delivery",
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_summary_rejects_price_above_mrp() {
        let res = TestClient::post("http://example.com/api/checkout/summary")
            .json(&json!({
                "currency": "INR",
                "items": [{
                    "product_id": "kurta-01",
                    "name": "Cotton Kurta",
                    "quantity": 1,
                    "max_quantity": 5,
                    "price_minor": 900_00,
                    "mrp_minor": 800_00,
                }],
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_summary_rejects_negative_price() {
        let res = TestClient::post("http://example.com/api/checkout/summary")
            .json(&json!({
                "currency": "INR",
                "items": [{
                    "product_id": "kurta-01",
                    "name": "Cotton Kurta",
                    "quantity": 2,
                    "max_quantity": 5,
                    "price_minor": -500_00,
                    "mrp_minor": 800_00,
                }],
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_summary_rejects_totals_beyond_minor_unit_range() {
        let huge = i64::MAX / 2 + 1;
        let line = |id: &str| {
            json!({
                "product_id": id,
                "name": id,
                "quantity": 1,
                "max_quantity": 1,
                "price_minor": huge,
                "mrp_minor": huge,
            })
        };

        let res = TestClient::post("http://example.com/api/checkout/summary")
            .json(&json!({
                "currency": "INR",
                "items": [line("gold"), line("silver")],
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_summary_rejects_negative_coupon() {
        let res = TestClient::post("http://example.com/api/checkout/summary")
            .json(&json!({
                "currency": "INR",
                "items": [kurta()],
                "charges": { "coupon_discount_minor": -1 },
            }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_summary_rejects_unknown_currency() {
        let res = TestClient::post("http://example.com/api/checkout/summary")
            .json(&json!({ "currency": "XYZ", "items": [] }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
