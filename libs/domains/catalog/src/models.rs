use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Serde helpers for the `preco` field.
///
/// Decoding accepts a JSON number or string and normalizes it to exactly two
/// fraction digits (half-up), so `10` decodes as `10.00` and `19.999` as
/// `20.00`. Encoding relies on the stored scale, which the decoder and the
/// store keep at two.
mod two_decimals {
    use rust_decimal::{Decimal, RoundingStrategy};
    use serde::Deserializer;
    use serde::de::{self, Visitor};
    use std::fmt;
    use std::str::FromStr;

    struct PriceVisitor;

    impl Visitor<'_> for PriceVisitor {
        type Value = Decimal;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a decimal number")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            Decimal::try_from(v).map_err(de::Error::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            Decimal::from_str(v).map_err(de::Error::custom)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = deserializer.deserialize_any(PriceVisitor)?;
        let mut price = raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        price.rescale(2);
        Ok(price)
    }
}

/// Prices carry at most 10 integer digits.
fn validate_price(price: &Decimal) -> Result<(), validator::ValidationError> {
    if price.is_sign_negative() {
        return Err(validator::ValidationError::new("negative_price"));
    }
    if price.abs() >= Decimal::from(10_000_000_000u64) {
        return Err(validator::ValidationError::new("price_too_large"));
    }
    Ok(())
}

/// Rejects empty and whitespace-only text.
fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Product entity - the catalog record under management.
///
/// The id is generated at first save and never changes afterwards; the price
/// is always held at a two-fraction-digit scale. The wire field names keep
/// the public API's Portuguese contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, system-generated
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: Decimal,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl Product {
    /// Build a new record from a decoded request, assigning the id.
    ///
    /// Only the repository's `create` calls this; that keeps id assignment a
    /// persistence-time event.
    pub(crate) fn new(input: ProductRequest) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            price: input.price,
            category: input.category,
        }
    }

    /// In-place field copy from a request; the id is untouched.
    pub(crate) fn apply(&mut self, input: ProductRequest) {
        self.name = input.name;
        self.price = input.price;
        self.category = input.category;
    }
}

/// DTO for creating or updating a product.
///
/// Unknown JSON fields are ignored. The price is normalized to two fraction
/// digits while decoding, before validation runs.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[serde(rename = "nome")]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(rename = "preco", deserialize_with = "two_decimals::deserialize")]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[serde(rename = "categoria")]
    #[validate(custom(function = "validate_not_blank"))]
    pub category: String,
}

/// Read-only projection of [`Product`] returned by every read and write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: Decimal,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            category: product.category,
        }
    }
}

/// Query filters for the search endpoint.
///
/// Every dimension is optional; an absent filter is unconstrained and the
/// supplied ones combine with logical AND.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<Decimal>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}

impl ProductFilter {
    /// Whether a product passes every supplied dimension.
    ///
    /// Name and category match case-insensitively; the price comparison is
    /// numeric, so a `19.9` filter matches a stored `19.90`.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !product.name.eq_ignore_ascii_case(name) {
                return false;
            }
        }
        if let Some(price) = &self.price {
            if product.price != *price {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        true
    }
}

/// Event payload published once per successful creation.
///
/// Carries the full snapshot of the persisted (id-assigned) product. The
/// receipt timestamp is assigned by the consumer, not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreated {
    #[serde(flatten)]
    pub product: Product,
}
