//! Product request bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::{
    data::{NewProduct, ProductUpdate},
    validation::{FlagInput, ValidationErrors},
};

/// Offer flag as sent by clients: a boolean, `0`/`1`, or a textual boolean
/// such as `"yes"` or `"off"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum OfferFlag {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl From<OfferFlag> for FlagInput {
    fn from(flag: OfferFlag) -> Self {
        match flag {
            OfferFlag::Bool(value) => FlagInput::Bool(value),
            OfferFlag::Integer(value) => FlagInput::Integer(value),
            OfferFlag::Text(value) => FlagInput::Text(value),
        }
    }
}

/// Create Product Request
///
/// `name` and `price` are required; leaving either out is reported as a
/// validation error rather than a parse failure.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Display name, 1 to 255 characters after trimming
    #[serde(default)]
    pub name: Option<String>,

    /// Unit price, strictly positive
    #[serde(default)]
    pub price: Option<f64>,

    /// Whether the product is on offer; defaults to `false`
    #[serde(default)]
    pub is_offer: Option<OfferFlag>,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ValidationErrors;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        let is_offer = request.is_offer.map(FlagInput::from);

        NewProduct::validate(request.name.as_deref(), request.price, is_offer.as_ref())
    }
}

/// Update Product Request
///
/// Omitted or `null` fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub is_offer: Option<OfferFlag>,
}

impl TryFrom<UpdateProductRequest> for ProductUpdate {
    type Error = ValidationErrors;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        let is_offer = request.is_offer.map(FlagInput::from);

        ProductUpdate::validate(request.name.as_deref(), request.price, is_offer.as_ref())
    }
}
