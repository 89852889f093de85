//! Products Data

use crate::domain::products::validation::{
    FlagInput, Price, ProductName, ValidationErrors, at_least, required,
};

/// Default number of products returned per page.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Upper bound on the number of products returned per page.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: Price,
    pub is_offer: bool,
}

impl NewProduct {
    /// Validate raw create input. `name` and `price` are required; a missing
    /// offer flag defaults to `false`.
    ///
    /// # Errors
    ///
    /// Returns every rejected field when any rule fails.
    pub fn validate(
        name: Option<&str>,
        price: Option<f64>,
        is_offer: Option<&FlagInput>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = errors.check(required("name", name).and_then(ProductName::parse));
        let price = errors.check(required("price", price).and_then(Price::new));
        let is_offer = errors.check_optional(is_offer.map(|flag| flag.coerce("is_offer")));

        match (name, price) {
            (Some(name), Some(price)) => errors.finish(Self {
                name,
                price,
                is_offer: is_offer.unwrap_or(false),
            }),
            _ => Err(errors),
        }
    }
}

/// Product Update Data
///
/// `None` fields are left unchanged by the update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<ProductName>,
    pub price: Option<Price>,
    pub is_offer: Option<bool>,
}

impl ProductUpdate {
    /// Validate raw update input; only supplied fields are checked and kept.
    ///
    /// # Errors
    ///
    /// Returns every rejected field when any rule fails.
    pub fn validate(
        name: Option<&str>,
        price: Option<f64>,
        is_offer: Option<&FlagInput>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let update = Self {
            name: errors.check_optional(name.map(ProductName::parse)),
            price: errors.check_optional(price.map(Price::new)),
            is_offer: errors.check_optional(is_offer.map(|flag| flag.coerce("is_offer"))),
        };

        errors.finish(update)
    }

    /// Whether the update sets no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.is_offer.is_none()
    }
}

/// Offset pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Pagination {
    /// Build a window, capping `limit` at [`MAX_PAGE_LIMIT`].
    #[must_use]
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit: limit.min(MAX_PAGE_LIMIT),
        }
    }
}

/// Product listing query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductsQuery {
    pub pagination: Pagination,
    pub is_offer: Option<bool>,
}

impl ProductsQuery {
    /// Validate raw listing parameters.
    ///
    /// `skip` defaults to 0 and must not be negative; `limit` defaults to
    /// [`DEFAULT_PAGE_LIMIT`], must be at least 1 and is capped at
    /// [`MAX_PAGE_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns every rejected parameter when any rule fails.
    pub fn validate(
        skip: Option<i64>,
        limit: Option<i64>,
        is_offer: Option<&FlagInput>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let skip = errors.check_optional(skip.map(|skip| at_least("skip", skip, 0)));
        let limit = errors.check_optional(limit.map(|limit| at_least("limit", limit, 1)));
        let is_offer = errors.check_optional(is_offer.map(|flag| flag.coerce("is_offer")));

        let defaults = Pagination::default();

        let pagination = Pagination::new(
            skip.map_or(defaults.skip, i64::unsigned_abs),
            limit.map_or(defaults.limit, i64::unsigned_abs),
        );

        errors.finish(Self {
            pagination,
            is_offer,
        })
    }
}
