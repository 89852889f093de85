//! Validation failure mapping for HTTP handlers.

use salvo::prelude::StatusError;

use catalog_app::domain::products::validation::ValidationErrors;

/// Map rejected input to `422 Unprocessable Entity`.
///
/// The rejected fields go into the brief as well as the detail, since salvo
/// only renders `detail` when `SALVO_STATUS_ERROR` opts in.
pub(crate) trait ValidationResultExt<T> {
    fn or_422(self, brief: &str) -> Result<T, StatusError>;
}

impl<T> ValidationResultExt<T> for Result<T, ValidationErrors> {
    fn or_422(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|errors| {
            let detail = errors.to_string();

            StatusError::unprocessable_entity()
                .brief(format!("{brief}: {detail}"))
                .detail(detail)
        })
    }
}

#[cfg(test)]
mod tests {
    use catalog_app::domain::products::data::NewProduct;
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn rejected_fields_are_listed_in_brief_and_detail() -> TestResult {
        let error = NewProduct::validate(Some(""), Some(0.0), None)
            .or_422("Invalid product payload")
            .err()
            .ok_or("expected validation failure")?;

        assert_eq!(error.code, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            error.brief,
            "Invalid product payload: name: must not be empty; price: must be greater than 0"
        );
        assert!(
            error.detail.as_deref().is_some_and(|detail| detail.contains("name")
                && detail.contains("price")),
            "expected both fields in detail, got {:?}",
            error.detail
        );

        Ok(())
    }
}
