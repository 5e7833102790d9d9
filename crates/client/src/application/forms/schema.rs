use async_trait::async_trait;

use lumen_domain::Validation;

/// Validation rules of one form.
///
/// `validate` is async so schemas can await external checks; purely local
/// schemas simply never suspend.
#[async_trait(?Send)]
pub trait FormSchema {
    type Values: Clone + PartialEq + 'static;

    async fn validate(&self, values: &Self::Values) -> Validation<Self::Values>;
}
