//! JSON body extractor that validates before the handler runs.

use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use blogpost_shared::validation::field_messages;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::AppError;

/// A JSON request body that has passed its field constraints.
///
/// Malformed JSON and constraint violations are both rejected with a 400
/// before the handler is invoked.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let value = json
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, "Rejected malformed request body");
                    AppError::InvalidBody(format!("Invalid request body: {e}"))
                })?
                .into_inner();

            if let Err(errors) = value.validate() {
                let messages = field_messages(&errors);
                tracing::warn!(?messages, "Request body failed validation");
                return Err(AppError::Validation(messages));
            }

            Ok(ValidatedJson(value))
        })
    }
}
