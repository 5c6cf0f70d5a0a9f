//! Form body extractor for `POST /add`
//!
//! Accepts `application/x-www-form-urlencoded` and `multipart/form-data`.
//! Repeated keys keep their first value; multipart file parts are skipped.

use axum::extract::{Form, FromRequest, Multipart, Request};
use http::header::CONTENT_TYPE;
use shared::models::CafeForm;

use crate::utils::AppError;

/// Decoded create form, whatever the encoding
#[derive(Debug)]
pub struct CafeFormBody(pub CafeForm);

impl<S> FromRequest<S> for CafeFormBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            multipart_pairs(multipart).await?
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            pairs
        };

        Ok(Self(CafeForm::from_pairs(pairs)))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

async fn multipart_pairs(mut multipart: Multipart) -> Result<Vec<(String, String)>, AppError> {
    let mut pairs = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        // uploads are not form values
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?;
        pairs.push((name, value));
    }

    Ok(pairs)
}
