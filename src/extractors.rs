use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::{header, request::Parts},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;

/// JSON body extractor whose failures are answered with a 400 problem detail
/// instead of axum's plain-text rejections.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_string();

        if let Some(content_type) = req.headers().get(header::CONTENT_TYPE) {
            let content_type_str = content_type
                .to_str()
                .map_err(|_| ApiRejection::InvalidContentType {
                    instance: instance.clone(),
                })?;

            // Extract the media type without parameters (e.g., charset)
            let media_type = content_type_str
                .split(';')
                .next()
                .unwrap_or("")
                .trim()
                .to_lowercase();

            if media_type != "application/json" && !media_type.ends_with("+json") {
                return Err(ApiRejection::InvalidContentType { instance });
            }
        }

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiRejection::Json {
                rejection,
                instance,
            }),
        }
    }
}

/// Path parameter extractor with the same problem-detail rejection.
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(ApiRejection::Path {
                rejection,
                instance: parts.uri.path().to_string(),
            }),
        }
    }
}

pub enum ApiRejection {
    InvalidContentType { instance: String },
    Json { rejection: JsonRejection, instance: String },
    Path { rejection: PathRejection, instance: String },
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        let (detail, instance) = match self {
            ApiRejection::InvalidContentType { instance } => (
                "Content-Type must be application/json".to_string(),
                instance,
            ),
            ApiRejection::Json {
                rejection,
                instance,
            } => {
                debug!("Rejected JSON body on {}: {}", instance, rejection.body_text());
                ("Invalid request body".to_string(), instance)
            }
            ApiRejection::Path {
                rejection,
                instance,
            } => {
                debug!("Rejected path on {}: {}", instance, rejection.body_text());
                ("Invalid path parameter".to_string(), instance)
            }
        };
        AppError::BadRequest(detail)
            .to_problem(&instance)
            .into_response()
    }
}
