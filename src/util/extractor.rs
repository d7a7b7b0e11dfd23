use crate::errors::AppError;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// an extractor that internally uses `axum::extract::Form` but has a custom rejection
#[derive(FromRequest)]
#[from_request(via(axum::extract::Form), rejection(AppError))]
pub struct Form<T>(pub T);

/// an extractor that internally uses `axum::extract::Path` but has a custom rejection
///
/// A path segment that does not parse into the expected type (e.g. `/abc/` where an integer id
/// is expected) does not name any entity, so it is answered with `404` rather than `400`.
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    // these trait bounds are copied from `impl FromRequest for axum::extract::path::Path`
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        use axum::extract::path::ErrorKind::*;
        use AppError::PathError;

        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(match rejection {
                PathRejection::FailedToDeserializePathParams(inner) => {
                    let kind = inner.into_kind();

                    match &kind {
                        ParseErrorAtKey { .. } | ParseErrorAtIndex { .. } | ParseError { .. } => {
                            PathError(404, kind.to_string())
                        }

                        WrongNumberOfParameters { .. } | InvalidUtf8InPathParam { .. } => {
                            PathError(400, kind.to_string())
                        }

                        UnsupportedType { .. } => {
                            // this error is caused by the programmer using an unsupported type
                            // (such as nested maps) so respond with `500` instead
                            PathError(500, kind.to_string())
                        }

                        Message(msg) => PathError(400, msg.to_string()),
                        _ => PathError(400, format!("Unhandled deserialization error: {kind}")),
                    }
                }
                PathRejection::MissingPathParams(error) => PathError(500, error.to_string()),
                _ => PathError(500, format!("Unhandled path rejection: {rejection}")),
            }),
        }
    }
}
