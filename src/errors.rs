use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::{context, Environment};
use sqlx::error::ErrorKind;
use std::error::Error;
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),

    PathError(u16, String),

    FormRejection(FormRejection),

    Template(minijinja::Error),

    Sqlx(sqlx::Error),

    Anyhow(anyhow::Error),

    Any(u16, Option<String>),
}

impl AppError {
    fn code(&self) -> u16 {
        use AppError::*;

        match self {
            FormRejection(_) => 400,
            NotFound(_) => 404,
            PathError(code, _) | Any(code, _) => *code,
            Template(_) | Sqlx(_) | Anyhow(_) => 500,
        }
    }

    fn message(&self) -> Option<String> {
        use AppError::*;

        match self {
            NotFound(msg) | PathError(_, msg) => Some(msg.clone()),
            FormRejection(error) => Some(error.body_text()),
            Any(_, msg) => msg.clone(),
            Template(_) | Sqlx(_) | Anyhow(_) => None,
        }
    }

    fn to_default_page(&self) -> Response {
        self.to_page(self.code(), self.message().as_deref())
    }

    fn to_page(&self, code: u16, message: Option<&str>) -> Response {
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Html(render_error_page(status, message))).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use AppError::*;
        use ErrorKind::*;

        match self {
            Sqlx(ref error) => {
                tracing::error!("sqlx error: {:?}", error);
                match error {
                    sqlx::Error::Database(dbe) => match dbe.kind() {
                        UniqueViolation => self.to_page(409, Some("Unique value already in use")),
                        ForeignKeyViolation => self.to_page(400, Some("Missing related record")),
                        NotNullViolation => self.to_page(400, Some("Missing required field")),
                        CheckViolation => self.to_page(400, Some("Invalid input value")),
                        _ => self.to_default_page(),
                    },
                    sqlx::Error::RowNotFound => self.to_page(404, Some("Data not found")),
                    _ => self.to_default_page(),
                }
            }
            Template(ref error) => {
                tracing::error!("template error: {:?}", error);
                self.to_default_page()
            }
            Anyhow(ref error) => {
                tracing::error!("generic error: {:?}", error);
                self.to_default_page()
            }
            _ => self.to_default_page(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = StatusCode::from_u16(self.code())
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown error");
        match self.message() {
            Some(message) => write!(f, "{}: {}", reason, message),
            None => write!(f, "{}", reason),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use AppError::*;
        match self {
            FormRejection(err) => Some(err),
            Template(err) => Some(err),
            Sqlx(err) => Some(err),
            Anyhow(err) => err.source(),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Sqlx(err)
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Template(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Anyhow(err)
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::FormRejection(rejection)
    }
}

pub fn not_found(msg: &str) -> AppError {
    AppError::NotFound(msg.to_string())
}

pub fn any_error(code: u16, message: Option<&str>) -> AppError {
    AppError::Any(code, message.map(String::from))
}

// The error page is rendered on its own so that it still works when the template loader is broken.
static PAGE_ERROR: &str = include_str!("../templates/error.html");

fn render_error_page(status: StatusCode, message: Option<&str>) -> String {
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    let mut env = Environment::new();
    let rendered = env.add_template("error.html", PAGE_ERROR).and_then(|_| {
        env.get_template("error.html")?
            .render(context! { code => status.as_u16(), reason, message })
    });

    rendered.unwrap_or_else(|err| {
        tracing::error!("cannot render error page: {:?}", err);
        format!("{} {}", status.as_u16(), reason)
    })
}
