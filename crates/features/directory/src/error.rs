use seva_kernel::api::ApiError;
use std::borrow::Cow;

/// A specialized [`DirectoryError`] enum of this crate.
#[seva_derive::seva_error]
pub enum DirectoryError {
    #[error("Directory I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
    #[error("Directory JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
    #[error("Directory API error{}: {source}", format_context(.context))]
    Api { source: ApiError, context: Option<Cow<'static, str>> },
    #[error("Internal directory error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
