use std::borrow::Cow;

/// A specialized [`IdentityError`] enum of this crate.
#[seva_derive::seva_error]
pub enum IdentityError {
    /// Credentials handed to [`crate::Session::login`] are unusable.
    #[error("Identity credentials error{}: {message}", format_context(.context))]
    Credentials { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal identity error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
