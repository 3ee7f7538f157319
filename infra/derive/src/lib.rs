#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Seva crates: error enums, wire models and the
//! runtime bootstrap used by the binaries.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros
//! in doctests; the integration tests under `tests/` exercise them instead.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a blocking `fn main` running on a `seva_runtime` profile.
///
/// # Arguments
///
/// * `high_performance` - server preset (bigger stacks, long keep-alive).
/// * `memory_efficient` - half the worker threads, smaller stacks.
/// * `default` or nothing - auto-detected worker count.
///
/// # Examples
///
/// ```rust,ignore
/// #[seva_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a JSON wire model exchanged with the backend.
///
/// Adds `Debug`, `Clone`, `Serialize` and `Deserialize` when they are not derived already
/// and applies `#[serde(rename_all = "camelCase")]`.
///
/// # Arguments
///
/// * `rename_all = "..."` - overrides the rename policy.
/// * `deny_unknown_fields = true` - rejects unknown keys. Off by default because backend
///   envelopes routinely carry extra fields.
///
/// # Example
///
/// ```rust,ignore
/// #[seva_derive::api_model]
/// pub struct Receipt {
///     pub success: bool,
///     pub message: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Defines a crate error enum with context support.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for every variant with a `source` field (or `#[source]` / `#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-local `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * A `context` field must be `Option<Cow<'static, str>>`.
/// * A variant wrapping a source error must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[seva_derive::seva_error]
/// pub enum CacheError {
///     #[error("Cache I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal cache error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &Path) -> Result<String, CacheError> {
///     std::fs::read_to_string(path).context("Reading cached stats")
/// }
/// ```
#[proc_macro_attribute]
pub fn seva_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}
