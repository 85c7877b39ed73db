//! Partial masking of sensitive strings for logs and display.
//!
//! Each supported kind of sensitive value (name, email, phone number, card
//! number, password, passport series and number, generic code, last four
//! digits) has one policy that hides the sensitive middle of the value while
//! keeping enough structure to stay useful when debugging.
//!
//! The crate is layered:
//! - **Primitives** (`policy::text`): character-range overlay and edge-keeping
//!   masks, all counting Unicode scalar values.
//! - **Field policies** ([`Masker`]): one method per [`FieldKind`], plus
//!   [`Masker::mask_by_label`] which maps a string label to a policy and
//!   returns unknown labels' values unchanged.
//! - **Free functions** (`mask_name`, `mask_email`, ...) over the shared
//!   [`DEFAULT`] instance.
//!
//! What this crate does not do:
//! - perform I/O or logging on its own
//! - validate that a value really is an email, card or phone number
//! - reversible or key-based masking
//!
//! ```
//! assert_eq!(masker::mask_name("Антон"), "А**он");
//! assert_eq!(masker::mask_last_four_digits("79191232323"), "*******2323");
//! assert_eq!(masker::mask_by_label("credit_card", "1234567890123456"), "123456******3456");
//! ```
//!
//! The `MaskFields` derive macro lives in `masker-derive` and is re-exported
//! behind the `derive` feature.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use masker_derive::MaskFields;

#[allow(unused_extern_crates)]
extern crate self as masker;

// Module declarations
mod display;
mod error;
mod fields;
mod masking;
pub mod policy;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports
pub use display::{MaskExt, Masked};
pub use error::UnknownFieldKind;
pub use fields::{MaskFields, MaskText};
pub use masking::{
    DEFAULT, LAST_FOUR_DIGITS_MASK, LAST_FOUR_DIGITS_MIN_LEN, Masker, PASSPORT_NUMBER_MASK,
    PASSPORT_NUMBER_MIN_LEN, PASSPORT_SERIES_MASK, PASSPORT_SERIES_MIN_LEN, PASSWORD_MASK,
    mask_by_label, mask_code, mask_credit_card, mask_email, mask_last_four_digits, mask_mobile,
    mask_name, mask_passport_number, mask_passport_series, mask_password,
};
pub use policy::{FieldKind, MASK_CHAR};
#[cfg(feature = "slog")]
pub use crate::slog::{MaskedValue, SlogMaskedExt};
#[cfg(feature = "tracing")]
pub use crate::tracing::TracingMaskedExt;
