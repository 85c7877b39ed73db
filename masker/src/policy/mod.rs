//! Masking primitives and field kinds.
//!
//! This module provides:
//!
//! - **Primitives** (`text`): [`overlay`] for replacing a character range with a
//!   fragment, plus [`mask_except_first_last`] and [`mask_except_last`] for
//!   masking everything but the edges of a value.
//!
//! - **Field kinds** (`field`): the [`FieldKind`] enum naming every supported
//!   kind of sensitive value and its string label.
//!
//! # Example
//!
//! ```rust
//! use masker::{FieldKind, policy::overlay};
//!
//! assert_eq!(overlay("79191232323", "***", 4, 7), "7919***2323");
//! assert_eq!(FieldKind::Mobile.mask("79191232323"), "7919***2323");
//! ```

pub mod field;
pub mod text;

pub use field::FieldKind;
pub use text::{MASK_CHAR, mask_except_first_last, mask_except_last, overlay};
