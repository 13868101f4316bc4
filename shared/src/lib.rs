//! Types and rules shared by the expense tracker front-end.
//!
//! Nothing in this crate performs I/O, so everything here can be unit tested
//! natively.

pub mod format;
pub mod models;
pub mod totals;
pub mod validation;

pub use format::{format_currency, format_percentage, kind_css_class, purpose_label};
pub use models::*;
pub use validation::{
    categories_for_kind, submit_transaction, validate_transaction, CategoryDraft, CategoryField,
    FieldErrors, PersonDraft, PersonField, TransactionDraft, TransactionField,
};
