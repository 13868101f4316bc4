pub mod category_form;
pub mod person_form;
pub mod transaction_form;

use shared::FieldErrors;
use yew::{AttrValue, UseStateHandle};

/// Copy of `errors` without `fields`, or `None` when none of them had a message
fn without_fields<F: Ord + Copy>(
    errors: &FieldErrors<F>,
    fields: &[F],
) -> Option<FieldErrors<F>> {
    if !fields.iter().any(|field| errors.contains(*field)) {
        return None;
    }
    let mut next = errors.clone();
    for field in fields {
        next.clear(*field);
    }
    Some(next)
}

/// Drop the messages for the fields the user is editing, in a single update
pub(crate) fn clear_field_errors<F: Ord + Copy + 'static>(
    errors: &UseStateHandle<FieldErrors<F>>,
    fields: &[F],
) {
    if let Some(next) = without_fields(errors, fields) {
        errors.set(next);
    }
}

pub(crate) fn field_error<F: Ord + Copy>(
    errors: &FieldErrors<F>,
    field: F,
) -> Option<AttrValue> {
    errors
        .get(field)
        .map(|message| AttrValue::from(message.to_string()))
}
