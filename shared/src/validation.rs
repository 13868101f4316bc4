//! Business rules checked on the client before anything is sent to the API.
//!
//! Every check here is a pure function of the draft and the reference data
//! passed in. A rejected draft produces a [`FieldErrors`] map keyed by the
//! form field that should display the message; an empty map means the draft
//! may be submitted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{
    Category, CategoryPurpose, CreateCategoryRequest, CreatePersonRequest,
    CreateTransactionRequest, EntityId, Person, TransactionKind, ADULT_AGE,
};

/// Field-keyed validation messages for one form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Record a message for a field, replacing any earlier one
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop the message for a field once the user edits it
    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> Vec<F> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl<F: Ord + Copy> Default for FieldErrors<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields of the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransactionField {
    Description,
    Amount,
    Kind,
    Category,
    Person,
}

/// Fields of the person form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PersonField {
    Name,
    Age,
}

/// Fields of the category form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryField {
    Description,
}

pub const DESCRIPTION_REQUIRED: &str = "Descrição é obrigatória";
pub const AMOUNT_NOT_POSITIVE: &str = "Valor deve ser um número positivo";
pub const CATEGORY_REQUIRED: &str = "Categoria é obrigatória";
pub const PERSON_REQUIRED: &str = "Pessoa é obrigatória";
pub const NAME_REQUIRED: &str = "Nome é obrigatório";
pub const AGE_NOT_POSITIVE: &str = "Idade deve ser um número inteiro positivo";
pub const AGE_NOT_INTEGER: &str = "Idade deve ser um número inteiro";

/// Message shown on the kind field when a minor is given an income
pub fn minor_income_message() -> String {
    format!("Menores de {} anos só podem ter despesas", ADULT_AGE)
}

/// Message shown on the category field when it rejects the selected kind
pub fn category_restriction_message(allowed: TransactionKind) -> String {
    format!("Esta categoria só permite {}", allowed.plural_label())
}

/// In-progress transaction form contents
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    /// `None` (or `Some(0)`) until the user picks a category
    pub category_id: Option<EntityId>,
    /// `None` (or `Some(0)`) until the user picks a person
    pub person_id: Option<EntityId>,
}

impl TransactionDraft {
    pub fn selected_category(&self) -> Option<EntityId> {
        self.category_id.filter(|id| *id != 0)
    }

    pub fn selected_person(&self) -> Option<EntityId> {
        self.person_id.filter(|id| *id != 0)
    }

    /// Switch the kind and drop the selected category if it no longer accepts it
    pub fn change_kind(&mut self, kind: TransactionKind, categories: &[Category]) {
        self.kind = kind;
        if let Some(category) = find_category(categories, self.selected_category()) {
            if !category.purpose.accepts(kind) {
                self.category_id = None;
            }
        }
    }

    /// Validate against the loaded reference data and build the request body
    pub fn prepare(
        &self,
        people: &[Person],
        categories: &[Category],
    ) -> Result<CreateTransactionRequest, FieldErrors<TransactionField>> {
        let errors = validate_transaction(self, people, categories);
        if !errors.is_empty() {
            tracing::debug!(fields = ?errors.fields(), "transaction draft rejected");
            return Err(errors);
        }

        match (self.selected_category(), self.selected_person()) {
            (Some(category_id), Some(person_id)) => Ok(CreateTransactionRequest {
                description: self.description.clone(),
                amount: self.amount,
                kind: self.kind,
                category_id,
                person_id,
            }),
            // Both ids are checked by the required-field rules above
            _ => Err(errors),
        }
    }
}

/// Run the full rule set against a transaction draft.
///
/// All rules run; a draft with several problems reports each of them.
pub fn validate_transaction(
    draft: &TransactionDraft,
    people: &[Person],
    categories: &[Category],
) -> FieldErrors<TransactionField> {
    let mut errors = FieldErrors::new();

    if draft.description.trim().is_empty() {
        errors.insert(TransactionField::Description, DESCRIPTION_REQUIRED);
    }

    if !is_positive_amount(draft.amount) {
        errors.insert(TransactionField::Amount, AMOUNT_NOT_POSITIVE);
    }

    if draft.selected_category().is_none() {
        errors.insert(TransactionField::Category, CATEGORY_REQUIRED);
    }

    if draft.selected_person().is_none() {
        errors.insert(TransactionField::Person, PERSON_REQUIRED);
    }

    if let Some(person) = find_person(people, draft.selected_person()) {
        if person.is_minor() && draft.kind == TransactionKind::Income {
            errors.insert(TransactionField::Kind, minor_income_message());
        }
    }

    if let Some(category) = find_category(categories, draft.selected_category()) {
        if let Some(allowed) = category.purpose.restricted_kind() {
            if allowed != draft.kind {
                errors.insert(TransactionField::Category, category_restriction_message(allowed));
            }
        }
    }

    errors
}

/// Validate the draft and, only when it passes, hand the request to `send`.
///
/// `send` is never invoked for a rejected draft, so no request leaves the
/// client until every rule holds.
pub fn submit_transaction<R>(
    draft: &TransactionDraft,
    people: &[Person],
    categories: &[Category],
    send: impl FnOnce(CreateTransactionRequest) -> R,
) -> Result<R, FieldErrors<TransactionField>> {
    draft.prepare(people, categories).map(send)
}

/// Categories selectable for a kind, in their original order
pub fn categories_for_kind(categories: &[Category], kind: TransactionKind) -> Vec<Category> {
    categories
        .iter()
        .filter(|category| category.purpose.accepts(kind))
        .cloned()
        .collect()
}

/// Whether the selected person (if any) is a known minor
pub fn selected_person_is_minor(people: &[Person], person_id: Option<EntityId>) -> bool {
    find_person(people, person_id.filter(|id| *id != 0)).map_or(false, Person::is_minor)
}

fn find_person(people: &[Person], id: Option<EntityId>) -> Option<&Person> {
    let id = id?;
    people.iter().find(|person| person.id == id)
}

fn find_category(categories: &[Category], id: Option<EntityId>) -> Option<&Category> {
    let id = id?;
    categories.iter().find(|category| category.id == id)
}

fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

/// Parse the amount text field; anything unparseable counts as zero
pub fn parse_amount_input(input: &str) -> f64 {
    input.trim().replace(',', ".").parse::<f64>().unwrap_or(0.0)
}

/// In-progress person form contents
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonDraft {
    pub name: String,
    /// Raw text of the age input
    pub age: String,
}

impl PersonDraft {
    pub fn prepare(&self) -> Result<CreatePersonRequest, FieldErrors<PersonField>> {
        let errors = validate_person(self);
        if !errors.is_empty() {
            tracing::debug!(fields = ?errors.fields(), "person draft rejected");
            return Err(errors);
        }

        match parse_age(&self.age) {
            Ok(age) => Ok(CreatePersonRequest {
                name: self.name.clone(),
                age,
            }),
            Err(message) => {
                let mut errors = FieldErrors::new();
                errors.insert(PersonField::Age, message);
                Err(errors)
            }
        }
    }
}

pub fn validate_person(draft: &PersonDraft) -> FieldErrors<PersonField> {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(PersonField::Name, NAME_REQUIRED);
    }

    if let Err(message) = parse_age(&draft.age) {
        errors.insert(PersonField::Age, message);
    }

    errors
}

fn parse_age(input: &str) -> Result<u32, &'static str> {
    let value = input.trim().parse::<f64>().unwrap_or(0.0);
    if !value.is_finite() || value <= 0.0 {
        return Err(AGE_NOT_POSITIVE);
    }
    if value.fract() != 0.0 {
        return Err(AGE_NOT_INTEGER);
    }
    if value > f64::from(u32::MAX) {
        return Err(AGE_NOT_POSITIVE);
    }
    Ok(value as u32)
}

/// In-progress category form contents
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryDraft {
    pub description: String,
    pub purpose: CategoryPurpose,
}

impl CategoryDraft {
    pub fn prepare(&self) -> Result<CreateCategoryRequest, FieldErrors<CategoryField>> {
        let errors = validate_category(self);
        if !errors.is_empty() {
            tracing::debug!(fields = ?errors.fields(), "category draft rejected");
            return Err(errors);
        }

        Ok(CreateCategoryRequest {
            description: self.description.clone(),
            purpose: self.purpose,
        })
    }
}

pub fn validate_category(draft: &CategoryDraft) -> FieldErrors<CategoryField> {
    let mut errors = FieldErrors::new();

    if draft.description.trim().is_empty() {
        errors.insert(CategoryField::Description, DESCRIPTION_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: EntityId, age: u32) -> Person {
        Person {
            id,
            name: format!("Pessoa {}", id),
            age,
        }
    }

    fn category(id: EntityId, purpose: CategoryPurpose) -> Category {
        Category {
            id,
            description: format!("Categoria {}", id),
            purpose,
        }
    }

    fn reference_data() -> (Vec<Person>, Vec<Category>) {
        (
            vec![person(1, 30), person(2, 15)],
            vec![
                category(10, CategoryPurpose::Expense),
                category(11, CategoryPurpose::Income),
                category(12, CategoryPurpose::Both),
            ],
        )
    }

    fn valid_draft() -> TransactionDraft {
        TransactionDraft {
            description: "Mercado".to_string(),
            amount: 120.0,
            kind: TransactionKind::Expense,
            category_id: Some(10),
            person_id: Some(1),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let (people, categories) = reference_data();
        let errors = validate_transaction(&valid_draft(), &people, &categories);
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_blank_description_is_rejected() {
        let (people, categories) = reference_data();
        for description in ["", "   ", "\t\n"] {
            let draft = TransactionDraft {
                description: description.to_string(),
                ..valid_draft()
            };
            let errors = validate_transaction(&draft, &people, &categories);
            assert_eq!(errors.get(TransactionField::Description), Some(DESCRIPTION_REQUIRED));
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_non_positive_amounts_are_rejected() {
        let (people, categories) = reference_data();
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let draft = TransactionDraft {
                amount,
                ..valid_draft()
            };
            let errors = validate_transaction(&draft, &people, &categories);
            assert_eq!(errors.get(TransactionField::Amount), Some(AMOUNT_NOT_POSITIVE));
        }
    }

    #[test]
    fn test_missing_references_are_required() {
        let (people, categories) = reference_data();
        for (category_id, person_id) in [(None, None), (Some(0), Some(0))] {
            let draft = TransactionDraft {
                category_id,
                person_id,
                ..valid_draft()
            };
            let errors = validate_transaction(&draft, &people, &categories);
            assert_eq!(errors.get(TransactionField::Category), Some(CATEGORY_REQUIRED));
            assert_eq!(errors.get(TransactionField::Person), Some(PERSON_REQUIRED));
        }
    }

    #[test]
    fn test_all_rules_report_together() {
        let (people, categories) = reference_data();
        let draft = TransactionDraft::default();
        let errors = validate_transaction(&draft, &people, &categories);
        assert_eq!(
            errors.fields(),
            vec![
                TransactionField::Description,
                TransactionField::Amount,
                TransactionField::Category,
                TransactionField::Person,
            ]
        );
    }

    #[test]
    fn test_minor_cannot_have_income() {
        let (people, categories) = reference_data();
        let draft = TransactionDraft {
            kind: TransactionKind::Income,
            category_id: Some(12),
            person_id: Some(2),
            ..valid_draft()
        };
        let errors = validate_transaction(&draft, &people, &categories);
        assert_eq!(errors.get(TransactionField::Kind), Some(minor_income_message().as_str()));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_minor_income_reported_alongside_other_errors() {
        let (people, categories) = reference_data();
        let draft = TransactionDraft {
            description: " ".to_string(),
            amount: 0.0,
            kind: TransactionKind::Income,
            category_id: None,
            person_id: Some(2),
        };
        let errors = validate_transaction(&draft, &people, &categories);
        assert!(errors.contains(TransactionField::Kind));
        assert!(errors.contains(TransactionField::Description));
        assert!(errors.contains(TransactionField::Amount));
        assert!(errors.contains(TransactionField::Category));
    }

    #[test]
    fn test_minor_expense_is_allowed() {
        let (people, categories) = reference_data();
        let draft = TransactionDraft {
            person_id: Some(2),
            ..valid_draft()
        };
        assert!(validate_transaction(&draft, &people, &categories).is_empty());
    }

    #[test]
    fn test_unknown_person_skips_minor_rule() {
        let (people, categories) = reference_data();
        let draft = TransactionDraft {
            kind: TransactionKind::Income,
            category_id: Some(12),
            person_id: Some(99),
            ..valid_draft()
        };
        assert!(validate_transaction(&draft, &people, &categories).is_empty());
    }

    #[test]
    fn test_category_restriction_names_allowed_kind() {
        let (people, categories) = reference_data();

        let income_into_expense = TransactionDraft {
            kind: TransactionKind::Income,
            category_id: Some(10),
            ..valid_draft()
        };
        let errors = validate_transaction(&income_into_expense, &people, &categories);
        assert_eq!(
            errors.get(TransactionField::Category),
            Some("Esta categoria só permite despesas")
        );

        let expense_into_income = TransactionDraft {
            kind: TransactionKind::Expense,
            category_id: Some(11),
            ..valid_draft()
        };
        let errors = validate_transaction(&expense_into_income, &people, &categories);
        assert_eq!(
            errors.get(TransactionField::Category),
            Some("Esta categoria só permite receitas")
        );
    }

    #[test]
    fn test_both_category_accepts_either_kind() {
        let (people, categories) = reference_data();
        for kind in TransactionKind::ALL {
            let draft = TransactionDraft {
                kind,
                category_id: Some(12),
                ..valid_draft()
            };
            assert!(validate_transaction(&draft, &people, &categories).is_empty());
        }
    }

    #[test]
    fn test_categories_for_kind_preserves_order() {
        let categories = vec![
            category(1, CategoryPurpose::Expense),
            category(2, CategoryPurpose::Income),
            category(3, CategoryPurpose::Both),
        ];

        let income: Vec<EntityId> = categories_for_kind(&categories, TransactionKind::Income)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(income, vec![2, 3]);

        let expense: Vec<EntityId> = categories_for_kind(&categories, TransactionKind::Expense)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(expense, vec![1, 3]);
    }

    #[test]
    fn test_change_kind_clears_incompatible_category() {
        let (_, categories) = reference_data();

        let mut draft = valid_draft();
        draft.change_kind(TransactionKind::Income, &categories);
        assert_eq!(draft.kind, TransactionKind::Income);
        assert_eq!(draft.category_id, None);

        let mut draft = TransactionDraft {
            category_id: Some(12),
            ..valid_draft()
        };
        draft.change_kind(TransactionKind::Income, &categories);
        assert_eq!(draft.category_id, Some(12));
    }

    #[test]
    fn test_field_errors_clear() {
        let mut errors = FieldErrors::new();
        errors.insert(TransactionField::Amount, AMOUNT_NOT_POSITIVE);
        errors.clear(TransactionField::Amount);
        errors.clear(TransactionField::Person);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_amount_input() {
        assert_eq!(parse_amount_input("12.50"), 12.5);
        assert_eq!(parse_amount_input(" 12,50 "), 12.5);
        assert_eq!(parse_amount_input(""), 0.0);
        assert_eq!(parse_amount_input("abc"), 0.0);
    }

    #[test]
    fn test_person_validation() {
        let valid = PersonDraft {
            name: "Maria".to_string(),
            age: "25".to_string(),
        };
        assert_eq!(
            valid.prepare(),
            Ok(CreatePersonRequest {
                name: "Maria".to_string(),
                age: 25,
            })
        );

        let blank = PersonDraft {
            name: "  ".to_string(),
            age: "".to_string(),
        };
        let errors = validate_person(&blank);
        assert_eq!(errors.get(PersonField::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(PersonField::Age), Some(AGE_NOT_POSITIVE));

        for age in ["0", "-3", "abc"] {
            let draft = PersonDraft {
                name: "Maria".to_string(),
                age: age.to_string(),
            };
            assert_eq!(validate_person(&draft).get(PersonField::Age), Some(AGE_NOT_POSITIVE));
        }

        let fractional = PersonDraft {
            name: "Maria".to_string(),
            age: "12.5".to_string(),
        };
        assert_eq!(validate_person(&fractional).get(PersonField::Age), Some(AGE_NOT_INTEGER));
    }

    #[test]
    fn test_category_validation() {
        let draft = CategoryDraft::default();
        assert_eq!(draft.purpose, CategoryPurpose::Both);
        assert_eq!(
            validate_category(&draft).get(CategoryField::Description),
            Some(DESCRIPTION_REQUIRED)
        );

        let draft = CategoryDraft {
            description: "Salário".to_string(),
            purpose: CategoryPurpose::Income,
        };
        let request = draft.prepare().unwrap();
        assert_eq!(request.purpose, CategoryPurpose::Income);
    }

    #[test]
    fn test_selected_person_is_minor() {
        let (people, _) = reference_data();
        assert!(selected_person_is_minor(&people, Some(2)));
        assert!(!selected_person_is_minor(&people, Some(1)));
        assert!(!selected_person_is_minor(&people, Some(0)));
        assert!(!selected_person_is_minor(&people, None));
    }
}
