use std::cell::RefCell;

use shared::{
    submit_transaction, Category, CategoryPurpose, CreateTransactionRequest, Person,
    TransactionDraft, TransactionField, TransactionKind,
};

fn household() -> (Vec<Person>, Vec<Category>) {
    let people = vec![Person {
        id: 1,
        name: "Lucas".to_string(),
        age: 15,
    }];
    let categories = vec![
        Category {
            id: 1,
            description: "Lanche".to_string(),
            purpose: CategoryPurpose::Expense,
        },
        Category {
            id: 2,
            description: "Mesada".to_string(),
            purpose: CategoryPurpose::Income,
        },
    ];
    (people, categories)
}

#[test]
fn minor_income_is_blocked_before_any_request() {
    let (people, categories) = household();
    let sent = RefCell::new(Vec::<CreateTransactionRequest>::new());

    let draft = TransactionDraft {
        description: "Mesada".to_string(),
        amount: 50.0,
        kind: TransactionKind::Income,
        category_id: Some(2),
        person_id: Some(1),
    };

    let result = submit_transaction(&draft, &people, &categories, |request| {
        sent.borrow_mut().push(request)
    });

    let errors = result.unwrap_err();
    assert!(errors.contains(TransactionField::Kind));
    assert!(sent.borrow().is_empty());
}

#[test]
fn minor_expense_with_compatible_category_is_sent() {
    let (people, categories) = household();
    let sent = RefCell::new(Vec::<CreateTransactionRequest>::new());

    let draft = TransactionDraft {
        description: "Lanche na escola".to_string(),
        amount: 12.5,
        kind: TransactionKind::Expense,
        category_id: Some(1),
        person_id: Some(1),
    };

    let result = submit_transaction(&draft, &people, &categories, |request| {
        sent.borrow_mut().push(request)
    });

    assert!(result.is_ok());
    assert_eq!(
        *sent.borrow(),
        vec![CreateTransactionRequest {
            description: "Lanche na escola".to_string(),
            amount: 12.5,
            kind: TransactionKind::Expense,
            category_id: 1,
            person_id: 1,
        }]
    );
}

#[test]
fn switching_kind_back_after_rejection_recovers() {
    let (people, categories) = household();

    let mut draft = TransactionDraft {
        description: "Mesada".to_string(),
        amount: 50.0,
        kind: TransactionKind::Income,
        category_id: Some(2),
        person_id: Some(1),
    };
    assert!(draft.prepare(&people, &categories).is_err());

    draft.change_kind(TransactionKind::Expense, &categories);
    assert_eq!(draft.category_id, None);

    let errors = draft.prepare(&people, &categories).unwrap_err();
    assert_eq!(errors.fields(), vec![TransactionField::Category]);

    draft.category_id = Some(1);
    assert!(draft.prepare(&people, &categories).is_ok());
}
