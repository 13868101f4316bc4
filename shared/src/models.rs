use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// People younger than this are minors and may only hold expenses.
pub const ADULT_AGE: u32 = 18;

/// Server-assigned identifier shared by every resource.
pub type EntityId = u64;

/// Represents a member of the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "idade")]
    pub age: u32,
}

impl Person {
    pub fn is_minor(&self) -> bool {
        self.age < ADULT_AGE
    }
}

/// Request for creating a new person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePersonRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "idade")]
    pub age: u32,
}

/// Whether a transaction takes money out of or brings money into the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TransactionKind {
    #[default]
    #[serde(rename = "Despesa")]
    Expense,
    #[serde(rename = "Receita")]
    Income,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Expense, TransactionKind::Income];

    /// Value used on the wire and in `<select>` options
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "Despesa",
            TransactionKind::Income => "Receita",
        }
    }

    /// Lowercase plural used in sentences ("only allows ...")
    pub fn plural_label(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "despesas",
            TransactionKind::Income => "receitas",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Despesa" => Ok(TransactionKind::Expense),
            "Receita" => Ok(TransactionKind::Income),
            other => Err(ParseValueError::TransactionKind(other.to_string())),
        }
    }
}

/// Which transaction kinds a category accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryPurpose {
    #[serde(rename = "Despesa")]
    Expense,
    #[serde(rename = "Receita")]
    Income,
    #[default]
    #[serde(rename = "Ambas")]
    Both,
}

impl CategoryPurpose {
    pub const ALL: [CategoryPurpose; 3] = [
        CategoryPurpose::Expense,
        CategoryPurpose::Income,
        CategoryPurpose::Both,
    ];

    /// Value used on the wire and in `<select>` options
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryPurpose::Expense => "Despesa",
            CategoryPurpose::Income => "Receita",
            CategoryPurpose::Both => "Ambas",
        }
    }

    /// The only kind this purpose allows, or `None` when it allows both
    pub fn restricted_kind(&self) -> Option<TransactionKind> {
        match self {
            CategoryPurpose::Expense => Some(TransactionKind::Expense),
            CategoryPurpose::Income => Some(TransactionKind::Income),
            CategoryPurpose::Both => None,
        }
    }

    pub fn accepts(&self, kind: TransactionKind) -> bool {
        self.restricted_kind().map_or(true, |only| only == kind)
    }
}

impl fmt::Display for CategoryPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryPurpose {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Despesa" => Ok(CategoryPurpose::Expense),
            "Receita" => Ok(CategoryPurpose::Income),
            "Ambas" => Ok(CategoryPurpose::Both),
            other => Err(ParseValueError::CategoryPurpose(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseValueError {
    #[error("Unknown transaction kind: {0}")]
    TransactionKind(String),
    #[error("Unknown category purpose: {0}")]
    CategoryPurpose(String),
}

/// Groups transactions and restricts which kinds they may have
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "finalidade")]
    pub purpose: CategoryPurpose,
}

/// Request for creating a new category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "finalidade")]
    pub purpose: CategoryPurpose,
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: EntityId,
    #[serde(rename = "descricao")]
    pub description: String,
    /// Always positive; the direction comes from `kind`
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "categoriaId")]
    pub category_id: EntityId,
    #[serde(rename = "pessoaId")]
    pub person_id: EntityId,
    /// Embedded by the list endpoint for display, when available
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(rename = "pessoa", default, skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
}

impl Transaction {
    /// Category name for display, falling back to the raw id
    pub fn category_label(&self) -> String {
        self.category
            .as_ref()
            .map(|c| c.description.clone())
            .unwrap_or_else(|| self.category_id.to_string())
    }

    /// Person name for display, falling back to the raw id
    pub fn person_label(&self) -> String {
        self.person
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| self.person_id.to_string())
    }
}

/// Request for creating a new transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "categoriaId")]
    pub category_id: EntityId,
    #[serde(rename = "pessoaId")]
    pub person_id: EntityId,
}

/// Income/expense rollup for one person, computed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonTotals {
    #[serde(rename = "pessoaId")]
    pub person_id: EntityId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "totalReceitas")]
    pub total_income: f64,
    #[serde(rename = "totalDespesas")]
    pub total_expense: f64,
    /// Income minus expense
    #[serde(rename = "saldo")]
    pub balance: f64,
}

/// Response for the per-person totals query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonTotalsResponse {
    #[serde(rename = "pessoas")]
    pub people: Vec<PersonTotals>,
    #[serde(rename = "totalReceitasGeral")]
    pub total_income: f64,
    #[serde(rename = "totalDespesasGeral")]
    pub total_expense: f64,
    #[serde(rename = "saldoLiquidoGeral")]
    pub net_balance: f64,
}

/// Income/expense rollup for one category, computed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    #[serde(rename = "categoriaId")]
    pub category_id: EntityId,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "totalReceitas")]
    pub total_income: f64,
    #[serde(rename = "totalDespesas")]
    pub total_expense: f64,
    #[serde(rename = "saldo")]
    pub balance: f64,
}

/// Response for the per-category totals query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotalsResponse {
    #[serde(rename = "categorias")]
    pub categories: Vec<CategoryTotals>,
    #[serde(rename = "totalReceitasGeral")]
    pub total_income: f64,
    #[serde(rename = "totalDespesasGeral")]
    pub total_expense: f64,
    #[serde(rename = "saldoLiquidoGeral")]
    pub net_balance: f64,
}

/// Error body the API sends alongside non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Extract a usable message from a raw response body, if it has one
    pub fn message_from_body(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
