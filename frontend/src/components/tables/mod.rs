pub mod category_table;
pub mod people_table;
pub mod transaction_table;
