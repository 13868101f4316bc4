pub mod dashboard;
pub mod forms;
pub mod header;
pub mod layout;
pub mod notification;
pub mod pages;
pub mod tables;
pub mod totals;
