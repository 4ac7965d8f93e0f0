pub mod employees;

pub use employees::{EmployeeResponse, EmployeeUpsert};
