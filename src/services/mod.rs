pub mod database;

pub use database::{parse_employee_id, MongoDb};
