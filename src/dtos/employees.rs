use crate::error::AppError;
use crate::models::Employee;
use serde::{Deserialize, Serialize};

/// Full replacement payload shared by create and update. All three fields are
/// required; partial updates are not supported.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeUpsert {
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

/// External representation: the store identifier in its hex string form plus
/// the business fields, nothing else.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

impl TryFrom<Employee> for EmployeeResponse {
    type Error = AppError;

    fn try_from(employee: Employee) -> Result<Self, Self::Error> {
        let id = employee.id.ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!("employee document is missing its _id"))
        })?;

        Ok(Self {
            id: id.to_hex(),
            name: employee.name,
            salary: employee.salary,
            age: employee.age,
        })
    }
}
