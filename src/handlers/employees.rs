use crate::dtos::{EmployeeResponse, EmployeeUpsert};
use crate::error::AppError;
use crate::models::Employee;
use crate::services::parse_employee_id;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::json;

#[tracing::instrument(skip(state))]
pub async fn list_employees(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let employees = state
        .db
        .list_employees()
        .await?
        .into_iter()
        .map(EmployeeResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(employees))
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_employee(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<EmployeeUpsert>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let employee = Employee::new(payload.name, payload.salary, payload.age);
    let created = state.db.insert_employee(&employee).await?;
    let response = EmployeeResponse::try_from(created)?;

    tracing::info!(employee_id = %response.id, "Employee created");

    Ok(Json(response))
}

#[tracing::instrument(skip(state, payload))]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    WithRejection(Json(payload), _): WithRejection<Json<EmployeeUpsert>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_employee_id(&employee_id)?;

    let updated = state
        .db
        .replace_employee(id, &payload.name, payload.salary, payload.age)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Employee not found")))?;

    tracing::info!(employee_id = %employee_id, "Employee updated");

    Ok(Json(EmployeeResponse::try_from(updated)?))
}

#[tracing::instrument(skip(state))]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_employee_id(&employee_id)?;

    if !state.db.delete_employee(id).await? {
        return Err(AppError::NotFound(anyhow::anyhow!("Employee not found")));
    }

    tracing::info!(employee_id = %employee_id, "Employee deleted");

    Ok(Json(json!({ "message": "Record deleted" })))
}
