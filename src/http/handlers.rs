//! HTTP handlers for the employee endpoints.
//!
//! Each handler is a single pass: delegate to the directory, wrap the
//! result. Error mapping lives entirely in [`ApiError`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::upstream::Employee;

/// How many records the top-earners endpoint returns.
pub const TOP_EARNER_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    tracing::debug!("Request to get all employees");
    let employees = state.directory.list_all().await?;
    tracing::info!(count = employees.len(), "Retrieved all employees");
    Ok(Json(employees))
}

pub async fn search_employees(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    tracing::debug!(name = %query.name, "Searching employees by name");
    let employees = state.directory.search_by_name(&query.name).await?;
    tracing::info!(name = %query.name, count = employees.len(), "Employee search finished");
    Ok(Json(employees))
}

pub async fn employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiError> {
    tracing::debug!(id = %id, "Request to get employee by id");
    let employee = state.directory.fetch_by_id(&id).await?;
    tracing::info!(id = %id, name = %employee.employee_name, "Employee retrieved");
    Ok(Json(employee))
}

pub async fn highest_salary(State(state): State<AppState>) -> Result<Json<u32>, ApiError> {
    tracing::debug!("Request to get highest salary among all employees");
    let salary = state.directory.highest_salary().await?;
    tracing::info!(salary, "Highest salary retrieved");
    Ok(Json(salary))
}

pub async fn top_earners(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    tracing::debug!("Request to get top {} highest earning employees", TOP_EARNER_COUNT);
    let employees = state.directory.top_earners(TOP_EARNER_COUNT).await?;
    tracing::info!(count = employees.len(), "Top earners retrieved");
    Ok(Json(employees))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    tracing::debug!(name = %employee.employee_name, "Request to create employee");
    let created = state.directory.create(&employee).await?;
    tracing::info!(id = %created.id, name = %created.employee_name, "Employee created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    tracing::debug!(id = %id, "Request to delete employee by id");
    state.directory.delete_by_id(&id).await?;
    tracing::info!(id = %id, "Employee deleted");
    Ok(format!("Employee with id {} got deleted successfully", id))
}
