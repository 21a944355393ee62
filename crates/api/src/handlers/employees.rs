//! Handlers for employees and their nested timesheets.
//!
//! Every `/{id}` route starts with an explicit id-resolution step: load the
//! parent employee (404 on miss) before validating or touching anything.
//! Nested timesheet routes resolve the timesheet the same way. Resolution
//! always precedes field validation, so a bad id answers 404 even when the
//! body is also invalid.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use brigade_core::error::CoreError;
use brigade_core::types::DbId;
use brigade_db::models::employee::Employee;
use brigade_db::models::timesheet::Timesheet;
use brigade_db::repositories::{EmployeeRepo, TimesheetRepo};
use brigade_db::DbPool;

use crate::envelope::{
    EmployeeBody, EmployeePayload, EmployeesPayload, TimesheetBody, TimesheetPayload,
    TimesheetsPayload,
};
use crate::error::{AppError, AppResult};
use crate::handlers::require_body;
use crate::state::AppState;

/// Id-resolution for `/{id}` path segments.
async fn resolve_employee(pool: &DbPool, id: DbId) -> Result<Employee, AppError> {
    EmployeeRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))
}

/// Id-resolution for `/{timesheet_id}` path segments. Looks the timesheet
/// up by id alone; the parent employee is resolved separately.
async fn resolve_timesheet(pool: &DbPool, id: DbId) -> Result<Timesheet, AppError> {
    TimesheetRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Timesheet",
            id,
        }))
}

// ---------------------------------------------------------------------------
// Employee CRUD
// ---------------------------------------------------------------------------

/// GET /api/employees
///
/// List active employees. Former staff never appear here.
pub async fn list_employees(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let employees = EmployeeRepo::list_current(&state.pool).await?;

    Ok(Json(EmployeesPayload { employees }))
}

/// GET /api/employees/{id}
///
/// Fetch one employee by id. Former staff are still fetchable here; the
/// active-only filter applies to listings, not direct lookups.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = resolve_employee(&state.pool, id).await?;

    Ok(Json(EmployeePayload { employee }))
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(body): Json<EmployeeBody>,
) -> AppResult<impl IntoResponse> {
    let input = require_body("employee", body.employee)?;
    let fields = input.require_fields()?;

    let employee = EmployeeRepo::create(&state.pool, &fields, input.current_flag()).await?;

    tracing::info!(employee_id = employee.id, name = %employee.name, "Employee created");

    Ok((StatusCode::CREATED, Json(EmployeePayload { employee })))
}

/// PUT /api/employees/{id}
///
/// Update name, position, and wage. The soft-delete flag cannot be changed
/// through this route.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<EmployeeBody>,
) -> AppResult<impl IntoResponse> {
    let existing = resolve_employee(&state.pool, id).await?;
    let input = require_body("employee", body.employee)?;
    let fields = input.require_fields()?;

    let employee = EmployeeRepo::update(&state.pool, existing.id, &fields).await?;

    tracing::info!(employee_id = employee.id, "Employee updated");

    Ok(Json(EmployeePayload { employee }))
}

/// DELETE /api/employees/{id}
///
/// Soft delete: flips `is_current_employee` to 0 and answers 200 with the
/// flagged row. The row and its timesheets survive.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = resolve_employee(&state.pool, id).await?;

    let employee = EmployeeRepo::mark_former(&state.pool, existing.id).await?;

    tracing::info!(employee_id = employee.id, "Employee marked as former");

    Ok(Json(EmployeePayload { employee }))
}

// ---------------------------------------------------------------------------
// Nested timesheet CRUD
// ---------------------------------------------------------------------------

/// GET /api/employees/{id}/timesheets
pub async fn list_timesheets(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = resolve_employee(&state.pool, id).await?;

    let timesheets = TimesheetRepo::list_for_employee(&state.pool, employee.id).await?;

    Ok(Json(TimesheetsPayload { timesheets }))
}

/// POST /api/employees/{id}/timesheets
pub async fn create_timesheet(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<TimesheetBody>,
) -> AppResult<impl IntoResponse> {
    let employee = resolve_employee(&state.pool, id).await?;
    let input = require_body("timesheet", body.timesheet)?;
    let fields = input.require_fields()?;

    let timesheet = TimesheetRepo::create(&state.pool, employee.id, &fields).await?;

    tracing::info!(
        timesheet_id = timesheet.id,
        employee_id = employee.id,
        "Timesheet created"
    );

    Ok((StatusCode::CREATED, Json(TimesheetPayload { timesheet })))
}

/// PUT /api/employees/{id}/timesheets/{timesheet_id}
///
/// Updates the timesheet and re-parents it to the employee in the path.
pub async fn update_timesheet(
    State(state): State<AppState>,
    Path((id, timesheet_id)): Path<(DbId, DbId)>,
    Json(body): Json<TimesheetBody>,
) -> AppResult<impl IntoResponse> {
    let employee = resolve_employee(&state.pool, id).await?;
    let existing = resolve_timesheet(&state.pool, timesheet_id).await?;
    let input = require_body("timesheet", body.timesheet)?;
    let fields = input.require_fields()?;

    let timesheet = TimesheetRepo::update(&state.pool, existing.id, employee.id, &fields).await?;

    tracing::info!(
        timesheet_id = timesheet.id,
        employee_id = employee.id,
        "Timesheet updated"
    );

    Ok(Json(TimesheetPayload { timesheet }))
}

/// DELETE /api/employees/{id}/timesheets/{timesheet_id}
pub async fn delete_timesheet(
    State(state): State<AppState>,
    Path((id, timesheet_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    resolve_employee(&state.pool, id).await?;
    let existing = resolve_timesheet(&state.pool, timesheet_id).await?;

    TimesheetRepo::delete(&state.pool, existing.id).await?;

    tracing::info!(timesheet_id = existing.id, "Timesheet deleted");

    Ok(StatusCode::NO_CONTENT)
}
