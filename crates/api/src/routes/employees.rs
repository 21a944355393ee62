//! Route definitions for employees and nested timesheets.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Employee routes mounted at `/employees`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/{id}/timesheets",
            get(employees::list_timesheets).post(employees::create_timesheet),
        )
        .route(
            "/{id}/timesheets/{timesheet_id}",
            put(employees::update_timesheet).delete(employees::delete_timesheet),
        )
}
