pub mod employees;
pub mod health;
pub mod menus;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employees                                   list, create
/// /employees/{id}                              get, update, soft-delete
/// /employees/{id}/timesheets                   list, create
/// /employees/{id}/timesheets/{timesheet_id}    update, delete
///
/// /menus                                       list, create
/// /menus/{id}                                  get, update, guarded delete
/// /menus/{id}/menu-items                       list, create
/// /menus/{id}/menu-items/{menu_item_id}        update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", employees::router())
        .nest("/menus", menus::router())
}
