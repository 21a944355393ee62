//! Handlers for menus and their nested items.
//!
//! Same shape as the employee handlers: explicit id-resolution first, then
//! field validation, then a single statement plus refetch. The one
//! referential-integrity rule in the system lives here: a menu that still
//! owns items cannot be deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use brigade_core::error::CoreError;
use brigade_core::types::DbId;
use brigade_db::models::menu::Menu;
use brigade_db::models::menu_item::MenuItem;
use brigade_db::repositories::{MenuItemRepo, MenuRepo};
use brigade_db::DbPool;

use crate::envelope::{
    MenuBody, MenuItemBody, MenuItemPayload, MenuItemsPayload, MenuPayload, MenusPayload,
};
use crate::error::{AppError, AppResult};
use crate::handlers::require_body;
use crate::state::AppState;

/// Id-resolution for `/{id}` path segments.
async fn resolve_menu(pool: &DbPool, id: DbId) -> Result<Menu, AppError> {
    MenuRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Menu", id }))
}

/// Id-resolution for `/{menu_item_id}` path segments.
async fn resolve_menu_item(pool: &DbPool, id: DbId) -> Result<MenuItem, AppError> {
    MenuItemRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MenuItem",
            id,
        }))
}

// ---------------------------------------------------------------------------
// Menu CRUD
// ---------------------------------------------------------------------------

/// GET /api/menus
pub async fn list_menus(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let menus = MenuRepo::list(&state.pool).await?;

    Ok(Json(MenusPayload { menus }))
}

/// GET /api/menus/{id}
pub async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let menu = resolve_menu(&state.pool, id).await?;

    Ok(Json(MenuPayload { menu }))
}

/// POST /api/menus
pub async fn create_menu(
    State(state): State<AppState>,
    Json(body): Json<MenuBody>,
) -> AppResult<impl IntoResponse> {
    let input = require_body("menu", body.menu)?;
    let title = input.require_title()?;

    let menu = MenuRepo::create(&state.pool, title).await?;

    tracing::info!(menu_id = menu.id, title = %menu.title, "Menu created");

    Ok((StatusCode::CREATED, Json(MenuPayload { menu })))
}

/// PUT /api/menus/{id}
pub async fn update_menu(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<MenuBody>,
) -> AppResult<impl IntoResponse> {
    let existing = resolve_menu(&state.pool, id).await?;
    let input = require_body("menu", body.menu)?;
    let title = input.require_title()?;

    let menu = MenuRepo::update(&state.pool, existing.id, title).await?;

    tracing::info!(menu_id = menu.id, "Menu updated");

    Ok(Json(MenuPayload { menu }))
}

/// DELETE /api/menus/{id}
///
/// Guarded hard delete: rejected with 400 while at least one item still
/// references the menu. There is no cascade option.
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = resolve_menu(&state.pool, id).await?;

    if MenuItemRepo::any_for_menu(&state.pool, existing.id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "menu {} still has items and cannot be deleted",
            existing.id
        ))));
    }

    MenuRepo::delete(&state.pool, existing.id).await?;

    tracing::info!(menu_id = existing.id, "Menu deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Nested menu item CRUD
// ---------------------------------------------------------------------------

/// GET /api/menus/{id}/menu-items
pub async fn list_menu_items(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let menu = resolve_menu(&state.pool, id).await?;

    let menu_items = MenuItemRepo::list_for_menu(&state.pool, menu.id).await?;

    Ok(Json(MenuItemsPayload { menu_items }))
}

/// POST /api/menus/{id}/menu-items
pub async fn create_menu_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<MenuItemBody>,
) -> AppResult<impl IntoResponse> {
    let menu = resolve_menu(&state.pool, id).await?;
    let input = require_body("menuItem", body.menu_item)?;
    let fields = input.require_fields()?;

    let menu_item = MenuItemRepo::create(&state.pool, menu.id, &fields).await?;

    tracing::info!(
        menu_item_id = menu_item.id,
        menu_id = menu.id,
        name = %menu_item.name,
        "Menu item created"
    );

    Ok((StatusCode::CREATED, Json(MenuItemPayload { menu_item })))
}

/// PUT /api/menus/{id}/menu-items/{menu_item_id}
///
/// Updates the item and re-parents it to the menu in the path.
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path((id, menu_item_id)): Path<(DbId, DbId)>,
    Json(body): Json<MenuItemBody>,
) -> AppResult<impl IntoResponse> {
    let menu = resolve_menu(&state.pool, id).await?;
    let existing = resolve_menu_item(&state.pool, menu_item_id).await?;
    let input = require_body("menuItem", body.menu_item)?;
    let fields = input.require_fields()?;

    let menu_item = MenuItemRepo::update(&state.pool, existing.id, menu.id, &fields).await?;

    tracing::info!(menu_item_id = menu_item.id, menu_id = menu.id, "Menu item updated");

    Ok(Json(MenuItemPayload { menu_item }))
}

/// DELETE /api/menus/{id}/menu-items/{menu_item_id}
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path((id, menu_item_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    resolve_menu(&state.pool, id).await?;
    let existing = resolve_menu_item(&state.pool, menu_item_id).await?;

    MenuItemRepo::delete(&state.pool, existing.id).await?;

    tracing::info!(menu_item_id = existing.id, "Menu item deleted");

    Ok(StatusCode::NO_CONTENT)
}
