//! Route definitions for menus and nested menu items.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::menus;
use crate::state::AppState;

/// Menu routes mounted at `/menus`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(menus::list_menus).post(menus::create_menu))
        .route(
            "/{id}",
            get(menus::get_menu)
                .put(menus::update_menu)
                .delete(menus::delete_menu),
        )
        .route(
            "/{id}/menu-items",
            get(menus::list_menu_items).post(menus::create_menu_item),
        )
        .route(
            "/{id}/menu-items/{menu_item_id}",
            put(menus::update_menu_item).delete(menus::delete_menu_item),
        )
}
