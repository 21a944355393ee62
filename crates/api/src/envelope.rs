//! Typed request and response envelopes.
//!
//! Every body on this API is keyed by its resource name: `{"employee":
//! {...}}` in, `{"employees": [...]}` out. These wrappers replace ad-hoc
//! `serde_json::json!` construction with compile-time-checked shapes.
//!
//! Request envelopes hold an `Option` so a body missing its resource key
//! deserializes cleanly and is rejected by the handler as a validation
//! failure (400) rather than by the extractor.

use serde::{Deserialize, Serialize};

use brigade_db::models::employee::{Employee, EmployeeInput};
use brigade_db::models::menu::{Menu, MenuInput};
use brigade_db::models::menu_item::{MenuItem, MenuItemInput};
use brigade_db::models::timesheet::{Timesheet, TimesheetInput};

// ---------------------------------------------------------------------------
// Request envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct EmployeeBody {
    pub employee: Option<EmployeeInput>,
}

#[derive(Debug, Deserialize)]
pub struct TimesheetBody {
    pub timesheet: Option<TimesheetInput>,
}

#[derive(Debug, Deserialize)]
pub struct MenuBody {
    pub menu: Option<MenuInput>,
}

#[derive(Debug, Deserialize)]
pub struct MenuItemBody {
    #[serde(rename = "menuItem")]
    pub menu_item: Option<MenuItemInput>,
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct EmployeePayload {
    pub employee: Employee,
}

#[derive(Debug, Serialize)]
pub struct EmployeesPayload {
    pub employees: Vec<Employee>,
}

#[derive(Debug, Serialize)]
pub struct TimesheetPayload {
    pub timesheet: Timesheet,
}

#[derive(Debug, Serialize)]
pub struct TimesheetsPayload {
    pub timesheets: Vec<Timesheet>,
}

#[derive(Debug, Serialize)]
pub struct MenuPayload {
    pub menu: Menu,
}

#[derive(Debug, Serialize)]
pub struct MenusPayload {
    pub menus: Vec<Menu>,
}

#[derive(Debug, Serialize)]
pub struct MenuItemPayload {
    #[serde(rename = "menuItem")]
    pub menu_item: MenuItem,
}

#[derive(Debug, Serialize)]
pub struct MenuItemsPayload {
    #[serde(rename = "menuItems")]
    pub menu_items: Vec<MenuItem>,
}
