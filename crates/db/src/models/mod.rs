pub mod employee;
pub mod menu;
pub mod menu_item;
pub mod timesheet;
