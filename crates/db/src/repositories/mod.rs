pub mod employee_repo;
pub mod menu_item_repo;
pub mod menu_repo;
pub mod timesheet_repo;

pub use employee_repo::EmployeeRepo;
pub use menu_item_repo::MenuItemRepo;
pub use menu_repo::MenuRepo;
pub use timesheet_repo::TimesheetRepo;
