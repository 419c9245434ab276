pub mod directory;
pub mod form;

pub use directory::{format_salary, AutofillValues, EmployeeDetail, EmployeeDirectory};
pub use form::{setup_employee_autofill, AutofillConfig, EmployeeAutofill, PickerOptions};
