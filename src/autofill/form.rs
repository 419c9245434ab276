//! Payslip form wiring: reads the embedded JSON blocks, listens on the
//! employee picker and writes the looked-up values into the form fields.

use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::autofill::directory::{AutofillValues, EmployeeDirectory};
use crate::dom;
use crate::error::{UiError, UiResult};

/// Element ids used by the payslip generation form.
#[derive(Debug, Clone, PartialEq)]
pub struct AutofillConfig {
    pub employee_field_id: String,
    pub salary_field_id: String,
    pub department_field_id: String,
    pub unit_field_id: String,
    pub grade_field_id: String,
    pub level_field_id: String,
    pub details_data_id: String,
    pub salaries_data_id: String,
}

impl Default for AutofillConfig {
    fn default() -> Self {
        Self {
            employee_field_id: "id_employee".to_string(),
            salary_field_id: "id_basic_salary".to_string(),
            department_field_id: "id_department".to_string(),
            unit_field_id: "id_unit".to_string(),
            grade_field_id: "id_grade".to_string(),
            level_field_id: "id_level".to_string(),
            details_data_id: "employee-details-data".to_string(),
            salaries_data_id: "employee-salaries-data".to_string(),
        }
    }
}

/// Options handed to the searchable-select enhancer along with the picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerOptions {
    pub theme: String,
    pub width: String,
    pub placeholder: String,
    pub allow_clear: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            theme: "bootstrap-5".to_string(),
            width: "100%".to_string(),
            placeholder: "Search for an employee...".to_string(),
            allow_clear: true,
        }
    }
}

/// Text content of the `<script>` block `id`.
fn embedded_json(id: &str) -> UiResult<String> {
    dom::element_by_id::<Element>(id)
        .and_then(|el| el.text_content())
        .ok_or_else(|| UiError::Json {
            block: id.to_string(),
            message: "data block not found".to_string(),
        })
}

struct AutofillForm {
    directory: EmployeeDirectory,
    employee: Element,
    salary: Option<Element>,
    department: Option<Element>,
    unit: Option<Element>,
    grade: Option<Element>,
    level: Option<Element>,
}

impl AutofillForm {
    fn selected_id(&self) -> String {
        dom::field_value(&self.employee).unwrap_or_default()
    }

    fn apply(&self, employee_id: &str) -> AutofillValues {
        let values = self.directory.lookup(employee_id);
        let targets = [
            (&self.salary, &values.salary),
            (&self.department, &values.department),
            (&self.unit, &values.unit),
            (&self.grade, &values.grade),
            (&self.level, &values.level),
        ];
        for (field, value) in targets {
            if let Some(field) = field {
                dom::set_field_value(field, value);
            }
        }
        values
    }
}

/// Handle to the wired autofill.
///
/// Widgets that change the picker without firing a native `change` event can
/// call `apply` / `applySelected` themselves.
#[wasm_bindgen]
pub struct EmployeeAutofill {
    inner: Rc<AutofillForm>,
}

#[wasm_bindgen]
impl EmployeeAutofill {
    /// Fill the form for `employee_id`; `undefined` or `""` clears it.
    #[wasm_bindgen]
    pub fn apply(&self, employee_id: Option<String>) -> String {
        let id = employee_id.unwrap_or_default();
        self.inner.apply(&id).salary
    }

    /// Fill the form for whatever the picker currently holds.
    #[wasm_bindgen(js_name = applySelected)]
    pub fn apply_selected(&self) {
        self.inner.apply(&self.inner.selected_id());
    }

    /// Number of employees known to the embedded data.
    #[wasm_bindgen(js_name = employeeCount)]
    pub fn employee_count(&self) -> usize {
        self.inner.directory.len()
    }
}

/// Wire the employee picker. `Ok(None)` when the picker is absent; an error
/// when a data block is missing or malformed.
///
/// `enhancer`, when given, is called as `enhancer(pickerElement, options)`
/// before the listener is registered.
pub fn setup_employee_autofill(
    config: &AutofillConfig,
    enhancer: Option<&js_sys::Function>,
) -> UiResult<Option<EmployeeAutofill>> {
    let Some(employee) = dom::element_by_id::<Element>(&config.employee_field_id) else {
        web_sys::console::log_1(
            &format!("[Autofill] #{} not present, skipping", config.employee_field_id).into(),
        );
        return Ok(None);
    };

    if let Some(enhance) = enhancer {
        let options = serde_wasm_bindgen::to_value(&PickerOptions::default())
            .map_err(|e| UiError::Dom(e.to_string()))?;
        enhance.call2(&JsValue::NULL, &employee, &options)?;
    }

    let directory = EmployeeDirectory::from_json(
        &config.details_data_id,
        &embedded_json(&config.details_data_id)?,
        &config.salaries_data_id,
        &embedded_json(&config.salaries_data_id)?,
    )?;

    let form = Rc::new(AutofillForm {
        directory,
        employee: employee.clone(),
        salary: dom::element_by_id(&config.salary_field_id),
        department: dom::element_by_id(&config.department_field_id),
        unit: dom::element_by_id(&config.unit_field_id),
        grade: dom::element_by_id(&config.grade_field_id),
        level: dom::element_by_id(&config.level_field_id),
    });

    let listener = Rc::clone(&form);
    dom::listen(&employee, "change", move |_| {
        listener.apply(&listener.selected_id());
    })?;

    Ok(Some(EmployeeAutofill { inner: form }))
}

/// JS entry with the default field ids. Call once the DOM is parsed.
#[wasm_bindgen(js_name = setupEmployeeAutofill)]
pub fn setup_employee_autofill_js(
    enhancer: Option<js_sys::Function>,
) -> Result<Option<EmployeeAutofill>, JsValue> {
    setup_employee_autofill(&AutofillConfig::default(), enhancer.as_ref()).map_err(|e| {
        web_sys::console::error_1(&format!("[Autofill] {}", e).into());
        JsValue::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_options_serialize_camel_case() {
        let json = serde_json::to_value(PickerOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "theme": "bootstrap-5",
                "width": "100%",
                "placeholder": "Search for an employee...",
                "allowClear": true
            })
        );
    }

    #[test]
    fn test_default_ids() {
        let config = AutofillConfig::default();
        assert_eq!(config.employee_field_id, "id_employee");
        assert_eq!(config.salary_field_id, "id_basic_salary");
        assert_eq!(config.details_data_id, "employee-details-data");
        assert_eq!(config.salaries_data_id, "employee-salaries-data");
    }
}
