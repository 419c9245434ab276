//! Employee lookup tables parsed from the JSON blocks embedded in the page.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::error::{UiError, UiResult};

/// Detail attributes for one employee. Missing or `null` attributes are `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmployeeDetail {
    #[serde(default, deserialize_with = "lenient_text")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub grade: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub level: Option<String>,
}

/// Accept strings, numbers and booleans as text; `null` becomes `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other @ (serde_json::Value::Number(_) | serde_json::Value::Bool(_))) => {
            Some(other.to_string())
        }
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected text, got {}",
                other
            )))
        }
    })
}

/// Field values to write into the payslip form for one selection.
/// Empty strings clear the corresponding field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutofillValues {
    pub salary: String,
    pub department: String,
    pub unit: String,
    pub grade: String,
    pub level: String,
}

/// Read-only detail and salary maps keyed by staff id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDirectory {
    details: HashMap<String, EmployeeDetail>,
    salaries: HashMap<String, f64>,
}

fn parse_block<T: for<'de> Deserialize<'de>>(block: &str, text: &str) -> UiResult<T> {
    serde_json::from_str(text).map_err(|e| UiError::Json {
        block: block.to_string(),
        message: e.to_string(),
    })
}

impl EmployeeDirectory {
    pub fn new(details: HashMap<String, EmployeeDetail>, salaries: HashMap<String, f64>) -> Self {
        Self { details, salaries }
    }

    /// Parse both embedded blocks. `details_block` and `salaries_block` name
    /// the source elements in error messages.
    pub fn from_json(
        details_block: &str,
        details_json: &str,
        salaries_block: &str,
        salaries_json: &str,
    ) -> UiResult<Self> {
        Ok(Self {
            details: parse_block(details_block, details_json)?,
            salaries: parse_block(salaries_block, salaries_json)?,
        })
    }

    pub fn detail(&self, employee_id: &str) -> Option<&EmployeeDetail> {
        self.details.get(employee_id)
    }

    pub fn salary(&self, employee_id: &str) -> Option<f64> {
        self.salaries.get(employee_id).copied()
    }

    pub fn len(&self) -> usize {
        self.details.len().max(self.salaries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty() && self.salaries.is_empty()
    }

    /// Values for the selected employee; an empty id means no selection.
    pub fn lookup(&self, employee_id: &str) -> AutofillValues {
        if employee_id.is_empty() {
            return AutofillValues::default();
        }

        let salary = self
            .salary(employee_id)
            .map(format_salary)
            .unwrap_or_default();

        match self.detail(employee_id) {
            Some(detail) => AutofillValues {
                salary,
                department: detail.department.clone().unwrap_or_default(),
                unit: detail.unit.clone().unwrap_or_default(),
                grade: detail.grade.clone().unwrap_or_default(),
                level: detail.level.clone().unwrap_or_default(),
            },
            None => AutofillValues {
                salary,
                ..AutofillValues::default()
            },
        }
    }
}

/// Two decimal places, no grouping.
///
/// Exact halfway values round away from zero, the way the browser's
/// `Number.prototype.toFixed(2)` does; `format!("{:.2}")` alone would round
/// them to even.
pub fn format_salary(amount: f64) -> String {
    // Fixed precision prints the exact binary value, so a tie is a 5 in the
    // third decimal followed only by zeros. Binary ties are multiples of 1/8,
    // so the cent digit bumped below is always 2 or 7.
    let exact = format!("{:.40}", amount.abs());
    let Some((whole, frac)) = exact.split_once('.') else {
        return format!("{:.2}", amount);
    };
    let is_tie =
        frac.len() > 3 && frac[2..].starts_with('5') && frac[3..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.2}", amount);
    }

    let mut digits: Vec<char> = whole.chars().chain(frac[..2].chars()).collect();
    if let Some(last) = digits.last_mut() {
        *last = char::from(*last as u8 + 1);
    }

    let (units, cents) = digits.split_at(digits.len() - 2);
    format!(
        "{}{}.{}",
        if amount < 0.0 { "-" } else { "" },
        units.iter().collect::<String>(),
        cents.iter().collect::<String>()
    )
}
