//! Data models for the employee manager

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown whenever a draft fails validation
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid information.";

/// Employee record as exchanged with the REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Server-assigned, absent until the record has been created
    #[serde(rename = "employeeId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "employeeName")]
    pub name: String,
    #[serde(rename = "employeeSalary")]
    pub salary: f64,
    #[serde(rename = "employeeCity")]
    pub city: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: f64, city: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            salary,
            city: city.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Salary as shown in the list and copied back into the form
    pub fn salary_text(&self) -> String {
        self.salary.to_string()
    }
}

/// Why a draft was rejected before any request was made
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("employee name is empty")]
    EmptyName,

    #[error("employee city is empty")]
    EmptyCity,

    #[error("salary {0:?} is not a finite number")]
    InvalidSalary(String),

    #[error("salary {0} is negative")]
    NegativeSalary(f64),
}

/// Whether a submit creates a new record or replaces an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// In-progress, unsaved form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub name: String,
    pub salary: String,
    pub city: String,
    /// Record currently being edited, `None` in create mode
    pub editing: Option<Employee>,
}

impl FormDraft {
    pub fn new(
        name: impl Into<String>,
        salary: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            salary: salary.into(),
            city: city.into(),
            editing: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Update
        } else {
            FormMode::Create
        }
    }

    /// Copy an existing record into the form and make it the edit target
    pub fn load(&mut self, employee: &Employee) {
        self.name = employee.name.clone();
        self.salary = employee.salary_text();
        self.city = employee.city.clone();
        self.editing = Some(employee.clone());
    }

    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.salary.clear();
        self.city.clear();
    }

    pub fn fields_empty(&self) -> bool {
        self.name.is_empty() && self.salary.is_empty() && self.city.is_empty()
    }

    /// Build the record to send, carrying the edit target's id if there is one
    pub fn validate(&self) -> Result<Employee, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let salary_text = self.salary.trim();
        let salary: f64 = salary_text
            .parse()
            .map_err(|_| ValidationError::InvalidSalary(self.salary.clone()))?;
        if !salary.is_finite() {
            return Err(ValidationError::InvalidSalary(self.salary.clone()));
        }
        if salary < 0.0 {
            return Err(ValidationError::NegativeSalary(salary));
        }

        let city = self.city.trim();
        if city.is_empty() {
            return Err(ValidationError::EmptyCity);
        }

        Ok(Employee {
            id: self.editing.as_ref().and_then(|e| e.id),
            name: name.to_string(),
            salary,
            city: city.to_string(),
        })
    }
}

/// Kind of user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
    Invalid,
}

/// User-facing message produced by an operation outcome
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub timestamp: String,
}

impl Notice {
    fn with_kind(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: chrono::Local::now().format("%H:%M").to_string(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_kind(NoticeKind::Success, text)
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self::with_kind(NoticeKind::Failure, text)
    }

    pub fn invalid() -> Self {
        Self::with_kind(NoticeKind::Invalid, INVALID_INPUT_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_builds_create_record() {
        let draft = FormDraft::new("Ann", "50000", "Reno");
        let employee = draft.validate().unwrap();
        assert_eq!(employee, Employee::new("Ann", 50000.0, "Reno"));
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert_eq!(
            FormDraft::new("", "1", "Reno").validate(),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            FormDraft::new("Ann", "1", "   ").validate(),
            Err(ValidationError::EmptyCity)
        );
        assert!(matches!(
            FormDraft::new("Ann", "", "Reno").validate(),
            Err(ValidationError::InvalidSalary(_))
        ));
    }

    #[test]
    fn validate_rejects_bad_salaries() {
        for salary in ["abc", "12k", "NaN", "inf", "-inf"] {
            let result = FormDraft::new("Ann", salary, "Reno").validate();
            assert!(
                matches!(result, Err(ValidationError::InvalidSalary(_))),
                "{salary} should be rejected, got {result:?}"
            );
        }
        assert_eq!(
            FormDraft::new("Ann", "-5", "Reno").validate(),
            Err(ValidationError::NegativeSalary(-5.0))
        );
    }

    #[test]
    fn validate_trims_input() {
        let employee = FormDraft::new("  Ann ", " 42.5 ", " Reno")
            .validate()
            .unwrap();
        assert_eq!(employee.name, "Ann");
        assert_eq!(employee.salary, 42.5);
        assert_eq!(employee.city, "Reno");
    }

    #[test]
    fn load_switches_to_update_mode() {
        let target = Employee::new("Bob", 0.0, "Elko").with_id(7);
        let mut draft = FormDraft::default();
        assert_eq!(draft.mode(), FormMode::Create);

        draft.load(&target);
        assert_eq!(draft.mode(), FormMode::Update);
        assert_eq!(draft.salary, "0");

        let employee = draft.validate().unwrap();
        assert_eq!(employee.id, Some(7));
    }

    #[test]
    fn wire_format_uses_api_field_names() {
        let value = serde_json::to_value(Employee::new("Ann", 50000.0, "Reno")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "employeeName": "Ann",
                "employeeSalary": 50000.0,
                "employeeCity": "Reno"
            })
        );

        let parsed: Employee = serde_json::from_str(
            r#"{"employeeId":3,"employeeName":"Cy","employeeSalary":10,"employeeCity":"Ely"}"#,
        )
        .unwrap();
        assert_eq!(parsed, Employee::new("Cy", 10.0, "Ely").with_id(3));
    }

    #[test]
    fn salary_text_drops_trailing_zero_fraction() {
        assert_eq!(Employee::new("a", 50000.0, "b").salary_text(), "50000");
        assert_eq!(Employee::new("a", 50000.5, "b").salary_text(), "50000.5");
    }
}
