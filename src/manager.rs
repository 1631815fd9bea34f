//! Employee list and form state, driven one phase at a time.
//!
//! Every network operation is split in two: a `begin_*`/`request_*` step that
//! runs on the UI context before the call, and a `complete_*`/`apply_*` step
//! that takes the call's outcome. The call itself happens in between, on
//! whatever executor the caller chooses.

use tracing::{error, info, warn};

use crate::api::{ApiResult, EmployeeApi};
use crate::models::{Employee, FormDraft, FormMode, Notice, ValidationError};

/// Oldest notices are dropped past this many
pub const NOTICE_HISTORY_LIMIT: usize = 100;

pub const CONFIRM_DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// What the caller has to do once an operation has settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// Re-fetch the whole list
    Reload,
    None,
}

/// A validated create or update, ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub enum WriteRequest {
    Create(Employee),
    Update {
        id: i64,
        /// Name of the record as it was when editing started
        original_name: String,
        employee: Employee,
    },
}

impl WriteRequest {
    pub fn send(&self, api: &impl EmployeeApi) -> ApiResult<()> {
        match self {
            WriteRequest::Create(employee) => api.create(employee),
            WriteRequest::Update { id, employee, .. } => api.update(*id, employee),
        }
    }

    pub fn employee(&self) -> &Employee {
        match self {
            WriteRequest::Create(employee) => employee,
            WriteRequest::Update { employee, .. } => employee,
        }
    }

    fn success_message(&self) -> String {
        match self {
            WriteRequest::Create(employee) => {
                format!("Added Employee {} successfully", employee.name)
            }
            WriteRequest::Update { original_name, .. } => {
                format!("Edited Employee {} successfully", original_name)
            }
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            WriteRequest::Create(_) => "Error adding employee. Please try again.",
            WriteRequest::Update { .. } => "Error editing employee. Please try again.",
        }
    }
}

/// Client-side state: the cached list, the form draft and pending prompts
#[derive(Debug, Default)]
pub struct EmployeeManager {
    employees: Vec<Employee>,
    draft: FormDraft,
    loading: bool,
    pending_delete: Option<i64>,
    alert: Option<Notice>,
    notices: Vec<Notice>,
}

impl EmployeeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.draft.mode()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    /// Latest notice still waiting to be acknowledged
    pub fn alert(&self) -> Option<&Notice> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Most recent notices, oldest first, at most [`NOTICE_HISTORY_LIMIT`]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Submitting..."
        } else {
            match self.mode() {
                FormMode::Update => "Edit",
                FormMode::Create => "Add",
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.alert = Some(notice.clone());
        self.notices.push(notice);
        if self.notices.len() > NOTICE_HISTORY_LIMIT {
            let excess = self.notices.len() - NOTICE_HISTORY_LIMIT;
            self.notices.drain(..excess);
        }
    }

    /// Replace the cache with a fetched list, or keep it if the fetch failed.
    pub fn apply_list(&mut self, result: ApiResult<Vec<Employee>>) {
        match result {
            Ok(employees) => {
                info!(count = employees.len(), "loaded employees");
                self.employees = employees;
            }
            Err(e) => {
                error!(error = %e, "error fetching employees");
            }
        }
    }

    /// Validate the draft and turn it into a request.
    ///
    /// On success the form fields are cleared and the loading flag is set;
    /// the edit target stays until [`complete_submit`](Self::complete_submit).
    pub fn begin_submit(&mut self) -> Result<WriteRequest, ValidationError> {
        let employee = match self.draft.validate() {
            Ok(employee) => employee,
            Err(e) => {
                warn!(error = %e, "rejected employee form");
                self.notify(Notice::invalid());
                return Err(e);
            }
        };

        let request = match (&self.draft.editing, employee.id) {
            (Some(target), Some(id)) => WriteRequest::Update {
                id,
                original_name: target.name.clone(),
                employee,
            },
            _ => WriteRequest::Create(employee),
        };

        self.loading = true;
        self.draft.clear_fields();
        Ok(request)
    }

    /// Settle a create or update. The list is re-fetched whatever the outcome.
    pub fn complete_submit(&mut self, request: &WriteRequest, outcome: ApiResult<()>) -> FollowUp {
        match outcome {
            Ok(()) => {
                info!(name = %request.employee().name, "saved employee");
                self.notify(Notice::success(request.success_message()));
            }
            Err(e) => {
                error!(error = %e, "error saving employee");
                self.notify(Notice::failure(request.failure_message()));
            }
        }

        self.loading = false;
        self.draft.editing = None;
        FollowUp::Reload
    }

    /// Load `employee` into the form. Ignored while a submit is in flight,
    /// so the settled submit always leaves an empty create-mode form.
    pub fn begin_edit(&mut self, employee: &Employee) -> bool {
        if self.loading {
            warn!(id = ?employee.id, "edit ignored while a submit is in flight");
            return false;
        }
        self.draft.load(employee);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.draft = FormDraft::default();
    }

    /// Ask for confirmation before deleting `id`
    pub fn request_remove(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_remove(&mut self) {
        if let Some(id) = self.pending_delete.take() {
            info!(id, "delete cancelled");
        }
    }

    /// Take the confirmed delete, if one is pending
    pub fn confirm_remove(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }

    /// Settle a delete. Only a successful delete triggers a re-fetch.
    pub fn complete_remove(&mut self, id: i64, outcome: ApiResult<()>) -> FollowUp {
        match outcome {
            Ok(()) => {
                info!(id, "deleted employee");
                self.notify(Notice::success("Employee deleted successfully"));
                FollowUp::Reload
            }
            Err(e) => {
                error!(id, error = %e, "error deleting employee");
                self.notify(Notice::failure("Error deleting employee. Please try again."));
                FollowUp::None
            }
        }
    }
}
