//! Employee manager core: records, REST client and form state
//!
//! The GUI binary renders [`manager::EmployeeManager`] with GPUI; everything
//! here is toolkit-free.

pub mod api;
pub mod config;
pub mod manager;
pub mod models;
pub mod telemetry;

pub use api::{ApiClient, ApiError, EmployeeApi};
pub use config::AppConfig;
pub use manager::{EmployeeManager, FollowUp, WriteRequest};
pub use models::{Employee, FormDraft, FormMode, Notice, NoticeKind};
