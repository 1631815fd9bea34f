//! UI components for the employee manager
//!
//! These modules extend the `App` struct with rendering methods.
//! They are imported for their side effects (impl blocks).

mod employee_list;
mod form;
mod header;
mod notices;
