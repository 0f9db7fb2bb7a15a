//! Error types for workflow queries and name parsing.

use thiserror::Error;

use super::status::Status;
use super::workflow::WorkflowKind;

/// Errors returned by workflow engine operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowError {
    /// The requested workflow kind is not implemented by this engine.
    #[error("unsupported workflow kind: {0}")]
    UnsupportedWorkflow(WorkflowKind),

    /// The requested creation status is outside the simple catalog.
    #[error("status '{0}' is not available in the simple workflow")]
    InvalidStatus(Status),

    /// A creation status was requested without any resolved workflow role.
    #[error("a workflow role is required to compute a creation status")]
    RoleRequired,
}

/// Error returned while parsing status names from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing role names from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Error returned while parsing workflow kind names from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workflow kind: {0}")]
pub struct ParseWorkflowKindError(pub String);

/// Error returned while parsing board lane names from requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown board column: {0}")]
pub struct ParseColumnKindError(pub String);
