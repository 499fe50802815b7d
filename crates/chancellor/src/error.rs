use blackboard::BlackboardError;
use thiserror::Error;

/// Failure reported by a scholar callback.
#[derive(Debug, Error)]
pub enum ScholarError {
    #[error(transparent)]
    Blackboard(#[from] BlackboardError),

    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ScholarError {
    pub fn failed(message: impl Into<String>) -> Self {
        ScholarError::Failed(message.into())
    }
}

/// A tick aborted because a scholar callback failed.
#[derive(Debug, Error)]
pub enum ChancellorError {
    #[error("scholar `{scholar}` failed to report its importance")]
    Importance {
        scholar: String,
        #[source]
        source: ScholarError,
    },

    #[error("scholar `{scholar}` failed to execute")]
    Execute {
        scholar: String,
        #[source]
        source: ScholarError,
    },
}

impl ChancellorError {
    pub fn scholar(&self) -> &str {
        match self {
            ChancellorError::Importance { scholar, .. } | ChancellorError::Execute { scholar, .. } => {
                scholar
            }
        }
    }
}
