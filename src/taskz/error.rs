use thiserror::Error;

use crate::model::{TaskId, MAX_TASKS};
use crate::validate::ValidationError;

#[derive(Error, Debug)]
pub enum TaskzError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task with ID {0} not found")]
    NotFound(TaskId),

    #[error("Maximum {} tasks reached", MAX_TASKS)]
    CapacityReached,

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Next occurrence date is out of range")]
    DateOutOfRange,
}

pub type Result<T> = std::result::Result<T, TaskzError>;
