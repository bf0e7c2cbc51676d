use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site content is malformed: {0}")]
    Content(#[from] serde_json::Error),
    #[error("project id must be positive, found {0}")]
    InvalidProjectId(u32),
    #[error("project id {0} is defined more than once")]
    DuplicateProjectId(u32),
}
