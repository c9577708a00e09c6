//! Pipeline error types.

/// Error assembling or running a pipeline.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PipelineError {
    /// Two stages share a name.
    #[error("duplicate pipeline stage: {0}")]
    DuplicateStage(String),

    /// A stage is placed after a stage it must precede.
    #[error("stage '{stage}' must run before '{must_precede}'")]
    OrderViolation {
        /// Stage with the ordering requirement.
        stage: String,
        /// Stage it must precede, found earlier in the pipeline.
        must_precede: String,
    },
}
