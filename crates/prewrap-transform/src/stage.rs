//! Pipeline stage abstraction.

use prewrap_tree::Root;

/// One ordered transformation applied to a document tree.
///
/// Stages hold no per-document state: [`apply`](Self::apply) takes `&self`,
/// and the `Send + Sync` bound lets a host pipeline process independent
/// documents in parallel.
pub trait TreeTransform: Send + Sync {
    /// Unique stage name used for ordering constraints.
    fn name(&self) -> &str;

    /// Names of stages this stage must run before.
    ///
    /// A named stage that is absent from the pipeline imposes nothing.
    fn runs_before(&self) -> &[String] {
        &[]
    }

    /// Transform `root` in place, returning the number of nodes rewritten.
    fn apply(&self, root: &mut Root) -> usize;
}

/// Outcome of one stage over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    /// Stage name.
    pub stage: String,
    /// Nodes rewritten by the stage.
    pub rewritten: usize,
}
