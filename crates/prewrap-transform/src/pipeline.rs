//! Ordered sequence of tree transforms.

use std::fmt;

use prewrap_tree::Root;

use crate::error::PipelineError;
use crate::stage::{TransformReport, TreeTransform};

/// Ordered list of [`TreeTransform`] stages.
///
/// Stages run in insertion order. Ordering requirements declared by
/// [`TreeTransform::runs_before`] are checked by [`validate`](Self::validate)
/// and again before every [`run`](Self::run).
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn TreeTransform>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::DuplicateStage`] if a stage with the same
    /// name is already present.
    pub fn push(&mut self, stage: impl TreeTransform + 'static) -> Result<(), PipelineError> {
        if self.stages.iter().any(|s| s.name() == stage.name()) {
            return Err(PipelineError::DuplicateStage(stage.name().to_owned()));
        }
        self.stages.push(Box::new(stage));
        Ok(())
    }

    /// Append a stage, builder style.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::DuplicateStage`] on a name clash.
    pub fn with_stage(mut self, stage: impl TreeTransform + 'static) -> Result<Self, PipelineError> {
        self.push(stage)?;
        Ok(self)
    }

    /// Stage names in execution order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Check every declared ordering requirement.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::OrderViolation`] for the first stage found
    /// after a stage it must precede.
    pub fn validate(&self) -> Result<(), PipelineError> {
        for (position, stage) in self.stages.iter().enumerate() {
            for later in stage.runs_before() {
                if self.stages[..position].iter().any(|s| s.name() == later.as_str()) {
                    return Err(PipelineError::OrderViolation {
                        stage: stage.name().to_owned(),
                        must_precede: later.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Run all stages over `root` in order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::OrderViolation`] if the stage order is
    /// invalid; the tree is not touched in that case.
    pub fn run(&self, root: &mut Root) -> Result<Vec<TransformReport>, PipelineError> {
        self.validate()?;

        let reports = self
            .stages
            .iter()
            .map(|stage| {
                let rewritten = stage.apply(root);
                tracing::info!(stage = stage.name(), rewritten, "Pipeline stage complete");
                TransformReport {
                    stage: stage.name().to_owned(),
                    rewritten,
                }
            })
            .collect();

        Ok(reports)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use prewrap_tree::{Element, Node};

    use super::*;
    use crate::target::TargetBlock;
    use crate::wrapper::{CodeBlockWrapper, DIAGRAM_RENDERER_STAGE, STAGE_NAME};

    /// Stand-in for the diagram renderer: replaces `pre > code.language-mermaid`
    /// with an `svg` element, anywhere in the tree.
    struct FakeDiagramRenderer;

    impl FakeDiagramRenderer {
        fn render(children: &mut [Node]) -> usize {
            let target = TargetBlock::default();
            let mut rendered = 0;
            for child in children {
                let Node::Element(element) = child else {
                    continue;
                };
                if target.matches(element) {
                    let source = element.text_content();
                    *element = Element::new("svg").with_child(Node::text(source));
                    rendered += 1;
                } else {
                    rendered += Self::render(&mut element.children);
                }
            }
            rendered
        }
    }

    impl TreeTransform for FakeDiagramRenderer {
        fn name(&self) -> &str {
            DIAGRAM_RENDERER_STAGE
        }

        fn apply(&self, root: &mut Root) -> usize {
            Self::render(&mut root.children)
        }
    }

    fn mermaid_doc() -> Root {
        Root::new(vec![
            Element::new("pre")
                .with_child(
                    Element::new("code")
                        .with_class("language-mermaid")
                        .with_child(Node::text("A-->B")),
                )
                .into(),
        ])
    }

    #[test]
    fn test_wrapper_then_renderer() {
        let pipeline = Pipeline::new()
            .with_stage(CodeBlockWrapper::default())
            .unwrap()
            .with_stage(FakeDiagramRenderer)
            .unwrap();
        let mut root = mermaid_doc();

        let reports = pipeline.run(&mut root).unwrap();

        assert_eq!(
            reports,
            vec![
                TransformReport {
                    stage: STAGE_NAME.to_owned(),
                    rewritten: 1,
                },
                TransformReport {
                    stage: DIAGRAM_RENDERER_STAGE.to_owned(),
                    rewritten: 1,
                },
            ]
        );

        let wrapper = root.children[0].as_element().unwrap();
        assert!(TargetBlock::default().is_wrapper(wrapper));
        assert_eq!(
            wrapper
                .properties
                .get("data-mermaid-code")
                .and_then(prewrap_tree::PropertyValue::as_str),
            Some("A-->B")
        );
        assert!(wrapper.children[0].is_element_named("svg"));
    }

    #[test]
    fn test_renderer_before_wrapper_is_rejected() {
        let pipeline = Pipeline::new()
            .with_stage(FakeDiagramRenderer)
            .unwrap()
            .with_stage(CodeBlockWrapper::default())
            .unwrap();
        let mut root = mermaid_doc();
        let before = root.clone();

        let err = pipeline.run(&mut root).unwrap_err();

        assert!(matches!(
            &err,
            PipelineError::OrderViolation { stage, must_precede }
                if stage == STAGE_NAME && must_precede == DIAGRAM_RENDERER_STAGE
        ));
        assert_eq!(root, before);
    }

    #[test]
    fn test_missing_downstream_stage_is_fine() {
        let pipeline = Pipeline::new().with_stage(CodeBlockWrapper::default()).unwrap();
        assert!(pipeline.validate().is_ok());

        let mut root = Root::default();
        let reports = pipeline.run(&mut root).unwrap();
        assert_eq!(reports[0].rewritten, 0);
    }

    #[test]
    fn test_duplicate_stage() {
        let mut pipeline = Pipeline::new();
        pipeline.push(CodeBlockWrapper::default()).unwrap();

        let err = pipeline.push(CodeBlockWrapper::default()).unwrap_err();

        assert!(matches!(err, PipelineError::DuplicateStage(name) if name == STAGE_NAME));
        assert_eq!(pipeline.len(), 1);
    }

    #[test]
    fn test_stage_names_and_debug() {
        let pipeline = Pipeline::new()
            .with_stage(CodeBlockWrapper::default())
            .unwrap()
            .with_stage(FakeDiagramRenderer)
            .unwrap();

        assert_eq!(pipeline.stage_names(), [STAGE_NAME, DIAGRAM_RENDERER_STAGE]);
        assert!(format!("{pipeline:?}").contains(STAGE_NAME));
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = Pipeline::new();
        let mut root = mermaid_doc();
        assert!(pipeline.is_empty());
        assert!(pipeline.run(&mut root).unwrap().is_empty());
        assert_eq!(root, mermaid_doc());
    }
}
