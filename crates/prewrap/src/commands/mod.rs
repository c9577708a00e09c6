//! CLI command implementations.

pub(crate) mod scan;
pub(crate) mod wrap;

use prewrap_config::Config;
use prewrap_transform::{CodeBlockWrapper, TargetBlock};

pub(crate) use scan::ScanArgs;
pub(crate) use wrap::WrapArgs;

/// Build the wrapper stage described by `config`.
pub(crate) fn wrapper_from_config(config: &Config) -> CodeBlockWrapper {
    let target = TargetBlock::for_language(&config.target.language)
        .with_tags(&config.target.block_tag, &config.target.code_tag)
        .with_wrapper_tag(&config.wrapper.tag)
        .with_marker_class(&config.wrapper.class)
        .with_raw_code_attribute(&config.wrapper.raw_code_attribute);

    CodeBlockWrapper::new(target).with_runs_before(config.pipeline.downstream.clone())
}
