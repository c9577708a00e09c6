//! `prewrap wrap` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use prewrap_config::{CliSettings, Config};
use prewrap_transform::Pipeline;
use prewrap_tree::Root;

use super::wrapper_from_config;
use crate::error::CliError;
use crate::io::{read_input, write_output};
use crate::output::Output;

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// HAST JSON.
    Json,
    /// Serialized HTML.
    Html,
}

/// Arguments for the wrap command.
#[derive(Args)]
pub(crate) struct WrapArgs {
    /// HAST JSON document to read (default: stdin).
    input: Option<PathBuf>,

    /// File to write (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Indent JSON output.
    #[arg(long)]
    pretty: bool,

    /// Diagram language to wrap (overrides config).
    #[arg(short, long, env = "PREWRAP_LANGUAGE")]
    language: Option<String>,

    /// Marker class of wrapper elements (overrides config).
    #[arg(long)]
    wrapper_class: Option<String>,

    /// Path to configuration file (default: auto-discover prewrap.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (show per-stage logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl WrapArgs {
    /// Execute the wrap command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input decoding, the pipeline, or
    /// writing the output fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            language: self.language,
            wrapper_class: self.wrapper_class,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let pipeline = Pipeline::new().with_stage(wrapper_from_config(&config))?;

        let mut root = Root::from_json(&read_input(self.input.as_deref())?)?;
        let reports = pipeline.run(&mut root)?;
        let wrapped: usize = reports.iter().map(|r| r.rewritten).sum();

        let rendered = render_document(&root, self.format, self.pretty)?;
        write_output(self.output.as_deref(), &rendered)?;

        output.wrapped(wrapped, &config.target.language_class());
        Ok(())
    }
}

/// Serialize the transformed document in the requested format.
fn render_document(root: &Root, format: Format, pretty: bool) -> Result<String, CliError> {
    let rendered = match format {
        Format::Json if pretty => root.to_json_pretty()?,
        Format::Json => root.to_json()?,
        Format::Html => prewrap_tree::to_html(root),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use clap::Parser;
    use pretty_assertions::assert_eq;
    use prewrap_config::ConfigError;
    use prewrap_tree::{Element, Node, TreeError};

    use super::*;

    const DOC: &str = r#"{"type":"root","children":[
        {"type":"element","tagName":"pre","children":[
            {"type":"element","tagName":"code","properties":{"className":["language-mermaid"]},
             "children":[{"type":"text","value":"A-->B"}]}]},
        {"type":"element","tagName":"pre","children":[
            {"type":"element","tagName":"code","properties":{"className":["language-plantuml"]},
             "children":[{"type":"text","value":"@startuml"}]}]}
    ]}"#;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: WrapArgs,
    }

    fn parse(args: &[&str]) -> WrapArgs {
        TestCli::try_parse_from(std::iter::once("wrap").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    fn write_file(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_owned()
    }

    fn wrapped_doc() -> Root {
        let mut root = Root::new(vec![
            Element::new("pre")
                .with_child(
                    Element::new("code")
                        .with_class("language-mermaid")
                        .with_child(Node::text("A-->B")),
                )
                .into(),
        ]);
        wrapper_from_config(&Config::default()).wrap(&mut root);
        root
    }

    #[test]
    fn test_render_html() {
        let html = render_document(&wrapped_doc(), Format::Html, false).unwrap();
        assert_eq!(
            html,
            r#"<div class="mermaid-wrapper" data-mermaid-code="A--&gt;B"><pre><code class="language-mermaid">A--&gt;B</code></pre></div>"#
        );
    }

    #[test]
    fn test_render_json_decodes_back() {
        let root = wrapped_doc();
        let compact = render_document(&root, Format::Json, false).unwrap();
        let pretty = render_document(&root, Format::Json, true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(Root::from_json(&compact).unwrap(), root);
        assert_eq!(Root::from_json(&pretty).unwrap(), root);
    }

    #[test]
    fn test_execute_file_to_html_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(dir.path(), "doc.json", DOC);
        let config = write_file(dir.path(), "prewrap.toml", "[wrapper]\nclass = \"diagram\"\n");
        let out = dir.path().join("site/doc.html");

        parse(&[
            "-c",
            config.as_str(),
            "-o",
            out.to_str().unwrap(),
            "--format",
            "html",
            input.as_str(),
        ])
            .execute()
            .unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "<div class=\"diagram\" data-mermaid-code=\"A--&gt;B\">\
             <pre><code class=\"language-mermaid\">A--&gt;B</code></pre></div>\
             <pre><code class=\"language-plantuml\">@startuml</code></pre>\n"
        );
    }

    #[test]
    fn test_execute_language_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(dir.path(), "doc.json", DOC);
        let config = write_file(dir.path(), "prewrap.toml", "[target]\nlanguage = \"mermaid\"\n");
        let out = dir.path().join("doc.out.json");

        parse(&[
            "-c",
            config.as_str(),
            "--language",
            "plantuml",
            "-o",
            out.to_str().unwrap(),
            input.as_str(),
        ])
            .execute()
            .unwrap();

        let root = Root::from_json(&fs::read_to_string(&out).unwrap()).unwrap();
        assert!(root.children[0].is_element_named("pre"));
        let wrapper = root.children[1].as_element().unwrap();
        assert_eq!(wrapper.tag_name, "div");
        assert_eq!(
            wrapper
                .properties
                .get("data-mermaid-code")
                .and_then(prewrap_tree::PropertyValue::as_str),
            Some("@startuml")
        );
    }

    #[test]
    fn test_execute_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(dir.path(), "doc.json", DOC);
        let missing = dir.path().join("absent.toml");

        let err = parse(&["-c", missing.to_str().unwrap(), input.as_str()])
            .execute()
            .unwrap_err();

        assert!(matches!(err, CliError::Config(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_execute_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_file(dir.path(), "prewrap.toml", "");
        let out = dir.path().join("never.json");

        let garbage = write_file(dir.path(), "garbage.json", "not json");
        let err = parse(&["-c", config.as_str(), "-o", out.to_str().unwrap(), garbage.as_str()])
            .execute()
            .unwrap_err();
        assert!(matches!(err, CliError::Tree(TreeError::Json(_))));

        let text = write_file(dir.path(), "text.json", r#"{"type":"text","value":"x"}"#);
        let err = parse(&["-c", config.as_str(), "-o", out.to_str().unwrap(), text.as_str()])
            .execute()
            .unwrap_err();
        assert!(matches!(err, CliError::Tree(TreeError::NotRoot { kind: "text" })));
        assert!(!out.exists());
    }
}
