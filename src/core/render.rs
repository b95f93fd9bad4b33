//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw

use crate::core::model::{Kind, ResultItem, ResultSet};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Raw => self.render_raw(result_set),
        }
    }

    /// Render to a writer, followed by a newline when there is any output
    pub fn render_to<W: Write>(
        &self,
        result_set: &ResultSet,
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(result_set);
        if output.is_empty() {
            return Ok(());
        }
        writer.write_all(output.as_bytes())?;
        writer.write_all(b"\n")
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let sections = [
            (Kind::Error, "Errors"),
            (Kind::Dir, "Directories"),
            (Kind::File, "Stubs"),
            (Kind::Link, "Links"),
            (Kind::Env, "Environment"),
            (Kind::Fqrn, "Role Names"),
        ];

        for (kind, title) in sections {
            let items: Vec<_> = result_set.items.iter().filter(|i| i.kind == kind).collect();
            if items.is_empty() {
                continue;
            }
            output.push_str(&format!("## {}\n\n", title));
            for item in items {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }

        output
    }

    fn render_item_md(&self, output: &mut String, item: &ResultItem) {
        match item.kind {
            Kind::Error => {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}\n", error.code, error.message));
                }
            }
            Kind::Env => {
                output.push_str(&format!(
                    "- `{}={}`\n",
                    item.source.as_deref().unwrap_or_default(),
                    item.excerpt.as_deref().unwrap_or_default()
                ));
            }
            Kind::Fqrn => {
                output.push_str(&format!(
                    "- `{}`\n",
                    item.excerpt.as_deref().unwrap_or_default()
                ));
            }
            Kind::Dir | Kind::File | Kind::Link => {
                if let Some(path) = &item.path {
                    output.push_str(&format!("- `{}`", path));
                    if let Some(target) = &item.target {
                        output.push_str(&format!(" -> `{}`", target));
                    }
                    if let Some(source) = &item.source {
                        output.push_str(&format!(" for `{}`", source));
                    }
                    if let Some(size) = item.meta.size {
                        output.push_str(&format!(" ({} bytes)", size));
                    }
                    output.push('\n');
                }
            }
        }
    }

    /// Render as raw output, one plain line per item
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| match item.kind {
                Kind::Env => Some(format!(
                    "{}={}",
                    item.source.as_deref().unwrap_or_default(),
                    item.excerpt.as_deref().unwrap_or_default()
                )),
                Kind::Fqrn => item.excerpt.clone(),
                Kind::Link => item
                    .path
                    .as_ref()
                    .map(|p| format!("{} -> {}", p, item.target.as_deref().unwrap_or_default())),
                Kind::Dir | Kind::File => item.path.clone(),
                Kind::Error => item.errors.first().map(|e| e.message.clone()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ItemError, ResultItem};

    fn renderer(format: OutputFormat) -> Renderer {
        Renderer::with_config(RenderConfig::with_pretty(format, false))
    }

    #[test]
    fn test_render_jsonl() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::file("/cache/modules/foo.py"));
        result_set.push(ResultItem::dir("/cache/roles/web"));

        let renderer = renderer(OutputFormat::Jsonl);
        let output = renderer.render(&result_set);

        assert!(output.contains("/cache/modules/foo.py"));
        assert!(output.contains("/cache/roles/web"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_render_json() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::file("/cache/modules/foo.py"));

        let renderer = renderer(OutputFormat::Json);
        let output = renderer.render(&result_set);

        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "invalid".parse::<OutputFormat>();
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_render_jsonl_pretty() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::file("/cache/modules/foo.py"));

        let config = RenderConfig::with_pretty(OutputFormat::Jsonl, true);
        let output = Renderer::with_config(config).render(&result_set);

        assert!(output.contains("\n  "));
    }

    #[test]
    fn test_render_markdown_empty() {
        let renderer = renderer(OutputFormat::Markdown);
        assert!(renderer.render(&ResultSet::new()).is_empty());
    }

    #[test]
    fn test_render_markdown_sections() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::link("/cache/c/ns/coll", "/project"));
        result_set.push(ResultItem::dir("/cache/roles/web").with_source("web"));
        result_set.push(ResultItem::error(ItemError::new("TEST_ERROR", "Test error message")));

        let output = renderer(OutputFormat::Markdown).render(&result_set);

        assert!(output.contains("## Errors"));
        assert!(output.contains("**TEST_ERROR**: Test error message"));
        assert!(output.contains("## Directories"));
        assert!(output.contains("`/cache/roles/web` for `web`"));
        assert!(output.contains("`/cache/c/ns/coll` -> `/project`"));
        // Errors come first
        assert!(output.find("## Errors").unwrap() < output.find("## Directories").unwrap());
    }

    #[test]
    fn test_render_raw() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::env("ANSIBLE_LIBRARY", "/cache/modules"));
        result_set.push(ResultItem::fqrn("acme.web"));
        result_set.push(ResultItem::link("/cache/l", "/p"));

        let output = renderer(OutputFormat::Raw).render(&result_set);

        assert_eq!(
            output,
            "ANSIBLE_LIBRARY=/cache/modules\nacme.web\n/cache/l -> /p"
        );
    }

    #[test]
    fn test_render_to_writer() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::fqrn("web"));

        let mut buffer = Vec::new();
        renderer(OutputFormat::Raw)
            .render_to(&result_set, &mut buffer)
            .unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "web\n");
    }

    #[test]
    fn test_render_to_writer_empty() {
        let mut buffer = Vec::new();
        renderer(OutputFormat::Jsonl)
            .render_to(&ResultSet::new(), &mut buffer)
            .unwrap();
        assert!(buffer.is_empty());
    }
}
