//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait, the seam between view
//! resolution and the actual template backend. The default implementation is
//! [`MiniJinjaEngine`], which loads templates from a directory and streams
//! rendered output into a writer.

use std::io;
use std::path::Path;

use minijinja::{path_loader, Environment, Value};
use serde_json::Map;

use crate::error::Result;

/// A template engine that can stream a named template with a context.
///
/// Engines own template loading, compilation, and caching. The renderer only
/// hands them a resolved location (e.g. `"views/home.html"`), a normalized
/// context mapping, and a destination writer.
pub trait TemplateEngine: Send + Sync {
    /// Renders the named template with the given context into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewsError::NotFound`](crate::ViewsError::NotFound) if no
    /// template exists at `name`, [`ViewsError::Template`](crate::ViewsError::Template)
    /// for syntax or execution failures, and [`ViewsError::Io`](crate::ViewsError::Io)
    /// if the writer fails.
    fn render_to(
        &self,
        name: &str,
        context: &Map<String, serde_json::Value>,
        out: &mut dyn io::Write,
    ) -> Result<()>;

    /// Returns true if the engine can load a template at `name`.
    fn has_template(&self, name: &str) -> bool;

    /// Registers an inline template under the given name.
    ///
    /// Inline templates are compiled immediately; syntax errors surface here
    /// rather than at render time.
    fn add_template(&mut self, name: &str, source: &str) -> Result<()>;
}

/// MiniJinja-based template engine.
///
/// Loads templates from a root directory via `minijinja`'s path loader, so a
/// resolved location like `"views/home.html"` maps onto
/// `<root>/views/home.html`. Inline templates can also be registered for
/// embedded or test use.
///
/// # Example
///
/// ```rust
/// use minijinja_views::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::{Map, Value};
///
/// let mut engine = MiniJinjaEngine::new();
/// engine.add_template("greeting", "Hello, {{ name }}!").unwrap();
///
/// let mut context = Map::new();
/// context.insert("name".to_string(), Value::String("World".into()));
///
/// let mut out = Vec::new();
/// engine.render_to("greeting", &context, &mut out).unwrap();
/// assert_eq!(out, b"Hello, World!");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates an engine with no template source configured.
    ///
    /// Only inline templates added via [`add_template`](TemplateEngine::add_template)
    /// will resolve.
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Creates an engine that loads templates from the given root directory.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(root.as_ref()));
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// Use this to register custom filters, functions, or globals before
    /// handing the engine to a renderer.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_to(
        &self,
        name: &str,
        context: &Map<String, serde_json::Value>,
        out: &mut dyn io::Write,
    ) -> Result<()> {
        let template = self.env.get_template(name)?;
        template.render_to_write(Value::from_serialize(context), out)?;
        Ok(())
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViewsError;
    use serde_json::json;
    use std::io::Write;
    use tempfile::TempDir;

    fn context(entries: &[(&str, serde_json::Value)]) -> Map<String, serde_json::Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn render_inline_template() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("hi", "Hello, {{ name }}!").unwrap();

        let mut out = Vec::new();
        engine
            .render_to("hi", &context(&[("name", json!("World"))]), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, World!");
    }

    #[test]
    fn render_with_control_flow() {
        let mut engine = MiniJinjaEngine::new();
        engine
            .add_template("list", "{% for item in items %}{{ item }},{% endfor %}")
            .unwrap();

        let mut out = Vec::new();
        engine
            .render_to(
                "list",
                &context(&[("items", json!(["a", "b", "c"]))]),
                &mut out,
            )
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,b,c,");
    }

    #[test]
    fn missing_template_is_not_found() {
        let engine = MiniJinjaEngine::new();
        let mut out = Vec::new();
        let err = engine
            .render_to("absent", &Map::new(), &mut out)
            .unwrap_err();
        assert!(matches!(err, ViewsError::NotFound(_)));
    }

    #[test]
    fn malformed_inline_template_fails_at_add() {
        let mut engine = MiniJinjaEngine::new();
        let err = engine.add_template("bad", "{{ unterminated").unwrap_err();
        assert!(matches!(err, ViewsError::Template(_)));
    }

    #[test]
    fn has_template() {
        let mut engine = MiniJinjaEngine::new();
        engine.add_template("present", "x").unwrap();

        assert!(engine.has_template("present"));
        assert!(!engine.has_template("absent"));
    }

    #[test]
    fn with_root_loads_from_disk() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("views")).unwrap();
        let mut file = std::fs::File::create(dir.path().join("views/home.html")).unwrap();
        file.write_all(b"Welcome {{ user }}").unwrap();

        let engine = MiniJinjaEngine::with_root(dir.path());
        let mut out = Vec::new();
        engine
            .render_to(
                "views/home.html",
                &context(&[("user", json!("alice"))]),
                &mut out,
            )
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Welcome alice");
    }

    #[test]
    fn with_root_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let engine = MiniJinjaEngine::with_root(dir.path());

        let mut out = Vec::new();
        let err = engine
            .render_to("views/ghost.html", &Map::new(), &mut out)
            .unwrap_err();
        assert!(matches!(err, ViewsError::NotFound(_)));
    }

    #[test]
    fn environment_mut_allows_custom_filters() {
        let mut engine = MiniJinjaEngine::new();
        engine
            .environment_mut()
            .add_filter("shout", |value: String| value.to_uppercase());
        engine.add_template("t", "{{ word | shout }}").unwrap();

        let mut out = Vec::new();
        engine
            .render_to("t", &context(&[("word", json!("hi"))]), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "HI");
    }
}
