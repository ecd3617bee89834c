//! View resolution and lazy rendering.
//!
//! [`ViewsRenderer`] is the integration point: it composes a
//! [`ViewsConfig`], a [`ResourceLoader`], and a [`TemplateEngine`], and turns
//! a logical view name plus optional data into a [`Writable`] — a drive-once
//! producer that streams the rendered view into a caller-supplied writer.
//!
//! Nothing happens at [`render`](ViewsRenderer::render) time. Location
//! construction, context normalization, template loading, and output all
//! occur when the `Writable` is driven, so callers control when (and whether)
//! template I/O happens.
//!
//! # View locations
//!
//! A view name resolves to `folder/name.extension`:
//!
//! - `"home"` with the defaults → `views/home.html`
//! - `"admin/users"` → `views/admin/users.html`
//! - `"home.html"` → `views/home.html` (extension not doubled)
//!
//! Leading and doubled separators are normalized away, so the location is
//! deterministic for any (folder, view, extension) triple.

use std::io::Write;
use std::path::Path;

use crate::config::ViewsConfig;
use crate::context::ContextSource;
use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::{Result, ViewsError};
use crate::resource::{FsResourceLoader, ResourceLoader};

/// Separator between a view's base name and its extension.
pub const EXTENSION_SEPARATOR: char = '.';

/// Renders logical views through a template engine.
///
/// Every method takes `&self`; the renderer holds no mutable state, so it
/// can be shared across threads and concurrent renders cannot interfere.
///
/// # Example
///
/// ```rust,ignore
/// use minijinja_views::{ContextSource, ViewsConfig, ViewsRenderer};
///
/// // Resolves views under ./templates/views/*.html
/// let renderer = ViewsRenderer::new(ViewsConfig::default(), "./templates");
///
/// if renderer.exists("home") {
///     let mut out = Vec::new();
///     renderer.render("home", ContextSource::Empty).write_to(&mut out)?;
/// }
/// ```
pub struct ViewsRenderer {
    config: ViewsConfig,
    loader: Box<dyn ResourceLoader>,
    engine: Box<dyn TemplateEngine>,
}

impl ViewsRenderer {
    /// Creates a renderer with filesystem-backed collaborators.
    ///
    /// Both the resource loader and the template engine are anchored at
    /// `root`; resolved locations like `views/home.html` are looked up
    /// beneath it.
    pub fn new(config: ViewsConfig, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::with_parts(
            config,
            Box::new(FsResourceLoader::new(root)),
            Box::new(MiniJinjaEngine::with_root(root)),
        )
    }

    /// Creates a renderer from explicit collaborators.
    ///
    /// Use this to inject a custom [`ResourceLoader`] or [`TemplateEngine`],
    /// e.g. an engine pre-loaded with inline templates.
    pub fn with_parts(
        config: ViewsConfig,
        loader: Box<dyn ResourceLoader>,
        engine: Box<dyn TemplateEngine>,
    ) -> Self {
        Self {
            config,
            loader,
            engine,
        }
    }

    /// Returns the configuration this renderer resolves views with.
    pub fn config(&self) -> &ViewsConfig {
        &self.config
    }

    /// Prepares a lazy render of the named view with the given data.
    ///
    /// No work happens here: the view location is resolved and the template
    /// loaded only when the returned [`Writable`] is driven.
    pub fn render(&self, view: impl Into<String>, data: ContextSource) -> Writable<'_> {
        Writable {
            renderer: self,
            view: view.into(),
            data,
        }
    }

    /// Returns true if a template resource exists for the named view.
    ///
    /// Computes the view location and asks the resource loader. No template
    /// is loaded or compiled.
    pub fn exists(&self, view: &str) -> bool {
        self.loader.exists(&self.view_location(view))
    }

    /// Resolves a view name to its template location.
    pub fn view_location(&self, view: &str) -> String {
        let extension = &self.config.extension;
        format!(
            "{}{}{}{}",
            normalize_folder(&self.config.folder),
            normalize_file(view, extension),
            EXTENSION_SEPARATOR,
            extension
        )
    }
}

/// A pending render that writes its output when driven.
///
/// Produced by [`ViewsRenderer::render`]. Driving consumes the value, so a
/// render is executed at most once.
pub struct Writable<'a> {
    renderer: &'a ViewsRenderer,
    view: String,
    data: ContextSource,
}

impl Writable<'_> {
    /// Returns the logical view name this render targets.
    pub fn view(&self) -> &str {
        &self.view
    }

    /// Drives the render, writing output into `out`.
    ///
    /// Resolves the view location, normalizes the context, loads the
    /// template, and streams the rendered output.
    ///
    /// # Errors
    ///
    /// Engine execution failures surface as
    /// [`ViewsError::Rendering`] carrying the view name. A missing template
    /// propagates as [`ViewsError::NotFound`], and writer failures as
    /// [`ViewsError::Io`], both unwrapped. On error the writer may have
    /// received partial output.
    pub fn write_to<W: Write>(self, out: &mut W) -> Result<()> {
        let location = self.renderer.view_location(&self.view);
        let context = self.data.into_map()?;
        match self.renderer.engine.render_to(&location, &context, out) {
            Ok(()) => Ok(()),
            Err(ViewsError::Template(message)) => Err(ViewsError::Rendering {
                view: self.view,
                message,
            }),
            Err(other) => Err(other),
        }
    }

    /// Drives the render into an in-memory string.
    pub fn into_string(self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Normalizes a views folder into a location prefix.
///
/// Empty path segments are dropped and exactly one trailing `/` is
/// appended; an empty folder yields an empty prefix.
fn normalize_folder(folder: &str) -> String {
    let joined = folder
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        String::new()
    } else {
        format!("{}/", joined)
    }
}

/// Normalizes a view name for location construction.
///
/// Empty path segments are dropped (so leading and doubled `/` disappear)
/// and a pre-existing `.extension` suffix is stripped so the extension is
/// never doubled.
fn normalize_file(view: &str, extension: &str) -> String {
    let name = view
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    let suffix = format!("{}{}", EXTENSION_SEPARATOR, extension);
    match name.strip_suffix(&suffix) {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
