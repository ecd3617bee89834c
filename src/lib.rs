//! # minijinja-views — server-side view rendering
//!
//! `minijinja-views` turns a logical view name plus a data payload into a
//! lazily-rendered output stream. It sits between an application and the
//! MiniJinja template engine, owning the parts the engine doesn't:
//!
//! - [`ViewsConfig`]: which folder views live in and their file extension
//! - View-location construction: `"home"` → `views/home.html`, deterministic
//!   and separator-safe for any folder/name/extension combination
//! - [`ContextSource`]: normalizing absent data, explicit mappings, and
//!   serializable structs into the mapping templates receive
//! - [`Writable`]: a drive-once producer, so template I/O happens only when
//!   the caller streams the render into a writer
//! - Error classification: engine failures surface as
//!   [`ViewsError::Rendering`] carrying the view name, while a missing
//!   template propagates unwrapped as [`ViewsError::NotFound`]
//!
//! ## Quick Start
//!
//! Rendering views from a template directory:
//!
//! ```rust,ignore
//! use minijinja_views::{ContextSource, ViewsConfig, ViewsRenderer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Home { user: String }
//!
//! // Resolves "home" to ./templates/views/home.html
//! let renderer = ViewsRenderer::new(ViewsConfig::default(), "./templates");
//!
//! if renderer.exists("home") {
//!     let data = ContextSource::serialize(&Home { user: "alice".into() })?;
//!     let html = renderer.render("home", data).into_string()?;
//! }
//! ```
//!
//! ## Injecting collaborators
//!
//! The resource checker and template engine are trait seams, so both can be
//! replaced — here with an engine holding inline templates:
//!
//! ```rust
//! use minijinja_views::{
//!     ContextSource, FsResourceLoader, MiniJinjaEngine, TemplateEngine,
//!     ViewsConfig, ViewsRenderer,
//! };
//!
//! let mut engine = MiniJinjaEngine::new();
//! engine.add_template("views/hello.html", "Hello, {{ name }}!").unwrap();
//!
//! let renderer = ViewsRenderer::with_parts(
//!     ViewsConfig::default(),
//!     Box::new(FsResourceLoader::new(".")),
//!     Box::new(engine),
//! );
//!
//! let mut data = serde_json::Map::new();
//! data.insert("name".to_string(), serde_json::Value::String("World".into()));
//!
//! let output = renderer.render("hello", ContextSource::from(data)).into_string().unwrap();
//! assert_eq!(output, "Hello, World!");
//! ```
//!
//! ## Concurrency
//!
//! [`ViewsRenderer`] holds no mutable state; every call allocates its own
//! context and location, so a renderer can be shared across threads freely.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod renderer;
pub mod resource;

pub use config::{ViewsConfig, DEFAULT_EXTENSION, DEFAULT_FOLDER};
pub use context::ContextSource;
pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use error::{Result, ViewsError};
pub use renderer::{ViewsRenderer, Writable, EXTENSION_SEPARATOR};
pub use resource::{FsResourceLoader, ResourceLoader};
