//! viewgen-core - View controller scaffolding engine
//!
//! This crate provides:
//! - [`schema`] parsing of section/view schemas into [`Entry`] lists
//! - [`naming`] identifier derivation (prefix stripping, special names)
//! - [`resolve`] detection of existing files under either naming convention
//! - [`Materializer`] fail-closed file creation from templates
//! - [`emit`] `#define` and registration declarations
//! - [`scan`] discovery of entries from existing `.xib` files
//!
//! # Pipeline
//!
//! ```text
//! schema file ─→ [schema::parse] ─→ ParsedSchema { sections, views }
//!                                     ├─→ [Materializer] → <Name>.{xib,h,m}
//!                                     └─→ [emit::render_report] → stdout
//! ```
//!
//! # Example
//!
//! ```
//! use viewgen_core::{Config, Mode, emit, schema};
//!
//! let config = Config::default();
//! let parsed = schema::parse("Login:\n  LoginForm\n", "WM", Mode::Long, &config.naming);
//!
//! assert_eq!(parsed.sections[0].display_name, "WMLoginSectionViewController");
//! assert_eq!(parsed.views[0].constant_name, "VIEW_LOGINFORM");
//! assert!(emit::render_report(&parsed).contains("[factory registerView:VIEW_LOGINFORM];"));
//! ```

pub mod config;
pub mod emit;
pub mod entry;
pub mod error;
pub mod materialize;
pub mod naming;
pub mod resolve;
pub mod scan;
pub mod schema;
pub mod template;

pub use config::{Config, NamingPolicy, SuffixSet, TemplatePolicy};
pub use entry::{Entry, EntryKind, Mode};
pub use error::{ViewgenError, ViewgenResult};
pub use materialize::{FileOutcome, MaterializeSummary, Materializer};
pub use schema::{ParsedSchema, SchemaWarning};
pub use template::{RunContext, TemplateSource};
