//! Fluent dependency declarations.
//!
//! Build scripts describe dependencies with typed values ([`ModuleCoordinates`],
//! [`ProjectNotation`], `group:name:version` strings) instead of raw maps.
//! This crate turns those into notation maps and forwards them to whatever
//! implements [`DependencyHandler`]; it resolves nothing itself.
//!
//! ```
//! use kts_deps::{Dependencies, ExcludeRule, ModuleCoordinates, ModuleDependency, RecordingHandler};
//!
//! let mut deps = Dependencies::new(RecordingHandler::default());
//! deps.compile_with(ModuleCoordinates::new("bar").group("org.gradle"), |dep| {
//!     dep.exclude(&ExcludeRule::module("foo"));
//! });
//! deps.runtime("org.gradle:baz:1.0-SNAPSHOT");
//!
//! let handler = deps.into_inner();
//! assert_eq!(handler.declarations().len(), 2);
//! assert_eq!(handler.declarations()[0].0, "compile");
//! ```

mod client_module;
mod dependencies;
mod handler;
mod notation;
mod recording;

pub use client_module::ClientModuleSpec;
pub use dependencies::{Configuration, Dependencies};
pub use handler::{DependencyHandler, ModuleDependency};
pub use notation::{
    ExcludeRule, ModuleCoordinates, Notation, NotationError, NotationMap, ProjectNotation,
};
pub use recording::{RecordedDependency, RecordingHandler};
