//! Configuration-named declarations over a [`DependencyHandler`].

use std::fmt;

use crate::client_module::{build_module, ClientModuleSpec};
use crate::handler::DependencyHandler;
use crate::notation::Notation;

/// A named configuration (`compile`, `runtime`, ...), usable anywhere a
/// configuration name is.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Configuration {
    name: String,
}

impl Configuration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AsRef<str> for Configuration {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Fluent declaration front end.
///
/// Every declaration creates the dependency through the handler, runs the
/// caller's configuration on it, then adds it to the configuration, in that
/// order.
#[derive(Debug, Default)]
pub struct Dependencies<H> {
    handler: H,
}

/// Generates `name(notation)`, `name_with(notation, configure)` and
/// `name_dependency(dependency)` for the common configurations.
macro_rules! configuration_shorthands {
    ($($method:ident, $method_with:ident, $method_dependency:ident => $configuration:literal;)*) => {
        $(
            #[doc = concat!("Declares a `", $configuration, "` dependency.")]
            pub fn $method(&mut self, notation: impl Into<Notation>) {
                self.add($configuration, notation);
            }

            #[doc = concat!("Declares and configures a `", $configuration, "` dependency.")]
            pub fn $method_with<F>(&mut self, notation: impl Into<Notation>, configure: F)
            where
                F: FnOnce(&mut H::Dependency),
            {
                self.add_with($configuration, notation, configure);
            }

            #[doc = concat!("Adds a built dependency, such as a client module, to `", $configuration, "`.")]
            pub fn $method_dependency(&mut self, dependency: H::Dependency) {
                self.add_dependency($configuration, dependency);
            }
        )*
    };
}

impl<H: DependencyHandler> Dependencies<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_inner(self) -> H {
        self.handler
    }

    /// Creates without adding. Project notations go through
    /// [`DependencyHandler::project`].
    pub fn create(&mut self, notation: impl Into<Notation>) -> H::Dependency {
        match notation.into() {
            Notation::Project(project) => self.handler.project(&project),
            notation => self.handler.create(&notation),
        }
    }

    pub fn add(&mut self, configuration: impl AsRef<str>, notation: impl Into<Notation>) {
        self.add_with(configuration, notation, |_| {});
    }

    #[tracing::instrument(level = "trace", skip_all, fields(configuration = configuration.as_ref()))]
    pub fn add_with<F>(
        &mut self,
        configuration: impl AsRef<str>,
        notation: impl Into<Notation>,
        configure: F,
    ) where
        F: FnOnce(&mut H::Dependency),
    {
        let notation = notation.into();
        tracing::debug!(%notation, "declaring dependency");
        let mut dependency = self.create(notation);
        configure(&mut dependency);
        self.handler.add(configuration.as_ref(), dependency);
    }

    /// Adds an already built dependency, typically a client module from
    /// [`Dependencies::module`].
    pub fn add_dependency(&mut self, configuration: impl AsRef<str>, dependency: H::Dependency) {
        tracing::debug!(configuration = configuration.as_ref(), "adding built dependency");
        self.handler.add(configuration.as_ref(), dependency);
    }

    /// Builds a client module. The result is not added anywhere yet.
    pub fn module<F>(&mut self, notation: impl Into<Notation>, configure: F) -> H::Dependency
    where
        F: FnOnce(&mut ClientModuleSpec<'_, H>),
    {
        build_module(&mut self.handler, &notation.into(), configure)
    }

    configuration_shorthands! {
        default_, default_with, default_dependency => "default";
        compile, compile_with, compile_dependency => "compile";
        runtime, runtime_with, runtime_dependency => "runtime";
        test_compile, test_compile_with, test_compile_dependency => "testCompile";
        test_runtime, test_runtime_with, test_runtime_dependency => "testRuntime";
    }
}
