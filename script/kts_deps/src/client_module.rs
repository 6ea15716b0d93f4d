//! Nested client module declarations.

use crate::handler::{DependencyHandler, ModuleDependency};
use crate::notation::{ExcludeRule, Notation};

/// Builder passed to a client module's configuration closure.
///
/// Children declared here are created through the same handler and attached
/// to the module being built.
pub struct ClientModuleSpec<'h, H: DependencyHandler> {
    handler: &'h mut H,
    module: H::Dependency,
}

pub(crate) fn build_module<H, F>(handler: &mut H, notation: &Notation, configure: F) -> H::Dependency
where
    H: DependencyHandler,
    F: FnOnce(&mut ClientModuleSpec<'_, H>),
{
    tracing::debug!(%notation, "building client module");
    let module = handler.module(notation);
    let mut spec = ClientModuleSpec { handler, module };
    configure(&mut spec);
    spec.module
}

impl<H: DependencyHandler> ClientModuleSpec<'_, H> {
    /// Configures the module itself.
    pub fn transitive(&mut self, transitive: bool) -> &mut Self {
        self.module.set_transitive(transitive);
        self
    }

    pub fn force(&mut self, force: bool) -> &mut Self {
        self.module.set_force(force);
        self
    }

    pub fn exclude(&mut self, rule: &ExcludeRule) -> &mut Self {
        self.module.exclude(rule);
        self
    }

    /// Creates a child dependency, configures it, and attaches it.
    pub fn dependency<F>(&mut self, notation: impl Into<Notation>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut H::Dependency),
    {
        let mut dependency = self.handler.create(&notation.into());
        configure(&mut dependency);
        self.module.add_dependency(dependency);
        self
    }

    /// Attaches unconfigured children in order.
    pub fn dependencies<I>(&mut self, notations: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Notation>,
    {
        for notation in notations {
            self.dependency(notation, |_| {});
        }
        self
    }

    /// Builds a nested client module and attaches it.
    pub fn module<F>(&mut self, notation: impl Into<Notation>, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ClientModuleSpec<'_, H>),
    {
        let nested = build_module(&mut *self.handler, &notation.into(), configure);
        self.module.add_dependency(nested);
        self
    }
}
