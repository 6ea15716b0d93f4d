//! The seam between declarations and whatever resolves them.

use crate::notation::{ExcludeRule, Notation, ProjectNotation};

/// A created dependency that declarations can still configure before it is
/// added to a configuration.
pub trait ModuleDependency: Sized {
    /// Excludes transitive dependencies matching `rule`.
    fn exclude(&mut self, rule: &ExcludeRule) -> &mut Self;

    fn set_transitive(&mut self, transitive: bool);

    fn set_force(&mut self, force: bool);

    fn set_changing(&mut self, changing: bool);

    /// Attaches an explicit child. Only meaningful on client modules.
    fn add_dependency(&mut self, dependency: Self);
}

/// Creates dependencies from notations and adds them to named
/// configurations.
pub trait DependencyHandler {
    type Dependency: ModuleDependency;

    fn create(&mut self, notation: &Notation) -> Self::Dependency;

    /// Dependency on another project of the build.
    fn project(&mut self, project: &ProjectNotation) -> Self::Dependency {
        self.create(&Notation::Project(project.clone()))
    }

    /// Client module: a module whose children are declared explicitly.
    fn module(&mut self, notation: &Notation) -> Self::Dependency;

    fn add(&mut self, configuration: &str, dependency: Self::Dependency);
}
