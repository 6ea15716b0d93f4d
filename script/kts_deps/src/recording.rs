//! In-memory handler that keeps declarations in order.

use crate::handler::{DependencyHandler, ModuleDependency};
use crate::notation::{ExcludeRule, Notation};

/// A dependency as declared, with everything configured on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedDependency {
    pub notation: Notation,
    pub client_module: bool,
    pub excludes: Vec<ExcludeRule>,
    pub transitive: bool,
    pub force: bool,
    pub changing: bool,
    pub children: Vec<RecordedDependency>,
}

impl RecordedDependency {
    pub fn new(notation: impl Into<Notation>) -> Self {
        Self {
            notation: notation.into(),
            client_module: false,
            excludes: Vec::new(),
            transitive: true,
            force: false,
            changing: false,
            children: Vec::new(),
        }
    }

    pub fn client_module(notation: impl Into<Notation>) -> Self {
        Self {
            client_module: true,
            ..Self::new(notation)
        }
    }
}

impl ModuleDependency for RecordedDependency {
    fn exclude(&mut self, rule: &ExcludeRule) -> &mut Self {
        self.excludes.push(rule.clone());
        self
    }

    fn set_transitive(&mut self, transitive: bool) {
        self.transitive = transitive;
    }

    fn set_force(&mut self, force: bool) {
        self.force = force;
    }

    fn set_changing(&mut self, changing: bool) {
        self.changing = changing;
    }

    fn add_dependency(&mut self, dependency: Self) {
        self.children.push(dependency);
    }
}

/// Records `(configuration, dependency)` pairs in declaration order.
#[derive(Clone, Debug, Default)]
pub struct RecordingHandler {
    declarations: Vec<(String, RecordedDependency)>,
}

impl RecordingHandler {
    pub fn declarations(&self) -> &[(String, RecordedDependency)] {
        &self.declarations
    }

    /// Dependencies added to one configuration.
    pub fn configuration<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a RecordedDependency> + 'a {
        self.declarations
            .iter()
            .filter(move |(configuration, _)| configuration == name)
            .map(|(_, dependency)| dependency)
    }
}

impl DependencyHandler for RecordingHandler {
    type Dependency = RecordedDependency;

    fn create(&mut self, notation: &Notation) -> RecordedDependency {
        RecordedDependency::new(notation.clone())
    }

    fn module(&mut self, notation: &Notation) -> RecordedDependency {
        RecordedDependency::client_module(notation.clone())
    }

    fn add(&mut self, configuration: &str, dependency: RecordedDependency) {
        self.declarations.push((configuration.to_owned(), dependency));
    }
}
