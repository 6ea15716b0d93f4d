//! Dependency notations: what a declaration refers to.
//!
//! Each notation renders to a [`NotationMap`], the string-keyed form the
//! underlying dependency API accepts. Absent optional fields are left out of
//! the map rather than mapped to empty strings.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// String-keyed notation map (`"group" => "org.gradle"`, ...).
pub type NotationMap = BTreeMap<&'static str, String>;

/// Error parsing a `group:name:version` coordinate string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("dependency notation `{notation}` must have 2 to 4 `:`-separated parts, found {parts}")]
    PartCount { notation: String, parts: usize },
    #[error("dependency notation `{notation}` has an empty {field}")]
    EmptyField {
        notation: String,
        field: &'static str,
    },
}

/// External module coordinates.
///
/// Only `name` is required. Builder methods set the optional parts:
///
/// ```
/// use kts_deps::ModuleCoordinates;
///
/// let junit = ModuleCoordinates::new("junit").group("junit").version("4.12");
/// assert_eq!(junit.to_string(), "junit:junit:4.12");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModuleCoordinates {
    pub group: Option<String>,
    pub name: String,
    pub version: Option<String>,
    pub configuration: Option<String>,
    pub classifier: Option<String>,
    pub ext: Option<String>,
}

impl ModuleCoordinates {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Target configuration inside the module (not the declaring one).
    #[must_use]
    pub fn configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    #[must_use]
    pub fn classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Artifact extension, e.g. `jar`.
    #[must_use]
    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }

    /// Keys: `group`, `name`, `version`, `configuration`, `classifier`, `ext`.
    pub fn to_map(&self) -> NotationMap {
        let mut map = NotationMap::new();
        map.insert("name", self.name.clone());
        let optional = [
            ("group", &self.group),
            ("version", &self.version),
            ("configuration", &self.configuration),
            ("classifier", &self.classifier),
            ("ext", &self.ext),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                map.insert(key, value.clone());
            }
        }
        map
    }
}

/// Parses `group:name[:version[:classifier]][@ext]`. An empty group
/// (`:name:1.0`) is allowed; an empty name is not.
impl FromStr for ModuleCoordinates {
    type Err = NotationError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let (coordinates, ext) = match notation.rsplit_once('@') {
            Some((coordinates, ext)) => (coordinates, Some(ext)),
            None => (notation, None),
        };
        let parts: Vec<&str> = coordinates.split(':').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(NotationError::PartCount {
                notation: notation.to_owned(),
                parts: parts.len(),
            });
        }
        let non_empty = |value: &str, field: &'static str| {
            if value.is_empty() {
                Err(NotationError::EmptyField {
                    notation: notation.to_owned(),
                    field,
                })
            } else {
                Ok(value.to_owned())
            }
        };

        let mut module = ModuleCoordinates::new(non_empty(parts[1], "name")?);
        if !parts[0].is_empty() {
            module.group = Some(parts[0].to_owned());
        }
        if let Some(version) = parts.get(2) {
            module.version = Some(non_empty(version, "version")?);
        }
        if let Some(classifier) = parts.get(3) {
            module.classifier = Some(non_empty(classifier, "classifier")?);
        }
        if let Some(ext) = ext {
            module.ext = Some(non_empty(ext, "extension")?);
        }
        Ok(module)
    }
}

/// Renders the string notation; `configuration` has no string form and is
/// left out.
impl fmt::Display for ModuleCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group.as_deref().unwrap_or(""), self.name)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
            if let Some(classifier) = &self.classifier {
                write!(f, ":{classifier}")?;
            }
        }
        if let Some(ext) = &self.ext {
            write!(f, "@{ext}")?;
        }
        Ok(())
    }
}

/// Another project of the same build, by path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectNotation {
    pub path: String,
    pub configuration: Option<String>,
}

impl ProjectNotation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            configuration: None,
        }
    }

    #[must_use]
    pub fn configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    /// Keys: `path`, `configuration`.
    pub fn to_map(&self) -> NotationMap {
        let mut map = NotationMap::new();
        map.insert("path", self.path.clone());
        if let Some(configuration) = &self.configuration {
            map.insert("configuration", configuration.clone());
        }
        map
    }
}

/// Transitive dependency exclusion by group and/or module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExcludeRule {
    pub group: Option<String>,
    pub module: Option<String>,
}

impl ExcludeRule {
    pub fn group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            module: None,
        }
    }

    pub fn module(module: impl Into<String>) -> Self {
        Self {
            group: None,
            module: Some(module.into()),
        }
    }

    pub fn group_and_module(group: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            module: Some(module.into()),
        }
    }

    /// Keys: `group`, `module`.
    pub fn to_map(&self) -> NotationMap {
        let mut map = NotationMap::new();
        if let Some(group) = &self.group {
            map.insert("group", group.clone());
        }
        if let Some(module) = &self.module {
            map.insert("module", module.clone());
        }
        map
    }
}

/// Anything a dependency can be declared from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `group:name:version` string, forwarded verbatim.
    Coordinates(String),
    Module(ModuleCoordinates),
    Project(ProjectNotation),
}

impl Notation {
    /// Map form, when the notation has one. Coordinate strings are passed
    /// through as-is and have none.
    pub fn to_map(&self) -> Option<NotationMap> {
        match self {
            Notation::Coordinates(_) => None,
            Notation::Module(module) => Some(module.to_map()),
            Notation::Project(project) => Some(project.to_map()),
        }
    }
}

impl From<&str> for Notation {
    fn from(coordinates: &str) -> Self {
        Notation::Coordinates(coordinates.to_owned())
    }
}

impl From<String> for Notation {
    fn from(coordinates: String) -> Self {
        Notation::Coordinates(coordinates)
    }
}

impl From<ModuleCoordinates> for Notation {
    fn from(module: ModuleCoordinates) -> Self {
        Notation::Module(module)
    }
}

impl From<ProjectNotation> for Notation {
    fn from(project: ProjectNotation) -> Self {
        Notation::Project(project)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Coordinates(coordinates) => f.write_str(coordinates),
            Notation::Module(module) => write!(f, "{module}"),
            Notation::Project(project) => write!(f, "project({:?})", project.path),
        }
    }
}
