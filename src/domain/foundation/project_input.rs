//! Project input value objects.
//!
//! `RawProjectInput` is the loose wire shape handed over by the request layer.
//! `ProjectInput` is the parsed, typed form the engine works on; converting
//! between them is the only place an `InputShape` error can originate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SchemaError;

/// Kind of project being planned.
///
/// Unknown project types are preserved, normalized, in `Other` and fall
/// back to the generic API template downstream. `Other` can only be built
/// through [`ProjectType::parse`], so it never holds a known token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    Ecommerce,
    Saas,
    Mobile,
    Api,
    Dashboard,
    Enterprise,
    Other(CustomProjectType),
}

/// Normalized token of a project type with no dedicated template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomProjectType(String);

impl CustomProjectType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ProjectType {
    /// Parses a project type token, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim().to_lowercase();
        match token.as_str() {
            "ecommerce" => ProjectType::Ecommerce,
            "saas" => ProjectType::Saas,
            "mobile" => ProjectType::Mobile,
            "api" => ProjectType::Api,
            "dashboard" => ProjectType::Dashboard,
            "enterprise" => ProjectType::Enterprise,
            _ => ProjectType::Other(CustomProjectType(token)),
        }
    }

    /// Returns the lowercase token for this project type.
    pub fn as_str(&self) -> &str {
        match self {
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Saas => "saas",
            ProjectType::Mobile => "mobile",
            ProjectType::Api => "api",
            ProjectType::Dashboard => "dashboard",
            ProjectType::Enterprise => "enterprise",
            ProjectType::Other(custom) => custom.as_str(),
        }
    }

    /// Title-cases the token: every letter following a non-letter is
    /// upper-cased, the rest lower-cased (`unknown_type` → `Unknown_Type`).
    pub fn title(&self) -> String {
        let mut out = String::with_capacity(self.as_str().len());
        let mut boundary = true;
        for ch in self.as_str().chars() {
            if ch.is_alphabetic() {
                if boundary {
                    out.extend(ch.to_uppercase());
                } else {
                    out.extend(ch.to_lowercase());
                }
                boundary = false;
            } else {
                out.push(ch);
                boundary = true;
            }
        }
        out
    }
}

impl From<String> for ProjectType {
    fn from(raw: String) -> Self {
        ProjectType::parse(&raw)
    }
}

impl From<ProjectType> for String {
    fn from(project_type: ProjectType) -> Self {
        project_type.as_str().to_string()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expected audience / load size of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Small,
    Medium,
    Large,
}

impl Scale {
    /// Returns the lowercase token for this scale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scale::Small => "small",
            Scale::Medium => "medium",
            Scale::Large => "large",
        }
    }

    /// True when the project warrants a dedicated cache layer.
    pub fn needs_cache(&self) -> bool {
        matches!(self, Scale::Medium | Scale::Large)
    }
}

impl FromStr for Scale {
    type Err = SchemaError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "small" => Ok(Scale::Small),
            "medium" => Ok(Scale::Medium),
            "large" => Ok(Scale::Large),
            "" => Err(SchemaError::missing_field("scale")),
            other => Err(SchemaError::input_shape(
                "scale",
                format!("'{}' is not one of small, medium, large", other),
            )),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Untyped project attributes as received from the request layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProjectInput {
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scale: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_preference: Option<String>,
}

/// Typed project attributes consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProjectInput", into = "RawProjectInput")]
pub struct ProjectInput {
    pub project_type: ProjectType,
    pub description: String,
    pub scale: Scale,
    pub requirements: String,
    pub frontend_preference: Option<String>,
    pub backend_preference: Option<String>,
    pub database_preference: Option<String>,
}

impl ProjectInput {
    /// Creates an input with no description, requirements or preferences.
    pub fn new(project_type: ProjectType, scale: Scale) -> Self {
        Self {
            project_type,
            description: String::new(),
            scale,
            requirements: String::new(),
            frontend_preference: None,
            backend_preference: None,
            database_preference: None,
        }
    }

    /// Sets the free-form description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the free-text requirements.
    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }

    /// Sets the explicit frontend preference.
    pub fn with_frontend(mut self, preference: impl Into<String>) -> Self {
        self.frontend_preference = normalize_preference(Some(preference.into()));
        self
    }

    /// Sets the explicit backend preference.
    pub fn with_backend(mut self, preference: impl Into<String>) -> Self {
        self.backend_preference = normalize_preference(Some(preference.into()));
        self
    }

    /// Sets the explicit database preference.
    pub fn with_database(mut self, preference: impl Into<String>) -> Self {
        self.database_preference = normalize_preference(Some(preference.into()));
        self
    }
}

impl TryFrom<RawProjectInput> for ProjectInput {
    type Error = SchemaError;

    fn try_from(raw: RawProjectInput) -> Result<Self, Self::Error> {
        let project_type = raw
            .project_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ProjectType::parse)
            .ok_or_else(|| SchemaError::missing_field("project_type"))?;

        let scale: Scale = raw
            .scale
            .as_deref()
            .ok_or_else(|| SchemaError::missing_field("scale"))?
            .parse()?;

        Ok(Self {
            project_type,
            description: raw.description.unwrap_or_default(),
            scale,
            requirements: raw.requirements.unwrap_or_default(),
            frontend_preference: normalize_preference(raw.frontend_preference),
            backend_preference: normalize_preference(raw.backend_preference),
            database_preference: normalize_preference(raw.database_preference),
        })
    }
}

impl From<ProjectInput> for RawProjectInput {
    fn from(input: ProjectInput) -> Self {
        Self {
            project_type: Some(input.project_type.into()),
            description: Some(input.description),
            scale: Some(input.scale.as_str().to_string()),
            requirements: Some(input.requirements),
            frontend_preference: input.frontend_preference,
            backend_preference: input.backend_preference,
            database_preference: input.database_preference,
        }
    }
}

/// Blank preferences count as no preference.
fn normalize_preference(preference: Option<String>) -> Option<String> {
    preference
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}
