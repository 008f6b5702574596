//! Built-in learner persona catalog.
//!
//! The backend is the source of truth (`GET /personas`), but the client ships
//! the same four personas so the setup screen works even when the server is
//! unreachable at startup.

use serde::{Deserialize, Serialize};

/// The simulated learner personas a tutor can practice against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PersonaType {
    /// Struggles with basic concepts, needs step-by-step guidance.
    #[default]
    StrugglingSam,
    /// Rushes to conclusions and resists correction.
    OverconfidentOlivia,
    /// Knows the material but lacks confidence.
    AnxiousAlex,
    /// Asks deep questions, wants to understand the "why".
    MethodicalMaya,
}

impl PersonaType {
    /// Returns all persona types in catalog order (e.g., for the picker).
    pub fn all() -> &'static [PersonaType] {
        &[
            PersonaType::StrugglingSam,
            PersonaType::OverconfidentOlivia,
            PersonaType::AnxiousAlex,
            PersonaType::MethodicalMaya,
        ]
    }

    /// Returns the wire identifier for this persona.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonaType::StrugglingSam => "struggling_sam",
            PersonaType::OverconfidentOlivia => "overconfident_olivia",
            PersonaType::AnxiousAlex => "anxious_alex",
            PersonaType::MethodicalMaya => "methodical_maya",
        }
    }

    /// Returns the human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaType::StrugglingSam => "Struggling Sam",
            PersonaType::OverconfidentOlivia => "Overconfident Olivia",
            PersonaType::AnxiousAlex => "Anxious Alex",
            PersonaType::MethodicalMaya => "Methodical Maya",
        }
    }

    /// Returns a one-line description of how this persona behaves.
    pub fn description(&self) -> &'static str {
        match self {
            PersonaType::StrugglingSam => {
                "Struggles with basic concepts, needs patience and step-by-step guidance"
            }
            PersonaType::OverconfidentOlivia => {
                "Rushes to conclusions, resists correction, needs careful guidance"
            }
            PersonaType::AnxiousAlex => {
                "Knows the material but lacks confidence, needs encouragement"
            }
            PersonaType::MethodicalMaya => {
                "Asks deep questions, wants to understand the \"why\" behind concepts"
            }
        }
    }

    /// Parses a wire identifier (as accepted by `--persona`).
    pub fn parse(s: &str) -> Option<PersonaType> {
        PersonaType::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
    }
}

/// Persona metadata as served by `GET /personas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl From<PersonaType> for PersonaInfo {
    fn from(p: PersonaType) -> Self {
        PersonaInfo {
            name: p.display_name().to_string(),
            kind: p.as_str().to_string(),
            description: p.description().to_string(),
        }
    }
}

/// Returns the built-in persona catalog.
///
/// Used as the fallback when the backend's persona listing is unavailable.
pub fn builtin_personas() -> Vec<PersonaInfo> {
    PersonaType::all().iter().copied().map(Into::into).collect()
}
