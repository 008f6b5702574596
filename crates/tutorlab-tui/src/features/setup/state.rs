//! Setup screen state.

use tutorlab_core::api::SessionStartRequest;
use tutorlab_core::config::Config;
use tutorlab_core::personas::{self, PersonaInfo};

use crate::common::TextBuffer;
use crate::state::SetupPrefill;

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Name,
    Problem,
    Persona,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            SetupField::Name => SetupField::Problem,
            SetupField::Problem => SetupField::Persona,
            SetupField::Persona => SetupField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SetupField::Name => SetupField::Persona,
            SetupField::Problem => SetupField::Name,
            SetupField::Persona => SetupField::Problem,
        }
    }
}

/// State of the session setup form.
#[derive(Debug)]
pub struct SetupState {
    pub name: TextBuffer,
    pub problem: TextBuffer,
    /// Personas on offer; starts as the built-in catalog, replaced by the
    /// server listing when it arrives.
    pub personas: Vec<PersonaInfo>,
    pub selected: usize,
    pub focus: SetupField,
    /// True while the start request is in flight.
    pub pending: bool,
    /// Error from the last failed start attempt, shown inline.
    pub error: Option<String>,
}

impl SetupState {
    pub fn new(config: &Config, prefill: SetupPrefill) -> Self {
        let personas = personas::builtin_personas();
        let selected = prefill
            .persona
            .as_deref()
            .and_then(|kind| personas.iter().position(|p| p.kind == kind))
            .unwrap_or(0);
        let name = prefill
            .tutor_name
            .or_else(|| config.tutor_name.clone())
            .unwrap_or_default();

        Self {
            name: TextBuffer::with_text(name),
            problem: TextBuffer::with_text(prefill.math_problem.unwrap_or_default()),
            personas,
            selected,
            focus: SetupField::Name,
            pending: false,
            error: None,
        }
    }

    /// Replaces the persona catalog with the server's, keeping the selection
    /// on the same persona if it still exists.
    pub fn set_personas(&mut self, personas: Vec<PersonaInfo>) {
        if personas.is_empty() {
            return;
        }
        let current_kind = self.selected_persona().map(|p| p.kind.clone());
        self.personas = personas;
        self.selected = current_kind
            .and_then(|kind| self.personas.iter().position(|p| p.kind == kind))
            .unwrap_or(0);
    }

    pub fn selected_persona(&self) -> Option<&PersonaInfo> {
        self.personas.get(self.selected)
    }

    /// The text buffer under focus, if a text field is focused.
    pub fn focused_buffer_mut(&mut self) -> Option<&mut TextBuffer> {
        match self.focus {
            SetupField::Name => Some(&mut self.name),
            SetupField::Problem => Some(&mut self.problem),
            SetupField::Persona => None,
        }
    }

    /// Both text fields must be non-blank, mirroring the submit guard of the
    /// form.
    pub fn can_submit(&self) -> bool {
        !self.name.is_blank() && !self.problem.is_blank() && !self.pending
    }

    /// Builds the start request from the form, or None if incomplete.
    pub fn start_request(&self) -> Option<SessionStartRequest> {
        if !self.can_submit() {
            return None;
        }
        let persona = self.selected_persona()?;
        Some(SessionStartRequest {
            tutor_name: self.name.text().trim().to_string(),
            math_problem: self.problem.text().trim().to_string(),
            persona_type: persona.kind.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SetupState {
        SetupState::new(&Config::default(), SetupPrefill::default())
    }

    #[test]
    fn test_new_offers_builtin_catalog() {
        let s = state();
        assert_eq!(s.personas.len(), 4);
        assert_eq!(s.selected_persona().unwrap().kind, "struggling_sam");
    }

    #[test]
    fn test_prefill_selects_persona_and_fields() {
        let prefill = SetupPrefill {
            tutor_name: Some("Ada".to_string()),
            math_problem: Some("2x + 5 = 13".to_string()),
            persona: Some("methodical_maya".to_string()),
        };
        let s = SetupState::new(&Config::default(), prefill);
        assert_eq!(s.name.text(), "Ada");
        assert_eq!(s.selected_persona().unwrap().kind, "methodical_maya");
        assert!(s.can_submit());
    }

    #[test]
    fn test_config_tutor_name_prefills_when_cli_silent() {
        let config = Config {
            tutor_name: Some("Grace".to_string()),
            ..Config::default()
        };
        let s = SetupState::new(&config, SetupPrefill::default());
        assert_eq!(s.name.text(), "Grace");
    }

    #[test]
    fn test_cannot_submit_with_blank_fields() {
        let mut s = state();
        assert!(!s.can_submit());
        s.name.insert_str("Ada");
        assert!(!s.can_submit());
        s.problem.insert_str("   ");
        assert!(!s.can_submit());
        s.problem.insert_str("2x = 8");
        assert!(s.can_submit());
        s.pending = true;
        assert!(!s.can_submit());
    }

    #[test]
    fn test_start_request_trims_fields() {
        let mut s = state();
        s.name.insert_str("  Ada ");
        s.problem.insert_str(" 2x = 8 ");
        let req = s.start_request().unwrap();
        assert_eq!(req.tutor_name, "Ada");
        assert_eq!(req.math_problem, "2x = 8");
        assert_eq!(req.persona_type, "struggling_sam");
    }

    #[test]
    fn test_server_catalog_keeps_selection_by_kind() {
        let mut s = state();
        s.selected = 2; // anxious_alex
        let server = vec![
            PersonaInfo {
                name: "Anxious Alex".to_string(),
                kind: "anxious_alex".to_string(),
                description: String::new(),
            },
            PersonaInfo {
                name: "New Persona".to_string(),
                kind: "new_persona".to_string(),
                description: String::new(),
            },
        ];
        s.set_personas(server);
        assert_eq!(s.selected, 0);
        assert_eq!(s.selected_persona().unwrap().kind, "anxious_alex");
    }

    #[test]
    fn test_empty_server_catalog_is_ignored() {
        let mut s = state();
        s.set_personas(Vec::new());
        assert_eq!(s.personas.len(), 4);
    }

    #[test]
    fn test_focus_cycle_wraps() {
        assert_eq!(SetupField::Persona.next(), SetupField::Name);
        assert_eq!(SetupField::Name.prev(), SetupField::Persona);
    }
}
