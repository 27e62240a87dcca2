use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a step on the 72-hour review pathway.
///
/// The vocabulary is closed: every box drawn on the flowchart has exactly one
/// variant here, and nothing else can ever appear in an [`ActiveSet`](super::ActiveSet).
/// The declaration order is the top-down, left-to-right reading order of the
/// chart and is what `Ord` sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeId {
    Header,
    Review72,
    ResolvedFever,
    PersistentFever,

    // Resolved fever, fever of unknown origin.
    FeverUnknown,
    NeutroResolvedLeft,
    NeutroOngoingLeft,
    StopAntibiotics,
    EnteroYesLeft,
    EnteroNoLeft,
    ContinueEmpiricLeft,
    AlloSct,
    NonAlloSct,
    CeaseAllo,
    CeaseNonAllo,

    // Resolved fever, defined infection.
    MicroDefined,
    LiaiseId,
    NeutroResolvedRight,
    NeutroOngoingRight,
    EnteroYesRight,
    EnteroNoRight,
    ContinueEmpiricRight,
    TargetAntibiotics,

    // Persistent fever.
    ClinicallyStable,
    ClinicallyUnstable,
    ContinueEmpiricStable,
    UnstableActions,
    ImagingRecommendations,
    RecurrentFever,
    RecurrentActions,
}

impl NodeId {
    /// Every identifier, in declaration order.
    pub const ALL: [NodeId; 30] = [
        NodeId::Header,
        NodeId::Review72,
        NodeId::ResolvedFever,
        NodeId::PersistentFever,
        NodeId::FeverUnknown,
        NodeId::NeutroResolvedLeft,
        NodeId::NeutroOngoingLeft,
        NodeId::StopAntibiotics,
        NodeId::EnteroYesLeft,
        NodeId::EnteroNoLeft,
        NodeId::ContinueEmpiricLeft,
        NodeId::AlloSct,
        NodeId::NonAlloSct,
        NodeId::CeaseAllo,
        NodeId::CeaseNonAllo,
        NodeId::MicroDefined,
        NodeId::LiaiseId,
        NodeId::NeutroResolvedRight,
        NodeId::NeutroOngoingRight,
        NodeId::EnteroYesRight,
        NodeId::EnteroNoRight,
        NodeId::ContinueEmpiricRight,
        NodeId::TargetAntibiotics,
        NodeId::ClinicallyStable,
        NodeId::ClinicallyUnstable,
        NodeId::ContinueEmpiricStable,
        NodeId::UnstableActions,
        NodeId::ImagingRecommendations,
        NodeId::RecurrentFever,
        NodeId::RecurrentActions,
    ];

    /// The two nodes that are lit on every evaluation.
    pub const HEADERS: [NodeId; 2] = [NodeId::Header, NodeId::Review72];

    /// Terminal recommendation boxes.
    pub const TERMINAL_ACTIONS: [NodeId; 7] = [
        NodeId::StopAntibiotics,
        NodeId::ContinueEmpiricLeft,
        NodeId::ContinueEmpiricRight,
        NodeId::ContinueEmpiricStable,
        NodeId::TargetAntibiotics,
        NodeId::CeaseAllo,
        NodeId::CeaseNonAllo,
    ];

    /// Nodes reachable only through the fever-of-unknown-origin side.
    pub const UNKNOWN_ORIGIN_BRANCH: [NodeId; 11] = [
        NodeId::FeverUnknown,
        NodeId::NeutroResolvedLeft,
        NodeId::NeutroOngoingLeft,
        NodeId::StopAntibiotics,
        NodeId::EnteroYesLeft,
        NodeId::EnteroNoLeft,
        NodeId::ContinueEmpiricLeft,
        NodeId::AlloSct,
        NodeId::NonAlloSct,
        NodeId::CeaseAllo,
        NodeId::CeaseNonAllo,
    ];

    /// Nodes reachable only through the defined-infection side.
    pub const DEFINED_INFECTION_BRANCH: [NodeId; 8] = [
        NodeId::MicroDefined,
        NodeId::LiaiseId,
        NodeId::NeutroResolvedRight,
        NodeId::NeutroOngoingRight,
        NodeId::EnteroYesRight,
        NodeId::EnteroNoRight,
        NodeId::ContinueEmpiricRight,
        NodeId::TargetAntibiotics,
    ];

    /// Nodes reachable only through the persistent-fever side.
    pub const PERSISTENT_BRANCH: [NodeId; 8] = [
        NodeId::PersistentFever,
        NodeId::ClinicallyStable,
        NodeId::ClinicallyUnstable,
        NodeId::ContinueEmpiricStable,
        NodeId::UnstableActions,
        NodeId::ImagingRecommendations,
        NodeId::RecurrentFever,
        NodeId::RecurrentActions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeId::Header => "header",
            NodeId::Review72 => "review72",
            NodeId::ResolvedFever => "resolved_fever",
            NodeId::PersistentFever => "persistent_fever",
            NodeId::FeverUnknown => "fever_unknown",
            NodeId::NeutroResolvedLeft => "neutro_resolved_left",
            NodeId::NeutroOngoingLeft => "neutro_ongoing_left",
            NodeId::StopAntibiotics => "stop_antibiotics",
            NodeId::EnteroYesLeft => "entero_yes_left",
            NodeId::EnteroNoLeft => "entero_no_left",
            NodeId::ContinueEmpiricLeft => "continue_empiric_left",
            NodeId::AlloSct => "allo_sct",
            NodeId::NonAlloSct => "non_allo_sct",
            NodeId::CeaseAllo => "cease_allo",
            NodeId::CeaseNonAllo => "cease_non_allo",
            NodeId::MicroDefined => "micro_defined",
            NodeId::LiaiseId => "liaise_id",
            NodeId::NeutroResolvedRight => "neutro_resolved_right",
            NodeId::NeutroOngoingRight => "neutro_ongoing_right",
            NodeId::EnteroYesRight => "entero_yes_right",
            NodeId::EnteroNoRight => "entero_no_right",
            NodeId::ContinueEmpiricRight => "continue_empiric_right",
            NodeId::TargetAntibiotics => "target_antibiotics",
            NodeId::ClinicallyStable => "clinically_stable",
            NodeId::ClinicallyUnstable => "clinically_unstable",
            NodeId::ContinueEmpiricStable => "continue_empiric_stable",
            NodeId::UnstableActions => "unstable_actions",
            NodeId::ImagingRecommendations => "imaging_recommendations",
            NodeId::RecurrentFever => "recurrent_fever",
            NodeId::RecurrentActions => "recurrent_actions",
        }
    }

    /// Short human-readable name, used by traces and the text outline.
    pub fn label(&self) -> &'static str {
        match self {
            NodeId::Header => "Neutropaenic Sepsis Management",
            NodeId::Review72 => "Review at 72 hours of empiric antibiotics",
            NodeId::ResolvedFever => "Resolved fever",
            NodeId::PersistentFever => "Persistent fever or clinically unstable",
            NodeId::FeverUnknown => "Fever of unknown origin",
            NodeId::NeutroResolvedLeft | NodeId::NeutroResolvedRight => "Resolved neutropaenia",
            NodeId::NeutroOngoingLeft | NodeId::NeutroOngoingRight => "Ongoing neutropaenia",
            NodeId::StopAntibiotics => "Stop antibiotics",
            NodeId::EnteroYesLeft | NodeId::EnteroYesRight => "Has enterocolitis or mucositis",
            NodeId::EnteroNoLeft | NodeId::EnteroNoRight => "No enterocolitis or mucositis",
            NodeId::ContinueEmpiricLeft | NodeId::ContinueEmpiricRight => {
                "Continue empiric antibiotics"
            }
            NodeId::AlloSct => "Allo-SCT patient",
            NodeId::NonAlloSct => "Non-allo-SCT patient",
            NodeId::CeaseAllo => "Consider ceasing empiric antibiotics if another cause found",
            NodeId::CeaseNonAllo => "Consider ceasing empiric antibiotics",
            NodeId::MicroDefined => "Microbiologically or clinically defined infection",
            NodeId::LiaiseId => "Liaise with ID",
            NodeId::TargetAntibiotics => "Target antibiotics",
            NodeId::ClinicallyStable => "Clinically stable",
            NodeId::ClinicallyUnstable => "Clinically unstable",
            NodeId::ContinueEmpiricStable => "Continue empiric therapy",
            NodeId::UnstableActions => "Escalation for unstable patient",
            NodeId::ImagingRecommendations => "Imaging and non-infective causes",
            NodeId::RecurrentFever => "Recurrent fever",
            NodeId::RecurrentActions => "Recurrent fever actions",
        }
    }

    pub fn is_header(&self) -> bool {
        Self::HEADERS.contains(self)
    }

    pub fn is_terminal_action(&self) -> bool {
        Self::TERMINAL_ACTIONS.contains(self)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeId {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        NodeId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| InputError::UnknownNodeId(needle.to_string()))
    }
}
