use crate::pathway::{ActiveSet, NodeId};
use serde::Serialize;

/// One line of guidance shown under the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

struct Entry {
    triggers: &'static [NodeId],
    recommendation: Recommendation,
}

/// Shown when nothing on the chart has been differentiated yet.
pub const EMPTY_STATE_MESSAGE: &str =
    "Complete the patient parameters to see tailored recommendations.";

// Priority order. An entry fires when any of its triggers is active.
const TABLE: &[Entry] = &[
    Entry {
        triggers: &[NodeId::StopAntibiotics],
        recommendation: Recommendation {
            icon: "\u{2705}",
            title: "Stop antibiotics",
            detail: "Neutropaenia has resolved and fever has resolved.",
        },
    },
    Entry {
        triggers: &[
            NodeId::ContinueEmpiricLeft,
            NodeId::ContinueEmpiricRight,
            NodeId::ContinueEmpiricStable,
        ],
        recommendation: Recommendation {
            icon: "\u{1F48A}",
            title: "Continue empiric antibiotics",
            detail: "The clinical situation warrants ongoing broad cover.",
        },
    },
    Entry {
        triggers: &[NodeId::CeaseAllo],
        recommendation: Recommendation {
            icon: "\u{26A0}\u{FE0F}",
            title: "Consider ceasing empiric antibiotics if another cause is found",
            detail: "Allo-SCT patient: only cease once an alternative cause of fever is identified.",
        },
    },
    Entry {
        triggers: &[NodeId::CeaseNonAllo],
        recommendation: Recommendation {
            icon: "\u{26A0}\u{FE0F}",
            title: "Consider ceasing empiric antibiotics",
            detail: "Non-allo-SCT patient with ongoing neutropaenia and no enterocolitis or mucositis.",
        },
    },
    Entry {
        triggers: &[NodeId::TargetAntibiotics],
        recommendation: Recommendation {
            icon: "\u{1F3AF}",
            title: "Target antibiotics",
            detail: "Target therapy to the identified pathogen or source, in liaison with ID.",
        },
    },
    Entry {
        triggers: &[NodeId::ClinicallyUnstable, NodeId::UnstableActions],
        recommendation: Recommendation {
            icon: "\u{1F6A8}",
            title: "Clinically unstable with persistent fever",
            detail: "Consider an aminoglycoside. Liaise with ID regarding MRO coverage. Repeat peripheral and central cultures.",
        },
    },
    Entry {
        triggers: &[NodeId::ImagingRecommendations],
        recommendation: Recommendation {
            icon: "\u{1F5A5}\u{FE0F}",
            title: "Imaging",
            detail: "Consider CT chest \u{00B1} abdo/pelvis/sinus guided by symptoms. MRI brain if CNS signs or symptoms. Consider non-infective causes.",
        },
    },
    Entry {
        triggers: &[NodeId::RecurrentFever, NodeId::RecurrentActions],
        recommendation: Recommendation {
            icon: "\u{1F504}",
            title: "Recurrent fever",
            detail: "Restart empiric antibiotics and consider an aminoglycoside. Liaise with ID about MRO coverage. Repeat peripheral and central cultures.",
        },
    },
];

/// Recommendations triggered by `active`, always in priority order.
pub fn recommendations(active: &ActiveSet) -> Vec<Recommendation> {
    TABLE
        .iter()
        .filter(|entry| active.contains_any(entry.triggers))
        .map(|entry| entry.recommendation)
        .collect()
}
