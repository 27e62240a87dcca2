//! Common test utilities: the expected pathway table and assessment helpers.
use neutropath::prelude::*;
use std::collections::BTreeSet;

/// All 64 combinations of the six resolver flags, in contract order:
/// `(fever_resolved, neutropaenia_resolved, stable, enterocolitis, allo_sct, micro_defined)`.
#[allow(dead_code)]
pub fn all_flag_combinations() -> Vec<(bool, bool, bool, bool, bool, bool)> {
    (0u8..64)
        .map(|bits| {
            let bit = |i: u8| bits & (1 << i) != 0;
            (bit(0), bit(1), bit(2), bit(3), bit(4), bit(5))
        })
        .collect()
}

/// The node ids the pathway should light for a flag combination, written out
/// branch by branch.
#[allow(dead_code)]
pub fn expected_ids(
    fever_resolved: bool,
    neutropaenia_resolved: bool,
    stable: bool,
    enterocolitis: bool,
    allo_sct: bool,
    micro_defined: bool,
) -> BTreeSet<String> {
    let branch: &[&str] = match (
        fever_resolved,
        micro_defined,
        neutropaenia_resolved,
        enterocolitis,
        allo_sct,
        stable,
    ) {
        (false, _, _, _, _, true) => &[
            "persistent_fever",
            "recurrent_fever",
            "recurrent_actions",
            "clinically_stable",
            "continue_empiric_stable",
        ],
        (false, _, _, _, _, false) => &[
            "persistent_fever",
            "recurrent_fever",
            "recurrent_actions",
            "clinically_unstable",
            "unstable_actions",
            "imaging_recommendations",
        ],
        (true, true, true, _, _, _) => &[
            "resolved_fever",
            "micro_defined",
            "liaise_id",
            "neutro_resolved_right",
            "target_antibiotics",
        ],
        (true, true, false, true, _, _) => &[
            "resolved_fever",
            "micro_defined",
            "liaise_id",
            "neutro_ongoing_right",
            "entero_yes_right",
            "continue_empiric_right",
        ],
        (true, true, false, false, _, _) => &[
            "resolved_fever",
            "micro_defined",
            "liaise_id",
            "neutro_ongoing_right",
            "entero_no_right",
            "target_antibiotics",
        ],
        (true, false, true, _, _, _) => &[
            "resolved_fever",
            "fever_unknown",
            "neutro_resolved_left",
            "stop_antibiotics",
        ],
        (true, false, false, true, _, _) => &[
            "resolved_fever",
            "fever_unknown",
            "neutro_ongoing_left",
            "entero_yes_left",
            "continue_empiric_left",
        ],
        (true, false, false, false, true, _) => &[
            "resolved_fever",
            "fever_unknown",
            "neutro_ongoing_left",
            "entero_no_left",
            "allo_sct",
            "cease_allo",
        ],
        (true, false, false, false, false, _) => &[
            "resolved_fever",
            "fever_unknown",
            "neutro_ongoing_left",
            "entero_no_left",
            "non_allo_sct",
            "cease_non_allo",
        ],
    };

    ["header", "review72"]
        .iter()
        .chain(branch.iter())
        .map(|s| s.to_string())
        .collect()
}

/// The active set as a sorted set of id strings, for readable assertion diffs.
#[allow(dead_code)]
pub fn id_strings(active: &ActiveSet) -> BTreeSet<String> {
    active.iter().map(|id| id.as_str().to_string()).collect()
}

/// Fever resolved, neutropaenia resolved, no defined infection.
#[allow(dead_code)]
pub fn stop_antibiotics_case() -> PatientAssessment {
    PatientAssessment {
        fever: FeverStatus::Resolved,
        neutropaenia: NeutropaeniaStatus::Resolved,
        ..Default::default()
    }
}

/// Persistent fever, clinically unstable.
#[allow(dead_code)]
pub fn persistent_unstable_case() -> PatientAssessment {
    PatientAssessment {
        fever: FeverStatus::Persistent,
        stability: ClinicalStability::Unstable,
        ..Default::default()
    }
}

/// A unique path in the system temp directory for a test artefact.
#[allow(dead_code)]
pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("neutropath-{}-{}", std::process::id(), name))
}
