use super::{
    ActiveSet, ClinicalStability, FeverStatus, NeutropaeniaStatus, NodeId, PatientAssessment,
};
use log::debug;
use serde::Serialize;
use std::fmt;

/// One branch point taken while walking the pathway, with the answer that
/// decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "question", content = "answer", rename_all = "snake_case")]
pub enum Decision {
    Fever(FeverStatus),
    DefinedInfection(bool),
    Neutropaenia(NeutropaeniaStatus),
    Enterocolitis(bool),
    AlloSct(bool),
    Stability(ClinicalStability),
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        match self {
            Decision::Fever(status) => write!(f, "fever {}", status),
            Decision::DefinedInfection(b) => write!(f, "defined infection: {}", yes_no(*b)),
            Decision::Neutropaenia(status) => write!(f, "neutropaenia {}", status),
            Decision::Enterocolitis(b) => write!(f, "enterocolitis/mucositis: {}", yes_no(*b)),
            Decision::AlloSct(b) => write!(f, "Allo-SCT: {}", yes_no(*b)),
            Decision::Stability(stability) => write!(f, "clinically {}", stability),
        }
    }
}

/// A branch decision and the nodes it lit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub decision: Decision,
    pub activated: Vec<NodeId>,
}

/// The outcome of resolving one assessment, with the path that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub active: ActiveSet,
    pub trace: Vec<TraceStep>,
}

/// Resolves an assessment to the set of lit pathway nodes.
///
/// Total over its input: every assessment yields a set containing at least
/// the two header nodes. Fields off the reached branch are never read.
pub fn resolve(assessment: &PatientAssessment) -> ActiveSet {
    resolve_traced(assessment).active
}

/// [`resolve`] over the six raw flags.
pub fn resolve_flags(
    fever_resolved: bool,
    neutropaenia_resolved: bool,
    stable_if_persistent: bool,
    enterocolitis_present: bool,
    allo_sct_patient: bool,
    micro_defined_infection: bool,
) -> ActiveSet {
    resolve(&PatientAssessment::from_flags(
        fever_resolved,
        neutropaenia_resolved,
        stable_if_persistent,
        enterocolitis_present,
        allo_sct_patient,
        micro_defined_infection,
    ))
}

/// Like [`resolve`], but also records each branch decision on the way down.
pub fn resolve_traced(assessment: &PatientAssessment) -> Resolution {
    let mut walk = Walk::new();

    match assessment.fever {
        FeverStatus::Resolved => {
            walk.take(Decision::Fever(assessment.fever), &[NodeId::ResolvedFever]);
            resolve_resolved_fever(&mut walk, assessment);
        }
        FeverStatus::Persistent => {
            // Recurrence guidance is shown whatever the stability answer.
            walk.take(
                Decision::Fever(assessment.fever),
                &[
                    NodeId::PersistentFever,
                    NodeId::RecurrentFever,
                    NodeId::RecurrentActions,
                ],
            );
            let decision = Decision::Stability(assessment.stability);
            match assessment.stability {
                ClinicalStability::Stable => walk.take(
                    decision,
                    &[NodeId::ClinicallyStable, NodeId::ContinueEmpiricStable],
                ),
                ClinicalStability::Unstable => walk.take(
                    decision,
                    &[
                        NodeId::ClinicallyUnstable,
                        NodeId::UnstableActions,
                        NodeId::ImagingRecommendations,
                    ],
                ),
            }
        }
    }

    let resolution = walk.finish();
    debug!(
        "Resolved assessment {:?} to {} active nodes over {} decisions",
        assessment,
        resolution.active.len(),
        resolution.trace.len()
    );
    resolution
}

fn resolve_resolved_fever(walk: &mut Walk, assessment: &PatientAssessment) {
    let micro = assessment.micro_defined_infection;
    let neutro = Decision::Neutropaenia(assessment.neutropaenia);
    let entero = Decision::Enterocolitis(assessment.enterocolitis);

    if micro {
        walk.take(
            Decision::DefinedInfection(true),
            &[NodeId::MicroDefined, NodeId::LiaiseId],
        );
        match assessment.neutropaenia {
            NeutropaeniaStatus::Resolved => walk.take(
                neutro,
                &[NodeId::NeutroResolvedRight, NodeId::TargetAntibiotics],
            ),
            NeutropaeniaStatus::Ongoing => {
                walk.take(neutro, &[NodeId::NeutroOngoingRight]);
                if assessment.enterocolitis {
                    walk.take(
                        entero,
                        &[NodeId::EnteroYesRight, NodeId::ContinueEmpiricRight],
                    );
                } else {
                    walk.take(entero, &[NodeId::EnteroNoRight, NodeId::TargetAntibiotics]);
                }
            }
        }
        return;
    }

    walk.take(Decision::DefinedInfection(false), &[NodeId::FeverUnknown]);
    match assessment.neutropaenia {
        NeutropaeniaStatus::Resolved => walk.take(
            neutro,
            &[NodeId::NeutroResolvedLeft, NodeId::StopAntibiotics],
        ),
        NeutropaeniaStatus::Ongoing => {
            walk.take(neutro, &[NodeId::NeutroOngoingLeft]);
            if assessment.enterocolitis {
                walk.take(
                    entero,
                    &[NodeId::EnteroYesLeft, NodeId::ContinueEmpiricLeft],
                );
                return;
            }
            walk.take(entero, &[NodeId::EnteroNoLeft]);
            let decision = Decision::AlloSct(assessment.allo_sct);
            if assessment.allo_sct {
                walk.take(decision, &[NodeId::AlloSct, NodeId::CeaseAllo]);
            } else {
                walk.take(decision, &[NodeId::NonAlloSct, NodeId::CeaseNonAllo]);
            }
        }
    }
}

struct Walk {
    active: ActiveSet,
    trace: Vec<TraceStep>,
}

impl Walk {
    fn new() -> Self {
        Self {
            active: ActiveSet::initial(),
            trace: Vec::new(),
        }
    }

    fn take(&mut self, decision: Decision, nodes: &[NodeId]) {
        self.active.extend(nodes.iter().copied());
        self.trace.push(TraceStep {
            decision,
            activated: nodes.to_vec(),
        });
    }

    fn finish(self) -> Resolution {
        Resolution {
            active: self.active,
            trace: self.trace,
        }
    }
}
