use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::str::FromStr;

/// Fever status at the 72-hour review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeverStatus {
    /// Afebrile for at least 48 hours and clinically stable.
    #[default]
    Resolved,
    /// Persistent fever, or the patient remains clinically unstable.
    Persistent,
}

/// Neutropaenia status at the 72-hour review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeutropaeniaStatus {
    Resolved,
    #[default]
    Ongoing,
}

/// Clinical stability, only asked on the persistent-fever side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalStability {
    #[default]
    Stable,
    Unstable,
}

macro_rules! two_way_option {
    ($ty:ident, $field:literal, $a:ident => $a_str:literal, $b:ident => $b_str:literal) => {
        impl FromStr for $ty {
            type Err = InputError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $a_str => Ok($ty::$a),
                    $b_str => Ok($ty::$b),
                    _ => Err(InputError::InvalidOption {
                        field: $field,
                        value: s.to_string(),
                        expected: concat!($a_str, ", ", $b_str),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $ty::$a => f.write_str($a_str),
                    $ty::$b => f.write_str($b_str),
                }
            }
        }
    };
}

two_way_option!(FeverStatus, "fever status", Resolved => "resolved", Persistent => "persistent");
two_way_option!(NeutropaeniaStatus, "neutropaenia status", Resolved => "resolved", Ongoing => "ongoing");
two_way_option!(ClinicalStability, "clinical stability", Stable => "stable", Unstable => "unstable");

/// The six answers collected for one evaluation of the pathway.
///
/// Not every answer matters for every patient: the conditional fields are only
/// consulted on the branches that reach them (see [`FieldRelevance`]). Values
/// in fields that are off the reached path are ignored by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientAssessment {
    pub fever: FeverStatus,
    pub neutropaenia: NeutropaeniaStatus,
    pub micro_defined_infection: bool,
    pub stability: ClinicalStability,
    pub enterocolitis: bool,
    pub allo_sct: bool,
}

impl PatientAssessment {
    /// Builds an assessment from the six raw flags, in resolver-contract order.
    pub fn from_flags(
        fever_resolved: bool,
        neutropaenia_resolved: bool,
        stable_if_persistent: bool,
        enterocolitis_present: bool,
        allo_sct_patient: bool,
        micro_defined_infection: bool,
    ) -> Self {
        Self {
            fever: if fever_resolved {
                FeverStatus::Resolved
            } else {
                FeverStatus::Persistent
            },
            neutropaenia: if neutropaenia_resolved {
                NeutropaeniaStatus::Resolved
            } else {
                NeutropaeniaStatus::Ongoing
            },
            micro_defined_infection,
            stability: if stable_if_persistent {
                ClinicalStability::Stable
            } else {
                ClinicalStability::Unstable
            },
            enterocolitis: enterocolitis_present,
            allo_sct: allo_sct_patient,
        }
    }

    /// Load an assessment from a JSON file. Missing keys take their defaults.
    pub fn from_file(path: &str) -> Result<Self, InputError> {
        let content = fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn fever_resolved(&self) -> bool {
        self.fever == FeverStatus::Resolved
    }

    pub fn neutropaenia_resolved(&self) -> bool {
        self.neutropaenia == NeutropaeniaStatus::Resolved
    }

    pub fn clinically_stable(&self) -> bool {
        self.stability == ClinicalStability::Stable
    }

    /// Which conditional fields currently influence the result.
    pub fn relevance(&self) -> FieldRelevance {
        FieldRelevance::for_assessment(self)
    }

    /// Applies `policy` to fields that the other answers have made irrelevant.
    pub fn with_policy(self, policy: StaleFieldPolicy) -> Self {
        match policy {
            StaleFieldPolicy::Retain => self,
            StaleFieldPolicy::Reset => {
                let relevance = self.relevance();
                let defaults = Self::default();
                Self {
                    micro_defined_infection: if relevance.micro_defined_infection {
                        self.micro_defined_infection
                    } else {
                        defaults.micro_defined_infection
                    },
                    stability: if relevance.stability {
                        self.stability
                    } else {
                        defaults.stability
                    },
                    enterocolitis: if relevance.enterocolitis {
                        self.enterocolitis
                    } else {
                        defaults.enterocolitis
                    },
                    allo_sct: if relevance.allo_sct {
                        self.allo_sct
                    } else {
                        defaults.allo_sct
                    },
                    ..self
                }
            }
        }
    }
}

/// Relevance of each conditional input, given the other answers.
///
/// Fever and neutropaenia status are always asked. The rest follow the
/// branching of the pathway, so a field is relevant exactly when the resolver
/// would read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRelevance {
    pub micro_defined_infection: bool,
    pub stability: bool,
    pub enterocolitis: bool,
    pub allo_sct: bool,
}

impl FieldRelevance {
    pub fn for_assessment(assessment: &PatientAssessment) -> Self {
        let resolved = assessment.fever_resolved();
        let ongoing = !assessment.neutropaenia_resolved();
        Self {
            micro_defined_infection: resolved,
            stability: !resolved,
            enterocolitis: resolved && ongoing,
            allo_sct: resolved
                && ongoing
                && !assessment.micro_defined_infection
                && !assessment.enterocolitis,
        }
    }
}

/// What to do with an answer whose control has been disabled by an earlier
/// choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleFieldPolicy {
    /// Keep the last value the operator chose.
    #[default]
    Retain,
    /// Put the field back to its default.
    Reset,
}
