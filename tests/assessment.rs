mod common;

use common::*;
use neutropath::prelude::*;
use std::fs;

#[test]
fn test_node_id_parses_every_identifier() {
    for id in NodeId::ALL {
        assert_eq!(id.as_str().parse::<NodeId>().unwrap(), id);
        assert_eq!(id.to_string(), id.as_str());
    }
    assert_eq!("review72".parse::<NodeId>().unwrap(), NodeId::Review72);
}

#[test]
fn test_unknown_node_id_rejected() {
    let result = "stop_everything".parse::<NodeId>();
    assert!(matches!(result, Err(InputError::UnknownNodeId(ref s)) if s == "stop_everything"));
}

#[test]
fn test_active_set_parse() {
    let active = ActiveSet::parse(["header", "review72", "stop_antibiotics"]).unwrap();
    assert_eq!(active.len(), 3);
    assert!(active.contains(NodeId::StopAntibiotics));

    let result = ActiveSet::parse(["header", "nonsense"]);
    assert!(matches!(result, Err(InputError::UnknownNodeId(_))));
}

#[test]
fn test_option_parsing() {
    assert_eq!("resolved".parse::<FeverStatus>().unwrap(), FeverStatus::Resolved);
    assert_eq!(" Persistent ".parse::<FeverStatus>().unwrap(), FeverStatus::Persistent);
    assert_eq!("ONGOING".parse::<NeutropaeniaStatus>().unwrap(), NeutropaeniaStatus::Ongoing);
    assert_eq!("unstable".parse::<ClinicalStability>().unwrap(), ClinicalStability::Unstable);

    match "maybe".parse::<FeverStatus>() {
        Err(InputError::InvalidOption { field, value, .. }) => {
            assert_eq!(field, "fever status");
            assert_eq!(value, "maybe");
        }
        other => panic!("Expected InvalidOption, got {:?}", other),
    }
}

#[test]
fn test_default_assessment() {
    let assessment = PatientAssessment::default();
    assert!(assessment.fever_resolved());
    assert!(!assessment.neutropaenia_resolved());
    assert!(assessment.clinically_stable());
    assert!(!assessment.micro_defined_infection);
    assert!(!assessment.enterocolitis);
    assert!(!assessment.allo_sct);
}

#[test]
fn test_from_flags_maps_contract_order() {
    let assessment = PatientAssessment::from_flags(false, true, false, true, true, true);
    assert_eq!(assessment.fever, FeverStatus::Persistent);
    assert_eq!(assessment.neutropaenia, NeutropaeniaStatus::Resolved);
    assert_eq!(assessment.stability, ClinicalStability::Unstable);
    assert!(assessment.enterocolitis);
    assert!(assessment.allo_sct);
    assert!(assessment.micro_defined_infection);
}

#[test]
fn test_assessment_from_partial_json() {
    let json = r#"{ "fever": "persistent", "stability": "unstable" }"#;
    let assessment: PatientAssessment = serde_json::from_str(json).unwrap();
    assert_eq!(assessment, persistent_unstable_case());
}

#[test]
fn test_assessment_from_file() {
    let path = temp_path("assessment.json");
    fs::write(
        &path,
        r#"{ "fever": "resolved", "neutropaenia": "resolved", "allo_sct": true }"#,
    )
    .unwrap();

    let assessment = PatientAssessment::from_file(path.to_str().unwrap()).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(assessment.neutropaenia_resolved());
    assert!(assessment.allo_sct);
    assert!(resolve(&assessment).contains(NodeId::StopAntibiotics));
}

#[test]
fn test_assessment_from_missing_file() {
    let result = PatientAssessment::from_file("/definitely/not/here/assessment.json");
    assert!(matches!(result, Err(InputError::Io { .. })));
}

#[test]
fn test_assessment_from_invalid_json() {
    let path = temp_path("bad-assessment.json");
    fs::write(&path, r#"{ "fever": "sometimes" }"#).unwrap();
    let result = PatientAssessment::from_file(path.to_str().unwrap());
    fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(InputError::JsonParseError(_))));
}

#[test]
fn test_relevance_resolved_fever_ongoing_neutropaenia() {
    let assessment = PatientAssessment::default();
    let relevance = assessment.relevance();
    assert!(relevance.micro_defined_infection);
    assert!(!relevance.stability);
    assert!(relevance.enterocolitis);
    assert!(relevance.allo_sct);
}

#[test]
fn test_relevance_narrows_down_the_tree() {
    let with_entero = PatientAssessment {
        enterocolitis: true,
        ..Default::default()
    };
    assert!(!with_entero.relevance().allo_sct);

    let defined = PatientAssessment {
        micro_defined_infection: true,
        ..Default::default()
    };
    assert!(defined.relevance().enterocolitis);
    assert!(!defined.relevance().allo_sct);

    let resolved = stop_antibiotics_case();
    assert!(!resolved.relevance().enterocolitis);
    assert!(!resolved.relevance().allo_sct);

    let persistent = persistent_unstable_case().relevance();
    assert!(persistent.stability);
    assert!(!persistent.micro_defined_infection);
    assert!(!persistent.enterocolitis);
    assert!(!persistent.allo_sct);
}

#[test]
fn test_irrelevant_fields_never_change_resolution() {
    for (fever, neutro, stable, entero, allo, micro) in all_flag_combinations() {
        let assessment = PatientAssessment::from_flags(fever, neutro, stable, entero, allo, micro);
        let reset = assessment.with_policy(StaleFieldPolicy::Reset);
        assert_eq!(resolve(&assessment), resolve(&reset));
    }
}

#[test]
fn test_stale_field_policy() {
    let stale = PatientAssessment {
        fever: FeverStatus::Persistent,
        micro_defined_infection: true,
        enterocolitis: true,
        allo_sct: true,
        ..Default::default()
    };

    assert_eq!(stale.with_policy(StaleFieldPolicy::Retain), stale);

    let reset = stale.with_policy(StaleFieldPolicy::Reset);
    assert_eq!(reset.fever, FeverStatus::Persistent);
    assert!(!reset.micro_defined_infection);
    assert!(!reset.enterocolitis);
    assert!(!reset.allo_sct);
    assert_eq!(StaleFieldPolicy::default(), StaleFieldPolicy::Retain);
}
