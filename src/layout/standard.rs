use super::{
    Bend, EdgeSpec, FillCategory, Layout, LegendPlacement, NodeContent, NodeSpec, Rect,
};
use crate::pathway::NodeId;

const CANVAS_WIDTH: f32 = 1000.0;
const CANVAS_HEIGHT: f32 = 700.0;

const UNSTABLE_ACTIONS: &[&str] = &[
    "Consider aminoglycoside",
    "Liaise with ID about MRO coverage",
    "Repeat periph & central cultures",
];

const IMAGING: &[&str] = &[
    "Liaise with ID",
    "CT chest +/- abdo/pelvis/sinus guided by Sx",
    "MRI brain if CNS signs/Sx",
    "Consider non-infective causes",
];

const RECURRENT_ACTIONS: &[&str] = &[
    "Restart empiric abx & consider aminoglycoside",
    "Liaise with ID about MRO coverage",
    "Repeat periph & central cultures",
];

fn label(
    id: NodeId,
    rect: Rect,
    fill: FillCategory,
    text: &'static str,
    font_size: f32,
    bold: bool,
) -> NodeSpec {
    NodeSpec {
        id,
        rect,
        fill,
        content: NodeContent::Label {
            text,
            font_size,
            bold,
        },
        dashed: false,
    }
}

fn bullets(id: NodeId, rect: Rect, fill: FillCategory, lines: &'static [&'static str]) -> NodeSpec {
    NodeSpec {
        id,
        rect,
        fill,
        content: NodeContent::Bullets {
            lines,
            font_size: 8.0,
        },
        dashed: false,
    }
}

/// The hand-placed 72-hour review flowchart.
///
/// Left third: resolved fever with fever of unknown origin. Middle: resolved
/// fever with a defined infection. Right third: persistent fever.
#[rustfmt::skip]
pub fn standard() -> Layout {
    use FillCategory::{Action, Decision, Neutral, Review, Warning};
    use NodeId::*;

    let nodes = vec![
        label(Header, Rect::new(350.0, 10.0, 300.0, 36.0), FillCategory::Header,
            "Neutropaenic Sepsis Management", 13.0, true),
        label(Review72, Rect::new(340.0, 62.0, 320.0, 30.0), Review,
            "Review at 72 hours of empiric antibiotics", 10.0, false),
        label(ResolvedFever, Rect::new(120.0, 125.0, 280.0, 40.0), Decision,
            "Resolved fever: afebrile \u{2265}48h & clinically stable", 10.0, false),
        label(PersistentFever, Rect::new(660.0, 125.0, 300.0, 40.0), Warning,
            "Persistent fever or remains clinically unstable", 10.0, false),

        // Fever of unknown origin.
        label(FeverUnknown, Rect::new(50.0, 195.0, 160.0, 32.0), Decision,
            "Fever of unknown origin", 9.0, false),
        label(NeutroResolvedLeft, Rect::new(15.0, 260.0, 90.0, 34.0), Decision,
            "Resolved neutropaenia", 9.0, false),
        label(NeutroOngoingLeft, Rect::new(140.0, 260.0, 100.0, 34.0), Decision,
            "Ongoing neutropaenia", 9.0, false),
        label(StopAntibiotics, Rect::new(15.0, 330.0, 90.0, 34.0), Action,
            "Stop antibiotics", 9.0, true),
        label(EnteroYesLeft, Rect::new(110.0, 325.0, 80.0, 40.0), Decision,
            "Has enterocolitis or mucositis", 7.5, false),
        label(EnteroNoLeft, Rect::new(200.0, 325.0, 90.0, 40.0), Decision,
            "No enterocolitis or mucositis", 7.5, false),
        label(ContinueEmpiricLeft, Rect::new(105.0, 400.0, 90.0, 40.0), Action,
            "Continue empiric antibiotics", 8.0, true),
        label(AlloSct, Rect::new(200.0, 400.0, 80.0, 32.0), Decision,
            "Allo-SCT patient", 8.0, false),
        label(NonAlloSct, Rect::new(296.0, 400.0, 94.0, 32.0), Decision,
            "Non-allo-SCT patient", 8.0, false),
        label(CeaseAllo, Rect::new(190.0, 455.0, 100.0, 52.0), Decision,
            "Consider ceasing empiric antibiotics if another cause found", 7.5, false),
        label(CeaseNonAllo, Rect::new(296.0, 455.0, 94.0, 52.0), Decision,
            "Consider ceasing empiric antibiotics", 7.5, false),

        // Defined infection.
        label(MicroDefined, Rect::new(430.0, 195.0, 170.0, 44.0), Decision,
            "Microbiologically or clinically defined infection", 9.0, false),
        NodeSpec {
            dashed: true,
            ..label(LiaiseId, Rect::new(450.0, 255.0, 130.0, 26.0), Neutral,
                "Liaise with ID", 9.0, true)
        },
        label(NeutroOngoingRight, Rect::new(410.0, 310.0, 90.0, 34.0), Decision,
            "Ongoing neutropaenia", 9.0, false),
        label(NeutroResolvedRight, Rect::new(555.0, 310.0, 90.0, 34.0), Decision,
            "Resolved neutropaenia", 9.0, false),
        label(EnteroYesRight, Rect::new(400.0, 375.0, 80.0, 40.0), Decision,
            "Has enterocolitis or mucositis", 7.5, false),
        label(EnteroNoRight, Rect::new(490.0, 375.0, 80.0, 40.0), Decision,
            "No enterocolitis or mucositis", 7.5, false),
        label(ContinueEmpiricRight, Rect::new(395.0, 440.0, 90.0, 40.0), Action,
            "Continue empiric antibiotics", 8.0, true),
        label(TargetAntibiotics, Rect::new(535.0, 440.0, 105.0, 34.0), Action,
            "Target antibiotics", 9.0, true),

        // Persistent fever.
        label(ClinicallyStable, Rect::new(655.0, 195.0, 120.0, 34.0), Decision,
            "Clinically stable", 9.0, false),
        label(ClinicallyUnstable, Rect::new(815.0, 195.0, 130.0, 34.0), Warning,
            "Clinically unstable", 9.0, true),
        label(ContinueEmpiricStable, Rect::new(655.0, 255.0, 120.0, 40.0), Action,
            "Continue empiric therapy", 9.0, true),
        bullets(UnstableActions, Rect::new(780.0, 250.0, 200.0, 62.0), Warning, UNSTABLE_ACTIONS),
        bullets(ImagingRecommendations, Rect::new(780.0, 330.0, 200.0, 72.0), Decision, IMAGING),
        label(RecurrentFever, Rect::new(665.0, 440.0, 150.0, 32.0), FillCategory::Header,
            "Recurrent fever", 10.0, true),
        bullets(RecurrentActions, Rect::new(640.0, 490.0, 200.0, 62.0), Warning, RECURRENT_ACTIONS),
    ];

    let edges = vec![
        EdgeSpec::straight(Header, Review72),
        EdgeSpec::bus(Review72, 110.0, &[ResolvedFever, PersistentFever]),
        EdgeSpec::bus(ResolvedFever, 180.0, &[FeverUnknown, MicroDefined]),

        EdgeSpec::bus(FeverUnknown, 245.0, &[NeutroResolvedLeft, NeutroOngoingLeft]),
        EdgeSpec::straight(NeutroResolvedLeft, StopAntibiotics),
        EdgeSpec::bus(NeutroOngoingLeft, 310.0, &[EnteroYesLeft, EnteroNoLeft]),
        EdgeSpec::straight(EnteroYesLeft, ContinueEmpiricLeft),
        EdgeSpec::bus(EnteroNoLeft, 385.0, &[AlloSct, NonAlloSct]),
        EdgeSpec::straight(AlloSct, CeaseAllo),
        EdgeSpec::straight(NonAlloSct, CeaseNonAllo),

        EdgeSpec::straight(MicroDefined, LiaiseId),
        EdgeSpec::bus(LiaiseId, 296.0, &[NeutroOngoingRight, NeutroResolvedRight]),
        EdgeSpec::bus(NeutroOngoingRight, 360.0, &[EnteroYesRight, EnteroNoRight]),
        EdgeSpec::straight(EnteroYesRight, ContinueEmpiricRight),
        EdgeSpec::elbow(EnteroNoRight, TargetAntibiotics, Bend::Horizontal(428.0)),
        EdgeSpec::straight(NeutroResolvedRight, TargetAntibiotics),

        EdgeSpec::bus(PersistentFever, 180.0, &[ClinicallyStable, ClinicallyUnstable]),
        EdgeSpec::straight(ClinicallyStable, ContinueEmpiricStable),
        EdgeSpec::straight(ClinicallyUnstable, UnstableActions),
        EdgeSpec::straight(UnstableActions, ImagingRecommendations),
        EdgeSpec::elbow(PersistentFever, RecurrentFever, Bend::Vertical(650.0)),
        EdgeSpec::straight(RecurrentFever, RecurrentActions),
    ];

    Layout {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        nodes,
        edges,
        legend: LegendPlacement {
            x: 10.0,
            y: 650.0,
            swatch_width: 130.0,
            swatch_height: 20.0,
            spacing: 10.0,
        },
    }
}
