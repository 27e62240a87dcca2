use clap::{Parser, ValueEnum};
use log::{debug, info};
use neutropath::prelude::*;
use neutropath::{CAPTION, DISCLAIMER, TITLE};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Output format for the resolution report.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Define CLI-specific enums for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FeverCli {
    Resolved,
    Persistent,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NeutropaeniaCli {
    Resolved,
    Ongoing,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyCli {
    Retain,
    Reset,
}

/// Neutropaenic sepsis 72-hour review pathway resolver and flowchart renderer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a patient assessment JSON file (overrides the field flags)
    #[arg(short, long)]
    assessment: Option<String>,

    /// Fever status at the 72-hour review
    #[arg(long, value_enum, default_value = "resolved")]
    fever: FeverCli,

    /// Neutropaenia status
    #[arg(long, value_enum, default_value = "ongoing")]
    neutropaenia: NeutropaeniaCli,

    /// Microbiologically or clinically defined infection identified
    #[arg(long)]
    micro_defined: bool,

    /// Patient remains clinically unstable (persistent fever only)
    #[arg(long)]
    unstable: bool,

    /// Enterocolitis or significant mucositis present
    #[arg(long)]
    enterocolitis: bool,

    /// Allo-SCT patient
    #[arg(long)]
    allo_sct: bool,

    /// What to do with answers made irrelevant by earlier ones
    #[arg(long, value_enum, default_value = "retain")]
    stale_fields: PolicyCli,

    /// Render an explicit comma-separated list of node ids instead of resolving
    #[arg(
        long,
        value_delimiter = ',',
        conflicts_with_all = [
            "assessment",
            "fever",
            "neutropaenia",
            "micro_defined",
            "unstable",
            "enterocolitis",
            "allo_sct",
            "stale_fields",
            "human",
        ]
    )]
    active: Option<Vec<String>>,

    /// Write the flowchart as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the flowchart as PNG
    #[arg(long)]
    png: Option<PathBuf>,

    /// Copy the flowchart to the clipboard, falling back to --fallback
    #[arg(long)]
    copy: bool,

    /// PNG path used when the clipboard is unavailable
    #[arg(long, default_value = "neutropaenic_sepsis_pathway.png")]
    fallback: PathBuf,

    /// Raster scale factor for --png and --copy
    #[arg(long, default_value_t = 2.0)]
    scale: f32,

    /// Path to a renderer configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: ReportFormat,

    /// Print the flowchart as a text outline
    #[arg(long)]
    outline: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    assessment: Option<&'a PatientAssessment>,
    relevance: Option<FieldRelevance>,
    path: Option<String>,
    trace: &'a [TraceStep],
    active: &'a ActiveSet,
    recommendations: &'a [Recommendation],
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let assessment = if cli.human {
        run_interactive()
    } else if cli.active.is_some() {
        None
    } else {
        Some(assessment_from_cli(&cli))
    };

    run(&cli, assessment);
}

fn assessment_from_cli(cli: &Cli) -> PatientAssessment {
    if let Some(path) = &cli.assessment {
        info!("Loading assessment from: {}", path);
        return PatientAssessment::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }
    PatientAssessment {
        fever: match cli.fever {
            FeverCli::Resolved => FeverStatus::Resolved,
            FeverCli::Persistent => FeverStatus::Persistent,
        },
        neutropaenia: match cli.neutropaenia {
            NeutropaeniaCli::Resolved => NeutropaeniaStatus::Resolved,
            NeutropaeniaCli::Ongoing => NeutropaeniaStatus::Ongoing,
        },
        micro_defined_infection: cli.micro_defined,
        stability: if cli.unstable {
            ClinicalStability::Unstable
        } else {
            ClinicalStability::Stable
        },
        enterocolitis: cli.enterocolitis,
        allo_sct: cli.allo_sct,
    }
}

fn run(cli: &Cli, assessment: Option<PatientAssessment>) {
    let policy = match cli.stale_fields {
        PolicyCli::Retain => StaleFieldPolicy::Retain,
        PolicyCli::Reset => StaleFieldPolicy::Reset,
    };
    let assessment = assessment.map(|a| a.with_policy(policy));

    // --- 1. Resolve ---
    let resolution = match (&assessment, &cli.active) {
        (Some(a), _) => resolve_traced(a),
        (None, Some(ids)) => {
            let active = ActiveSet::parse(ids.iter().map(String::as_str))
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            Resolution {
                active,
                trace: Vec::new(),
            }
        }
        (None, None) => Resolution {
            active: ActiveSet::initial(),
            trace: Vec::new(),
        },
    };
    debug!("Active nodes: {:?}", resolution.active.sorted());

    // --- 2. Recommend ---
    let recs = recommendations(&resolution.active);

    // --- 3. Render ---
    let config = match &cli.config {
        Some(path) => {
            RenderConfig::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
        }
        None => RenderConfig::default(),
    };
    let layout = standard_layout();
    layout
        .validate()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid layout: {}", e)));
    let diagram = DiagramRenderer::new(&layout)
        .with_config(config)
        .render(&resolution.active);

    // --- 4. Report ---
    match cli.format {
        ReportFormat::Text => print_text_report(&assessment, &resolution, &recs),
        ReportFormat::Json => {
            let report = Report {
                assessment: assessment.as_ref(),
                relevance: assessment.as_ref().map(PatientAssessment::relevance),
                path: assessment
                    .as_ref()
                    .map(|_| TraceFormatter::format_trace(&resolution)),
                trace: &resolution.trace,
                active: &resolution.active,
                recommendations: &recs,
            };
            let json = serde_json::to_string_pretty(&report)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode report: {}", e)));
            println!("{}", json);
        }
    }

    if cli.outline {
        println!("\n--- Pathway Outline ---");
        print!("{}", outline(&layout, &resolution.active));
    }

    // --- 5. Outputs ---
    if let Some(path) = &cli.svg {
        fs::write(path, diagram.as_svg()).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write SVG '{}': {}", path.display(), e))
        });
        println!("  -> Wrote flowchart SVG to '{}'", path.display());
    }
    if let Some(path) = &cli.png {
        neutropath::export::save_png(&diagram, path, cli.scale)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        println!("  -> Wrote flowchart PNG to '{}'", path.display());
    }
    if cli.copy {
        run_export(&diagram, &cli.fallback, cli.scale);
    }
}

fn print_text_report(
    assessment: &Option<PatientAssessment>,
    resolution: &Resolution,
    recs: &[Recommendation],
) {
    println!("{}", TITLE);
    println!("{}", CAPTION);

    if assessment.is_some() {
        println!("\n--- Pathway ---");
        println!("{}", TraceFormatter::format_trace(resolution));
        print!("{}", TraceFormatter::format_steps(resolution));
    }

    println!("\n--- Active Nodes ---");
    let ids: Vec<&str> = resolution.active.sorted().iter().map(|id| id.as_str()).collect();
    println!("{}", ids.join(", "));

    println!("\n--- Recommended Actions ---");
    if recs.is_empty() {
        println!("{}", EMPTY_STATE_MESSAGE);
    }
    for rec in recs {
        println!("{} {}", rec.icon, rec.title);
        println!("   {}", rec.detail);
    }

    println!("\n{}", DISCLAIMER);
}

fn run_export(diagram: &VectorDiagram, fallback: &Path, scale: f32) {
    let mut clipboard = SystemClipboard;
    let outcome = export_diagram(diagram, &mut clipboard, fallback, scale);
    match outcome.tone() {
        Tone::Success => println!("\n[ok] {}", outcome.message()),
        Tone::Info => println!("\n[info] {}", outcome.message()),
        Tone::Error => exit_with_error(&outcome.message()),
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
///
/// Questions are asked in pathway order and only while they still matter for
/// the answers given so far.
fn run_interactive() -> Option<PatientAssessment> {
    println!("--- {} Interactive Mode ---", TITLE);

    let mut assessment = PatientAssessment::default();
    assessment.fever = prompt_choice(
        "Fever status at 72-hour review (resolved/persistent)",
        "resolved",
    );
    assessment.neutropaenia = prompt_choice("Neutropaenia status (resolved/ongoing)", "ongoing");

    if assessment.relevance().micro_defined_infection {
        assessment.micro_defined_infection =
            prompt_yes_no("Microbiologically or clinically defined infection identified?");
    }
    if assessment.relevance().stability {
        assessment.stability = prompt_choice("Clinical stability (stable/unstable)", "stable");
    }
    if assessment.relevance().enterocolitis {
        assessment.enterocolitis = prompt_yes_no("Enterocolitis or significant mucositis present?");
    }
    if assessment.relevance().allo_sct {
        assessment.allo_sct = prompt_yes_no("Allo-SCT patient?");
    }
    println!();
    Some(assessment)
}

fn prompt_choice<T: std::str::FromStr<Err = InputError>>(prompt_text: &str, default: &str) -> T {
    loop {
        let answer = prompt_for_input(prompt_text, Some(default));
        match answer.parse::<T>() {
            Ok(value) => break value,
            Err(e) => println!("{}", e),
        }
    }
}

fn prompt_yes_no(prompt_text: &str) -> bool {
    loop {
        let answer = prompt_for_input(&format!("{} (y/n)", prompt_text), Some("n"));
        match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => break true,
            "n" | "no" => break false,
            _ => println!("Invalid choice. Please enter y or n."),
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout()
        .flush()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to flush stdout: {}", e)));

    io::stdin()
        .read_line(&mut line)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read line: {}", e)));
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_active_rejects_assessment_inputs() {
        for flag in [
            &["--fever", "persistent"][..],
            &["--assessment", "patient.json"],
            &["--micro-defined"],
            &["--allo-sct"],
            &["--human"],
        ] {
            let mut args = vec!["neutropath-cli", "--active", "header,review72"];
            args.extend_from_slice(flag);
            let result = Cli::try_parse_from(args);
            assert!(result.is_err(), "{:?} should conflict with --active", flag);
        }
    }

    #[test]
    fn test_active_alone_parses() {
        let cli = Cli::try_parse_from(["neutropath-cli", "--active", "header,stop_antibiotics"])
            .unwrap();
        assert_eq!(
            cli.active,
            Some(vec!["header".to_string(), "stop_antibiotics".to_string()])
        );
    }
}
