use std::path::PathBuf;

use serde_json::Value;

use di2d::api::decode;
use di2d::error::{ApiError, UNKNOWN_ERROR};
use di2d::render::{ComparisonSummary, ModelPanel, PanelBody, ResultSections};
use di2d::types::{ComparisonResult, DrawingAnalysisResult};
use di2d::upload::SelectedFile;
use di2d::workflow::{Phase, Workflow};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

fn load_result(name: &str) -> DrawingAnalysisResult {
    decode(&read_fixture(name)).expect("Fixture should decode")
}

/// Drop every null, empty array and empty object, innermost first.
fn strip_empty(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, strip_empty(v)))
                .filter(|(_, v)| !is_empty(v))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_empty).collect()),
        other => other,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn png() -> SelectedFile {
    SelectedFile::new("bracket.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
}

#[test]
fn test_bracket_example_renders_metrics_without_empty_sections() {
    let result = load_result("bracket_a1.json");
    let sections = ResultSections::from_result(&result);

    assert_eq!(sections.metadata.duration, "12.34s");
    assert_eq!(sections.metadata.confidence, "87%");
    assert_eq!(sections.metadata.model, "gpt-5.2");
    assert_eq!(sections.metadata.tokens, None);
    assert_eq!(sections.metadata.timestamp.as_deref(), Some("14.12.2025 10:22:33"));

    assert_eq!(sections.geometry.complexity, "4/10");
    assert!(sections.geometry.dimensions.is_none(), "Empty dimensions must not render");
    assert!(sections.geometry.features.is_none(), "Empty features must not render");

    assert!(sections.manufacturing.secondary_processes.is_none());
    assert!(sections.manufacturing.operations.is_none());
    assert!(sections.quality.is_none());
    assert!(sections.notes.is_none());
    assert!(sections.warnings.is_none());

    assert_eq!(sections.basics.len(), 1);
    assert_eq!(sections.basics[0].value, "Bracket A1");
}

#[test]
fn test_full_result_renders_every_section() {
    let result = load_result("flange_full.json");
    assert!(result.range_anomalies().is_empty());

    let sections = ResultSections::from_result(&result);
    assert_eq!(sections.metadata.tokens.as_deref(), Some("150.000"));

    let labels: Vec<&str> = sections.basics.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec!["Başlık", "Çizim No", "Revizyon", "Ölçek", "Malzeme", "Yoğunluk", "Yüzey İşlemi"]
    );
    assert_eq!(sections.basics[4].value, "AlMg3 (EN AW-5754)");
    assert_eq!(sections.basics[5].value, "2.67 g/cm³");
    assert_eq!(sections.basics[6].value, "anodize: Siyah eloksal");

    let dims = sections.geometry.dimensions.expect("dimensions present");
    assert_eq!(dims.len(), 2);
    assert_eq!(dims[0].name, "diameter");
    assert_eq!(dims[0].value, "120 mm");
    assert_eq!(dims[0].tolerance.as_deref(), Some("±0.1"));
    assert_eq!(dims[1].value, "12.5 mm");
    assert_eq!(dims[1].location.as_deref(), Some("kesit A-A"));

    let features = sections.geometry.features.expect("features present");
    assert_eq!(features[0].quantity, "×6");
    let hole_dims = features[0].dimensions.as_deref().unwrap_or_default();
    assert!(hole_dims.contains("diameter: 8.5"), "got {}", hole_dims);
    assert!(hole_dims.contains("depth: 12.5"), "got {}", hole_dims);
    assert_eq!(features[1].dimensions, None);
    assert_eq!(features[1].notes.as_deref(), Some("0.5x45°"));

    assert_eq!(sections.manufacturing.difficulty.badge_class(), "badge badge-danger");
    assert_eq!(sections.manufacturing.operations.map(|o| o.len()), Some(3));
    assert!(sections.manufacturing.special_requirements.is_none());

    let quality = sections.quality.expect("quality present");
    assert_eq!(quality.surface_finishes.unwrap()[0].roughness.as_deref(), Some("Ra: 0.8"));
    assert!(quality.inspection_notes.is_none());
    assert_eq!(quality.critical_dimensions, Some(vec!["diameter".to_string()]));

    let notes = sections.notes.expect("notes present");
    assert!(notes.general.is_some());
    assert!(notes.recommendations.is_none());
    assert_eq!(sections.warnings.map(|w| w.len()), Some(1));
}

#[test]
fn test_stripping_empty_fields_keeps_visible_sections() {
    for name in ["bracket_a1.json", "flange_full.json"] {
        let raw: Value = serde_json::from_str(&read_fixture(name)).unwrap();
        let original: DrawingAnalysisResult = serde_json::from_value(raw.clone()).unwrap();

        let stripped = strip_empty(raw);
        let reduced: DrawingAnalysisResult = serde_json::from_value(stripped)
            .unwrap_or_else(|e| panic!("{} failed to decode after stripping: {}", name, e));

        assert_eq!(
            ResultSections::from_result(&original),
            ResultSections::from_result(&reduced),
            "Visible sections changed for {}",
            name
        );
    }
}

#[test]
fn test_removing_optional_fields_only_hides_their_sections() {
    let mut raw: Value = serde_json::from_str(&read_fixture("flange_full.json")).unwrap();
    let obj = raw.as_object_mut().unwrap();
    for key in ["material", "surface_finish", "general_notes", "quality", "revision"] {
        obj.remove(key);
    }
    obj["metadata"].as_object_mut().unwrap().remove("tokens_used");

    let full = ResultSections::from_result(&load_result("flange_full.json"));
    let reduced = ResultSections::from_result(&serde_json::from_value(raw).unwrap());

    let labels: Vec<&str> = reduced.basics.iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["Başlık", "Çizim No", "Ölçek"]);
    assert!(reduced.quality.is_none());
    assert!(reduced.notes.is_none());
    assert!(reduced.metadata.tokens.is_none());

    // untouched sections are identical
    assert_eq!(full.geometry, reduced.geometry);
    assert_eq!(full.manufacturing, reduced.manufacturing);
    assert_eq!(full.warnings, reduced.warnings);
    assert_eq!(full.metadata.duration, reduced.metadata.duration);
}

#[test]
fn test_comparison_summary_and_panels() {
    let result: ComparisonResult = decode(&read_fixture("comparison.json")).unwrap();

    let summary = ComparisonSummary::from_result(&result);
    assert_eq!(summary.time_difference, "3.50s");
    assert_eq!(summary.faster_model, "🏆 Werk24 Professional");
    assert_eq!(summary.confidence_difference, "13.0%");
    assert_eq!(summary.higher_confidence, "🏆 Werk24 Professional");
    assert_eq!(summary.timestamp.as_deref(), Some("14.12.2025 11:05:00"));

    let first = ModelPanel::from_run(&result.model1);
    assert_eq!(first.title, "🏆 Werk24 Professional");
    assert_eq!(first.processing_time, "20.00s");
    assert_eq!(first.confidence, "95.0%");
    match first.body {
        PanelBody::Structured(analysis) => assert_eq!(analysis.title, "Bracket A1"),
        other => panic!("Expected structured analysis, got {:?}", other),
    }

    let second = ModelPanel::from_run(&result.model2);
    assert_eq!(second.title, "⭐ GPT-5.2");
    assert_eq!(second.provider, "OpenAI");
    assert_eq!(
        second.body,
        PanelBody::RawText("The drawing shows a flat bracket with two mounting holes.".to_string())
    );
}

#[test]
fn test_comparison_with_off_schema_analysis_shows_json() {
    let mut raw: Value = serde_json::from_str(&read_fixture("comparison.json")).unwrap();
    raw["model2"]["analysis"] = serde_json::json!({"parts": ["bracket"], "holes": 2});

    let result: ComparisonResult = serde_json::from_value(raw).unwrap();
    match ModelPanel::from_run(&result.model2).body {
        PanelBody::Json(json) => {
            assert!(json.contains("\"holes\": 2"), "got {}", json);
        }
        other => panic!("Expected JSON body, got {:?}", other),
    }
}

#[test]
fn test_network_failure_surfaces_verbatim() {
    let mut wf = Workflow::<DrawingAnalysisResult>::new();
    assert!(!wf.can_submit());
    assert!(wf.submit().is_none());

    wf.select_file(png());
    assert!(wf.can_submit());
    let ticket = wf.submit().expect("submit with a file");
    assert!(!wf.can_submit(), "Action must be disabled while submitting");

    let message: String = ApiError::Transport("Network Error".to_string()).into();
    assert!(wf.resolve(ticket, Err(message)));
    assert!(wf.error_message().unwrap_or_default().contains("Network Error"));
    assert!(wf.can_submit(), "Failure re-enables the action");

    let ticket = wf.submit().unwrap();
    let message: String = ApiError::Transport(String::new()).into();
    wf.resolve(ticket, Err(message));
    assert_eq!(wf.error_message(), Some(UNKNOWN_ERROR));
}

#[test]
fn test_reset_is_idempotent_from_success_and_failure() {
    let result = load_result("bracket_a1.json");

    let mut wf = Workflow::new();
    wf.select_file(png());
    let ticket = wf.submit().unwrap();
    wf.resolve(ticket, Ok(result));
    assert!(!wf.can_submit(), "Success only re-enables through reset");

    for _ in 0..2 {
        wf.reset();
        assert_eq!(wf.phase(), &Phase::Idle);
        assert!(wf.file().is_none());
        assert!(wf.preview().is_none());
    }

    let mut wf = Workflow::<DrawingAnalysisResult>::new();
    wf.select_file(png());
    let ticket = wf.submit().unwrap();
    wf.resolve(ticket, Err("boom".to_string()));
    wf.reset();
    assert_eq!(wf.phase(), &Phase::Idle);
    assert!(wf.file().is_none());
    assert!(wf.preview().is_none());
}

#[test]
fn test_response_after_reset_is_dropped() {
    let mut wf = Workflow::new();
    wf.select_file(png());
    let ticket = wf.submit().unwrap();
    wf.reset();

    assert!(!wf.resolve(ticket, Ok(load_result("bracket_a1.json"))));
    assert_eq!(wf.phase(), &Phase::Idle);
    assert!(wf.result().is_none());
}
