//! Display model for analysis and comparison results.
//!
//! Turns API payloads into the exact strings the components show. Every
//! optional field and empty list becomes `None` here, so the components only
//! check `Option`s and never need to know why a section is missing.

use chrono::{DateTime, NaiveDateTime};

use crate::options::model_display_name;
use crate::types::{ComparisonResult, DrawingAnalysisResult, ModelAnalysis, ModelRun};
use crate::workflow::Phase;

/// Round half away from zero. `{:.N}` alone rounds ties to even, so
/// `62.5` would print as `62` instead of `63`.
fn round_half_up(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// `12.34` -> `"12.34s"`.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.2}s", round_half_up(seconds, 2))
}

/// Fraction in [0, 1] as a percentage with the given number of decimals.
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, round_half_up(fraction * 100.0, decimals))
}

/// Group digits in threes with `.` as the Turkish locale does: `12345` -> `"12.345"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Server timestamps are ISO 8601, with or without an offset. Anything else
/// is shown as received.
pub fn format_timestamp(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    const DISPLAY: &str = "%d.%m.%Y %H:%M:%S";
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format(DISPLAY).to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format(DISPLAY).to_string());
    }
    Some(raw.to_string())
}

fn non_empty(items: &[String]) -> Option<Vec<String>> {
    (!items.is_empty()).then(|| items.to_vec())
}

/// Manufacturing difficulty, which picks the badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Unrecognized labels are treated as hard.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "kolay" | "easy" => Difficulty::Easy,
            "orta" | "medium" => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "badge badge-success",
            Difficulty::Medium => "badge badge-warning",
            Difficulty::Hard => "badge badge-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetadataSection {
    pub model: String,
    pub duration: String,
    pub confidence: String,
    pub tokens: Option<String>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionRow {
    pub name: String,
    pub value: String,
    pub tolerance: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub kind: String,
    pub quantity: String,
    /// `key: value` pairs of the feature's own dimensions, comma separated.
    pub dimensions: Option<String>,
    pub position: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySection {
    pub part_type: String,
    pub shape_type: String,
    pub complexity: String,
    pub dimensions: Option<Vec<DimensionRow>>,
    pub features: Option<Vec<FeatureRow>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManufacturingSection {
    pub primary_process: String,
    pub difficulty_label: String,
    pub difficulty: Difficulty,
    pub setup_count: String,
    pub secondary_processes: Option<Vec<String>>,
    pub operations: Option<Vec<String>>,
    pub special_requirements: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToleranceRow {
    pub kind: String,
    pub value: String,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceRow {
    pub kind: String,
    pub description: String,
    pub roughness: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QualitySection {
    pub tolerances: Option<Vec<ToleranceRow>>,
    pub surface_finishes: Option<Vec<SurfaceRow>>,
    pub inspection_notes: Option<Vec<String>>,
    pub critical_dimensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotesSection {
    pub general: Option<Vec<String>>,
    pub recommendations: Option<Vec<String>>,
}

/// Everything the results view shows for one [`DrawingAnalysisResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSections {
    pub metadata: MetadataSection,
    pub basics: Vec<InfoRow>,
    pub geometry: GeometrySection,
    pub manufacturing: ManufacturingSection,
    pub quality: Option<QualitySection>,
    pub notes: Option<NotesSection>,
    pub warnings: Option<Vec<String>>,
}

impl ResultSections {
    pub fn from_result(result: &DrawingAnalysisResult) -> Self {
        Self {
            metadata: metadata_section(result),
            basics: basic_rows(result),
            geometry: geometry_section(result),
            manufacturing: manufacturing_section(result),
            quality: quality_section(result),
            notes: notes_section(result),
            warnings: non_empty(&result.metadata.warnings),
        }
    }
}

fn metadata_section(result: &DrawingAnalysisResult) -> MetadataSection {
    let meta = &result.metadata;
    MetadataSection {
        model: meta.model_used.clone(),
        duration: format_seconds(meta.processing_time),
        confidence: format_percent(meta.confidence_score, 0),
        // zero tokens means the provider did not report usage
        tokens: meta.tokens_used.filter(|t| *t > 0).map(format_thousands),
        timestamp: format_timestamp(&meta.timestamp),
    }
}

fn basic_rows(result: &DrawingAnalysisResult) -> Vec<InfoRow> {
    let mut rows = vec![InfoRow {
        label: "Başlık",
        value: result.title.clone(),
    }];

    let optional = [
        ("Çizim No", result.drawing_number.as_ref()),
        ("Revizyon", result.revision.as_ref()),
        ("Ölçek", result.scale.as_ref()),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            rows.push(InfoRow {
                label,
                value: value.clone(),
            });
        }
    }

    if let Some(material) = &result.material {
        let value = match &material.standard {
            Some(standard) => format!("{} ({})", material.name, standard),
            None => material.name.clone(),
        };
        rows.push(InfoRow { label: "Malzeme", value });
        if let Some(hardness) = &material.hardness {
            rows.push(InfoRow {
                label: "Sertlik",
                value: hardness.clone(),
            });
        }
        if let Some(density) = material.density {
            rows.push(InfoRow {
                label: "Yoğunluk",
                value: format!("{} g/cm³", density),
            });
        }
    }

    if let Some(finish) = &result.surface_finish {
        rows.push(InfoRow {
            label: "Yüzey İşlemi",
            value: format!("{}: {}", finish.kind, finish.description),
        });
    }

    rows
}

fn geometry_section(result: &DrawingAnalysisResult) -> GeometrySection {
    let geometry = &result.geometry;

    let dimensions: Vec<DimensionRow> = geometry
        .overall_dimensions
        .iter()
        .map(|(name, dim)| DimensionRow {
            name: name.clone(),
            value: format!("{} {}", dim.value, dim.unit),
            tolerance: dim.tolerance.clone(),
            location: dim.location.clone(),
        })
        .collect();

    let features: Vec<FeatureRow> = geometry
        .features
        .iter()
        .map(|feature| {
            let dims = feature
                .dimensions
                .iter()
                .map(|(key, value)| match value {
                    serde_json::Value::String(s) => format!("{}: {}", key, s),
                    other => format!("{}: {}", key, other),
                })
                .collect::<Vec<_>>();
            FeatureRow {
                kind: feature.kind.clone(),
                quantity: format!("×{}", feature.quantity),
                dimensions: (!dims.is_empty()).then(|| dims.join(", ")),
                position: feature.position.clone(),
                notes: feature.notes.clone(),
            }
        })
        .collect();

    GeometrySection {
        part_type: geometry.part_type.clone(),
        shape_type: geometry.shape_type.clone(),
        complexity: format!("{}/10", geometry.complexity_score),
        dimensions: (!dimensions.is_empty()).then_some(dimensions),
        features: (!features.is_empty()).then_some(features),
    }
}

fn manufacturing_section(result: &DrawingAnalysisResult) -> ManufacturingSection {
    let mfg = &result.manufacturing;
    ManufacturingSection {
        primary_process: mfg.primary_process.clone(),
        difficulty_label: mfg.difficulty_level.clone(),
        difficulty: Difficulty::from_label(&mfg.difficulty_level),
        setup_count: mfg.setup_count.to_string(),
        secondary_processes: non_empty(&mfg.secondary_processes),
        operations: non_empty(&mfg.estimated_operations),
        special_requirements: non_empty(&mfg.special_requirements),
    }
}

fn quality_section(result: &DrawingAnalysisResult) -> Option<QualitySection> {
    let quality = &result.quality;

    let tolerances: Vec<ToleranceRow> = quality
        .tolerances
        .iter()
        .map(|tol| ToleranceRow {
            kind: tol.kind.clone(),
            value: tol.value.clone(),
            reference: tol.reference.clone(),
        })
        .collect();

    let surfaces: Vec<SurfaceRow> = quality
        .surface_finishes
        .iter()
        .map(|sf| SurfaceRow {
            kind: sf.kind.clone(),
            description: sf.description.clone(),
            roughness: sf.roughness.as_ref().map(|ra| format!("Ra: {}", ra)),
        })
        .collect();

    let section = QualitySection {
        tolerances: (!tolerances.is_empty()).then_some(tolerances),
        surface_finishes: (!surfaces.is_empty()).then_some(surfaces),
        inspection_notes: non_empty(&quality.inspection_notes),
        critical_dimensions: non_empty(&quality.critical_dimensions),
    };

    let has_any = section.tolerances.is_some()
        || section.surface_finishes.is_some()
        || section.inspection_notes.is_some()
        || section.critical_dimensions.is_some();
    has_any.then_some(section)
}

fn notes_section(result: &DrawingAnalysisResult) -> Option<NotesSection> {
    let general = non_empty(&result.general_notes);
    let recommendations = non_empty(&result.design_recommendations);
    if general.is_none() && recommendations.is_none() {
        return None;
    }
    Some(NotesSection {
        general,
        recommendations,
    })
}

// -- Comparison --

/// Head-to-head card contents, taken verbatim from `comparison_notes`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSummary {
    pub time_difference: String,
    pub faster_model: String,
    pub confidence_difference: String,
    pub higher_confidence: String,
    pub timestamp: Option<String>,
}

impl ComparisonSummary {
    pub fn from_result(result: &ComparisonResult) -> Self {
        let notes = &result.comparison_notes;
        Self {
            time_difference: format_seconds(notes.time_difference),
            faster_model: model_display_name(&notes.faster_model),
            confidence_difference: format_percent(notes.confidence_difference, 1),
            higher_confidence: model_display_name(&notes.higher_confidence),
            timestamp: format_timestamp(&result.timestamp),
        }
    }
}

/// What a comparison panel shows under the metrics.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    /// Analysis matching the result schema
    Structured(Box<DrawingAnalysisResult>),
    /// Analysis present but not in schema shape, pretty-printed
    Json(String),
    /// No usable analysis; the model's raw text
    RawText(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelPanel {
    pub title: String,
    pub provider: String,
    pub processing_time: String,
    pub confidence: String,
    pub body: PanelBody,
}

impl ModelPanel {
    pub fn from_run(run: &ModelRun) -> Self {
        let body = match &run.analysis {
            Some(ModelAnalysis::Structured(result)) => PanelBody::Structured(result.clone()),
            Some(analysis) if !analysis.is_empty() => PanelBody::Json(analysis.to_pretty_json()),
            _ => PanelBody::RawText(run.raw_response.clone()),
        };
        Self {
            title: model_display_name(&run.name),
            provider: run.provider.clone(),
            processing_time: format_seconds(run.processing_time),
            confidence: format_percent(run.confidence, 1),
            body,
        }
    }
}

// -- Status --

/// Banner shown under the action buttons: `(css class, text)`.
pub fn status_banner<T>(phase: &Phase<T>, pending: &str, done: &str) -> Option<(&'static str, String)> {
    match phase {
        Phase::Idle => None,
        Phase::Submitting => Some(("status-message status-loading", pending.to_string())),
        Phase::Success(_) => Some(("status-message status-success", done.to_string())),
        Phase::Failure(message) => Some(("status-message status-error", format!("Hata: {}", message))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_banner_per_phase() {
        let idle: Phase<()> = Phase::Idle;
        assert_eq!(status_banner(&idle, "wait", "done"), None);

        let (class, text) = status_banner(&Phase::<()>::Submitting, "wait", "done").unwrap();
        assert_eq!(class, "status-message status-loading");
        assert_eq!(text, "wait");

        let (_, text) = status_banner(&Phase::Success(()), "wait", "done").unwrap();
        assert_eq!(text, "done");

        let failure: Phase<()> = Phase::Failure("Network Error".to_string());
        let (class, text) = status_banner(&failure, "wait", "done").unwrap();
        assert_eq!(class, "status-message status-error");
        assert_eq!(text, "Hata: Network Error");
    }

    #[test]
    fn test_format_seconds_and_percent() {
        assert_eq!(format_seconds(12.34), "12.34s");
        assert_eq!(format_seconds(3.5), "3.50s");
        assert_eq!(format_percent(0.87, 0), "87%");
        assert_eq!(format_percent(0.035, 1), "3.5%");
    }

    #[test]
    fn test_format_rounds_ties_up() {
        assert_eq!(format_percent(0.625, 0), "63%");
        assert_eq!(format_percent(0.125, 0), "13%");
        assert_eq!(format_seconds(1.125), "1.13s");
        assert_eq!(format_seconds(0.375), "0.38s");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(150000), "150.000");
        assert_eq!(format_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2025-12-14T10:22:33.123456").as_deref(),
            Some("14.12.2025 10:22:33")
        );
        assert_eq!(
            format_timestamp("2025-12-14T10:22:33+03:00").as_deref(),
            Some("14.12.2025 10:22:33")
        );
        assert_eq!(format_timestamp("yesterday").as_deref(), Some("yesterday"));
        assert_eq!(format_timestamp(""), None);
    }

    #[test]
    fn test_difficulty_badges() {
        assert_eq!(Difficulty::from_label("kolay"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("Orta"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("zor"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("???"), Difficulty::Hard);
        assert_eq!(Difficulty::Medium.badge_class(), "badge badge-warning");
    }
}
