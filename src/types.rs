//! Type definitions for the DI-2D analysis API.
//!
//! These mirror the JSON bodies returned by `/api/analysis/*`. Collections
//! default to empty so a sparse payload still decodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single measured dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionInfo {
    pub value: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub tolerance: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

fn default_unit() -> String {
    "mm".to_string()
}

/// A machined feature (hole, pocket, slot, groove, fillet, chamfer...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: u32,
    /// Named sub-dimensions, left as raw JSON since the server does not fix their shape.
    #[serde(default)]
    pub dimensions: serde_json::Map<String, Value>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialInfo {
    pub name: String,
    #[serde(default)]
    pub standard: Option<String>,
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub hardness: Option<String>,
}

/// Surface treatment (anodize, paint, coating, plating...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFinishInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub roughness: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryAnalysis {
    pub part_type: String,
    pub shape_type: String,
    /// Keyed by dimension name. Rendered in key order.
    #[serde(default)]
    pub overall_dimensions: BTreeMap<String, DimensionInfo>,
    #[serde(default)]
    pub features: Vec<FeatureInfo>,
    /// 0-10 scale.
    pub complexity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturingAnalysis {
    pub primary_process: String,
    #[serde(default)]
    pub secondary_processes: Vec<String>,
    pub setup_count: u32,
    #[serde(default)]
    pub estimated_operations: Vec<String>,
    /// "kolay", "orta" or "zor" (see [`crate::render::Difficulty`]).
    pub difficulty_level: String,
    #[serde(default)]
    pub special_requirements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityRequirements {
    #[serde(default)]
    pub tolerances: Vec<ToleranceInfo>,
    #[serde(default)]
    pub surface_finishes: Vec<SurfaceFinishInfo>,
    #[serde(default)]
    pub inspection_notes: Vec<String>,
    #[serde(default)]
    pub critical_dimensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub model_used: String,
    /// Seconds.
    pub processing_time: f64,
    /// Always in [0, 1]; display code scales to percent.
    pub confidence_score: f64,
    #[serde(default)]
    pub tokens_used: Option<u64>,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub timestamp: String,
}

/// Full result of a single drawing analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingAnalysisResult {
    pub title: String,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub drawing_number: Option<String>,
    #[serde(default)]
    pub scale: Option<String>,
    #[serde(default)]
    pub material: Option<MaterialInfo>,
    #[serde(default)]
    pub surface_finish: Option<SurfaceFinishInfo>,
    pub geometry: GeometryAnalysis,
    pub manufacturing: ManufacturingAnalysis,
    #[serde(default)]
    pub quality: QualityRequirements,
    #[serde(default)]
    pub general_notes: Vec<String>,
    #[serde(default)]
    pub design_recommendations: Vec<String>,
    pub metadata: AnalysisMetadata,
    /// Unparsed model output kept by the server for debugging.
    #[serde(default)]
    pub raw_response: Option<Value>,
}

impl DrawingAnalysisResult {
    /// Values outside their documented ranges. These are reported, not rejected.
    pub fn range_anomalies(&self) -> Vec<String> {
        let mut anomalies = Vec::new();
        let confidence = self.metadata.confidence_score;
        if !(0.0..=1.0).contains(&confidence) {
            anomalies.push(format!("confidence_score {} outside [0, 1]", confidence));
        }
        let complexity = self.geometry.complexity_score;
        if !(0.0..=10.0).contains(&complexity) {
            anomalies.push(format!("complexity_score {} outside [0, 10]", complexity));
        }
        if self.manufacturing.setup_count == 0 {
            anomalies.push("setup_count is 0".to_string());
        }
        anomalies
    }
}

/// The analysis slot of a comparison run.
///
/// The server does not guarantee this matches [`DrawingAnalysisResult`], so
/// anything that fails to decode is kept as opaque JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelAnalysis {
    Structured(Box<DrawingAnalysisResult>),
    Raw(Value),
}

impl ModelAnalysis {
    /// True for `null`, `{}` and `[]`.
    pub fn is_empty(&self) -> bool {
        match self {
            ModelAnalysis::Structured(_) => false,
            ModelAnalysis::Raw(Value::Null) => true,
            ModelAnalysis::Raw(Value::Object(map)) => map.is_empty(),
            ModelAnalysis::Raw(Value::Array(items)) => items.is_empty(),
            ModelAnalysis::Raw(_) => false,
        }
    }

    pub fn as_structured(&self) -> Option<&DrawingAnalysisResult> {
        match self {
            ModelAnalysis::Structured(result) => Some(result.as_ref()),
            ModelAnalysis::Raw(_) => None,
        }
    }

    /// Pretty-printed JSON of whichever variant is held.
    pub fn to_pretty_json(&self) -> String {
        let rendered = match self {
            ModelAnalysis::Structured(result) => serde_json::to_string_pretty(result),
            ModelAnalysis::Raw(value) => serde_json::to_string_pretty(value),
        };
        rendered.unwrap_or_default()
    }
}

/// One side of a model comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ModelRunWire")]
pub struct ModelRun {
    pub name: String,
    pub provider: String,
    pub processing_time: f64,
    pub confidence: f64,
    pub analysis: Option<ModelAnalysis>,
    pub raw_response: String,
}

/// The server names the analysis slot `result`; older builds used
/// `analysis`. Both are read and a non-empty `analysis` wins.
#[derive(Deserialize)]
struct ModelRunWire {
    name: String,
    #[serde(default)]
    provider: String,
    processing_time: f64,
    confidence: f64,
    #[serde(default)]
    analysis: Option<ModelAnalysis>,
    #[serde(default)]
    result: Option<ModelAnalysis>,
    #[serde(default)]
    raw_response: String,
}

impl From<ModelRunWire> for ModelRun {
    fn from(wire: ModelRunWire) -> Self {
        let analysis = match (wire.analysis, wire.result) {
            (Some(a), Some(r)) if a.is_empty() => Some(r),
            (Some(a), _) => Some(a),
            (None, r) => r,
        };
        Self {
            name: wire.name,
            provider: wire.provider,
            processing_time: wire.processing_time,
            confidence: wire.confidence,
            analysis,
            raw_response: wire.raw_response,
        }
    }
}

/// Head-to-head figures computed by the server. Displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonNotes {
    pub time_difference: f64,
    pub confidence_difference: f64,
    pub faster_model: String,
    pub higher_confidence: String,
}

/// Response of `/api/analysis/compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub file_info: Option<Value>,
    pub model1: ModelRun,
    pub model2: ModelRun,
    pub comparison_notes: ComparisonNotes,
}

/// Response of `/api/analysis/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Provider name -> client configured on the server.
    #[serde(default)]
    pub models_available: BTreeMap<String, bool>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// One entry of `/api/analysis/models`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub models: Vec<ModelInfo>,
    #[serde(default)]
    pub total: usize,
}
