//! Client-selectable analysis options and their wire values.

use serde::{Deserialize, Serialize};

/// Token budget sent with every single analysis.
pub const MAX_TOKENS: u32 = 150_000;

/// Models offered by the analysis API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisModel {
    #[serde(rename = "werk24-professional")]
    Werk24Professional,
    #[default]
    #[serde(rename = "gpt-5.2")]
    Gpt52,
    #[serde(rename = "gpt-5.2-chat")]
    Gpt52Chat,
    #[serde(rename = "gpt-4-vision-preview")]
    Gpt4Vision,
    #[serde(rename = "claude-3-5-sonnet-20241022")]
    Claude35Sonnet,
}

impl AnalysisModel {
    pub const ALL: [AnalysisModel; 5] = [
        AnalysisModel::Werk24Professional,
        AnalysisModel::Gpt52,
        AnalysisModel::Gpt52Chat,
        AnalysisModel::Gpt4Vision,
        AnalysisModel::Claude35Sonnet,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AnalysisModel::Werk24Professional => "werk24-professional",
            AnalysisModel::Gpt52 => "gpt-5.2",
            AnalysisModel::Gpt52Chat => "gpt-5.2-chat",
            AnalysisModel::Gpt4Vision => "gpt-4-vision-preview",
            AnalysisModel::Claude35Sonnet => "claude-3-5-sonnet-20241022",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AnalysisModel::Werk24Professional => "🏆 Werk24 Professional",
            AnalysisModel::Gpt52 => "⭐ GPT-5.2",
            AnalysisModel::Gpt52Chat => "GPT-5.2 Chat",
            AnalysisModel::Gpt4Vision => "GPT-4 Vision",
            AnalysisModel::Claude35Sonnet => "Claude 3.5 Sonnet",
        }
    }

    /// Label in the single-analysis model picker.
    pub fn option_label(self) -> &'static str {
        match self {
            AnalysisModel::Gpt52 => "⭐ GPT-5.2 (Yeni!) - Önerilen",
            AnalysisModel::Gpt4Vision => "GPT-4 Vision (Legacy)",
            other => other.display_name(),
        }
    }

    /// Hint shown under the model picker, if any.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            AnalysisModel::Werk24Professional => Some("✅ Profesyonel servis - En yüksek doğruluk"),
            AnalysisModel::Gpt52 => Some("🚀 Aralık 2025 - xHigh reasoning, Responses API"),
            _ => None,
        }
    }

    pub fn provider(self) -> &'static str {
        match self {
            AnalysisModel::Werk24Professional => "Werk24",
            AnalysisModel::Gpt52 | AnalysisModel::Gpt52Chat | AnalysisModel::Gpt4Vision => "OpenAI",
            AnalysisModel::Claude35Sonnet => "Anthropic",
        }
    }

    /// The provider runs its own pipeline and ignores reasoning/enhancement knobs.
    pub fn is_fully_managed(self) -> bool {
        matches!(self, AnalysisModel::Werk24Professional)
    }

    /// GPT-5 family models keep chain-of-thought at `xhigh`.
    pub fn is_gpt5(self) -> bool {
        self.id().starts_with("gpt-5")
    }
}

/// Display name for a model id as sent by the server. Unknown ids pass through.
pub fn model_display_name(id: &str) -> String {
    AnalysisModel::from_id(id)
        .map(|m| m.display_name().to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Server-side analysis depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningLevel {
    Low,
    Medium,
    #[default]
    High,
    #[serde(rename = "xhigh")]
    VeryHigh,
}

impl ReasoningLevel {
    pub const ALL: [ReasoningLevel; 4] = [
        ReasoningLevel::Low,
        ReasoningLevel::Medium,
        ReasoningLevel::High,
        ReasoningLevel::VeryHigh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReasoningLevel::Low => "low",
            ReasoningLevel::Medium => "medium",
            ReasoningLevel::High => "high",
            ReasoningLevel::VeryHigh => "xhigh",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }

    /// Label with the rough latency the server needs at this level.
    pub fn label(self) -> &'static str {
        match self {
            ReasoningLevel::Low => "Basit (~30sn)",
            ReasoningLevel::Medium => "Hızlı (~1-2 dk)",
            ReasoningLevel::High => "Detaylı (~2-3 dk) ⭐",
            ReasoningLevel::VeryHigh => "Çok Detaylı (~5+ dk) - GPT-5.2",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            ReasoningLevel::Low => "Basit",
            ReasoningLevel::Medium => "Hızlı",
            ReasoningLevel::High => "Detaylı ⭐",
            ReasoningLevel::VeryHigh => "Çok Detaylı",
        }
    }
}

/// Server-side image preprocessing aggressiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhanceMode {
    Fast,
    #[default]
    Balanced,
    Aggressive,
}

impl EnhanceMode {
    pub const ALL: [EnhanceMode; 3] = [EnhanceMode::Fast, EnhanceMode::Balanced, EnhanceMode::Aggressive];

    pub fn as_str(self) -> &'static str {
        match self {
            EnhanceMode::Fast => "fast",
            EnhanceMode::Balanced => "balanced",
            EnhanceMode::Aggressive => "aggressive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            EnhanceMode::Fast => "Hızlı",
            EnhanceMode::Balanced => "Dengeli ⭐",
            EnhanceMode::Aggressive => "Agresif",
        }
    }
}

/// Options for `/api/analysis/analyze`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub model: AnalysisModel,
    pub reasoning_level: ReasoningLevel,
    pub enhance_mode: EnhanceMode,
}

impl AnalyzeOptions {
    /// Multipart text fields, in the order they are appended after `file`.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("model", self.model.id().to_string()),
            ("reasoning_level", self.reasoning_level.as_str().to_string()),
            ("enhance_mode", self.enhance_mode.as_str().to_string()),
            ("max_tokens", MAX_TOKENS.to_string()),
        ]
    }
}

/// Options for `/api/analysis/compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    pub model1: AnalysisModel,
    pub model2: AnalysisModel,
    pub reasoning_level: ReasoningLevel,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            model1: AnalysisModel::Werk24Professional,
            model2: AnalysisModel::Gpt52,
            reasoning_level: ReasoningLevel::High,
        }
    }
}

impl CompareOptions {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("model1", self.model1.id().to_string()),
            ("model2", self.model2.id().to_string()),
            ("reasoning_level", self.reasoning_level.as_str().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let opts = AnalyzeOptions::default();
        assert_eq!(opts.model, AnalysisModel::Gpt52);
        assert_eq!(opts.reasoning_level, ReasoningLevel::High);
        assert_eq!(opts.enhance_mode, EnhanceMode::Balanced);
    }

    #[test]
    fn test_analyze_form_fields() {
        let fields = AnalyzeOptions::default().form_fields();
        assert_eq!(
            fields,
            vec![
                ("model", "gpt-5.2".to_string()),
                ("reasoning_level", "high".to_string()),
                ("enhance_mode", "balanced".to_string()),
                ("max_tokens", "150000".to_string()),
            ]
        );
    }

    #[test]
    fn test_compare_defaults_pair_managed_with_general() {
        let opts = CompareOptions::default();
        assert!(opts.model1.is_fully_managed());
        assert!(!opts.model2.is_fully_managed());

        let fields = opts.form_fields();
        assert_eq!(fields[0], ("model1", "werk24-professional".to_string()));
        assert_eq!(fields[1], ("model2", "gpt-5.2".to_string()));
        assert_eq!(fields[2], ("reasoning_level", "high".to_string()));
    }

    #[test]
    fn test_model_ids_round_trip() {
        for model in AnalysisModel::ALL {
            assert_eq!(AnalysisModel::from_id(model.id()), Some(model));
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{}\"", model.id()));
        }
    }

    #[test]
    fn test_unknown_model_display_name_passes_through() {
        assert_eq!(model_display_name("werk24-professional"), "🏆 Werk24 Professional");
        assert_eq!(model_display_name("mystery-model"), "mystery-model");
    }

    #[test]
    fn test_very_high_reasoning_wire_value() {
        assert_eq!(ReasoningLevel::VeryHigh.as_str(), "xhigh");
        assert_eq!(ReasoningLevel::parse("xhigh"), Some(ReasoningLevel::VeryHigh));
        assert_eq!(ReasoningLevel::parse("extreme"), None);
        assert_eq!(serde_json::to_string(&ReasoningLevel::VeryHigh).unwrap(), "\"xhigh\"");
    }

    #[test]
    fn test_gpt5_family() {
        assert!(AnalysisModel::Gpt52.is_gpt5());
        assert!(AnalysisModel::Gpt52Chat.is_gpt5());
        assert!(!AnalysisModel::Claude35Sonnet.is_gpt5());
    }

    #[test]
    fn test_picker_labels_and_hints() {
        assert_eq!(AnalysisModel::Gpt52.option_label(), "⭐ GPT-5.2 (Yeni!) - Önerilen");
        assert_eq!(AnalysisModel::Claude35Sonnet.option_label(), "Claude 3.5 Sonnet");
        assert!(AnalysisModel::Werk24Professional.hint().is_some());
        assert_eq!(AnalysisModel::Gpt52Chat.hint(), None);
    }
}
