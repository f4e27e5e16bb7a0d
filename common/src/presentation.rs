//! 判定結果の表示用変換

use crate::types::{Classification, VerdictResult};

/// 判定バッジの表示区分
///
/// `AI_GENERATED` 以外はすべて `Human` 扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCategory {
    Ai,
    Human,
}

impl BadgeCategory {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeCategory::Ai => "ai",
            BadgeCategory::Human => "human",
        }
    }
}

impl From<&Classification> for BadgeCategory {
    fn from(classification: &Classification) -> Self {
        match classification {
            Classification::AiGenerated => BadgeCategory::Ai,
            _ => BadgeCategory::Human,
        }
    }
}

/// 信頼度をパーセントに変換（四捨五入、0〜100に収める）
pub fn confidence_percent(score: f64) -> u32 {
    if !score.is_finite() {
        return 0;
    }
    (score * 100.0 + 0.5).floor().clamp(0.0, 100.0) as u32
}

/// バッジのラベル（最初の `_` のみ空白に置換）
pub fn classification_label(classification: &Classification) -> String {
    classification.as_str().replacen('_', " ", 1)
}

/// 結果パネルの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictView {
    pub language: String,
    pub badge_label: String,
    pub badge: BadgeCategory,
    pub confidence_percent: u32,
    pub explanation: String,
}

impl VerdictView {
    pub fn badge_class(&self) -> String {
        format!("result-value classification-badge {}", self.badge.css_class())
    }

    pub fn confidence_text(&self) -> String {
        format!("{}%", self.confidence_percent)
    }

    /// バーの幅（CSS `width` 値）
    pub fn bar_width(&self) -> String {
        format!("{}%", self.confidence_percent)
    }
}

impl From<&VerdictResult> for VerdictView {
    fn from(result: &VerdictResult) -> Self {
        Self {
            language: result.language.clone(),
            badge_label: classification_label(&result.classification),
            badge: BadgeCategory::from(&result.classification),
            confidence_percent: confidence_percent(result.confidence_score),
            explanation: result.explanation.clone(),
        }
    }
}
