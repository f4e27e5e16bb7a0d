//! 判定結果の端末出力

use bharatvox_common::{BadgeCategory, VerdictView};

const BAR_WIDTH: usize = 20;

/// 信頼度バー（パーセントに比例）
pub fn confidence_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

pub fn badge_marker(badge: BadgeCategory) -> &'static str {
    match badge {
        BadgeCategory::Ai => "🤖",
        BadgeCategory::Human => "🧑",
    }
}

pub fn render_verdict(view: &VerdictView) -> String {
    format!(
        "Language:       {}\n\
         Classification: {} {}\n\
         Confidence:     {} {}\n\
         Explanation:    {}",
        view.language,
        badge_marker(view.badge),
        view.badge_label,
        view.confidence_text(),
        confidence_bar(view.confidence_percent),
        view.explanation,
    )
}
