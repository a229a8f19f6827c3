//! HTML fragments for single cards

use crate::core::{CardKind, Judge, Move, Rhythm, Stumble};
use crate::html::icons;
use crate::layout::PrintedCard;
use html_escape::encode_text;

/// Filler for unused grid cells
pub const EMPTY_CELL: &str = "<div></div>";

pub fn render_card(card: &PrintedCard<'_>) -> String {
    match card {
        PrintedCard::Move(m) => move_card(m),
        PrintedCard::Rhythm(r) => rhythm_card(r),
        PrintedCard::Judge(j) => judge_card(j),
        PrintedCard::Stumble => stumble_card(),
    }
}

pub fn move_card(mv: &Move) -> String {
    format!(
        r#"
    <div class="card move-card">
        <div class="card-header" style="{header_style}">
            <div class="card-name">{name}</div>
        </div>
        <div class="card-body">
            <div class="card-image">
                {type_icon}
            </div>
            <div class="card-stats">
                <div class="stat-row technique-row">
                    <span class="stat-label">Technique</span>
                    <span class="stat-value technique-value">{cost}</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">Type</span>
                    <span class="stat-value">{move_type}</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">Style</span>
                    <span class="stat-value">{style}</span>
                </div>
                <div class="stat-row bonus-row">
                    <span class="stat-label">Bonus</span>
                    <span class="stat-value bonus-value">+{bonus}</span>
                </div>
                <div class="stat-row recovery-row">
                    <span class="stat-label-recovery">{recovery_icon}</span>
                    <span class="stat-value recovery-value">{recovery}</span>
                </div>
            </div>
        </div>
    </div>"#,
        header_style = mv.style.css_background(),
        name = encode_text(&mv.name),
        type_icon = icons::type_icon(&mv.move_type),
        cost = mv.cost,
        move_type = encode_text(mv.move_type.as_str()),
        style = encode_text(&mv.style.display_name()),
        bonus = mv.bonus,
        recovery_icon = icons::recovery_icon(mv.recovery),
        recovery = encode_text(mv.recovery.description()),
    )
}

pub fn rhythm_card(rhythm: &Rhythm) -> String {
    let section = |class: &str, text: &Option<String>| match text {
        Some(t) => format!(r#"<div class="{class}">{}</div>"#, encode_text(t)),
        None => String::new(),
    };
    format!(
        r#"
    <div class="card rhythm-card {blank}">
        <div class="card-header rhythm-header">
            <div class="card-name">{name}</div>
        </div>
        <div class="card-body rhythm-body">
            {effect}
            {condition}
            {flavor}
        </div>
    </div>"#,
        blank = if rhythm.is_blank() { "blank-rhythm" } else { "" },
        name = encode_text(&rhythm.name),
        effect = section("rhythm-effect", &rhythm.effect),
        condition = section("rhythm-condition", &rhythm.condition),
        flavor = section("rhythm-flavor", &rhythm.flavor_text),
    )
}

pub fn judge_card(judge: &Judge) -> String {
    format!(
        r#"
    <div class="card judge-card">
        <div class="card-header judge-header">
            <div class="judge-name">{name}</div>
            <div class="judge-title">{title}</div>
            <div class="judge-difficulty">{stars}</div>
        </div>
        <div class="card-body judge-body">
            <div class="judge-quote">"{quote}"</div>
            <div class="judge-requirement">
                <strong>Requirement:</strong><br/>
                {requirement}
            </div>
            <div class="judge-reward">
                <strong>Reward:</strong> +{reward} points
            </div>
            <div class="judge-ongoing">
                <strong>Ongoing:</strong><br/>
                {ongoing}
            </div>
        </div>
    </div>"#,
        name = encode_text(&judge.name),
        title = encode_text(&judge.title),
        stars = judge.stars(),
        quote = encode_text(&judge.flavor_quote),
        requirement = encode_text(&judge.requirement),
        reward = judge.reward_points,
        ongoing = encode_text(&judge.ongoing_effect),
    )
}

/// Stumble cards reuse the move-card layout with every stat zeroed
pub fn stumble_card() -> String {
    format!(
        r#"
    <div class="card move-card stumble-card">
        <div class="card-header stumble-header">
            <div class="card-name">{name}</div>
        </div>
        <div class="card-body">
            <div class="card-image">
                {icon}
            </div>
            <div class="card-stats">
                <div class="stat-row technique-row">
                    <span class="stat-label">Technique</span>
                    <span class="stat-value technique-value">0</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">Type</span>
                    <span class="stat-value stumble-text">—</span>
                </div>
                <div class="stat-row">
                    <span class="stat-label">Style</span>
                    <span class="stat-value stumble-text">—</span>
                </div>
                <div class="stat-row bonus-row stumble-bonus-row">
                    <span class="stat-label">Bonus</span>
                    <span class="stat-value bonus-value stumble-text">+0</span>
                </div>
                <div class="stat-row stumble-penalty-row">
                    <span class="stat-value stumble-penalty">{penalty}</span>
                </div>
            </div>
        </div>
    </div>"#,
        name = Stumble::NAME,
        icon = icons::STUMBLE,
        penalty = Stumble::PENALTY,
    )
}

pub fn card_back(kind: CardKind) -> String {
    format!(
        r#"
    <div class="card card-back {slug}-back" style="background-color: {color};">
        <div class="back-content">
            <div class="back-title">Beat by Beat</div>
            <div class="back-type">{title}</div>
        </div>
    </div>"#,
        slug = kind.slug(),
        color = kind.back_color(),
        title = kind.title(),
    )
}
