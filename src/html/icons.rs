//! Inline SVG icons for printed cards

use crate::core::{MoveType, RecoveryAction};

pub const STEP: &str = r#"<svg viewBox="0 0 100 100" class="type-icon">
        <path d="M30,50 L50,30 L70,50 L50,70 Z" fill="currentColor"/>
        <circle cx="30" cy="70" r="8" fill="currentColor"/>
        <circle cx="70" cy="70" r="8" fill="currentColor"/>
    </svg>"#;

pub const SPIN: &str = r#"<svg viewBox="0 0 100 100" class="type-icon">
        <path d="M50,20 Q80,50 50,80 Q20,50 50,20" fill="none" stroke="currentColor" stroke-width="4"/>
        <circle cx="50" cy="50" r="6" fill="currentColor"/>
        <path d="M70,35 L85,30 L80,45" fill="currentColor"/>
    </svg>"#;

pub const JUMP: &str = r#"<svg viewBox="0 0 100 100" class="type-icon">
        <path d="M50,20 L60,40 L50,35 L40,40 Z" fill="currentColor"/>
        <path d="M30,60 L50,45 L70,60" stroke="currentColor" stroke-width="4" fill="none"/>
        <line x1="30" y1="60" x2="30" y2="80" stroke="currentColor" stroke-width="3"/>
        <line x1="70" y1="60" x2="70" y2="80" stroke="currentColor" stroke-width="3"/>
    </svg>"#;

pub const POSE: &str = r#"<svg viewBox="0 0 100 100" class="type-icon">
        <circle cx="50" cy="30" r="12" fill="currentColor"/>
        <line x1="50" y1="42" x2="50" y2="65" stroke="currentColor" stroke-width="4"/>
        <line x1="50" y1="50" x2="30" y2="60" stroke="currentColor" stroke-width="4"/>
        <line x1="50" y1="50" x2="70" y2="40" stroke="currentColor" stroke-width="4"/>
        <line x1="50" y1="65" x2="35" y2="85" stroke="currentColor" stroke-width="4"/>
        <line x1="50" y1="65" x2="65" y2="85" stroke="currentColor" stroke-width="4"/>
    </svg>"#;

pub const FLOW: &str = r#"<svg viewBox="0 0 100 100" class="type-icon">
        <path d="M10,50 Q30,20 50,50 T90,50" fill="none" stroke="currentColor" stroke-width="4"/>
        <path d="M10,60 Q30,80 50,60 T90,60" fill="none" stroke="currentColor" stroke-width="3" opacity="0.6"/>
    </svg>"#;

pub const POP: &str = r#"<svg viewBox="0 0 100 100" class="type-icon">
        <rect x="35" y="35" width="30" height="30" fill="currentColor"/>
        <path d="M20,20 L30,30 M80,20 L70,30 M20,80 L30,70 M80,80 L70,70" stroke="currentColor" stroke-width="3"/>
        <circle cx="20" cy="20" r="4" fill="currentColor"/>
        <circle cx="80" cy="20" r="4" fill="currentColor"/>
        <circle cx="20" cy="80" r="4" fill="currentColor"/>
        <circle cx="80" cy="80" r="4" fill="currentColor"/>
    </svg>"#;

pub const STUMBLE: &str = r#"<svg viewBox="0 0 100 100" class="type-icon">
        <line x1="20" y1="20" x2="80" y2="80" stroke="currentColor" stroke-width="8"/>
        <line x1="80" y1="20" x2="20" y2="80" stroke="currentColor" stroke-width="8"/>
        <circle cx="50" cy="50" r="35" fill="none" stroke="currentColor" stroke-width="6"/>
    </svg>"#;

pub const STAMINA: &str = r#"<svg viewBox="0 0 100 100" class="recovery-icon">
            <circle cx="50" cy="50" r="35" fill="none" stroke="currentColor" stroke-width="6"/>
            <path d="M30,50 L45,35 L45,65 Z" fill="currentColor"/>
            <path d="M70,50 L55,35 L55,65 Z" fill="currentColor"/>
        </svg>"#;

pub const INSPIRATION: &str = r#"<svg viewBox="0 0 100 100" class="recovery-icon">
            <path d="M50,15 L58,45 L88,45 L63,63 L73,93 L50,75 L27,93 L37,63 L12,45 L42,45 Z" fill="currentColor"/>
        </svg>"#;

pub const REFINEMENT: &str = r#"<svg viewBox="0 0 100 100" class="recovery-icon">
            <rect x="20" y="20" width="60" height="60" fill="none" stroke="currentColor" stroke-width="6" rx="5"/>
            <line x1="30" y1="30" x2="70" y2="70" stroke="currentColor" stroke-width="6"/>
            <line x1="70" y1="30" x2="30" y2="70" stroke="currentColor" stroke-width="6"/>
        </svg>"#;

/// Icon for a move type; unknown types get no icon
pub fn type_icon(move_type: &MoveType) -> &'static str {
    match move_type {
        MoveType::Step => STEP,
        MoveType::Spin => SPIN,
        MoveType::Jump => JUMP,
        MoveType::Pose => POSE,
        MoveType::Flow => FLOW,
        MoveType::Pop => POP,
        MoveType::Other(_) => "",
    }
}

pub fn recovery_icon(action: RecoveryAction) -> &'static str {
    match action {
        RecoveryAction::Stamina => STAMINA,
        RecoveryAction::Inspiration => INSPIRATION,
        RecoveryAction::Refinement => REFINEMENT,
    }
}
