//! Class helpers shared by pages. The classes live in `assets/main.css`.

// ============================================
// BUTTONS
// ============================================

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "nav-btn active"
    } else {
        "nav-btn"
    }
}

pub fn chip(active: bool) -> &'static str {
    if active {
        "chip active"
    } else {
        "chip"
    }
}

pub fn btn_primary(busy: bool) -> &'static str {
    if busy {
        "btn btn-primary busy"
    } else {
        "btn btn-primary"
    }
}

pub const BTN_GHOST: &str = "btn btn-ghost";
pub const BTN_WARN: &str = "btn btn-warn";

// ============================================
// LAYOUT / TEXT
// ============================================

pub const PANEL: &str = "panel";
pub const PANEL_TITLE: &str = "panel-title";
pub const FIELD_LABEL: &str = "field-label";
pub const INPUT: &str = "input";
pub const MUTED: &str = "muted";

// ============================================
// TONES
// ============================================

/// Traffic-light colouring for 0-100 scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Good,
    Watch,
    Poor,
    Neutral,
}

impl Tone {
    pub fn for_score(score: f64) -> Self {
        match score {
            s if s >= 70.0 => Tone::Good,
            s if s >= 40.0 => Tone::Watch,
            s if s > 0.0 => Tone::Poor,
            _ => Tone::Neutral,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Tone::Good => "badge tone-good",
            Tone::Watch => "badge tone-watch",
            Tone::Poor => "badge tone-poor",
            Tone::Neutral => "badge tone-neutral",
        }
    }

    pub fn fill(&self) -> &'static str {
        match self {
            Tone::Good => "score-fill tone-good",
            Tone::Watch => "score-fill tone-watch",
            Tone::Poor => "score-fill tone-poor",
            Tone::Neutral => "score-fill tone-neutral",
        }
    }
}

pub fn stars(rating: f32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {rating:.1}", "★".repeat(full), "☆".repeat(5 - full))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_buckets() {
        assert_eq!(Tone::for_score(85.0), Tone::Good);
        assert_eq!(Tone::for_score(70.0), Tone::Good);
        assert_eq!(Tone::for_score(55.0), Tone::Watch);
        assert_eq!(Tone::for_score(10.0), Tone::Poor);
        assert_eq!(Tone::for_score(0.0), Tone::Neutral);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.4), "★★★★☆ 4.4");
        assert_eq!(stars(4.6), "★★★★★ 4.6");
    }
}
