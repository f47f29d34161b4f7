//! Mapping of free-text statuses onto presentation tones and pin colors.

use egui::Color32;

/// Presentation category shared by badges and urgency chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Positive,
    Informational,
    Neutral,
    Caution,
    Critical,
}

#[cfg(test)]
impl StatusTone {
    pub const ALL: [StatusTone; 5] = [
        StatusTone::Positive,
        StatusTone::Informational,
        StatusTone::Neutral,
        StatusTone::Caution,
        StatusTone::Critical,
    ];
}

/// Badge tone for any status text. Case-insensitive; unknown text is neutral.
pub fn status_tone(status: &str) -> StatusTone {
    match status.to_lowercase().as_str() {
        "complete" | "approved" | "on track" => StatusTone::Positive,
        "in progress" | "under review" => StatusTone::Informational,
        "not started" | "open" => StatusTone::Neutral,
        "at risk" | "awaiting customer input" => StatusTone::Caution,
        "behind" | "delayed" => StatusTone::Critical,
        _ => StatusTone::Neutral,
    }
}

// ── Map pins ─────────────────────────────────────────────────────────────────

pub const PIN_COMPLETE: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
pub const PIN_IN_PROGRESS: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);
pub const PIN_NOT_STARTED: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
pub const PIN_DEFAULT: Color32 = PIN_NOT_STARTED;

/// Marker color for a location status.
///
/// Narrower than [`status_tone`]: only the three location states
/// get a color, so e.g. "Behind" is critical in a table but gray on the map.
pub fn map_pin_color(status: &str) -> Color32 {
    match status.to_lowercase().as_str() {
        "complete" => PIN_COMPLETE,
        "in progress" => PIN_IN_PROGRESS,
        "not started" => PIN_NOT_STARTED,
        _ => PIN_DEFAULT,
    }
}

// ── Numeric tiers ────────────────────────────────────────────────────────────

/// Urgency chip for how long an RFI has been open.
pub fn days_open_tone(days_open: f64) -> StatusTone {
    if days_open > 7.0 {
        StatusTone::Critical
    } else if days_open > 3.0 {
        StatusTone::Caution
    } else {
        StatusTone::Positive
    }
}

/// Fill tone for a location's completion bar.
pub fn completion_tone(completion: f64) -> StatusTone {
    if completion >= 100.0 {
        StatusTone::Positive
    } else if completion > 0.0 {
        StatusTone::Informational
    } else {
        StatusTone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table_is_case_insensitive() {
        let cases = [
            ("Complete", StatusTone::Positive),
            ("APPROVED", StatusTone::Positive),
            ("On Track", StatusTone::Positive),
            ("in progress", StatusTone::Informational),
            ("Under Review", StatusTone::Informational),
            ("Not Started", StatusTone::Neutral),
            ("OPEN", StatusTone::Neutral),
            ("At Risk", StatusTone::Caution),
            ("Awaiting Customer Input", StatusTone::Caution),
            ("Behind", StatusTone::Critical),
            ("dElAyEd", StatusTone::Critical),
        ];
        for (text, tone) in cases {
            assert_eq!(status_tone(text), tone, "status {text:?}");
        }
    }

    #[test]
    fn unknown_statuses_are_neutral() {
        for text in ["", "Closed", "Pending", " complete", "complete.", "無"] {
            assert_eq!(status_tone(text), StatusTone::Neutral, "status {text:?}");
        }
    }

    #[test]
    fn pin_colors_cover_only_location_states() {
        assert_eq!(map_pin_color("Complete"), PIN_COMPLETE);
        assert_eq!(map_pin_color("IN PROGRESS"), PIN_IN_PROGRESS);
        assert_eq!(map_pin_color("not started"), PIN_NOT_STARTED);
        for text in ["Approved", "On Track", "Under Review", "Delayed", "whatever"] {
            assert_eq!(map_pin_color(text), PIN_DEFAULT, "status {text:?}");
        }
    }

    #[test]
    fn pin_mapping_diverges_from_badge_mapping() {
        assert_eq!(status_tone("Behind"), StatusTone::Critical);
        assert_eq!(map_pin_color("Behind"), PIN_DEFAULT);
        assert_eq!(status_tone("Approved"), StatusTone::Positive);
        assert_ne!(map_pin_color("Approved"), PIN_COMPLETE);
    }

    fn urgency(tone: StatusTone) -> u8 {
        match tone {
            StatusTone::Positive => 0,
            StatusTone::Caution => 1,
            StatusTone::Critical => 2,
            other => panic!("unexpected urgency tone {other:?}"),
        }
    }

    #[test]
    fn days_open_tiers_are_monotonic() {
        assert_eq!(days_open_tone(0.0), StatusTone::Positive);
        assert_eq!(days_open_tone(3.0), StatusTone::Positive);
        assert_eq!(days_open_tone(4.0), StatusTone::Caution);
        assert_eq!(days_open_tone(7.0), StatusTone::Caution);
        assert_eq!(days_open_tone(8.0), StatusTone::Critical);
        assert_eq!(days_open_tone(3.5), StatusTone::Caution);
        assert_eq!(days_open_tone(-2.0), StatusTone::Positive);

        let mut previous = 0;
        for days in 0..60 {
            let current = urgency(days_open_tone(f64::from(days)));
            assert!(current >= previous, "urgency dropped at {days} days");
            previous = current;
        }
    }

    #[test]
    fn completion_bar_tones() {
        assert_eq!(completion_tone(100.0), StatusTone::Positive);
        assert_eq!(completion_tone(0.5), StatusTone::Informational);
        assert_eq!(completion_tone(0.0), StatusTone::Neutral);
    }
}
