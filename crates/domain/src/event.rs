//! Panel events — everything the core tells the outside world.
//!
//! Display surfaces, the screen router and the cooking executor all consume
//! the same event stream and pick the variants they care about.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cook_time::CookTime;
use crate::idle::Screen;
use crate::key::Key;

/// An outbound notification from the panel core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelEvent {
    /// A keypad key was pressed.
    KeyPressed { key: Key },
    /// New time-of-day text for the idle screen.
    TimeChanged { text: String },
    /// New date text for the idle screen.
    DateChanged { text: String },
    /// New cook time text and whether it should be shown.
    CookTimeDisplay { text: String, visible: bool },
    /// Cook time accepted with `start`.
    CookTimeFinalized { time: CookTime },
    /// Make `screen` the active one.
    SwitchScreen { screen: Screen },
}

impl PanelEvent {
    /// Display update for a cook time.
    #[must_use]
    pub fn show_cook_time(time: CookTime) -> Self {
        Self::CookTimeDisplay {
            text: time.to_string(),
            visible: true,
        }
    }

    /// Display update hiding the cook time.
    #[must_use]
    pub fn hide_cook_time() -> Self {
        Self::CookTimeDisplay {
            text: String::new(),
            visible: false,
        }
    }

    /// Short machine-friendly name of the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::KeyPressed { .. } => "key_pressed",
            Self::TimeChanged { .. } => "time_changed",
            Self::DateChanged { .. } => "date_changed",
            Self::CookTimeDisplay { .. } => "cook_time_display",
            Self::CookTimeFinalized { .. } => "cook_time_finalized",
            Self::SwitchScreen { .. } => "switch_screen",
        }
    }
}

impl fmt::Display for PanelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyPressed { key } => write!(f, "key pressed: {key}"),
            Self::TimeChanged { text } => write!(f, "time: {text}"),
            Self::DateChanged { text } => write!(f, "date: {text}"),
            Self::CookTimeDisplay { text, visible: true } => write!(f, "cook time: {text}"),
            Self::CookTimeDisplay { visible: false, .. } => f.write_str("cook time hidden"),
            Self::CookTimeFinalized { time } => write!(f, "cooking for {time}"),
            Self::SwitchScreen { screen } => write!(f, "screen: {screen}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_visible_cook_time_display() {
        let event = PanelEvent::show_cook_time("01:23".parse().unwrap());
        assert_eq!(
            event,
            PanelEvent::CookTimeDisplay {
                text: "01:23".to_string(),
                visible: true,
            }
        );
    }

    #[test]
    fn should_build_hidden_cook_time_display() {
        assert!(matches!(
            PanelEvent::hide_cook_time(),
            PanelEvent::CookTimeDisplay { visible: false, .. }
        ));
    }

    #[test]
    fn should_serialize_with_type_tag() {
        let event = PanelEvent::CookTimeFinalized {
            time: "12:34".parse().unwrap(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "cook_time_finalized", "time": "12:34"})
        );
        assert_eq!(event.kind(), "cook_time_finalized");
    }

    #[test]
    fn should_serialize_screen_switch() {
        let event = PanelEvent::SwitchScreen {
            screen: Screen::Idle,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"switch_screen","screen":"idle"}"#);
    }

    #[test]
    fn should_display_human_readable_text() {
        let event = PanelEvent::KeyPressed { key: Key::Start };
        assert_eq!(event.to_string(), "key pressed: start");
        assert_eq!(PanelEvent::hide_cook_time().to_string(), "cook time hidden");
    }
}
