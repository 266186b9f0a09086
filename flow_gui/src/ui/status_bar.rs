//! Status Bar (Bottom)
//!
//! Displays:
//! - Session identifier (for matching up with backend logs)
//! - Backend target
//! - Recording / processing indicators
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(
    session_id: &'a str,
    backend_url: &'a str,
    is_recording: bool,
    is_processing: bool,
    status: &'a str,
) -> Element<'a, Message> {
    let activity = if is_recording {
        "REC"
    } else if is_processing {
        "..."
    } else {
        ""
    };

    row![
        text(session_id).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(12),
        text(backend_url).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(activity).size(10).color([0.8, 0.3, 0.3]),
        Space::new().width(8),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
