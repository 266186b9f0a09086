//! Toolbar component
//!
//! Application header plus the Input/Results tab switcher. The Results tab
//! stays disabled until a result exists.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::{Message, Tab};

/// Render the header row with the tab switcher
pub fn view_header(active_tab: Tab, has_result: bool) -> Element<'static, Message> {
    let tab_button = |label: &'static str, tab: Tab, enabled: bool| {
        let style = if active_tab == tab {
            button::primary
        } else {
            button::secondary
        };
        button(text(label).size(12))
            .on_press_maybe(enabled.then_some(Message::TabSelected(tab)))
            .padding(Padding::from([6, 16]))
            .style(style)
    };

    row![
        text("Polyflow").size(24),
        Space::new().width(12),
        text("pseudocode, flowcharts, and code in ten languages")
            .size(12)
            .color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        tab_button("Input", Tab::Input, true),
        Space::new().width(4),
        tab_button("Results", Tab::Results, has_result),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::from([4, 0]))
    .into()
}
