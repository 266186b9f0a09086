//! Results Panel
//!
//! Renders the three-part backend result: pseudocode, the flowchart as
//! cleaned annotated text (no diagram layout), and the generated code for
//! the selected catalog language with copy/download controls.

use iced::widget::{button, column, container, pick_list, row, text, Column, Space};
use iced::{Alignment, Element, Font, Length, Padding};

use flow_core::flowchart;
use flow_core::languages::Language;
use flow_core::result::TransformResult;

use crate::{App, Message};

/// Render the results tab
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let Some(result) = app.result() else {
        return column![
            text("No results yet").size(14),
            text("Submit an input to see pseudocode, a flowchart, and generated code")
                .size(11)
                .color([0.5, 0.5, 0.5]),
        ]
        .spacing(6)
        .into();
    };

    let pseudocode_section = view_section(
        "Pseudocode",
        Some(Message::CopyPseudocode),
        &result.pseudocode,
    );

    let flowchart_text = flowchart::clean(&result.flowchart);
    let flowchart_section: Column<'_, Message> = column![
        text("Flowchart").size(14),
        container(
            column![
                text(flowchart_text).size(11).font(Font::MONOSPACE),
                Space::new().height(6),
                text("Flowchart logic generated by AI - represents your algorithm's flow")
                    .size(9)
                    .color([0.5, 0.5, 0.5]),
            ]
            .spacing(2)
        )
        .padding(10)
        .width(Length::Fill)
        .style(container::bordered_box),
    ]
    .spacing(6);

    let code_section = view_code_section(app, result);

    column![
        pseudocode_section,
        Space::new().height(10),
        flowchart_section,
        Space::new().height(10),
        code_section,
    ]
    .spacing(4)
    .into()
}

/// Titled monospace block with an optional copy button
fn view_section<'a>(
    title: &'static str,
    copy: Option<Message>,
    body: &'a str,
) -> Column<'a, Message> {
    let mut header = row![text(title).size(14), Space::new().width(Length::Fill)]
        .align_y(Alignment::Center);
    if let Some(message) = copy {
        header = header.push(
            button(text("Copy").size(10))
                .on_press(message)
                .padding(Padding::from([2, 8]))
                .style(button::secondary),
        );
    }

    column![
        header,
        container(text(body).size(11).font(Font::MONOSPACE))
            .padding(10)
            .width(Length::Fill)
            .style(container::bordered_box),
    ]
    .spacing(6)
}

/// Generated code block with language selector and copy/download controls
fn view_code_section<'a>(app: &'a App, result: &'a TransformResult) -> Column<'a, Message> {
    let selected = app.selected_language();
    let code = result.code_for(selected);

    let header = row![
        text("Generated Code").size(14),
        Space::new().width(Length::Fill),
        pick_list(
            &Language::ALL[..],
            Some(selected),
            Message::LanguageSelected
        )
        .text_size(11)
        .width(Length::Fixed(140.0)),
        Space::new().width(6),
        button(text("Copy").size(10))
            .on_press(Message::CopyCode)
            .padding(Padding::from([2, 8]))
            .style(button::secondary),
        Space::new().width(4),
        button(text("Download").size(10))
            .on_press(Message::DownloadCode)
            .padding(Padding::from([2, 8]))
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = if code.is_empty() {
        text(format!("No {} output in this result", selected.display_name()))
            .size(11)
            .color([0.5, 0.5, 0.5])
            .into()
    } else {
        text(code).size(11).font(Font::MONOSPACE).into()
    };

    column![
        header,
        container(body)
            .padding(10)
            .width(Length::Fill)
            .style(container::bordered_box),
    ]
    .spacing(6)
}
