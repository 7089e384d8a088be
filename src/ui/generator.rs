//! The image-generator page: search bar, result display, error banner
//! with retry, translation controls and the recent-search strip.

use std::collections::HashMap;

use iced::widget::{
    button, column, container, horizontal_space, image, row, scrollable, text, text_input,
};
use iced::widget::image::Handle;
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::history::History;
use crate::state::session::{SearchSession, SessionPhase};
use crate::Message;

pub fn view<'a>(
    session: &'a SearchSession,
    history: &'a History,
    images: &'a HashMap<String, Handle>,
) -> Element<'a, Message> {
    let search_bar = row![
        text_input("Enter a search term", session.query())
            .on_input(Message::QueryChanged)
            .on_submit(Message::SubmitSearch)
            .padding(10),
        // No on_press while a fetch is in flight, which disables the button
        button(text(if session.is_loading() {
            "Searching..."
        } else {
            "Search"
        }))
        .on_press_maybe((!session.is_loading()).then_some(Message::SubmitSearch))
        .padding(10),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut content = column![search_bar].spacing(20).max_width(800);

    match session.phase() {
        SessionPhase::Idle => {}
        SessionPhase::Loading => {
            content = content.push(text("Fetching a random image...").size(16));
        }
        SessionPhase::Error(message) => {
            content = content.push(error_banner(message));
        }
        SessionPhase::Success(result) => {
            let photo: Element<Message> = match images.get(&result.image_url) {
                Some(handle) => image(handle.clone()).width(Length::Fill).into(),
                None => text("Loading image...").size(16).into(),
            };
            content = content.push(photo);

            content = content.push(
                row![
                    text(result.photographer.as_str()).size(16),
                    horizontal_space(),
                    button("Copy URL").on_press(Message::CopyImageUrl).padding(6),
                    button("Favorite")
                        .on_press(Message::SaveFavorite)
                        .style(button::success)
                        .padding(6),
                ]
                .spacing(10)
                .align_y(Alignment::Center),
            );

            content = content.push(description_block(session, &result.description));
        }
    }

    if !history.is_empty() {
        content = content.push(text("Recent Searches").size(24));
        content = content.push(history_strip(history, images));
    }

    container(scrollable(content))
        .width(Length::Fill)
        .padding(20)
        .center_x(Length::Fill)
        .into()
}

fn error_banner(message: &str) -> Element<'_, Message> {
    container(
        row![
            text(message).size(16),
            horizontal_space(),
            button("Retry")
                .on_press(Message::Retry)
                .style(button::danger)
                .padding(6),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .style(container::bordered_box)
    .padding(10)
    .width(Length::Fill)
    .into()
}

/// Original description, plus either the translation or the button
/// requesting one; a failed translation surfaces inline here without
/// touching the photo above it.
fn description_block<'a>(session: &'a SearchSession, description: &'a str) -> Element<'a, Message> {
    let mut block = column![text(format!("Description: {}", description)).size(16)].spacing(6);

    match session.translation() {
        Some(translated) => {
            block = block.push(text(format!("Traducción: {}", translated)).size(16));
        }
        None => {
            block = block.push(
                button("Translate to Spanish")
                    .on_press(Message::Translate)
                    .padding(6),
            );
        }
    }

    if let Some(message) = session.translation_error() {
        block = block.push(text(message).size(14).style(text::danger));
    }

    block.into()
}

/// Clickable thumbnails of the recent searches, newest first; clicking
/// one replays the query with a fresh fetch.
fn history_strip<'a>(
    history: &'a History,
    images: &'a HashMap<String, Handle>,
) -> Element<'a, Message> {
    let tiles: Vec<Element<Message>> = history
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let thumb: Element<Message> = match images.get(&entry.url) {
                Some(handle) => image(handle.clone())
                    .width(Length::Fixed(150.0))
                    .height(Length::Fixed(96.0))
                    .into(),
                None => text("(loading)").size(12).into(),
            };

            button(
                column![thumb, text(entry.query.as_str()).size(12)]
                    .spacing(4)
                    .align_x(Alignment::Center),
            )
            .on_press(Message::ReplayHistory(index))
            .style(button::secondary)
            .padding(6)
            .into()
        })
        .collect();

    Wrap::with_elements(tiles)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}
