//! The favorites page: a wrap grid of saved photos with per-card
//! remove buttons.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, scrollable, text};
use iced::widget::image::Handle;
use iced::{Element, Length};
use iced_aw::Wrap;

use crate::state::favorites::Favorites;
use crate::Message;

pub fn view<'a>(
    favorites: &'a Favorites,
    images: &'a HashMap<String, Handle>,
) -> Element<'a, Message> {
    let mut content = column![text("My Favorite Images").size(32)].spacing(20);

    if favorites.is_empty() {
        content = content.push(text("You haven't saved any favorites yet.").size(18));
    } else {
        let cards: Vec<Element<Message>> = favorites
            .entries()
            .iter()
            .enumerate()
            .map(|(index, favorite)| {
                let photo: Element<Message> = match images.get(&favorite.url) {
                    Some(handle) => image(handle.clone())
                        .width(Length::Fixed(240.0))
                        .height(Length::Fixed(160.0))
                        .into(),
                    None => text("(loading)").size(12).into(),
                };

                container(
                    column![
                        photo,
                        text(favorite.photographer.as_str()).size(14),
                        text(format!("Search: {}", favorite.query)).size(12),
                        button("Remove")
                            .on_press(Message::RemoveFavorite(index))
                            .style(button::danger)
                            .padding(6),
                    ]
                    .spacing(6),
                )
                .style(container::rounded_box)
                .padding(10)
                .into()
            })
            .collect();

        content = content.push(Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0));
    }

    container(scrollable(content))
        .width(Length::Fill)
        .padding(20)
        .into()
}
