use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::Message;

/// The static welcome page
pub fn view() -> Element<'static, Message> {
    let features = container(
        column![
            text("App Features").size(24),
            text("• Generate random images based on your search terms").size(16),
            text("• Save your favorite images for later").size(16),
            text("• View and reuse your recent search history").size(16),
            text("• Toggle between light and dark modes for comfortable viewing").size(16),
            text("• Translate image descriptions from English to Spanish").size(16),
        ]
        .spacing(10),
    )
    .style(container::rounded_box)
    .padding(20)
    .width(Length::Fill);

    let details = container(
        column![
            text("Project Details").size(24),
            text("Powered by the Unsplash API").size(16),
            text("Images are fetched randomly; repeating a search may show a different photo.")
                .size(16),
            text("Your ten most recent searches are kept across restarts.").size(16),
        ]
        .spacing(10),
    )
    .style(container::rounded_box)
    .padding(20)
    .width(Length::Fill);

    let content = column![
        text("Welcome to Image Generator").size(40),
        text(
            "Discover beautiful images. Enter a search term and a random \
             matching photo is fetched for you.",
        )
        .size(18),
        features,
        details,
        text("Start exploring from the Generate page. Happy image hunting!").size(16),
    ]
    .spacing(20)
    .max_width(700)
    .align_x(Alignment::Center);

    container(scrollable(content))
        .width(Length::Fill)
        .padding(20)
        .center_x(Length::Fill)
        .into()
}
