use std::collections::HashMap;

use chrono::Local;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Task, Theme};

mod api;
mod state;
mod ui;

use api::{translate, unsplash, FetchError};
use state::data::{FavoriteEntry, HistoryEntry, SearchResult};
use state::favorites::Favorites;
use state::history::{History, JsonFileBackend};
use state::session::SearchSession;

/// The three pages reachable from the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Generator,
    Favorites,
}

/// Main application state
struct ImageGenerator {
    /// Currently displayed page
    page: Page,
    /// Dark/light theme toggle
    dark_mode: bool,
    /// The search session state machine
    session: SearchSession,
    /// Persisted recent searches
    history: History,
    /// Saved photos for this run
    favorites: Favorites,
    /// Downloaded image bytes, keyed by URL; shared by the current
    /// result, history thumbnails and favorite cards
    images: HashMap<String, Handle>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked a page from the nav bar
    Navigate(Page),
    /// User toggled dark mode
    ToggleDarkMode,
    /// User edited the search field
    QueryChanged(String),
    /// User submitted the search field
    SubmitSearch,
    /// User clicked Retry on the error banner
    Retry,
    /// A search fetch resolved; the id tags which request it answers
    SearchCompleted(u64, Result<SearchResult, FetchError>),
    /// An image byte download resolved for the given URL
    ImageLoaded(String, Result<Vec<u8>, FetchError>),
    /// User requested a translation of the current description
    Translate,
    /// A translation fetch resolved; the id tags which search it belongs to
    TranslationCompleted(u64, Result<String, FetchError>),
    /// User clicked "Copy URL" on the current result
    CopyImageUrl,
    /// User saved the current result to favorites
    SaveFavorite,
    /// User removed the favorite at this position
    RemoveFavorite(usize),
    /// User clicked a recent-search thumbnail
    ReplayHistory(usize),
}

impl ImageGenerator {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let backend = JsonFileBackend::new();
        println!("📁 History file: {}", backend.path().display());

        let history = History::load(Box::new(backend));
        println!(
            "🎨 Image Generator initialized with {} recent searches",
            history.len()
        );

        let status = format!("Ready. {} recent searches loaded.", history.len());

        // Warm the image cache so history thumbnails appear right away
        let warmup = Task::batch(
            history
                .entries()
                .iter()
                .map(|entry| fetch_image(entry.url.clone()))
                .collect::<Vec<_>>(),
        );

        (
            ImageGenerator {
                page: Page::Home,
                dark_mode: false,
                session: SearchSession::new(),
                history,
                favorites: Favorites::new(),
                images: HashMap::new(),
                status,
            },
            warmup,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                self.page = page;
                Task::none()
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
            Message::QueryChanged(query) => {
                self.session.set_query(query);
                Task::none()
            }
            Message::SubmitSearch | Message::Retry => self.start_search(),
            Message::ReplayHistory(index) => {
                let Some(entry) = self.history.entries().get(index) else {
                    return Task::none();
                };
                let query = entry.query.clone();
                self.session.set_query(query);
                self.start_search()
            }
            Message::SearchCompleted(id, outcome) => {
                if !self.session.complete_search(id, outcome) {
                    return Task::none();
                }
                let Some(result) = self.session.result() else {
                    // The failure already surfaced through the session phase
                    return Task::none();
                };

                // Result, history entry and status land as one transition
                let entry = HistoryEntry {
                    url: result.image_url.clone(),
                    query: result.query.clone(),
                };
                let image_url = result.image_url.clone();
                self.status = format!(
                    "Photo by {} · {}",
                    result.photographer,
                    Local::now().format("%H:%M")
                );
                self.history.record(entry);

                if self.images.contains_key(&image_url) {
                    Task::none()
                } else {
                    fetch_image(image_url)
                }
            }
            Message::ImageLoaded(url, outcome) => {
                match outcome {
                    Ok(bytes) => {
                        self.images.insert(url, Handle::from_bytes(bytes));
                    }
                    Err(e) => {
                        eprintln!("⚠️  Failed to download {}: {}", url, e);
                        let is_current = self
                            .session
                            .result()
                            .is_some_and(|result| result.image_url == url);
                        if is_current {
                            self.status = "Failed to load image. Please try again.".to_string();
                        }
                    }
                }
                Task::none()
            }
            Message::Translate => match self.session.begin_translation() {
                Some(ticket) => {
                    let id = ticket.id;
                    Task::perform(translate::fetch_translation(ticket.text), move |outcome| {
                        Message::TranslationCompleted(id, outcome)
                    })
                }
                None => Task::none(),
            },
            Message::TranslationCompleted(id, outcome) => {
                self.session.apply_translation(id, outcome);
                Task::none()
            }
            Message::CopyImageUrl => match self.session.result() {
                Some(result) => {
                    let url = result.image_url.clone();
                    self.status = "Image URL copied to clipboard!".to_string();
                    iced::clipboard::write(url)
                }
                None => Task::none(),
            },
            Message::SaveFavorite => {
                if let Some(result) = self.session.result() {
                    let entry = FavoriteEntry {
                        url: result.image_url.clone(),
                        photographer: result.photographer.clone(),
                        query: result.query.clone(),
                    };
                    self.status = format!("Saved photo by {} to favorites.", entry.photographer);
                    self.favorites.add(entry);
                }
                Task::none()
            }
            Message::RemoveFavorite(index) => {
                match self.favorites.remove_at(index) {
                    Some(removed) => {
                        self.status =
                            format!("Removed photo by {} from favorites.", removed.photographer);
                    }
                    None => {
                        eprintln!("⚠️  Favorite index {} out of range, nothing removed", index);
                    }
                }
                Task::none()
            }
        }
    }

    /// Begin a search for the held query and dispatch the fetch.
    ///
    /// Submit, Retry and history replay all funnel through here; a
    /// validation rejection never dispatches a network task.
    fn start_search(&mut self) -> Task<Message> {
        match self.session.begin_search() {
            Ok(ticket) => {
                self.status = format!("Searching for \"{}\"...", ticket.query.trim());
                let id = ticket.id;
                Task::perform(
                    unsplash::fetch_random_image(ticket.query, unsplash::access_key()),
                    move |outcome| Message::SearchCompleted(id, outcome),
                )
            }
            // The session already surfaced the validation message
            Err(_) => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let nav = row![
            text("Image Generator").size(28),
            horizontal_space(),
            button("Home")
                .on_press(Message::Navigate(Page::Home))
                .style(button::secondary)
                .padding(8),
            button("Generate")
                .on_press(Message::Navigate(Page::Generator))
                .style(button::secondary)
                .padding(8),
            button("Favorites")
                .on_press(Message::Navigate(Page::Favorites))
                .style(button::secondary)
                .padding(8),
            button(text(if self.dark_mode { "Light Mode" } else { "Dark Mode" }))
                .on_press(Message::ToggleDarkMode)
                .style(button::secondary)
                .padding(8),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let page = match self.page {
            Page::Home => ui::home::view(),
            Page::Generator => ui::generator::view(&self.session, &self.history, &self.images),
            Page::Favorites => ui::favorites::view(&self.favorites, &self.images),
        };

        let content = column![
            nav,
            container(page).height(Length::Fill),
            text(&self.status).size(14),
        ]
        .spacing(12)
        .padding(16);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> iced::Result {
    iced::application(
        "Image Generator",
        ImageGenerator::update,
        ImageGenerator::view,
    )
    .theme(ImageGenerator::theme)
    .centered()
    .run_with(ImageGenerator::new)
}

/// Download one image's bytes in the background and report back with
/// the URL it belongs to
fn fetch_image(url: String) -> Task<Message> {
    let request_url = url.clone();
    Task::perform(unsplash::download_image(request_url), move |outcome| {
        Message::ImageLoaded(url.clone(), outcome)
    })
}
