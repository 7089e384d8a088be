/// Page views for the application
///
/// Each submodule renders one page of application state into iced
/// elements and dispatches user intents as `Message`s:
/// - `home.rs` - static welcome and feature overview
/// - `generator.rs` - search bar, result, error banner, recent searches
/// - `favorites.rs` - grid of saved photos

pub mod favorites;
pub mod generator;
pub mod home;
