/// HTTP fetch client module
///
/// This module wraps the two external collaborators:
/// - `unsplash.rs` - random-photo search and raw image downloads
/// - `translate.rs` - English → Spanish description translation
///
/// Both clients are side-effect-free beyond the network call itself;
/// retrying is always a user-initiated re-invocation.

pub mod translate;
pub mod unsplash;

mod error;
pub use error::FetchError;
