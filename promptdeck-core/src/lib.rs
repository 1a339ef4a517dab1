pub mod config;
pub mod content;
pub mod error;
pub mod favorites;
pub mod page;
pub mod prompt;
pub mod shell;
pub mod submit;

pub use config::{PromptDeckConfig, SinkKind};
pub use content::Preview;
pub use error::{PromptDeckError, Result};
pub use favorites::{
    builtin_favorites, BuiltinFavorites, Favorite, FavoriteId, FavoritesPanel, FavoritesSource,
    PanelEvent, StaticFavorites,
};
pub use page::{Effect, Msg, Page};
pub use prompt::{BusyReset, PromptEvent, PromptInput, SubmitTrigger, DEFAULT_BUSY_RESET};
pub use submit::{JsonlSink, LogSink, SubmitSink};
