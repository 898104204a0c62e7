//! PostgreSQL repository implementations

mod aggregates;
mod error;
mod livecomment;
mod livestream;
mod reaction;
mod theme;
mod tip;
mod user;

pub use aggregates::PgAggregateSource;
pub use error::map_db_error;
pub use livecomment::PgLivecommentRepository;
pub use livestream::PgLivestreamRepository;
pub use reaction::PgReactionRepository;
pub use theme::PgThemeRepository;
pub use tip::PgTipRepository;
pub use user::PgUserRepository;
