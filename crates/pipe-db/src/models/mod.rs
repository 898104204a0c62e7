//! Database models - SQLx-compatible structs for PostgreSQL tables
//!
//! Each model derives `FromRow` and converts into its `pipe-core` entity
//! with a `From` impl next to the struct.

mod aggregate;
mod livecomment;
mod livestream;
mod reaction;
mod theme;
mod tip;
mod user;

pub use aggregate::{LivestreamTotalModel, UserThemeModel, UserTotalModel};
pub use livecomment::LivecommentModel;
pub use livestream::LivestreamModel;
pub use reaction::ReactionModel;
pub use theme::ThemeModel;
pub use tip::TipModel;
pub use user::UserModel;
