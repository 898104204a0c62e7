//! Domain entities

mod livecomment;
mod livestream;
mod reaction;
mod theme;
mod tip;
mod user;

pub use livecomment::{Livecomment, NewLivecomment};
pub use livestream::Livestream;
pub use reaction::{NewReaction, Reaction};
pub use theme::Theme;
pub use tip::{NewTip, Tip};
pub use user::User;
