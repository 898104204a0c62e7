//! # pipe-core
//!
//! Domain layer containing entities, repository traits, and the cache/aggregate
//! ports the counter-consistency layer is built on.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Livecomment, Livestream, NewLivecomment, NewReaction, NewTip, Reaction, Theme, Tip, User,
};
pub use error::DomainError;
pub use traits::{
    AggregateSnapshot, AggregateSource, CounterStore, LivecommentRepository, LivestreamCount,
    LivestreamRepository, ReactionRepository, RepoResult, StoreResult, ThemeRepository,
    TipRepository, UserCount, UserFlag, UserRepository,
};
