//! Ports - repository and store traits implemented by the infrastructure layers

mod repositories;
mod stores;

pub use repositories::{
    LivecommentRepository, LivestreamRepository, ReactionRepository, RepoResult, ThemeRepository,
    TipRepository, UserRepository,
};
pub use stores::{
    AggregateSnapshot, AggregateSource, CounterStore, LivestreamCount, StoreResult, UserCount,
    UserFlag,
};
