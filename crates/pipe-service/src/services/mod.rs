//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod livecomment;
pub mod livestream;
pub mod reaction;
pub mod rebuild;
pub mod statistics;
pub mod theme;
pub mod tip;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use livecomment::LivecommentService;
pub use livestream::LivestreamService;
pub use reaction::ReactionService;
pub use rebuild::RebuildService;
pub use statistics::StatisticsService;
pub use theme::ThemeService;
pub use tip::TipService;
