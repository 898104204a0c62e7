//! # pipe-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services borrow a [`services::ServiceContext`] and coordinate the two
//! stores: relational writes commit first, then the cached counters are
//! adjusted (or wiped and repopulated, for the rebuild).

pub mod dto;
pub mod services;

pub use services::{
    LivecommentService, LivestreamService, ReactionService, RebuildService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StatisticsService, ThemeService,
    TipService,
};
