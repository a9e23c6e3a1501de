//! Crosspost: multi-platform publish orchestrator for short-form content.
//!
//! One authored task is delivered to every platform it targets (TikTok,
//! Xiaohongshu, Bilibili, Kuaishou, Zhihu, Toutiao). Each platform succeeds
//! or fails independently and the task settles into a single aggregate
//! status.
//!
//! # Architecture
//!
//! Crosspost follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores,
//!   simulated platforms, template rendering)
//!
//! # Modules
//!
//! - [`platform`]: Platform identifiers and the publishing adapter port
//! - [`account`]: Connected accounts and credential lookup
//! - [`task`]: Publish tasks, their status lifecycle and attempt history
//! - [`publish`]: Fan-out orchestration, retry policy and aggregation
//! - [`content`]: AI-assisted drafting of post bodies
//! - [`web`]: REST API
//! - [`config`] and [`telemetry`]: Service configuration and logging

pub mod account;
pub mod config;
pub mod content;
pub mod platform;
pub mod publish;
pub mod task;
pub mod telemetry;
pub mod web;
