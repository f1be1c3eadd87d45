//! # Core Application Logic
//!
//! The fetch lifecycle and view-state derivation. Knows nothing about the
//! terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewState            │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    feed    │
//!            │  Adapter   │            │  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App` and `ViewState`
//! - [`action`]: `Action`, `Effect` and `update()`
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod state;
