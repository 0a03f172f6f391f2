//! # Core Application Logic
//!
//! This module contains FMDB's screen logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • FetchState<T>        │
//!                    │  • List/Detail control  │
//!                    │  • update() (reducer)   │
//!                    │  • view projections     │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   Print    │
//!          │  Adapter   │                │  commands  │
//!          │ (ratatui)  │                │  (stdout)  │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`fetch_state`]: `FetchState<T>`, the loading phase of one screen
//! - [`controller`]: list and detail controllers that own a `FetchState`
//! - [`state`]: the `App` struct, both screens plus navigation
//! - [`action`]: the `Action` enum and `update()`
//! - [`view`]: display-ready projections of API records

pub mod action;
pub mod config;
pub mod controller;
pub mod fetch_state;
pub mod state;
pub mod strings;
pub mod view;
