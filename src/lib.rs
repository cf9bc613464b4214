//! # taskboard-client
//!
//! Client-side state core for the taskboard application: a typed REST
//! adapter, async actions that emit tagged events, pure per-slice reducers,
//! and a single composed store read by the presentation layer.
//!
//! DESIGN
//! ======
//! Control flow is one-directional: an action issues exactly one HTTP call
//! through [`net::api::ApiClient`], then dispatches tagged [`state::Event`]s
//! into the [`state::Store`]. Reducers fold events into fresh state
//! snapshots; subscribers are notified after each dispatch. Nothing outside
//! the store mutates application state.

pub mod actions;
pub mod net;
pub mod state;
