//! Foundation types for Waybill.
//!
//! This crate provides the identifier, temporal, and capability types used
//! throughout the Waybill system. Every other Waybill crate depends on
//! `wb-types`.
//!
//! # Key Types
//!
//! - [`ItemId`] — External catalog identifier for a tracked good
//! - [`WorldId`] — Logical world/save identifier (the "seed" on disk)
//! - [`Tick`] — Host game-clock tick (60 ticks per notional second)
//! - [`GameClock`] — Capability trait supplying the current tick
//! - [`ItemCatalog`] — Capability trait resolving item ids to display names
//!
//! The capabilities exist so the core ledger and store logic never reach for
//! host globals; tests and tools inject [`FixedClock`] and [`StaticCatalog`].

pub mod catalog;
pub mod clock;
pub mod ids;
pub mod temporal;
pub mod version;

pub use catalog::{EmptyCatalog, ItemCatalog, StaticCatalog};
pub use clock::{FixedClock, GameClock};
pub use ids::{ItemId, WorldId};
pub use temporal::{Tick, TICKS_PER_SECOND};
pub use version::{CURRENT_VERSION, VERSION_1, VERSION_2};
