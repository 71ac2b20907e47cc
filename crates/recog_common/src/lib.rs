//! Recog Common - core engine for the Odin intent/entity regression harness
//!
//! Entity text codec, order-independent comparison, per-row evaluation
//! and accuracy aggregation. Pure logic only: no network, no filesystem.

pub mod accuracy;
pub mod codec;
pub mod compare;
pub mod entity;
pub mod evaluate;
pub mod response;

pub use accuracy::*;
pub use codec::*;
pub use compare::*;
pub use entity::*;
pub use evaluate::*;
pub use response::*;
