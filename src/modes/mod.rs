//! The three modes of operation built on top of [`crate::engine::RoundEngine`].
//!
//! Unlike the historical source this crate's behavior is modeled on, there
//! is no shared abstract "mode" base type here: ECB, CBC, and CFB have
//! incompatible preconditions on their byte counts (block-aligned,
//! block-aligned, arbitrary respectively), so giving them a common
//! supertype would only force awkward "not supported in this mode" stubs.
//! Each mode is a standalone type that owns a
//! [`RoundEngine`](crate::engine::RoundEngine) via composition.

pub mod cbc;
pub mod cfb;
pub mod ecb;

pub use cbc::CbcMode;
pub use cfb::CfbMode;
pub use ecb::EcbMode;
