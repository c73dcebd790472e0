#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]
//! # Public IPv4 Address Enumeration
//!
//! This library enumerates publicly routable IPv4 addresses: the 32-bit
//! space minus every IANA-reserved range (private use, link-local,
//! documentation, benchmarking, multicast, and the broadcast address).
//! Enumeration starts from an arbitrary address and proceeds forward
//! (ascending) or backward (descending), lazily, one address per pull.
//!
//! It is a building block for tools that must visit public addresses
//! exhaustively or resumably — reverse-DNS sweeps, for instance — without
//! wasting cycles probing unroutable ranges.
//!
//! ## Strategies
//!
//! - [`Sequential`]: strict numeric order. Entire reserved blocks are
//!   jumped over in O(1), so skipping 224.0.0.0/3 costs the same as
//!   skipping a /24.
//! - [`Staggered`]: a bit-reversal counter scatters consecutive yields
//!   across distant regions of the space, avoiding bursts of traffic to
//!   numerically adjacent (often co-located) addresses. Reserved addresses
//!   are skipped one counter step at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use ip_enumeration::{CancellationToken, Direction, Sequential};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sweep = Sequential::new(
//!         Direction::Forward,
//!         Some("9.255.255.254"),
//!         CancellationToken::new(),
//!     )?;
//!
//!     // 10.0.0.0/8 is private and never yielded.
//!     for addr in sweep.take(4) {
//!         println!("{}", addr?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! Each enumerator checks its [`CancellationToken`] once per step. On
//! observation it yields [`EnumerationError::Cancelled`] exactly once and
//! then ends; natural exhaustion of the space simply ends the iterator.
//!
//! ```rust
//! use ip_enumeration::{CancellationToken, Direction, EnumerationError, Staggered};
//!
//! let token = CancellationToken::new();
//! let mut sweep = Staggered::new(Direction::Forward, None, token.clone()).unwrap();
//!
//! assert!(sweep.next().unwrap().is_ok());
//! token.cancel();
//! assert_eq!(sweep.next(), Some(Err(EnumerationError::Cancelled)));
//! assert_eq!(sweep.next(), None);
//! ```
//!
//! ## Thread Safety
//!
//! Enumerators share no state: each owns an independent 32-digit counter,
//! so any number of enumerations may run concurrently on separate threads
//! with no coordination.

mod bits;
mod blocks;
mod cancel;
mod error;
mod sequential;
mod staggered;

// Re-export public types
pub use blocks::{classify, Classification, ReservedBlock};
pub use cancel::CancellationToken;
pub use error::EnumerationError;
pub use sequential::Sequential;
pub use staggered::Staggered;

/// Traversal direction through the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending: advance the counter with binary add-one.
    Forward,
    /// Descending: advance the counter with binary subtract-one.
    Backward,
}
