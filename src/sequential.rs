//! Sequential enumeration of public IPv4 addresses.

use std::net::Ipv4Addr;

use log::debug;

use crate::bits::{self, BitOrder, BitVec};
use crate::blocks::{classify, Classification};
use crate::cancel::CancellationToken;
use crate::error::EnumerationError;
use crate::Direction;

/// Lowest public address, the default `Forward` starting point.
const FIRST_PUBLIC: Ipv4Addr = Ipv4Addr::new(1, 0, 0, 0);

/// Highest public address, the default `Backward` starting point.
const LAST_PUBLIC: Ipv4Addr = Ipv4Addr::new(223, 255, 255, 255);

/// Highest address of the multicast-and-future-use block; everything above
/// the block going `Forward` is the broadcast sentinel.
const TOP_BLOCK_END: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 254);

/// Iterator over public IPv4 addresses in numeric order.
///
/// Addresses are yielded strictly ascending (`Forward`) or descending
/// (`Backward`), skipping every reserved address and no public one. On
/// entering a reserved block the internal counter is set directly to the
/// first address past the block's far boundary, so the cost of crossing a
/// block does not depend on its size.
///
/// The iterator ends (`None`) when the public space is exhausted in the
/// traversed direction.
///
/// # Example
///
/// ```
/// use ip_enumeration::{CancellationToken, Direction, Sequential};
///
/// let sweep = Sequential::new(
///     Direction::Forward,
///     Some("10.255.255.254"),
///     CancellationToken::new(),
/// )
/// .unwrap();
///
/// // 10.0.0.0/8 is private; the sweep jumps straight over it.
/// let first: Vec<String> = sweep
///     .take(3)
///     .map(|addr| addr.unwrap().to_string())
///     .collect();
/// assert_eq!(first, ["11.0.0.0", "11.0.0.1", "11.0.0.2"]);
/// ```
#[derive(Debug)]
pub struct Sequential {
    bits: BitVec,
    direction: Direction,
    cancel: CancellationToken,
    done: bool,
}

impl Sequential {
    /// Starts a sequential enumeration.
    ///
    /// `initial` is a dotted-quad literal used as the starting point; when
    /// omitted, the enumeration starts at the lowest (`Forward`) or highest
    /// (`Backward`) public address. A starting point inside a reserved
    /// block is not an error: the first yield is the nearest public address
    /// in the requested direction.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerationError::Format`] if `initial` is not a valid
    /// dotted quad with four components in [0, 255].
    pub fn new(
        direction: Direction,
        initial: Option<&str>,
        cancel: CancellationToken,
    ) -> Result<Self, EnumerationError> {
        let start = match initial {
            Some(literal) => bits::parse_literal(literal)?,
            None => match direction {
                Direction::Forward => FIRST_PUBLIC,
                Direction::Backward => LAST_PUBLIC,
            },
        };
        Ok(Sequential {
            bits: BitVec::from_addr(start, BitOrder::Natural),
            direction,
            cancel,
            done: false,
        })
    }

    /// Advances the counter one address in the traversal direction.
    fn step(&self, bits: BitVec) -> BitVec {
        match self.direction {
            Direction::Forward => bits::increment(bits),
            Direction::Backward => bits::decrement(bits),
        }
    }

    /// Jump target for the current position, or `None` when the space is
    /// exhausted in the traversal direction. Targets are public by table
    /// construction (no two blocks are adjacent), so one jump suffices.
    fn escape(&mut self, addr: Ipv4Addr) -> Option<Ipv4Addr> {
        match classify(addr) {
            Classification::Public => Some(addr),
            Classification::Broadcast => match self.direction {
                // Nothing above the broadcast address.
                Direction::Forward => {
                    self.done = true;
                    None
                }
                Direction::Backward => Some(LAST_PUBLIC),
            },
            Classification::Reserved(block) => {
                let target = match self.direction {
                    // Past the top block only the broadcast sentinel
                    // remains; below the bottom block there is nothing.
                    Direction::Forward if block.end() == TOP_BLOCK_END => None,
                    Direction::Forward => Some(Ipv4Addr::from(u32::from(block.end()) + 1)),
                    Direction::Backward if block.start() == Ipv4Addr::UNSPECIFIED => None,
                    Direction::Backward => Some(Ipv4Addr::from(u32::from(block.start()) - 1)),
                };
                match target {
                    Some(target) => {
                        debug!(
                            "{addr} is inside {}, jumping to {target}",
                            block.name()
                        );
                    }
                    None => {
                        debug!("{addr} is inside {}, space exhausted", block.name());
                        self.done = true;
                    }
                }
                target
            }
        }
    }
}

impl Iterator for Sequential {
    type Item = Result<Ipv4Addr, EnumerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.cancel.is_cancelled() {
            self.done = true;
            return Some(Err(EnumerationError::Cancelled));
        }

        let current = self.bits.to_addr(BitOrder::Natural);
        let addr = self.escape(current)?;
        if addr != current {
            self.bits = BitVec::from_addr(addr, BitOrder::Natural);
        }

        // Prepare the next call. The yielded address is public, so it is
        // never the all-ones or all-zero counter state.
        self.bits = self.step(self.bits);
        Some(Ok(addr))
    }
}
