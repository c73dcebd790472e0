//! Staggered enumeration of public IPv4 addresses.

use std::net::Ipv4Addr;

use log::{debug, trace};

use crate::bits::{self, BitOrder, BitVec};
use crate::blocks::{classify, Classification};
use crate::cancel::CancellationToken;
use crate::error::EnumerationError;
use crate::Direction;

/// Iterator over public IPv4 addresses in bit-reversal order.
///
/// A 32-bit counter advances normally, but its bit pattern is read mirrored
/// end-to-end when mapped to an address: the counter's low bits become the
/// address's high bits, so consecutive yields land in distant regions of
/// the space. Useful when visiting many addresses in quick succession
/// (e.g. reverse-DNS sweeps), since numerically adjacent addresses tend to
/// belong to the same operator.
///
/// Reserved addresses are still skipped, but one counter step at a time:
/// the reversed mapping is non-monotonic with respect to address value, so
/// no block-sized jump is possible.
///
/// # Example
///
/// ```
/// use ip_enumeration::{CancellationToken, Direction, Staggered};
///
/// // The default Forward start is counter zero (address 0.0.0.0, reserved
/// // and skipped); the first public yields fan out across the space.
/// let sweep = Staggered::new(Direction::Forward, None, CancellationToken::new()).unwrap();
/// let first: Vec<String> = sweep
///     .take(3)
///     .map(|addr| addr.unwrap().to_string())
///     .collect();
/// assert_eq!(first, ["128.0.0.0", "64.0.0.0", "32.0.0.0"]);
/// ```
#[derive(Debug)]
pub struct Staggered {
    bits: BitVec,
    direction: Direction,
    cancel: CancellationToken,
    done: bool,
}

impl Staggered {
    /// Starts a staggered enumeration.
    ///
    /// `initial` is a dotted-quad literal naming the first *candidate*
    /// address; the internal counter is its bit-reversal. When omitted, the
    /// counter starts at zero (`Forward`, candidate 0.0.0.0) or all-ones
    /// (`Backward`, candidate 255.255.255.255); both candidates are
    /// reserved, so the first yield is reached by skipping. A reserved
    /// starting point is not an error.
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
                Direction::Forward => Ipv4Addr::UNSPECIFIED,
                Direction::Backward => Ipv4Addr::BROADCAST,
            },
        };
        Ok(Staggered {
            bits: BitVec::from_addr(start, BitOrder::Reversed),
            direction,
            cancel,
            done: false,
        })
    }

    /// Advances the counter one step in the traversal direction.
    fn step(&self, bits: BitVec) -> BitVec {
        match self.direction {
            Direction::Forward => bits::increment(bits),
            Direction::Backward => bits::decrement(bits),
        }
    }

    /// Whether the candidate is this direction's exhaustion sentinel.
    ///
    /// Forward exhausts on the all-ones counter (candidate
    /// 255.255.255.255). Backward exhausts on candidates 0.0.0.0 *and*
    /// 0.0.0.1; the near-zero cut-off does not mirror the Forward rule and
    /// is kept exactly as the original boundary behavior.
    fn exhausted(&self, addr: Ipv4Addr) -> bool {
        match self.direction {
            Direction::Forward => addr == Ipv4Addr::BROADCAST,
            Direction::Backward => u32::from(addr) <= 1,
        }
    }
}

impl Iterator for Staggered {
    type Item = Result<Ipv4Addr, EnumerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            if self.cancel.is_cancelled() {
                self.done = true;
                return Some(Err(EnumerationError::Cancelled));
            }

            let addr = self.bits.to_addr(BitOrder::Reversed);
            if self.exhausted(addr) {
                debug!("reached {addr}, space exhausted");
                self.done = true;
                return None;
            }
            match classify(addr) {
                Classification::Public => {
                    self.bits = self.step(self.bits);
                    return Some(Ok(addr));
                }
                // Reserved in either direction, plus the broadcast address
                // going Backward (an ordinary skip there, not a sentinel).
                Classification::Reserved(_) | Classification::Broadcast => {
                    trace!("skipping reserved candidate {addr}");
                    self.bits = self.step(self.bits);
                }
            }
        }
    }
}
