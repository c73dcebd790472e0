//! Bit-vector representation of IPv4 addresses.
//!
//! Both enumerators drive a 32-digit binary counter; they differ only in how
//! the counter's digits regroup into octets. The arithmetic itself is shared
//! and order-agnostic: digit 31 is always the least-significant position.

use std::net::Ipv4Addr;

use crate::error::EnumerationError;

/// Binary digits per octet.
const OCTET: usize = 8;

/// Binary digits in an IPv4 address.
const WIDTH: usize = 32;

/// How the 32 digits of a [`BitVec`] map onto the four octets of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BitOrder {
    /// Digit 0 is the most-significant bit of the first octet. Counting in
    /// this order walks the address space in numeric order.
    Natural,
    /// Digit 0 is the least-significant bit of the fourth octet; the whole
    /// 32-bit pattern is mirrored end-to-end. The counter's low digits map
    /// to the address's high bits, so consecutive counter values land in
    /// distant regions of the space.
    Reversed,
}

/// A fixed-width binary counter over the IPv4 address space.
///
/// Owned by exactly one enumerator instance and replaced wholesale on every
/// step; no two live references to the same generation exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BitVec([u8; WIDTH]);

impl BitVec {
    /// Splits the address into 32 binary digits under the given order.
    pub(crate) fn from_addr(addr: Ipv4Addr, order: BitOrder) -> Self {
        let value = u32::from(addr);
        let mut digits = [0u8; WIDTH];
        for (i, digit) in digits.iter_mut().enumerate() {
            let bit = match order {
                BitOrder::Natural => WIDTH - 1 - i,
                BitOrder::Reversed => i,
            };
            *digit = ((value >> bit) & 1) as u8;
        }
        BitVec(digits)
    }

    /// Reconstructs one 8-digit group as an octet, most-significant digit
    /// first. Total: any 8 digits regroup into a valid `u8`.
    fn octet(&self, group: usize, order: BitOrder) -> u8 {
        let mut value = 0u8;
        for bit in 0..OCTET {
            let digit = match order {
                BitOrder::Natural => self.0[group * OCTET + bit],
                BitOrder::Reversed => self.0[WIDTH - 1 - group * OCTET - bit],
            };
            value = (value << 1) | digit;
        }
        value
    }

    /// Reads the counter back as an address under the given order.
    pub(crate) fn to_addr(self, order: BitOrder) -> Ipv4Addr {
        Ipv4Addr::new(
            self.octet(0, order),
            self.octet(1, order),
            self.octet(2, order),
            self.octet(3, order),
        )
    }
}

/// Binary add-one. Scans from the least-significant digit leftward: each 1
/// becomes 0 with the carry continuing, the first 0 becomes 1 and the chain
/// stops.
///
/// Callers must not pass an all-ones vector; both enumerators terminate on
/// their sentinel before reaching that state.
pub(crate) fn increment(mut bits: BitVec) -> BitVec {
    for digit in bits.0.iter_mut().rev() {
        if *digit == 0 {
            *digit = 1;
            break;
        }
        *digit = 0;
    }
    bits
}

/// Binary subtract-one. The first 1 from the back is cleared (borrow) and
/// every less-significant digit becomes 1.
///
/// Callers must not pass an all-zero vector; both enumerators terminate on
/// their sentinel before reaching that state.
pub(crate) fn decrement(mut bits: BitVec) -> BitVec {
    for i in (0..WIDTH).rev() {
        if bits.0[i] == 1 {
            bits.0[i] = 0;
            for digit in &mut bits.0[i + 1..] {
                *digit = 1;
            }
            break;
        }
    }
    bits
}

/// Parses a dotted-quad literal: exactly four dot-separated decimal
/// components, each in [0, 255].
///
/// This is the only validation in the crate. Addresses derived from a
/// [`BitVec`] are in range by construction and never re-checked.
pub(crate) fn parse_literal(literal: &str) -> Result<Ipv4Addr, EnumerationError> {
    let mut octets = [0u8; 4];
    let mut components = literal.split('.');
    for slot in &mut octets {
        let component = components.next().ok_or_else(|| {
            EnumerationError::format(literal, "expected four dot-separated components")
        })?;
        *slot = component.parse().map_err(|_| {
            EnumerationError::format(
                literal,
                format!("component `{component}` is not an integer in 0..=255"),
            )
        })?;
    }
    if components.next().is_some() {
        return Err(EnumerationError::format(
            literal,
            "expected four dot-separated components",
        ));
    }
    Ok(Ipv4Addr::from(octets))
}
