//! IANA reserved-range classification.
//!
//! Both enumerators consult the same declarative table, so the block
//! boundaries are encoded exactly once.

use std::net::Ipv4Addr;

/// A contiguous range of IPv4 addresses set aside by IANA, excluded from
/// public enumeration.
#[derive(Debug, PartialEq, Eq)]
pub struct ReservedBlock {
    name: &'static str,
    start: u32,
    end: u32,
}

impl ReservedBlock {
    const fn new(name: &'static str, start: u32, end: u32) -> Self {
        ReservedBlock { name, start, end }
    }

    /// IANA designation, e.g. `"loopback"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Lowest address in the block.
    #[must_use]
    pub fn start(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.start)
    }

    /// Highest address in the block.
    #[must_use]
    pub fn end(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.end)
    }

    fn contains(&self, value: u32) -> bool {
        (self.start..=self.end).contains(&value)
    }
}

/// Verdict for a single address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Publicly routable.
    Public,
    /// Inside the referenced reserved block.
    Reserved(&'static ReservedBlock),
    /// 255.255.255.255. A sentinel marking the top of the space, not a
    /// skippable block.
    Broadcast,
}

const fn ip(a: u8, b: u8, c: u8, d: u8) -> u32 {
    u32::from_be_bytes([a, b, c, d])
}

/// The reserved ranges, ascending and disjoint. No two blocks are adjacent,
/// so the address just past either boundary of any block is public.
///
/// The final entry folds multicast (224.0.0.0/4) and reserved-for-future-use
/// (240.0.0.0/4) into one block: jump targets only need the outer boundary,
/// and no enumeration path distinguishes the two designations.
/// 255.255.255.255 is excluded here and classified as [`Classification::Broadcast`].
static RESERVED_BLOCKS: [ReservedBlock; 14] = [
    ReservedBlock::new("this network", ip(0, 0, 0, 0), ip(0, 255, 255, 255)),
    ReservedBlock::new("private use A", ip(10, 0, 0, 0), ip(10, 255, 255, 255)),
    ReservedBlock::new("shared NAT space", ip(100, 64, 0, 0), ip(100, 127, 255, 255)),
    ReservedBlock::new("loopback", ip(127, 0, 0, 0), ip(127, 255, 255, 255)),
    ReservedBlock::new("link local", ip(169, 254, 0, 0), ip(169, 254, 255, 255)),
    ReservedBlock::new("private use B", ip(172, 16, 0, 0), ip(172, 31, 255, 255)),
    ReservedBlock::new("IETF protocol assignments", ip(192, 0, 0, 0), ip(192, 0, 0, 255)),
    ReservedBlock::new("documentation (TEST-NET-1)", ip(192, 0, 2, 0), ip(192, 0, 2, 255)),
    ReservedBlock::new("6to4 relay anycast", ip(192, 88, 99, 0), ip(192, 88, 99, 255)),
    ReservedBlock::new("private use C", ip(192, 168, 0, 0), ip(192, 168, 255, 255)),
    ReservedBlock::new("benchmarking", ip(198, 18, 0, 0), ip(198, 19, 255, 255)),
    ReservedBlock::new("documentation (TEST-NET-2)", ip(198, 51, 100, 0), ip(198, 51, 100, 255)),
    ReservedBlock::new("documentation (TEST-NET-3)", ip(203, 0, 113, 0), ip(203, 0, 113, 255)),
    ReservedBlock::new("multicast and future use", ip(224, 0, 0, 0), ip(255, 255, 255, 254)),
];

/// Classifies an address against the reserved-range table.
///
/// Total over all 2^32 addresses; every address receives exactly one
/// verdict.
///
/// # Example
///
/// ```
/// use ip_enumeration::{classify, Classification};
///
/// assert_eq!(classify("8.8.8.8".parse().unwrap()), Classification::Public);
/// match classify("10.1.2.3".parse().unwrap()) {
///     Classification::Reserved(block) => assert_eq!(block.name(), "private use A"),
///     other => panic!("unexpected verdict: {other:?}"),
/// }
/// ```
#[must_use]
pub fn classify(addr: Ipv4Addr) -> Classification {
    let value = u32::from(addr);
    if value == u32::MAX {
        return Classification::Broadcast;
    }
    RESERVED_BLOCKS
        .iter()
        .find(|block| block.contains(value))
        .map_or(Classification::Public, Classification::Reserved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    fn reserved_in(s: &str) -> &'static ReservedBlock {
        match classify(addr(s)) {
            Classification::Reserved(block) => block,
            other => panic!("{s} should be reserved, got {other:?}"),
        }
    }

    #[test]
    fn test_table_is_ascending_and_disjoint() {
        for window in RESERVED_BLOCKS.windows(2) {
            assert!(window[0].end < window[1].start);
        }
        for block in &RESERVED_BLOCKS {
            assert!(block.start <= block.end);
        }
    }

    #[test]
    fn test_block_boundaries() {
        // (inside the block, just below, just above)
        let cases = [
            ("this network", "0.0.0.0", None, Some("1.0.0.0")),
            ("this network", "0.255.255.255", None, Some("1.0.0.0")),
            ("private use A", "10.0.0.0", Some("9.255.255.255"), Some("11.0.0.0")),
            ("private use A", "10.255.255.255", Some("9.255.255.255"), Some("11.0.0.0")),
            ("shared NAT space", "100.64.0.0", Some("100.63.255.255"), Some("100.128.0.0")),
            ("shared NAT space", "100.127.255.255", Some("100.63.255.255"), Some("100.128.0.0")),
            ("loopback", "127.0.0.0", Some("126.255.255.255"), Some("128.0.0.0")),
            ("loopback", "127.255.255.255", Some("126.255.255.255"), Some("128.0.0.0")),
            ("link local", "169.254.0.0", Some("169.253.255.255"), Some("169.255.0.0")),
            ("link local", "169.254.255.255", Some("169.253.255.255"), Some("169.255.0.0")),
            ("private use B", "172.16.0.0", Some("172.15.255.255"), Some("172.32.0.0")),
            ("private use B", "172.31.255.255", Some("172.15.255.255"), Some("172.32.0.0")),
            ("IETF protocol assignments", "192.0.0.0", Some("191.255.255.255"), Some("192.0.1.0")),
            ("IETF protocol assignments", "192.0.0.255", Some("191.255.255.255"), Some("192.0.1.0")),
            ("documentation (TEST-NET-1)", "192.0.2.0", Some("192.0.1.255"), Some("192.0.3.0")),
            ("documentation (TEST-NET-1)", "192.0.2.255", Some("192.0.1.255"), Some("192.0.3.0")),
            ("6to4 relay anycast", "192.88.99.0", Some("192.88.98.255"), Some("192.88.100.0")),
            ("6to4 relay anycast", "192.88.99.255", Some("192.88.98.255"), Some("192.88.100.0")),
            ("private use C", "192.168.0.0", Some("192.167.255.255"), Some("192.169.0.0")),
            ("private use C", "192.168.255.255", Some("192.167.255.255"), Some("192.169.0.0")),
            ("benchmarking", "198.18.0.0", Some("198.17.255.255"), Some("198.20.0.0")),
            ("benchmarking", "198.19.255.255", Some("198.17.255.255"), Some("198.20.0.0")),
            ("documentation (TEST-NET-2)", "198.51.100.0", Some("198.51.99.255"), Some("198.51.101.0")),
            ("documentation (TEST-NET-2)", "198.51.100.255", Some("198.51.99.255"), Some("198.51.101.0")),
            ("documentation (TEST-NET-3)", "203.0.113.0", Some("203.0.112.255"), Some("203.0.114.0")),
            ("documentation (TEST-NET-3)", "203.0.113.255", Some("203.0.112.255"), Some("203.0.114.0")),
            ("multicast and future use", "224.0.0.0", Some("223.255.255.255"), None),
            ("multicast and future use", "255.255.255.254", Some("223.255.255.255"), None),
        ];
        for (name, inside, below, above) in cases {
            assert_eq!(reserved_in(inside).name(), name, "{inside}");
            if let Some(below) = below {
                assert_eq!(classify(addr(below)), Classification::Public, "{below}");
            }
            if let Some(above) = above {
                assert_eq!(classify(addr(above)), Classification::Public, "{above}");
            }
        }
    }

    #[test]
    fn test_broadcast_is_a_sentinel() {
        assert_eq!(
            classify(addr("255.255.255.255")),
            Classification::Broadcast
        );
    }

    #[test]
    fn test_catch_all_spans_multicast_and_future_use() {
        // One block for jump purposes even though IANA splits it in two.
        assert_eq!(
            reserved_in("239.255.255.255").name(),
            "multicast and future use"
        );
        assert_eq!(reserved_in("240.0.0.0").name(), "multicast and future use");
    }

    #[test]
    fn test_sample_public_addresses() {
        for s in [
            "1.0.0.0",
            "8.8.8.8",
            "100.128.0.0",
            "172.32.0.0",
            "192.0.1.0",
            "192.88.100.0",
            "203.0.114.0",
            "223.255.255.255",
        ] {
            assert_eq!(classify(addr(s)), Classification::Public, "{s}");
        }
    }
}
