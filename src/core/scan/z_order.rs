//! Bit-reversed Z-order (Morton) scan.
//!
//! Scan index bit `2i` selects bit `n - 1 - i` of `x` and bit `2i + 1`
//! selects the same bit of `y`, so the most significant coordinate bits are
//! driven by the least significant index bits. The first four indices land on
//! the four quadrant corners, the first sixteen on a 4x4 lattice, and so on:
//! any prefix of the scan is an evenly spread, progressively finer preview.

use crate::core::data::grid_point::GridPoint;

/// Decodes a scan index into the grid cell it visits at exponent `n`.
#[must_use]
pub fn decode(index: u64, resolution_exponent: u32) -> GridPoint {
    let mut x = 0u32;
    let mut y = 0u32;

    for i in 0..resolution_exponent {
        let bit = resolution_exponent - 1 - i;
        x |= (((index >> (2 * i)) & 1) as u32) << bit;
        y |= (((index >> (2 * i + 1)) & 1) as u32) << bit;
    }

    GridPoint { x, y }
}

/// Inverse of [`decode`].
#[must_use]
pub fn encode(point: GridPoint, resolution_exponent: u32) -> u64 {
    let mut index = 0u64;

    for i in 0..resolution_exponent {
        let bit = resolution_exponent - 1 - i;
        index |= u64::from((point.x >> bit) & 1) << (2 * i);
        index |= u64::from((point.y >> bit) & 1) << (2 * i + 1);
    }

    index
}

/// A restartable, finite stream over all `4^n` cells of a `2^n x 2^n` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZOrderScan {
    resolution_exponent: u32,
    next_index: u64,
    len: u64,
}

impl ZOrderScan {
    #[must_use]
    pub fn new(resolution_exponent: u32) -> Self {
        Self {
            resolution_exponent,
            next_index: 0,
            len: 1u64 << (2 * resolution_exponent),
        }
    }

    /// Rewinds to index 0, optionally at a new resolution.
    pub fn restart(&mut self, resolution_exponent: u32) {
        *self = Self::new(resolution_exponent);
    }

    #[must_use]
    pub fn resolution_exponent(&self) -> u32 {
        self.resolution_exponent
    }

    /// Index of the next cell to be produced.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.next_index
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.len
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next_index >= self.len
    }
}

impl Iterator for ZOrderScan {
    type Item = GridPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }

        let point = decode(self.next_index, self.resolution_exponent);
        self.next_index += 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next_index;

        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_scan_visits_every_cell_exactly_once() {
        for n in 1..=6 {
            let size = 1u32 << n;
            let visited: Vec<GridPoint> = ZOrderScan::new(n).collect();
            let unique: HashSet<GridPoint> = visited.iter().copied().collect();

            assert_eq!(visited.len(), (size * size) as usize, "n = {}", n);
            assert_eq!(unique.len(), visited.len(), "duplicate cell at n = {}", n);
            assert!(visited.iter().all(|p| p.x < size && p.y < size));
        }
    }

    #[test]
    fn test_first_indices_cover_quadrants() {
        let first: Vec<GridPoint> = ZOrderScan::new(9).take(4).collect();

        assert_eq!(
            first,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(256, 0),
                GridPoint::new(0, 256),
                GridPoint::new(256, 256),
            ]
        );
    }

    #[test]
    fn test_sixteen_cell_prefix_is_a_4x4_lattice() {
        let prefix: HashSet<GridPoint> = ZOrderScan::new(3).take(16).collect();

        for y in [0, 2, 4, 6] {
            for x in [0, 2, 4, 6] {
                assert!(prefix.contains(&GridPoint::new(x, y)));
            }
        }
    }

    #[test]
    fn test_decode_follows_bit_interleave() {
        // index 0b10_01: pair 0 = (x:1, y:0), pair 1 = (x:0, y:1)
        assert_eq!(decode(0b1001, 2), GridPoint::new(0b10, 0b01));
        assert_eq!(decode(0b1111, 2), GridPoint::new(3, 3));
    }

    #[test]
    fn test_encode_inverts_decode() {
        for index in (0..1u64 << 18).step_by(977) {
            assert_eq!(encode(decode(index, 9), 9), index);
        }

        let corner = GridPoint::new(511, 0);
        assert_eq!(decode(encode(corner, 9), 9), corner);
    }

    #[test]
    fn test_restart_rewinds_and_changes_resolution() {
        let mut scan = ZOrderScan::new(2);
        scan.by_ref().take(5).for_each(drop);
        assert_eq!(scan.position(), 5);

        scan.restart(3);

        assert_eq!(scan.position(), 0);
        assert_eq!(scan.total(), 64);
        assert_eq!(scan.next(), Some(GridPoint::new(0, 0)));
    }

    #[test]
    fn test_scan_is_finite() {
        let mut scan = ZOrderScan::new(1);

        assert_eq!(scan.by_ref().count(), 4);
        assert!(scan.is_exhausted());
        assert_eq!(scan.next(), None);
    }

    #[test]
    fn test_largest_exponent_total_fits() {
        let scan = ZOrderScan::new(30);

        assert_eq!(scan.total(), 1u64 << 60);
        assert_eq!(decode(scan.total() - 1, 30), GridPoint::new((1 << 30) - 1, (1 << 30) - 1));
    }
}
