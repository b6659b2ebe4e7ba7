// SPDX-License-Identifier: MPL-2.0
//! Decorative barcode shown on the boarding pass.
//!
//! The pattern depends only on the bar index and encodes nothing.

/// Number of bars in the barcode.
pub const BARCODE_BAR_COUNT: usize = 40;

/// Height class of a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarHeight {
    Tall,
    Medium,
    Short,
}

impl BarHeight {
    /// Height class of the bar at `index`: multiples of 3 are tall, other
    /// multiples of 5 are medium, everything else is short.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index % 3 == 0 {
            BarHeight::Tall
        } else if index % 5 == 0 {
            BarHeight::Medium
        } else {
            BarHeight::Short
        }
    }

    /// Rendered height in logical pixels.
    ///
    /// `Medium` is drawn shorter than `Short`; the classes keep their names
    /// from the selection rule, not from their size.
    #[must_use]
    pub fn pixels(self) -> f32 {
        match self {
            BarHeight::Tall => 48.0,
            BarHeight::Medium => 32.0,
            BarHeight::Short => 40.0,
        }
    }
}

/// The full bar sequence, in drawing order.
#[must_use]
pub fn barcode() -> [BarHeight; BARCODE_BAR_COUNT] {
    std::array::from_fn(BarHeight::for_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barcode_has_forty_bars() {
        assert_eq!(barcode().len(), 40);
    }

    #[test]
    fn bar_heights_follow_index_rule() {
        assert_eq!(BarHeight::for_index(0), BarHeight::Tall);
        assert_eq!(BarHeight::for_index(5), BarHeight::Medium);
        assert_eq!(BarHeight::for_index(7), BarHeight::Short);
        // Multiple of both 3 and 5: the tall rule wins.
        assert_eq!(BarHeight::for_index(15), BarHeight::Tall);
        assert_eq!(BarHeight::for_index(10), BarHeight::Medium);
    }

    #[test]
    fn barcode_matches_for_index_everywhere() {
        for (i, bar) in barcode().into_iter().enumerate() {
            assert_eq!(bar, BarHeight::for_index(i), "bar {i}");
        }
    }

    #[test]
    fn barcode_class_counts() {
        let bars = barcode();
        let tall = bars.iter().filter(|b| **b == BarHeight::Tall).count();
        let medium = bars.iter().filter(|b| **b == BarHeight::Medium).count();
        // 0, 3, ..., 39 -> 14 tall; 5, 10, 20, 25, 35 -> 5 medium.
        assert_eq!(tall, 14);
        assert_eq!(medium, 5);
        assert_eq!(bars.len() - tall - medium, 21);
    }
}
