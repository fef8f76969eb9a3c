use bitflags::bitflags;

bitflags! {
    /// Whether the layout engine may resize a widget along one axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SizePolicy: u8 {
        /// May grow beyond the current size, up to the max.
        const GROW = 1;
        /// May shrink below the current size, down to the min.
        const SHRINK = 1 << 1;
        /// Grow and shrink.
        const EXPANDING = Self::GROW.bits() | Self::SHRINK.bits();
    }
}

impl SizePolicy {
    /// Neither grow nor shrink: the layout engine keeps the current size.
    pub const FIXED: Self = Self::empty();

    /// True if the axis is pinned to its current size.
    pub fn is_fixed(&self) -> bool {
        self.is_empty()
    }
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self::EXPANDING
    }
}

/// Per-axis size policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizePolicies {
    /// Horizontal axis.
    pub horizontal: SizePolicy,
    /// Vertical axis.
    pub vertical: SizePolicy,
}

impl SizePolicies {
    /// Both axes fixed.
    pub const FIXED: Self = Self::new(SizePolicy::FIXED, SizePolicy::FIXED);
    /// Both axes expanding.
    pub const EXPANDING: Self = Self::new(SizePolicy::EXPANDING, SizePolicy::EXPANDING);

    /// Construct from explicit axes.
    pub const fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_is_empty() {
        assert!(SizePolicy::FIXED.is_fixed());
        assert!(!SizePolicy::GROW.is_fixed());
        assert_eq!(SizePolicy::default(), SizePolicy::GROW | SizePolicy::SHRINK);
        assert_eq!(SizePolicies::default(), SizePolicies::EXPANDING);
    }
}
