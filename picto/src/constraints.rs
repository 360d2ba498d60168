//! Size constraints handed down by the host layout system.
//!
//! Each axis is constrained independently: either the parent dictates an
//! exact size, or it offers an upper bound and lets the content decide
//! ("wrap content").

use crate::error::{Error, Result};

/// Raw mode value for [`SizeConstraint::Exact`] in host-encoded constraints.
pub const MODE_EXACTLY: u32 = 1;
/// Raw mode value for [`SizeConstraint::AtMost`] in host-encoded constraints.
pub const MODE_AT_MOST: u32 = 2;

/// A per-axis sizing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeConstraint {
    /// The parent requires exactly this many pixels.
    Exact(u32),
    /// The content may choose any size up to this many pixels.
    AtMost(u32),
}

impl SizeConstraint {
    /// Decode a host-supplied `(mode, size)` pair.
    ///
    /// Only [`MODE_EXACTLY`] and [`MODE_AT_MOST`] are defined. Anything else
    /// is a caller bug and is rejected rather than defaulted.
    pub fn from_raw(mode: u32, size: u32) -> Result<Self> {
        match mode {
            MODE_EXACTLY => Ok(Self::Exact(size)),
            MODE_AT_MOST => Ok(Self::AtMost(size)),
            other => Err(Error::UnknownConstraintMode(other)),
        }
    }

    /// The pixel value carried by the constraint.
    #[inline]
    pub fn size(&self) -> u32 {
        match *self {
            Self::Exact(size) | Self::AtMost(size) => size,
        }
    }

    /// Apply this constraint to a content-driven desired size.
    #[inline]
    pub fn resolve(&self, desired: u32) -> u32 {
        match *self {
            Self::Exact(size) => size,
            Self::AtMost(bound) => desired.min(bound),
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// Short name of the constraint kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Exact(_) => "exact",
            Self::AtMost(_) => "at_most",
        }
    }
}

/// Constraints for both axes of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutConstraints {
    pub width: SizeConstraint,
    pub height: SizeConstraint,
}

impl LayoutConstraints {
    #[inline]
    pub fn new(width: SizeConstraint, height: SizeConstraint) -> Self {
        Self { width, height }
    }

    /// Create tight constraints (exact size required).
    #[inline]
    pub fn exact(width: u32, height: u32) -> Self {
        Self::new(SizeConstraint::Exact(width), SizeConstraint::Exact(height))
    }

    /// Create loose constraints with maximum bounds.
    #[inline]
    pub fn at_most(max_width: u32, max_height: u32) -> Self {
        Self::new(SizeConstraint::AtMost(max_width), SizeConstraint::AtMost(max_height))
    }

    /// Whether both axes are exact.
    #[inline]
    pub fn is_tight(&self) -> bool {
        self.width.is_exact() && self.height.is_exact()
    }
}
