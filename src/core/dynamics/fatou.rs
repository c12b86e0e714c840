/// Long-term behaviour of one orbit within the iteration budget.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FatouKind {
    Divergent,
    Convergent,
    Indeterminate,
}

impl FatouKind {
    pub const ALL: &'static [Self] = &[Self::Divergent, Self::Convergent, Self::Indeterminate];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Divergent => "Divergent",
            Self::Convergent => "Convergent",
            Self::Indeterminate => "Indeterminate",
        }
    }
}

impl std::fmt::Display for FatouKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Outcome of iterating one seed.
///
/// `value` is the smooth escape index for divergent orbits, `dist / zero`
/// for convergent ones and an instability score otherwise. `period` is only
/// meaningful for convergent orbits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FatouResult {
    pub kind: FatouKind,
    pub value: f64,
    pub period: usize,
}

impl FatouResult {
    /// Returned when the orbit goes non-finite or the escape interpolation
    /// has no usable root.
    pub const DEGENERATE: Self = Self {
        kind: FatouKind::Indeterminate,
        value: 0.0,
        period: 0,
    };

    #[must_use]
    pub const fn divergent(value: f64) -> Self {
        Self {
            kind: FatouKind::Divergent,
            value,
            period: 0,
        }
    }

    #[must_use]
    pub const fn convergent(value: f64, period: usize) -> Self {
        Self {
            kind: FatouKind::Convergent,
            value,
            period,
        }
    }

    #[must_use]
    pub const fn indeterminate(value: f64) -> Self {
        Self {
            kind: FatouKind::Indeterminate,
            value,
            period: 0,
        }
    }
}
