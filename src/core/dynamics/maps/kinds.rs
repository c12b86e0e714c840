use crate::core::data::complex::Complex;
use crate::core::dynamics::map::DynamicalMap;
use crate::core::dynamics::maps::quadratic::Quadratic;
use crate::core::dynamics::maps::tangent_quadratic::TangentQuadratic;
use crate::core::dynamics::params::ParameterSet;

/// Built-in maps, dispatched statically per orbit step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapKinds {
    #[default]
    TangentQuadratic,
    Quadratic,
}

impl MapKinds {
    pub const ALL: &'static [Self] = &[Self::TangentQuadratic, Self::Quadratic];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TangentQuadratic => "z² − p1·tan(p0)",
            Self::Quadratic => "z² + p0",
        }
    }
}

impl std::fmt::Display for MapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl DynamicalMap for MapKinds {
    #[inline]
    fn apply(&self, z: Complex, params: &ParameterSet) -> Complex {
        match self {
            Self::TangentQuadratic => TangentQuadratic.apply(z, params),
            Self::Quadratic => Quadratic.apply(z, params),
        }
    }
}
