pub mod kinds;
pub mod quadratic;
pub mod tangent_quadratic;
