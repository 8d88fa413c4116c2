// Our Real scalar type. GeoJSON coordinates are double precision, so unlike
// a mesh kernel there is no f32 variant to switch in.
pub type Real = f64;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;
/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

/// Mean earth radius in meters, the sphere `geo`'s haversine formulas are
/// defined on.
pub const MEAN_EARTH_RADIUS: Real = 6_371_008.8;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion (meters per unit)
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const METER: Real = 1.0;
pub const KILOMETER: Real = 1000.0;
pub const FOOT: Real = 0.3048;
pub const MILE: Real = 1609.344;
pub const NAUTICAL_MILE: Real = 1852.0;

/// Distance units accepted by [`BufferParams`](crate::BufferParams).
///
/// `Degrees` and `Radians` are arc lengths on the mean-radius sphere, so a
/// radius of `90.0` in `Degrees` reaches a quarter of the way around the
/// globe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    Meters,
    #[default]
    Kilometers,
    Feet,
    Miles,
    NauticalMiles,
    Degrees,
    Radians,
}

impl Units {
    /// Converts `distance` expressed in `self` to meters.
    pub fn to_meters(self, distance: Real) -> Real {
        match self {
            Units::Meters => distance * METER,
            Units::Kilometers => distance * KILOMETER,
            Units::Feet => distance * FOOT,
            Units::Miles => distance * MILE,
            Units::NauticalMiles => distance * NAUTICAL_MILE,
            Units::Degrees => distance.to_radians() * MEAN_EARTH_RADIUS,
            Units::Radians => distance * MEAN_EARTH_RADIUS,
        }
    }
}
