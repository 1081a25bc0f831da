pub mod geo;
pub mod observer;
#[cfg(feature = "web")]
pub mod station;
pub mod visibility;

pub use geo::GeoCoordinate;
pub use observer::Observer;
#[cfg(feature = "web")]
pub use station::Station;
pub use visibility::VisibilityResult;
