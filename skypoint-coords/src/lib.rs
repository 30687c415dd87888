//! Sky points in selectable celestial reference frames.
//!
//! `skypoint-coords` builds on `skypoint-core` to model one position on the
//! celestial sphere in a frame chosen by type: [`SkyPoint<F>`].
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`sky_point`] | [`SkyPoint`]: construction, separation, position angle, conversion |
//! | [`frames`] | The [`Frame`](frames::Frame) trait and the five fixed frames |
//! | [`transforms`] | Rotation-based conversion shared by every cross-frame entry point |
//! | [`representation`] | Spherical and Cartesian position storage |
//! | [`differential`] | Proper motion and radial velocity storage |
//! | [`units`] | Angle units used as type parameters |
//! | [`catalog`] | Name resolution and constellation lookup collaborators |
//! | [`errors`] | [`CoordError`] and [`CoordResult`] |
//!
//! # Example
//!
//! ```
//! use skypoint_coords::frames::{Galactic, Icrs};
//! use skypoint_coords::SkyPoint;
//!
//! let vega = SkyPoint::<Icrs>::from_lat_lon(38.783689, 279.234735);
//! let deneb = SkyPoint::<Icrs>::from_lat_lon(45.280339, 310.357980);
//! let sep_deg = vega.separation(&deneb).to_degrees();
//! assert!((sep_deg - 23.847).abs() < 0.001);
//!
//! let vega_gal: SkyPoint<Galactic> = vega.transform_to();
//! assert!((vega_gal.point().b().degrees() - 19.24).abs() < 0.01);
//! ```
//!
//! # Logging
//!
//! Conversions and lookups emit `debug`/`trace` records through the `log`
//! facade. Nothing is printed unless the application installs a logger.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for frames, representations,
//!   differentials, [`SkyPoint`] and [`CoordError`].

pub mod catalog;
pub(crate) mod constants;
pub mod differential;
pub mod errors;
pub mod frames;
pub mod representation;
pub mod sky_point;
pub mod transforms;
pub mod units;

pub use errors::{CoordError, CoordResult};
pub use sky_point::SkyPoint;

pub use catalog::{BoundaryTable, ConstellationCatalog, NameResolver, StaticResolver};
pub use frames::{Ecliptic, Fk5, Frame, Galactic, Icrs, Supergalactic};
pub use units::{AngleUnit, Degree, Hour, Radian};

pub use skypoint_core::{Angle, RotationMatrix3, Vector3};
