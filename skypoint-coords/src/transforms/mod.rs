//! Frame-to-frame conversion.
//!
//! Every supported frame is a fixed rotation away from ICRS, so a conversion
//! is a single matrix:
//!
//! ```text
//! M(A → G) = G::to_icrs_matrix()ᵀ · A::to_icrs_matrix()
//! ```
//!
//! The position's unit vector is rotated and its distance carried over. The
//! proper motion is rebuilt as a tangent vector on the source's local
//! east/north basis, rotated, and projected back onto the target's basis.
//! Radial velocity is unchanged by a rotation.
//!
//! Converting a frame to its own type returns an exact copy.

use crate::differential::SphericalCoslatDifferential;
use crate::frames::{Frame, FrameData};
use crate::representation::SphericalRepresentation;
use crate::units::Radian;
use skypoint_core::angle::wrap_0_2pi;
use skypoint_core::{RotationMatrix3, Vector3};
use std::any::Any;

/// Rotation carrying Cartesian vectors from frame `A` to frame `G`.
pub fn frame_rotation<A: Frame, G: Frame>() -> RotationMatrix3 {
    G::to_icrs_matrix().transpose() * A::to_icrs_matrix()
}

/// Re-expresses `source` in frame `G`.
///
/// ```
/// use skypoint_coords::frames::{Frame, Galactic, Icrs};
/// use skypoint_coords::transforms::convert_frame;
///
/// let centre = Galactic::from_degrees(0.0, 0.0);
/// let icrs: Icrs = convert_frame(&centre);
/// assert!((icrs.ra().degrees() - 266.405).abs() < 1e-3);
/// assert!((icrs.dec().degrees() + 28.936).abs() < 1e-3);
/// ```
pub fn convert_frame<A: Frame, G: Frame>(source: &A) -> G {
    if let Some(same) = (source as &dyn Any).downcast_ref::<G>() {
        return same.clone();
    }

    log::trace!("converting {} -> {}", A::NAME, G::NAME);

    let rotation = frame_rotation::<A, G>();
    let position = source.get_data().with_unit::<Radian>();
    let motion = source.get_differential();

    let (lon, lat) = (position.get_lon(), position.get_lat());
    let direction = rotation * Vector3::from_spherical(lon, lat);
    let (new_lon, new_lat) = direction.to_spherical();

    let converted_motion = if motion.d_lat() == 0.0 && motion.d_lon_coslat() == 0.0 {
        motion
    } else {
        let (east, north) = Vector3::east_north_basis(lon, lat);
        let tangent = rotation * (east * motion.d_lon_coslat() + north * motion.d_lat());
        let (new_east, new_north) = Vector3::east_north_basis(new_lon, new_lat);
        SphericalCoslatDifferential::new(
            tangent.dot(&new_north),
            tangent.dot(&new_east),
            motion.d_distance(),
        )
    };

    let converted = SphericalRepresentation::<Radian>::new(
        new_lat,
        wrap_0_2pi(new_lon),
        position.get_distance(),
    );

    G::from_frame_data(FrameData::new(
        converted.with_unit::<G::Unit>(),
        converted_motion,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::{Ecliptic, Fk5, Galactic, Icrs, Supergalactic};
    use crate::units::Degree;
    use skypoint_core::math::angular_separation;

    fn sep_deg<F: Frame>(a: &F, b: &F) -> f64 {
        a.separation(b).to_degrees()
    }

    #[test]
    fn test_same_type_is_exact_copy() {
        let p = Icrs::<Degree>::with_motion(12.3456789, 98.7654321, 4.2, 1.0, 2.0, 3.0);
        let q: Icrs<Degree> = convert_frame(&p);
        assert_eq!(p, q);
    }

    #[test]
    fn test_unit_change_within_icrs() {
        let p = Icrs::<Degree>::new(30.0, 45.0, 2.0);
        let q: Icrs<Radian> = convert_frame(&p);

        assert!((q.get_data().get_lat() - 30f64.to_radians()).abs() < 1e-15);
        assert!((q.get_data().get_lon() - 45f64.to_radians()).abs() < 1e-15);
        assert_eq!(q.get_data().get_distance(), 2.0);
    }

    #[test]
    fn test_galactic_centre_to_icrs() {
        let icrs: Icrs = convert_frame(&Galactic::from_degrees(0.0, 0.0));
        assert!((icrs.ra().degrees() - 266.404995).abs() < 1e-5);
        assert!((icrs.dec().degrees() - -28.936174).abs() < 1e-5);
    }

    #[test]
    fn test_m87_to_supergalactic() {
        let m87 = Icrs::from_degrees(187.70593, 12.39112);
        let sg: Supergalactic = convert_frame(&m87);

        assert!((sg.sgl().degrees() - 102.880572).abs() < 1e-5);
        assert!((sg.sgb().degrees() - -2.347922).abs() < 1e-5);
    }

    #[test]
    fn test_round_trips_preserve_direction_and_distance() {
        let start = Icrs::<Degree>::new(-33.3, 123.4, 7.5);

        let via_gal: Icrs = convert_frame(&convert_frame::<_, Galactic>(&start));
        let via_ecl: Icrs = convert_frame(&convert_frame::<_, Ecliptic>(&start));
        let via_sg: Icrs = convert_frame(&convert_frame::<_, Supergalactic>(&start));
        let via_fk5: Icrs = convert_frame(&convert_frame::<_, Fk5>(&start));

        for back in [via_gal, via_ecl, via_sg, via_fk5] {
            assert!(sep_deg(&start, &back) < 1e-10);
            assert_eq!(back.get_data().get_distance(), 7.5);
        }
    }

    #[test]
    fn test_conversion_preserves_separation() {
        let a = Icrs::<Degree>::new(10.0, 20.0, 1.0);
        let b = Icrs::<Degree>::new(-40.0, 200.0, 1.0);
        let ga: Galactic = convert_frame(&a);
        let gb: Galactic = convert_frame(&b);

        assert!((sep_deg(&a, &b) - sep_deg(&ga, &gb)).abs() < 1e-10);
    }

    #[test]
    fn test_zero_distance_survives_conversion() {
        let p = Icrs::<Degree>::new(10.0, 20.0, 0.0);
        let g: Galactic = convert_frame(&p);
        assert_eq!(g.get_data().get_distance(), 0.0);

        let back: Icrs = convert_frame(&g);
        assert!(sep_deg(&p, &back) < 1e-10);
    }

    #[test]
    fn test_proper_motion_magnitude_is_preserved() {
        let star = Icrs::<Degree>::with_motion(41.0, 10.0, 1.0, -3.0, 4.0, 12.5);
        let g: Galactic = convert_frame(&star);
        let m = g.get_differential();

        let total = (m.d_lat().powi(2) + m.d_lon_coslat().powi(2)).sqrt();
        assert!((total - 5.0).abs() < 1e-12);
        assert_eq!(m.d_distance(), 12.5);
    }

    #[test]
    fn test_proper_motion_round_trip() {
        let star = Icrs::<Degree>::with_motion(-62.0, 217.4, 1.3, 768.5, -3775.4, -21.7);
        let g: Galactic = convert_frame(&star);
        let back: Icrs = convert_frame(&g);
        let m = back.get_differential();

        assert!((m.d_lat() - 768.5).abs() < 1e-9);
        assert!((m.d_lon_coslat() - -3775.4).abs() < 1e-9);
        assert_eq!(m.d_distance(), -21.7);
    }

    #[test]
    fn test_proper_motion_follows_the_position() {
        // A point displaced along its proper motion must land where the
        // converted point displaced along the converted motion lands.
        let dt = 1e-6;
        let star = Icrs::<Radian>::with_motion(0.3, 1.2, 1.0, 0.4, -0.7, 0.0);
        let moved = Icrs::<Radian>::new(
            0.3 + 0.4 * dt,
            1.2 + -0.7 * dt / libm::cos(0.3),
            1.0,
        );

        let g: Galactic<Radian> = convert_frame(&star);
        let g_moved: Galactic<Radian> = convert_frame(&moved);
        let m = g.get_differential();
        let (lat, lon) = (g.get_data().get_lat(), g.get_data().get_lon());
        let predicted_lat = lat + m.d_lat() * dt;
        let predicted_lon = lon + m.d_lon_coslat() * dt / libm::cos(lat);

        let miss = angular_separation(
            predicted_lon,
            predicted_lat,
            g_moved.get_data().get_lon(),
            g_moved.get_data().get_lat(),
        );
        assert!(miss < 1e-11);
    }

    #[test]
    fn test_rotation_composition() {
        let direct = frame_rotation::<Galactic, Ecliptic>();
        let via_icrs = frame_rotation::<Icrs, Ecliptic>() * frame_rotation::<Galactic, Icrs>();
        assert!(direct.max_difference(&via_icrs) < 1e-15);
    }
}
