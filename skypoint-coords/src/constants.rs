/// Rotation from ICRS to IAU 1958 Galactic coordinates.
///
/// Rows are the Galactic X (toward the centre), Y (toward l = 90°) and Z
/// (toward the north Galactic pole) axes expressed in ICRS:
/// - North Galactic Pole (NGP): RA = 192.859508°, Dec = 27.128336°
/// - Galactic Center direction: l=0°, b=0° points toward RA = 266.405°, Dec = -28.936°
///
/// Reference: Liu, J.-C., Zhu, Z., & Zhang, H. (2011). "Reconsidering the Galactic
/// coordinate system". Astronomy & Astrophysics, 526, A16.
/// See also: ERFA function eraG2icrs documentation
#[allow(clippy::excessive_precision)]
pub const ICRS_TO_GALACTIC: [[f64; 3]; 3] = [
    [
        -0.054875560416215368492398900454,
        -0.873437090234885048760383168409,
        -0.483835015548713226831774175116,
    ],
    [
        0.494109427875583673525222371358,
        -0.444829629960011178146614061616,
        0.746982244497218890527388004556,
    ],
    [
        -0.867666149019004701181616534570,
        -0.198076373431201528180486091412,
        0.455983776175066922272100478348,
    ],
];

/// Galactic longitude of the supergalactic origin (SGL = 0, SGB = 0), degrees.
/// The origin lies on the Galactic equator.
pub const SUPERGALACTIC_ORIGIN_L_DEG: f64 = 137.37;

/// Galactic `(l, b)` of the north supergalactic pole, degrees (de Vaucouleurs 1991).
pub const SUPERGALACTIC_POLE_L_DEG: f64 = 47.37;
pub const SUPERGALACTIC_POLE_B_DEG: f64 = 6.32;

/// FK5 (J2000) orientation relative to Hipparcos/ICRS, milliarcseconds.
///
/// Rotation vector components from Mignard & Froeschlé (2000), as used by
/// ERFA `eraFk5hip`. The accompanying spin is not applied.
pub const FK5_ORIENTATION_MAS: [f64; 3] = [-19.9, -9.1, 22.9];
