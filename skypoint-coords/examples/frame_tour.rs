use skypoint_coords::catalog::{BoundaryTable, StaticResolver};
use skypoint_coords::frames::{Ecliptic, Fk5, Frame, Galactic, Icrs, Supergalactic};
use skypoint_coords::{Angle, SkyPoint};

// A coarse stand-in for the Roman (1987) boundary table, enough to show the
// lookup. Real tables have 357 zones.
const TOY_BOUNDARIES: &str = "
# ra_low ra_high dec_low abbr (B1875)
 0.0 24.0  88.0 UMi
 4.0  6.5 -11.0 Ori
17.0 18.5 -45.0 Sgr
 0.0  3.0  21.0 And
18.0 19.5  25.0 Lyr
 0.0 24.0 -90.0 ---
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let resolver = StaticResolver::new()
        .with_entry("Sgr A*", Icrs::from_hours_degrees(17.76112, -29.00781))
        .with_entry("Polaris", Icrs::from_hours_degrees(2.53030, 89.26411))
        .with_entry("Vega", Icrs::from_hours_degrees(18.61564, 38.78369))
        .with_entry("Aldebaran", Icrs::from_hours_degrees(4.59868, 16.50930))
        .with_entry("M31", Icrs::from_hours_degrees(0.71222, 41.26917))
        .with_entry("M87", Icrs::from_hours_degrees(12.51373, 12.39112));
    let boundaries: BoundaryTable = TOY_BOUNDARIES.parse()?;

    // --- Galactic coordinates ---
    // Fixed rotation from ICRS (IAU 1958 definition, Hipparcos-refined matrix).

    println!("=== Galactic ===\n");

    for name in ["Sgr A*", "Polaris", "M31"] {
        let icrs: SkyPoint<Icrs> = SkyPoint::from_name(name, &resolver)?;
        let gal: SkyPoint<Galactic> = icrs.transform_to();
        println!("{name}:");
        println!("  {}", icrs);
        println!("  {}", gal);
    }

    let gc = SkyPoint::<Galactic>::from_lat_lon(0.0, 0.0);
    let gc_icrs: SkyPoint<Icrs> = gc.transform_to();
    println!("Galactic centre (l=0°, b=0°) -> {}\n", gc_icrs);

    // --- Supergalactic coordinates ---

    println!("=== Supergalactic ===\n");

    let m87: SkyPoint<Supergalactic> = SkyPoint::from_name("M87", &resolver)?;
    println!("M87 (Virgo cluster, near the supergalactic plane):");
    println!("  {}\n", m87);

    // --- Ecliptic coordinates ---
    // Mean ecliptic and equinox of J2000.0.

    println!("=== Ecliptic ===\n");

    for name in ["Vega", "Aldebaran"] {
        let ecl: SkyPoint<Ecliptic> = SkyPoint::from_name(name, &resolver)?;
        println!("{name}: {}", ecl);
    }

    let solstice = SkyPoint::<Ecliptic>::from_lat_lon(0.0, 90.0);
    println!(
        "Summer solstice (λ=90°, β=0°) -> {}\n",
        solstice.transform_to::<Icrs>()
    );

    // --- FK5 ---
    // The J2000 FK5 axes sit a few tens of milliarcseconds off ICRS.

    println!("=== FK5 ===\n");

    let vega: SkyPoint<Icrs> = SkyPoint::from_name("Vega", &resolver)?;
    let vega_fk5: SkyPoint<Fk5> = vega.transform_to();
    let back: SkyPoint<Icrs> = vega_fk5.transform_to();
    // Same numbers read as ICRS.
    let fk5_numbers =
        SkyPoint::<Icrs>::from_lat_lon(vega_fk5.lat().degrees(), vega_fk5.lon().degrees());
    let offset = vega.separation_angle(&fk5_numbers);
    println!("Vega: {}", vega_fk5);
    println!("  ICRS/FK5 axis offset seen at Vega = {:.1} mas", offset.milliarcseconds());
    println!(
        "  round trip error = {:.2e} mas\n",
        vega.separation_angle(&back).milliarcseconds()
    );

    // --- Proper motion ---
    // Barnard's Star: pm_ra·cos(dec) = -801.551 mas/yr, pm_dec = 10362.394 mas/yr.

    println!("=== Proper motion ===\n");

    let barnard = SkyPoint::<Icrs>::with_motion(
        4.738_666_7,
        269.452_075,
        1.8282,
        10_362.394,
        -801.551,
        -110.11,
    );
    let barnard_gal: SkyPoint<Galactic> = barnard.transform_to();
    let pm = barnard_gal.point().get_differential();
    println!("Barnard's Star: {}", barnard_gal);
    println!(
        "  pm_l·cos(b) = {:.3} mas/yr  pm_b = {:.3} mas/yr  rv = {:.2} km/s\n",
        pm.d_lon_coslat(),
        pm.d_lat(),
        pm.d_distance()
    );

    // --- Separation and position angle ---

    println!("=== Geometry ===\n");

    let vega: SkyPoint<Icrs> = SkyPoint::from_name("Vega", &resolver)?;
    let polaris: SkyPoint<Icrs> = SkyPoint::from_name("Polaris", &resolver)?;
    println!(
        "Vega -> Polaris: separation {:.3}°, position angle {:.3}°",
        vega.separation_angle(&polaris).degrees(),
        vega.positional_angle(&polaris).to_degrees()
    );

    let moved = vega.offset_by(Angle::from_degrees(45.0), Angle::from_degrees(2.0));
    println!("Vega moved 2° toward PA 45°: {}\n", moved);

    // --- Constellations ---

    println!("=== Constellations (toy boundary table) ===\n");

    for name in ["Sgr A*", "Polaris", "Vega", "Aldebaran", "M31"] {
        let p: SkyPoint<Galactic> = SkyPoint::from_name(name, &resolver)?;
        println!("{name}: {}", p.get_constellation(&boundaries)?);
    }

    Ok(())
}
