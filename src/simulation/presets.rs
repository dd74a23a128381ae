//! Named initial-condition presets
//!
//! Ready-made systems in the engine's default units (AU, days, solar
//! masses): a minimal sun-earth pair and the Sun plus the eight planets
//! from J2000 mean orbital elements. Presets are looked up by name from
//! scenario configuration; unknown names are a configuration error.

use crate::error::{Error, Result};
use crate::simulation::elements::{to_cartesian, true_anomaly_from_mean, OrbitalElements};
use crate::simulation::params::G_AU_DAY_MSUN;
use crate::simulation::states::{NVec3, System};

/// J2000 mean elements: name, mass (M_sun), a (AU), e, inclination (deg),
/// ascending node (deg), longitude of perihelion (deg), mean longitude (deg).
const PLANETS: [(&str, f64, f64, f64, f64, f64, f64, f64); 8] = [
    ("Mercury", 1.66012e-7, 0.38709893, 0.20563069, 7.00487, 48.33167, 77.45645, 252.25084),
    ("Venus", 2.44784e-6, 0.72333199, 0.00677323, 3.39471, 76.68069, 131.53298, 181.97973),
    ("Earth", 3.00349e-6, 1.00000011, 0.01671022, 0.00005, -11.26064, 102.94719, 100.46435),
    ("Mars", 3.22715e-7, 1.52366231, 0.09341233, 1.85061, 49.57854, 336.04084, 355.45332),
    ("Jupiter", 9.54792e-4, 5.20336301, 0.04839266, 1.30530, 100.55615, 14.75385, 34.40438),
    ("Saturn", 2.85886e-4, 9.53707032, 0.05415060, 2.48446, 113.71504, 92.43194, 49.94432),
    ("Uranus", 4.36624e-5, 19.19126393, 0.04716771, 0.76986, 74.22988, 170.96424, 313.23218),
    ("Neptune", 5.15139e-5, 30.06896348, 0.00858587, 1.76917, 131.72169, 44.97135, 304.88003),
];

/// Look up a preset system by name.
pub fn load(name: &str) -> Result<System> {
    match name {
        "sun_earth" => sun_earth(),
        "solar_system" => solar_system(),
        _ => Err(Error::UnknownPreset { name: name.to_string() }),
    }
}

/// Sun plus Earth on a circular 1 AU orbit.
pub fn sun_earth() -> Result<System> {
    let mut system = System::new();
    system.add_body("Sun", NVec3::zeros(), NVec3::zeros(), 1.0)?;

    let earth_mass = 3.00349e-6;
    let el = OrbitalElements {
        semimajor_axis: 1.0,
        eccentricity: 0.0,
        inclination: 0.0,
        argument_of_periapsis: 0.0,
        longitude_of_ascending_node: 0.0,
        true_anomaly: 0.0,
    };
    let (x, v) = to_cartesian(1.0, earth_mass, &el, G_AU_DAY_MSUN);
    system.add_body("Earth", x, v, earth_mass)?;

    Ok(system)
}

/// Sun plus the eight planets at their J2000 mean elements.
pub fn solar_system() -> Result<System> {
    let mut system = System::new();
    system.add_body("Sun", NVec3::zeros(), NVec3::zeros(), 1.0)?;

    for (name, mass, a, ecc, inc, raan, varpi, mean_longitude) in PLANETS {
        // omega = varpi - raan, M = L - varpi
        let argp = (varpi - raan).to_radians();
        let mean_anomaly = (mean_longitude - varpi).to_radians();

        let el = OrbitalElements {
            semimajor_axis: a,
            eccentricity: ecc,
            inclination: inc.to_radians(),
            argument_of_periapsis: argp,
            longitude_of_ascending_node: raan.to_radians(),
            true_anomaly: true_anomaly_from_mean(mean_anomaly, ecc),
        };
        let (x, v) = to_cartesian(1.0, mass, &el, G_AU_DAY_MSUN);
        system.add_body(name, x, v, mass)?;
    }

    Ok(system)
}
