//! Maintainer-curated tables.
//!
//! Everything in this module is authoritative: these tables always win over
//! scraped URLs and heuristically detected licenses. Edited by hand between
//! runs, never at run time.

/// Catalog repositories that never appear in the project lists.
pub const BASE_MAPPING: &[(&str, &str)] = &[
    (
        "heliophysicsPy.github.io",
        "https://github.com/heliophysicsPy/heliophysicsPy.github.io",
    ),
    ("standards", "https://github.com/heliophysicsPy/standards"),
    (
        "pyhc-docker-environment",
        "https://github.com/heliophysicsPy/pyhc-docker-environment",
    ),
    ("pyhc-docs", "https://github.com/heliophysicsPy/pyhc-docs"),
];

/// Authoritative URLs for packages whose project-list entries are wrong:
/// bad casing, a fork instead of the upstream org, a PyPI page, or a
/// `/tree/<branch>` link.
pub const URL_OVERRIDES: &[(&str, &str)] = &[
    ("NEXRAD", "https://github.com/space-physics/NEXRAD"),
    ("astrometry_geomap", "https://github.com/space-physics/astrometry_geomap"),
    ("PyTplot", "https://github.com/MAVENSDC/PyTplot"),
    ("wmm2020", "https://github.com/space-physics/wmm2020"),
    ("EUVpy", "https://github.com/DanBrandt/EUVpy"),
    ("ccsdspy", "https://github.com/CCSDSPy/ccsdspy"),
    ("madrigalWeb", "https://github.com/MITHaystack/madrigalWeb"),
    ("pysatCDF", "https://github.com/pysat/pysatCDF"),
];

/// Scraped names that duplicate another checkout under a different name.
/// Never registered as submodules.
pub const SUBMODULE_SKIP: &[&str] = &["NEXRADutils", "WMM2020", "astrometry_azel", "pytplot"];

/// Licenses the detector misreads or cannot see (no license text in the
/// tree, or a nonstandard one). Applied on top of the detected record.
pub const LICENSE_CORRECTIONS: &[(&str, &str)] = &[
    ("aiapy", "BSD-2-Clause"),
    ("asilib", "BSD-3-Clause"),
    ("ccsdspy", "BSD-3-Clause"),
    ("client-python", "MIT"),
    ("fiasco", "BSD-3-Clause"),
    ("fisspy", "BSD-2-Clause"),
    ("hermes_core", "Apache-2.0"),
    ("irispy-lmsal", "BSD-2-Clause"),
    ("kaipy", "BSD-3-Clause"),
    ("ndcube", "BSD-2-Clause"),
    ("ocbpy", "BSD-3-Clause"),
    ("pysat", "BSD-3-Clause"),
    ("sunkit-image", "BSD-2-Clause"),
    ("sunkit-instruments", "BSD-2-Clause"),
    ("sunpy", "BSD-2-Clause"),
    ("sunraster", "BSD-2-Clause"),
    ("themisasi", "MIT"),
    ("Kamodo", "NASA Open Source Agreement"),
    ("PyGS", "BSD-3-Clause"),
    ("SAVIC", "MIT"),
    ("TomograPy", "MIT"),
    ("astrometry_geomap", "MIT"),
    ("dbprocessing", "BSD-3-Clause"),
    ("mcalf", "BSD-2-Clause"),
    ("pyhc-docker-environment", "MIT"),
    ("pymap3d", "BSD-2-Clause"),
    ("pysatCDF", "BSD-3-Clause"),
    ("sami2py", "BSD-3-Clause"),
    ("scanning-doppler-interferometer", "MIT"),
    ("solo-epd-loader", "BSD-3-Clause"),
    ("standards", "N/A"),
    ("enlilviz", "MIT"),
    ("regularizepsf", "MIT"),
    // Python Software Foundation License
    ("spacepy", "PSF"),
];

/// Directory name → display name for the rendered table. Directories not
/// listed here display under their own name.
pub const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("client-python", "HAPI Client"),
    ("heliophysicsPy.github.io", "PyHC Website"),
    ("pyhc-docker-environment", "PyHC Docker Environment"),
    ("pyhc-docs", "PyHC Docs"),
    ("standards", "PyHC Standards"),
    ("ACE_magnetometer", "ACEmag"),
    ("AEindex", "Auroral Electrojet Index"),
    ("CDFpp", "PyCDFpp"),
    ("LOFAR-Sun-tools", "lofarSun"),
    ("NCAR-GLOW", "GLOW"),
    ("NEXRAD", "NEXRADutils"),
    ("GeoDataPython", "geodata"),
    ("GOESplot", "GOESutils"),
    ("VirES-Python-Client", "viresclient"),
    ("astrometry_geomap", "AstrometryAzEl"),
    ("dascasi", "DASCutils"),
    ("digital-meridian-spectrometer", "Digital Meridian Spectrometer"),
    ("gima-magnetometer", "GIMAmag"),
    ("georinex", "GEOrinex"),
    ("geospacelab", "GeospaceLAB"),
    ("hermes_core", "HERMES-Core"),
    ("irfu-python", "PyRFU"),
    ("madrigalWeb", "MadrigalWeb"),
    ("mgs-radio", "MGSutils"),
    ("pyaurorax", "PyAuroraX"),
    ("pyzenodo3", "PyZenodo"),
    ("reesaurora", "ReesAurora"),
    ("scanning-doppler-interferometer", "Scanning Doppler Interferometer"),
    ("sciencedates", "ScienceDates"),
    ("themisasi", "THEMISasi"),
    ("space_packet_parser", "space-packet-parser"),
    ("wmm2020", "WMM2020"),
];

/// Look a name up in one of the pairs tables above.
pub fn lookup<'a>(table: &[(&'a str, &'a str)], name: &str) -> Option<&'a str> {
    table.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
}
