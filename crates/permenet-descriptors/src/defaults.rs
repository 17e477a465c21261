//! Built-in descriptor defaults.
//!
//! One entry per descriptor the permeability model was trained on, in
//! model input order: (name, min, max, step, default value). The default
//! values describe a representative small molecule so the view has a
//! meaningful starting profile.

/// (name, min, max, step, default value)
pub const DESCRIPTOR_DEFAULTS: [(&str, f64, f64, f64, f64); 23] = [
    ("HBA", 1.0, 20.0, 1.0, 3.0),
    ("HBD", 0.0, 10.0, 1.0, 2.0),
    ("HBA+HBD", 1.0, 30.0, 1.0, 5.0),
    ("NumRings", 0.0, 10.0, 1.0, 1.0),
    ("RTB", 0.0, 20.0, 1.0, 5.0),
    ("NumAmideBonds", 0.0, 5.0, 1.0, 0.0),
    ("Globularity", 0.0, 1.0, 0.05, 0.6425500622726473),
    ("PBF", 0.0, 2.0, 0.1, 0.7717374411029935),
    ("TPSA", 20.0, 300.0, 10.0, 89.22),
    ("logP", -10.0, 10.0, 0.5, 1.9506),
    ("MR", 10.0, 200.0, 10.0, 47.2886),
    ("MW", 50.0, 1000.0, 50.0, 179.179),
    ("Csp3", 0.0, 1.0, 0.05, 0.25),
    ("fmf", 0.0, 1.0, 0.05, 0.4615384615384615),
    ("QED", 0.0, 1.0, 0.05, 0.3211217985566729),
    ("HAC", 5.0, 50.0, 5.0, 13.0),
    ("NumRingsFused", 0.0, 10.0, 1.0, 1.0),
    ("unique_HBAD", 1.0, 20.0, 1.0, 3.0),
    ("max_ring_size", 0.0, 20.0, 1.0, 6.0),
    ("n_chiral_centers", 0.0, 20.0, 1.0, 0.0),
    ("fcsp3_bm", 0.0, 5.0, 1.0, 0.0),
    ("formal_charge", -5.0, 5.0, 1.0, 0.0),
    ("abs_charge", 0.0, 5.0, 1.0, 0.0),
];
