use std::fmt;

/// HF allocations of interest, inclusive bounds in kilohertz. Ranges are
/// disjoint by construction, so a linear scan cannot produce ties.
const BAND_TABLE: [(f64, f64, &str); 10] = [
    (1800.0, 2000.0, "160m"),
    (3500.0, 4000.0, "80m"),
    (5300.0, 5500.0, "60m"),
    (7000.0, 7300.0, "40m"),
    (10100.0, 10150.0, "30m"),
    (14000.0, 14350.0, "20m"),
    (18000.0, 18200.0, "17m"),
    (21000.0, 21450.0, "15m"),
    (24800.0, 25000.0, "12m"),
    (28000.0, 29700.0, "10m"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Band {
    Hf(&'static str),
    /// Frequency outside every known range (or not numeric at all); carries
    /// the literal feed value so the line can report it.
    Unmapped(String),
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hf(label) => f.write_str(label),
            Self::Unmapped(raw) => write!(f, "[unmapped: {raw}]"),
        }
    }
}

/// Classify a raw feed frequency (kHz) into a band label. Reportable but
/// non-fatal on a miss: the caller still emits the line.
pub fn classify(raw: &str) -> Band {
    let Ok(khz) = raw.trim().parse::<f64>() else {
        return Band::Unmapped(raw.to_string());
    };
    for (low, high, label) in BAND_TABLE {
        if (low..=high).contains(&khz) {
            return Band::Hf(label);
        }
    }
    Band::Unmapped(raw.to_string())
}
