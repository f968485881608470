//! Record fixtures.

use warming_core::record::TemperatureRecord;

/// Three rows straddling the 1980 window bound, one from another source.
#[must_use]
pub fn mixed_source_records() -> Vec<TemperatureRecord> {
    vec![
        TemperatureRecord::new(1979, 0.1, "GISTEMP"),
        TemperatureRecord::new(1980, 0.3, "GISTEMP"),
        TemperatureRecord::new(1981, 0.5, "Other"),
    ]
}

/// A small two-source series, newest first like the published file.
#[must_use]
pub fn sample_records() -> Vec<TemperatureRecord> {
    let gistemp = [
        (2016, 0.99),
        (2015, 0.90),
        (2010, 0.72),
        (2005, 0.68),
        (1998, 0.61),
        (1997, 0.46),
        (1988, 0.40),
        (1980, 0.26),
        (1960, -0.03),
        (1940, 0.12),
        (1920, -0.27),
        (1900, -0.08),
    ];

    gistemp
        .iter()
        .flat_map(|&(year, mean)| {
            [
                TemperatureRecord::new(year, mean - 0.05, "GCAG"),
                TemperatureRecord::new(year, mean, "GISTEMP"),
            ]
        })
        .collect()
}
