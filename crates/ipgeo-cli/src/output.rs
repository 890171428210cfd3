//! Result rendering and lookup counters.

use crate::args::OutputFormat;
use ipgeo_core::{DbStats, GeoError, LocationResult, MetricRegistry};

pub const LOOKUP_TOTAL: &str = "lookup.total";
pub const LOOKUP_HIT: &str = "lookup.hit";
pub const LOOKUP_MISS: &str = "lookup.miss";
pub const LOOKUP_RESERVED: &str = "lookup.reserved";
pub const LOOKUP_INVALID: &str = "lookup.invalid";

/// Bumps the counters for one lookup attempt.
pub fn record(metrics: &MetricRegistry, outcome: &Result<LocationResult, GeoError>) {
    metrics.incr(LOOKUP_TOTAL);
    let name = match outcome {
        Ok(r) if r.is_reserved() => LOOKUP_RESERVED,
        Ok(r) if r.is_resolved() => LOOKUP_HIT,
        Ok(_) => LOOKUP_MISS,
        Err(_) => LOOKUP_INVALID,
    };
    metrics.incr(name);
}

/// Stderr line for an input that could not be looked up.
pub fn invalid_input(input: &str, err: &GeoError) -> String {
    format!("skipping {input:?}: {err}")
}

pub fn render(result: &LocationResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(result),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

fn render_text(r: &LocationResult) -> String {
    if !r.is_resolved() {
        return format!("{}\n  not found", r.address);
    }

    let mut out = r.address.clone();
    let mut line = |label: &str, value: String| {
        if !value.is_empty() {
            out.push_str(&format!("\n  {label:<8} {value}"));
        }
    };
    line("Country:", labelled(&r.country_name, &r.country_code));
    line("Region:", labelled(&r.region_name, &r.region_code));
    line("City:", r.city_name.clone());
    line("Zip:", r.zip_code.clone());
    if let (Some(lat), Some(lon)) = (r.latitude, r.longitude) {
        line("Coords:", format!("{lat:.4}, {lon:.4}"));
    }
    line("Metro:", r.metro_code.clone());
    line("Area:", r.area_code.clone());
    out
}

fn labelled(name: &str, code: &str) -> String {
    match (name.is_empty(), code.is_empty()) {
        (_, true) => name.to_string(),
        (true, false) => code.to_string(),
        (false, false) => format!("{name} ({code})"),
    }
}

pub fn render_stats(stats: &DbStats, reserved: usize, overlapping: usize) -> String {
    let mut out = String::from("Database statistics:\n");
    out.push_str(&format!("  Countries: {}\n", stats.countries));
    out.push_str(&format!("  Regions: {}\n", stats.regions));
    out.push_str(&format!("  City locations: {}\n", stats.locations));
    out.push_str(&format!("  City blocks: {}\n", stats.blocks));
    out.push_str(&format!("  Reserved ranges: {reserved}"));
    if overlapping > 0 {
        out.push_str(&format!("\n  Overlapping ranges: {overlapping}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn tokyo() -> LocationResult {
        LocationResult {
            address: "1.0.0.1".into(),
            country_code: "JP".into(),
            country_name: "Japan".into(),
            region_code: "40".into(),
            region_name: "Tokyo".into(),
            city_name: "Tokyo".into(),
            latitude: Some(35.5),
            longitude: Some(139.75),
            ..LocationResult::unresolved(Ipv4Addr::new(1, 0, 0, 1))
        }
    }

    #[test]
    fn text_skips_empty_fields() {
        let text = render(&tokyo(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("1.0.0.1\n"));
        assert!(text.contains("Country: Japan (JP)"));
        assert!(text.contains("Coords:  35.5000, 139.7500"));
        assert!(!text.contains("Zip:"));
    }

    #[test]
    fn text_for_miss_and_reserved() {
        let miss = render(&LocationResult::unresolved(Ipv4Addr::new(1, 1, 1, 1)), OutputFormat::Text).unwrap();
        assert_eq!(miss, "1.1.1.1\n  not found");
        let rd = render(&LocationResult::reserved(Ipv4Addr::new(10, 0, 0, 1)), OutputFormat::Text).unwrap();
        assert!(rd.contains("Country: Reserved (RD)"));
    }

    #[test]
    fn json_uses_wire_names() {
        let line = render(&tokyo(), OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["ip"], "1.0.0.1");
        assert_eq!(v["city"], "Tokyo");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn invalid_input_names_the_input() {
        let err = GeoError::InvalidAddress("bogus".into());
        let line = invalid_input("bogus", &err);
        assert!(line.starts_with("skipping \"bogus\": "));
        assert!(line.contains(&err.to_string()));
    }

    #[test]
    fn counters_by_outcome() {
        let m = MetricRegistry::new("ipgeo-test");
        record(&m, &Ok(tokyo()));
        record(&m, &Ok(LocationResult::unresolved(Ipv4Addr::new(1, 1, 1, 1))));
        record(&m, &Ok(LocationResult::reserved(Ipv4Addr::new(10, 0, 0, 1))));
        record(&m, &Err(GeoError::InvalidAddress("nope".into())));
        assert_eq!(m.get(LOOKUP_TOTAL), 4);
        assert_eq!(m.get(LOOKUP_HIT), 1);
        assert_eq!(m.get(LOOKUP_MISS), 1);
        assert_eq!(m.get(LOOKUP_RESERVED), 1);
        assert_eq!(m.get(LOOKUP_INVALID), 1);
    }
}
