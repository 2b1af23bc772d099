use climate_profile::{ClimateAnalyzer, RawObservationRecord, Variable};
use std::error::Error;

// Records would normally come from the ingestion layer; here they are built
// from JSON rows using the NASA POWER column names.
fn load_records() -> Result<Vec<RawObservationRecord>, serde_json::Error> {
    let rows: Vec<serde_json::Value> = (2000..2025)
        .flat_map(|year| {
            (180..=190).map(move |doy| {
                serde_json::json!({
                    "LOCATION": "new_york",
                    "YEAR": year,
                    "DOY": doy,
                    "T2M_MAX": 27.0 + (year - 2000) as f64 * 0.05,
                    "T2M_MIN": 19.0,
                    "RH2M": 68.0,
                    "WS2M": 3.2,
                    "PRECTOTCORR": if doy % 4 == 0 { 7.5 } else { 0.0 },
                    "ALLSKY_SFC_UV_INDEX": if year == 2003 { -999.0 } else { 7.1 },
                })
            })
        })
        .collect();
    serde_json::from_value(serde_json::Value::Array(rows))
}

fn main() -> Result<(), Box<dyn Error>> {
    let analyzer = ClimateAnalyzer::new(load_records()?);

    let summary = analyzer
        .summary()
        .location("New York")
        .date("2025-07-04")
        .call()?;

    println!("Records in window: {}", summary.years);
    println!(
        "Temperature: avg {}°C (min {}, max {}), heat probability {}%",
        summary.temperature.average,
        summary.temperature.min,
        summary.temperature.max,
        summary.probabilities.heat
    );
    println!("Rain probability: {}%", summary.probabilities.rain);
    println!("Soil moisture proxy: {} mm", summary.soil_moisture.average);
    println!(
        "Comfort: {}/10 ({})",
        summary.comfort_score, summary.comfort_rating
    );
    println!(
        "Data quality: {}% complete, reliability {}",
        summary.data_quality.completeness, summary.data_quality.reliability
    );

    let trend = analyzer
        .trend()
        .location("new_york")
        .variable(Variable::Temperature)
        .call();
    let fit = trend.fit();
    println!(
        "Temperature trend: {:+.2}°C per decade over {} years (r² {:.2})",
        fit.change_per_decade(),
        trend.len(),
        fit.r2
    );

    Ok(())
}
