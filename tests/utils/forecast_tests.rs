use super::*;
use std::str::FromStr;
use chrono_tz::Tz;
use fishing_index::{render, ForecastConfig, ForecastReport, ScoringConfig};

fn build_report(
    readings: &[HourlyReading],
    expected: &HashMap<String, Vec<String>>,
) -> ForecastReport {
    let tz: Tz = expected["timezone"][0].parse().unwrap();
    let top_k = usize::from_str(&expected["top_k"][0]).unwrap();

    ForecastReport::new(readings, tz, &ScoringConfig::default(), top_k).unwrap()
}

fn forecast_config(readings: &[HourlyReading], expected: &HashMap<String, Vec<String>>) -> ForecastConfig {
    ForecastConfig {
        hours: readings.len() - 1,
        timezone: expected["timezone"][0].clone(),
        top_k: usize::from_str(&expected["top_k"][0]).unwrap(),
        visualize: true,
        ..ForecastConfig::default()
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_indexes(readings: &[HourlyReading], expected: &HashMap<String, Vec<String>>) {
    let report = build_report(readings, expected);

    let target: Vec<i32> = expected["indexes"]
        .iter()
        .map(|v| i32::from_str(v).unwrap())
        .collect();
    let analysis: Vec<i32> = report.hours().iter().map(|hr| hr.index).collect();

    assert_eq!(analysis, target);
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_indexes_in_range(readings: &[HourlyReading], expected: &HashMap<String, Vec<String>>) {
    let report = build_report(readings, expected);
    let config = ScoringConfig::default();

    for hour in report.hours() {
        assert!(hour.index >= config.min_index && hour.index <= config.max_index);
    }
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_best_hours(readings: &[HourlyReading], expected: &HashMap<String, Vec<String>>) {
    let report = build_report(readings, expected);

    let analysis: Vec<String> = report
        .best()
        .iter()
        .map(|hr| hr.sample.time.format("%H:%M").to_string())
        .collect();

    assert_eq!(analysis, expected["best hours"]);
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_chart_rows(readings: &[HourlyReading], expected: &HashMap<String, Vec<String>>) {
    let report = build_report(readings, expected);

    // Title, two rules and two axis lines around one row per hour.
    let chart = render(report.hours(), 80);
    assert_eq!(chart.lines().count(), report.hours().len() + 5);
    assert_eq!(chart, report.chart(80));
}

#[allow(dead_code)] // False alarm - lint is done before macro expansion.
pub fn test_report_text(readings: &[HourlyReading], expected: &HashMap<String, Vec<String>>) {
    let report = build_report(readings, expected);
    let config = forecast_config(readings, expected);
    let text = report.to_text(&config);

    assert!(text.starts_with("Moon phases:"));

    let index_lines = text.lines().filter(|l| l.contains(" - Index: ")).count();
    let has_hours = !report.hours().is_empty();
    assert_eq!(index_lines, report.hours().len() + report.best().len());
    assert_eq!(text.contains("│Fishing Index"), has_hours);
    assert_eq!(text.contains("best fishing hours"), has_hours);
}
