use chrono::Duration;
use fishing_index::{read_readings, HourlyReading};
use metfor::{Celsius, Cm, HectoPascal, MetersPSec, WindSpdDir};
use std::{fs::File, io::Read, path::PathBuf};

pub fn load_all_test_files() -> [Vec<HourlyReading>; 2] {
    let fcst1 = load_test_file("oulu_night.csv");
    let fcst2 = load_test_file("hanko_full_moon.csv");

    [fcst1, fcst2]
}

/// A week of hourly readings following the first reading of the Oulu test file.
#[allow(dead_code)]
pub fn week_of_readings() -> Vec<HourlyReading> {
    let start = load_test_file("oulu_night.csv")[0].time;

    (0..=168)
        .map(|hour| {
            let x = f64::from(hour);
            let wind = WindSpdDir {
                speed: MetersPSec(5.0 + 3.0 * (x / 11.0).sin()),
                direction: (200.0 + 7.0 * x) % 360.0,
            };

            HourlyReading::new(
                start + Duration::hours(i64::from(hour)),
                HectoPascal(1010.0 + 8.0 * (x / 17.0).sin()),
                wind,
            )
            .with_temperature(Celsius(-2.0 + 4.0 * (x / 24.0).cos()))
            .with_sea_level(Cm(15.0 * (x / 12.4).sin()))
        })
        .collect()
}

fn load_test_file(fname: &str) -> Vec<HourlyReading> {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_forecast(&test_path)
}

fn load_test_csv_forecast(location: &PathBuf) -> Vec<HourlyReading> {
    let mut f = File::open(location).unwrap_or_else(|_| panic!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .unwrap_or_else(|_| panic!("Error reading file: {:#?}", location));

    let data = contents
        .split("### Expected Section ###")
        .next()
        .unwrap_or_default();

    read_readings(data.as_bytes(), usize::MAX).expect("oops")
}
