use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use fishing_index::{read_readings, HourlyReading};

pub mod forecast_tests;

const EXPECTED_MARKER: &str = "### Expected Section ###";

#[allow(dead_code)]
pub const EXPECTED_KEYS: [&str; 4] = ["timezone", "top_k", "indexes", "best hours"];

#[allow(unused_macros)] // False alarm
macro_rules! check_file_complete {
    ($test_name:ident, $fname:expr) => {
        #[test]
        fn $test_name() {
            let (readings, expected) = utils::load_test_file($fname);

            assert!(!readings.is_empty(), "No readings.");

            // Make sure all of these keys are in the hashmap
            for key in utils::EXPECTED_KEYS.iter() {
                assert!(expected.contains_key(*key), "{}", key);
            }

            // Make sure there are no extra keys in there being ignored.
            for key in expected.keys() {
                assert!(
                    utils::EXPECTED_KEYS.contains(&key.as_str()),
                    "extra key found: {}",
                    key
                );
            }
        }
    };
}

#[allow(unused_macros)] // False alarm
macro_rules! test_file {
    ($test_mod_name:ident, $fname:expr) => {
        mod $test_mod_name {

            use std::collections::HashMap;

            use fishing_index::HourlyReading;
            use crate::utils;

            fn load_data() -> (Vec<HourlyReading>, HashMap<String, Vec<String>>) {
                utils::load_test_file($fname)
            }

            mod index {
                use crate::utils::forecast_tests;
                use super::load_data;

                #[test]
                fn hourly_indexes() {
                    let (readings, expected) = load_data();
                    forecast_tests::test_indexes(&readings, &expected);
                }

                #[test]
                fn indexes_in_range() {
                    let (readings, expected) = load_data();
                    forecast_tests::test_indexes_in_range(&readings, &expected);
                }
            }

            mod report {
                use crate::utils::forecast_tests;
                use super::load_data;

                #[test]
                fn best_hours() {
                    let (readings, expected) = load_data();
                    forecast_tests::test_best_hours(&readings, &expected);
                }

                #[test]
                fn chart_rows() {
                    let (readings, expected) = load_data();
                    forecast_tests::test_chart_rows(&readings, &expected);
                }

                #[test]
                fn report_text() {
                    let (readings, expected) = load_data();
                    forecast_tests::test_report_text(&readings, &expected);
                }
            }
        }
    };
}

pub fn load_test_file(fname: &str) -> (Vec<HourlyReading>, HashMap<String, Vec<String>>) {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_forecast(&test_path)
}

fn load_test_csv_forecast(location: &PathBuf) -> (Vec<HourlyReading>, HashMap<String, Vec<String>>) {
    let mut f = File::open(location).unwrap_or_else(|_| panic!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .unwrap_or_else(|_| panic!("Error reading file: {:#?}", location));

    let (data, tail) = split_sections(&contents);

    //
    // Hourly readings, parsed the same way as the fishcast input.
    //
    let readings = read_readings(data.as_bytes(), usize::MAX)
        .unwrap_or_else(|err| panic!("Error parsing readings in {:#?}: {}", location, err));

    //
    // Expected values, a key followed by zero or more values.
    //
    let mut expected = HashMap::new();
    for line in tail.lines() {
        let mut tokens = line.split(',').map(str::trim).filter(|v| !v.is_empty());

        if let Some(key) = tokens.next() {
            let values: Vec<String> = tokens.map(|v| v.to_owned()).collect();
            expected.insert(key.to_owned(), values);
        }
    }

    (readings, expected)
}

/// Split a test file into the CSV readings and the expected values after the marker line.
fn split_sections(contents: &str) -> (&str, &str) {
    match contents.find(EXPECTED_MARKER) {
        Some(idx) => (&contents[..idx], &contents[idx + EXPECTED_MARKER.len()..]),
        None => (contents, ""),
    }
}
