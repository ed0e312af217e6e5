//! Listing Cleaner
//!
//! Turns the raw CSV table into typed, repaired listings. The rules run in a
//! fixed order and each step takes ownership of the previous snapshot and
//! returns a new one; later steps rely on the state earlier ones leave:
//!
//! 1. drop rows missing `model_year` or `cylinders`
//! 2. fill missing `paint_color` with the sentinel category
//! 3. fill missing `odometer` with the median of the surviving known values
//! 4. fill missing `is_4wd` with 0
//! 5. coerce numeric fields to integers
//! 6. drop excluded models
//! 7. rewrite model aliases to their canonical names
//! 8. parse `date_posted`

use crate::config::CleaningConfig;
use crate::error::DataIntegrityError;
use crate::normalizer::ModelRules;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dataset::{Column, RawTable, VehicleListing};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Row as read from the CSV, before any repair
#[derive(Debug, Clone, Default, PartialEq)]
struct RawListing {
    row: usize,
    price: Option<f64>,
    model_year: Option<f64>,
    model: Option<String>,
    cylinders: Option<f64>,
    odometer: Option<f64>,
    paint_color: Option<String>,
    is_4wd: Option<f64>,
    date_posted: Option<String>,
}

/// Row after type coercion, with the posting date still as text
#[derive(Debug, Clone, PartialEq)]
struct TypedListing {
    row: usize,
    price: i64,
    model_year: i64,
    model: String,
    cylinders: i64,
    odometer: i64,
    paint_color: String,
    is_4wd: i64,
    date_posted: Option<String>,
}

/// Row counts for each cleaning step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleaningStats {
    /// Rows in the raw table
    pub rows_in: usize,
    /// Rows dropped for missing model year or cylinders
    pub dropped_missing: usize,
    /// Paint colors set to the sentinel
    pub paint_color_imputed: usize,
    /// Odometer readings set to the median
    pub odometer_imputed: usize,
    /// Median used for odometer imputation
    pub odometer_median: Option<f64>,
    /// 4WD flags set to 0
    pub is_4wd_imputed: usize,
    /// Rows dropped as excluded models
    pub excluded_models: usize,
    /// Model names rewritten to canonical form
    pub models_normalized: usize,
    /// Rows in the cleaned output
    pub rows_out: usize,
}

/// Cleaned listings and the record of how they were produced
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedDataset {
    pub listings: Vec<VehicleListing>,
    pub stats: CleaningStats,
}

/// Applies the cleaning rule sequence to a raw table
pub struct Cleaner {
    config: CleaningConfig,
    rules: ModelRules,
}

impl Cleaner {
    /// Create a new cleaner with given config
    pub fn new(config: CleaningConfig) -> Self {
        let rules = ModelRules::new(&config);
        Self { config, rules }
    }

    /// Clean a raw table. The table itself is left untouched.
    pub fn clean(&self, table: &RawTable) -> Result<CleanedDataset, DataIntegrityError> {
        let mut stats = CleaningStats {
            rows_in: table.len(),
            ..Default::default()
        };
        info!("Cleaning {} raw listings", stats.rows_in);

        let rows = parse_rows(table)?;

        let before = rows.len();
        let rows = drop_missing(rows);
        stats.dropped_missing = before - rows.len();

        let (rows, filled) = fill_paint_color(rows, &self.config.paint_color_sentinel);
        stats.paint_color_imputed = filled;

        let (rows, filled, median) = fill_odometer(rows)?;
        stats.odometer_imputed = filled;
        stats.odometer_median = median;

        let (rows, filled) = fill_is_4wd(rows);
        stats.is_4wd_imputed = filled;

        let rows = coerce_types(rows)?;

        let before = rows.len();
        let rows = exclude_models(rows, &self.rules);
        stats.excluded_models = before - rows.len();

        let (rows, rewritten) = normalize_models(rows, &self.rules);
        stats.models_normalized = rewritten;

        let listings = parse_dates(rows, &self.config.date_formats)?;
        stats.rows_out = listings.len();

        info!(
            "Cleaning complete: {} -> {} listings ({} missing year/cylinders, {} excluded)",
            stats.rows_in, stats.rows_out, stats.dropped_missing, stats.excluded_models
        );
        Ok(CleanedDataset { listings, stats })
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleaningConfig::default())
    }
}

/// Resolve the required columns and read every row into optional fields
fn parse_rows(table: &RawTable) -> Result<Vec<RawListing>, DataIntegrityError> {
    let mut index = [0usize; 8];
    for (slot, column) in index.iter_mut().zip(Column::RAW) {
        *slot = table
            .column_index(column.name())
            .ok_or(DataIntegrityError::MissingColumn(column))?;
    }
    let [price, model_year, model, cylinders, odometer, paint_color, is_4wd, date_posted] = index;

    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, cells)| -> Result<RawListing, DataIntegrityError> {
            let row = i + 1;
            let text = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");
            Ok(RawListing {
                row,
                price: parse_number(text(price), Column::Price, row)?,
                model_year: parse_number(text(model_year), Column::ModelYear, row)?,
                model: parse_text(text(model)),
                cylinders: parse_number(text(cylinders), Column::Cylinders, row)?,
                odometer: parse_number(text(odometer), Column::Odometer, row)?,
                paint_color: parse_text(text(paint_color)),
                is_4wd: parse_number(text(is_4wd), Column::Is4wd, row)?,
                date_posted: parse_text(text(date_posted)),
            })
        })
        .collect()
}

/// Cell markers read as missing, matched exactly after trimming
const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw.trim())
}

fn parse_text(raw: &str) -> Option<String> {
    if is_missing(raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_number(raw: &str, column: Column, row: usize) -> Result<Option<f64>, DataIntegrityError> {
    if is_missing(raw) {
        return Ok(None);
    }
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(DataIntegrityError::InvalidValue {
            column,
            row,
            value: raw.to_string(),
        }),
    }
}

/// Step 1
fn drop_missing(rows: Vec<RawListing>) -> Vec<RawListing> {
    let kept: Vec<RawListing> = rows
        .into_iter()
        .filter(|r| r.model_year.is_some() && r.cylinders.is_some())
        .collect();
    debug!("Drop-missing pass kept {} rows", kept.len());
    kept
}

/// Step 2
fn fill_paint_color(rows: Vec<RawListing>, sentinel: &str) -> (Vec<RawListing>, usize) {
    let mut filled = 0;
    let rows: Vec<RawListing> = rows
        .into_iter()
        .map(|mut r| {
            if r.paint_color.is_none() {
                r.paint_color = Some(sentinel.to_string());
                filled += 1;
            }
            r
        })
        .collect();
    debug!("Filled {} missing paint colors with {:?}", filled, sentinel);
    (rows, filled)
}

/// Step 3. The median comes from the rows that survived step 1 only.
fn fill_odometer(
    rows: Vec<RawListing>,
) -> Result<(Vec<RawListing>, usize, Option<f64>), DataIntegrityError> {
    let known: Vec<f64> = rows.iter().filter_map(|r| r.odometer).collect();
    let missing = rows.len() - known.len();
    let median = statistics::median(&known);

    if missing == 0 {
        return Ok((rows, 0, median));
    }
    let fill = median.ok_or(DataIntegrityError::NoOdometerValues { missing })?;

    let rows: Vec<RawListing> = rows
        .into_iter()
        .map(|mut r| {
            r.odometer.get_or_insert(fill);
            r
        })
        .collect();
    debug!("Filled {} missing odometer readings with median {}", missing, fill);
    Ok((rows, missing, median))
}

/// Step 4
fn fill_is_4wd(rows: Vec<RawListing>) -> (Vec<RawListing>, usize) {
    let mut filled = 0;
    let rows: Vec<RawListing> = rows
        .into_iter()
        .map(|mut r| {
            if r.is_4wd.is_none() {
                r.is_4wd = Some(0.0);
                filled += 1;
            }
            r
        })
        .collect();
    debug!("Filled {} missing 4WD flags with 0", filled);
    (rows, filled)
}

/// Step 5. Fractional parts are truncated toward zero.
fn coerce_types(rows: Vec<RawListing>) -> Result<Vec<TypedListing>, DataIntegrityError> {
    rows.into_iter()
        .map(|r| -> Result<TypedListing, DataIntegrityError> {
            let row = r.row;
            let required = |value: Option<f64>, column: Column| {
                let v = value
                    .ok_or(DataIntegrityError::MissingValue { column, row })?
                    .trunc();
                // i64::MAX as f64 rounds up to 2^63, which is already out of range
                if v < i64::MIN as f64 || v >= i64::MAX as f64 {
                    return Err(DataIntegrityError::InvalidValue {
                        column,
                        row,
                        value: v.to_string(),
                    });
                }
                Ok(v as i64)
            };
            let invalid = |column: Column, value: i64| DataIntegrityError::InvalidValue {
                column,
                row,
                value: value.to_string(),
            };

            let price = required(r.price, Column::Price)?;
            if price < 0 {
                return Err(invalid(Column::Price, price));
            }
            let odometer = required(r.odometer, Column::Odometer)?;
            if odometer < 0 {
                return Err(invalid(Column::Odometer, odometer));
            }
            let is_4wd = required(r.is_4wd, Column::Is4wd)?;
            if is_4wd != 0 && is_4wd != 1 {
                return Err(invalid(Column::Is4wd, is_4wd));
            }

            Ok(TypedListing {
                row,
                price,
                model_year: required(r.model_year, Column::ModelYear)?,
                model: r.model.unwrap_or_default(),
                cylinders: required(r.cylinders, Column::Cylinders)?,
                odometer,
                paint_color: r.paint_color.unwrap_or_default(),
                is_4wd,
                date_posted: r.date_posted,
            })
        })
        .collect()
}

/// Step 6
fn exclude_models(rows: Vec<TypedListing>, rules: &ModelRules) -> Vec<TypedListing> {
    let kept: Vec<TypedListing> = rows
        .into_iter()
        .filter(|r| !rules.is_excluded(&r.model))
        .collect();
    debug!("Model exclusion kept {} rows", kept.len());
    kept
}

/// Step 7
fn normalize_models(rows: Vec<TypedListing>, rules: &ModelRules) -> (Vec<TypedListing>, usize) {
    let mut rewritten = 0;
    let rows: Vec<TypedListing> = rows
        .into_iter()
        .map(|mut r| {
            if let Some(canonical) = rules.canonical(&r.model) {
                if canonical != r.model {
                    r.model = canonical.to_string();
                    rewritten += 1;
                }
            }
            r
        })
        .collect();
    debug!("Normalized {} model names", rewritten);
    (rows, rewritten)
}

/// Step 8
fn parse_dates(
    rows: Vec<TypedListing>,
    formats: &[String],
) -> Result<Vec<VehicleListing>, DataIntegrityError> {
    rows.into_iter()
        .map(|r| -> Result<VehicleListing, DataIntegrityError> {
            let text = r.date_posted.ok_or(DataIntegrityError::MissingValue {
                column: Column::DatePosted,
                row: r.row,
            })?;
            let date_posted = parse_date(&text, formats).ok_or_else(|| {
                warn!("Row {}: unparseable date {:?}", r.row, text);
                DataIntegrityError::UnparseableDate {
                    row: r.row,
                    value: text.clone(),
                }
            })?;

            Ok(VehicleListing {
                price: r.price,
                model_year: r.model_year,
                model: r.model,
                cylinders: r.cylinders,
                odometer: r.odometer,
                paint_color: r.paint_color,
                is_4wd: r.is_4wd,
                date_posted,
            })
        })
        .collect()
}

/// Configured formats first, then RFC 3339 timestamps (fractional seconds,
/// offsets). Timestamps keep the date as written, without shifting to UTC.
fn parse_date(text: &str, formats: &[String]) -> Option<NaiveDate> {
    let text = text.trim();
    formats
        .iter()
        .find_map(|fmt| {
            NaiveDate::parse_from_str(text, fmt)
                .ok()
                .or_else(|| NaiveDateTime::parse_from_str(text, fmt).ok().map(|dt| dt.date()))
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HEADER: &str = "price,model_year,model,cylinders,odometer,paint_color,is_4wd,date_posted";

    fn table(rows: &[&str]) -> RawTable {
        let csv = std::iter::once(HEADER)
            .chain(rows.iter().copied())
            .collect::<Vec<_>>()
            .join("\n");
        RawTable::from_reader(csv.as_bytes()).unwrap()
    }

    fn clean(rows: &[&str]) -> Result<CleanedDataset, DataIntegrityError> {
        Cleaner::default().clean(&table(rows))
    }

    #[test]
    fn test_missing_model_year_dropped() {
        let out = clean(&[
            "5000,,bmw x5,6.0,100000.0,black,1.0,2018-06-23",
            "6000,2012.0,bmw x5,6.0,90000.0,black,1.0,2018-06-23",
        ])
        .unwrap();
        assert_eq!(out.listings.len(), 1);
        assert_eq!(out.listings[0].model_year, 2012);
        assert_eq!(out.stats.dropped_missing, 1);
    }

    #[test]
    fn test_missing_cylinders_dropped() {
        let out = clean(&["5000,2011.0,bmw x5,,100000.0,black,1.0,2018-06-23"]).unwrap();
        assert!(out.listings.is_empty());
    }

    #[test]
    fn test_nan_marker_is_missing() {
        let out = clean(&["5000,NaN,bmw x5,6.0,100000.0,black,1.0,2018-06-23"]).unwrap();
        assert!(out.listings.is_empty());
    }

    #[test]
    fn test_null_markers_are_missing() {
        let out = clean(&[
            "5000,NULL,bmw x5,6.0,100000.0,black,1.0,2018-06-23",
            "5000,N/A,bmw x5,6.0,100000.0,black,1.0,2018-06-23",
            "5000,None,bmw x5,6.0,100000.0,black,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,100000.0,NULL,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,100000.0,N/A,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,100000.0,None,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,100000.0,null,1.0,2018-06-23",
        ])
        .unwrap();
        assert_eq!(out.stats.dropped_missing, 3);
        assert_eq!(out.listings.len(), 4);
        assert!(out.listings.iter().all(|l| l.paint_color == "unknown"));
        assert_eq!(out.stats.paint_color_imputed, 4);
    }

    #[test]
    fn test_out_of_range_number_is_fatal() {
        let result = clean(&["1e20,2011.0,bmw x5,6.0,100000.0,black,1.0,2018-06-23"]);
        assert!(matches!(
            result,
            Err(DataIntegrityError::InvalidValue { column: Column::Price, row: 1, .. })
        ));
        let result = clean(&["5000,2011.0,bmw x5,6.0,1e19,black,1.0,2018-06-23"]);
        assert!(matches!(
            result,
            Err(DataIntegrityError::InvalidValue { column: Column::Odometer, .. })
        ));
    }

    #[test]
    fn test_rfc3339_timestamps_parsed() {
        let out = clean(&[
            "5000,2011.0,bmw x5,6.0,100000.0,black,1.0,2018-06-23T10:00:00.5Z",
            "5000,2011.0,bmw x5,6.0,100000.0,black,1.0,2018-06-23T23:30:00-05:00",
        ])
        .unwrap();
        let expected = NaiveDate::from_ymd_opt(2018, 6, 23).unwrap();
        assert!(out.listings.iter().all(|l| l.date_posted == expected));
    }

    #[test]
    fn test_missing_paint_color_becomes_unknown() {
        let out = clean(&["5000,2011.0,bmw x5,6.0,100000.0,,1.0,2018-06-23"]).unwrap();
        assert_eq!(out.listings[0].paint_color, "unknown");
        assert_eq!(out.stats.paint_color_imputed, 1);
    }

    #[test]
    fn test_odometer_median_imputation() {
        let out = clean(&[
            "5000,2011.0,bmw x5,6.0,10000.0,black,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,20000.0,black,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,,black,1.0,2018-06-23",
        ])
        .unwrap();
        assert_eq!(out.listings[2].odometer, 15000);
        assert_eq!(out.stats.odometer_median, Some(15000.0));
        assert_eq!(out.stats.odometer_imputed, 1);
    }

    #[test]
    fn test_odometer_median_ignores_dropped_rows() {
        // The 900000 reading belongs to a row dropped for missing year
        let out = clean(&[
            "5000,,bmw x5,6.0,900000.0,black,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,10000.0,black,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,20000.0,black,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,,black,1.0,2018-06-23",
        ])
        .unwrap();
        assert_eq!(out.stats.odometer_median, Some(15000.0));
        assert_eq!(out.listings[2].odometer, 15000);
    }

    #[test]
    fn test_odometer_without_any_known_values() {
        let result = clean(&["5000,2011.0,bmw x5,6.0,,black,1.0,2018-06-23"]);
        assert_eq!(result, Err(DataIntegrityError::NoOdometerValues { missing: 1 }));
    }

    #[test]
    fn test_missing_4wd_is_zero() {
        let out = clean(&["5000,2011.0,bmw x5,6.0,100000.0,black,,2018-06-23"]).unwrap();
        assert_eq!(out.listings[0].is_4wd, 0);
        assert_eq!(out.stats.is_4wd_imputed, 1);
    }

    #[test]
    fn test_float_fields_coerced_to_integers() {
        let out = clean(&["5000,2011.0,bmw x5,8.0,145000.7,black,1.0,2018-06-23"]).unwrap();
        let row = &out.listings[0];
        assert_eq!(row.model_year, 2011);
        assert_eq!(row.cylinders, 8);
        assert_eq!(row.odometer, 145000);
        assert_eq!(row.is_4wd, 1);
    }

    #[test]
    fn test_silverado_excluded() {
        let out = clean(&[
            "5000,2011.0,chevrolet silverado,8.0,100000.0,black,1.0,2018-06-23",
            "5000,2011.0,Chevrolet Silverado,8.0,100000.0,black,1.0,2018-06-23",
            "5000,2011.0,chevrolet silverado 1500,8.0,100000.0,black,1.0,2018-06-23",
        ])
        .unwrap();
        assert_eq!(out.listings.len(), 1);
        assert_eq!(out.listings[0].model, "chevrolet silverado 1500");
        assert_eq!(out.stats.excluded_models, 2);
    }

    #[test]
    fn test_f_series_normalized() {
        let out = clean(&[
            "5000,2011.0,ford f150,8.0,100000.0,black,1.0,2018-06-23",
            "5000,2011.0,Ford F150,8.0,100000.0,black,1.0,2018-06-23",
            "5000,2011.0,ford f-250,8.0,100000.0,black,1.0,2018-06-23",
        ])
        .unwrap();
        assert_eq!(out.listings[0].model, "ford f-150");
        assert_eq!(out.listings[1].model, "ford f-150");
        assert_eq!(out.listings[2].model, "ford f-250");
        assert_eq!(out.stats.models_normalized, 2);
    }

    #[test]
    fn test_date_parsed() {
        let out = clean(&["5000,2011.0,bmw x5,6.0,100000.0,black,1.0,2018-06-23"]).unwrap();
        assert_eq!(
            out.listings[0].date_posted,
            NaiveDate::from_ymd_opt(2018, 6, 23).unwrap()
        );
    }

    #[test]
    fn test_malformed_date_is_fatal() {
        let result = clean(&[
            "5000,2011.0,bmw x5,6.0,100000.0,black,1.0,2018-06-23",
            "5000,2011.0,bmw x5,6.0,100000.0,black,1.0,last tuesday",
        ]);
        assert_eq!(
            result,
            Err(DataIntegrityError::UnparseableDate {
                row: 2,
                value: "last tuesday".to_string()
            })
        );
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let table = RawTable::from_reader("price,model_year\n5000,2011\n".as_bytes()).unwrap();
        let result = Cleaner::default().clean(&table);
        assert_eq!(result, Err(DataIntegrityError::MissingColumn(Column::Model)));
    }

    #[test]
    fn test_non_numeric_value_is_fatal() {
        let result = clean(&["cheap,2011.0,bmw x5,6.0,100000.0,black,1.0,2018-06-23"]);
        assert!(matches!(
            result,
            Err(DataIntegrityError::InvalidValue { column: Column::Price, row: 1, .. })
        ));
    }

    #[test]
    fn test_negative_price_is_fatal() {
        let result = clean(&["-5,2011.0,bmw x5,6.0,100000.0,black,1.0,2018-06-23"]);
        assert!(matches!(
            result,
            Err(DataIntegrityError::InvalidValue { column: Column::Price, .. })
        ));
    }

    #[test]
    fn test_raw_table_untouched() {
        let raw = table(&["5000,2011.0,ford f150,6.0,,,,2018-06-23"]);
        let before = raw.rows.clone();
        Cleaner::default().clean(&raw).ok();
        assert_eq!(raw.rows, before);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "condition,price,model_year,model,cylinders,odometer,paint_color,is_4wd,date_posted,days_listed\n\
                   good,5000,2011.0,bmw x5,6.0,100000.0,black,1.0,2018-06-23,19\n";
        let raw = RawTable::from_reader(csv.as_bytes()).unwrap();
        let out = Cleaner::default().clean(&raw).unwrap();
        assert_eq!(out.listings[0].price, 5000);
        assert_eq!(out.listings[0].model, "bmw x5");
    }

    fn cell(value: Option<u32>) -> String {
        value.map(|v| format!("{}.0", v)).unwrap_or_default()
    }

    prop_compose! {
        fn raw_row()(
            price in 0u32..400_000,
            year in prop::option::weighted(0.9, 1908u32..2019),
            cylinders in prop::option::weighted(0.9, prop::sample::select(vec![3u32, 4, 6, 8, 10, 12])),
            odometer in prop::option::weighted(0.8, 0u32..990_000),
            is_4wd in prop::option::of(0u32..2),
            model in prop::sample::select(vec![
                "ford f150", "Ford F250", "ford f-350", "chevrolet silverado",
                "CHEVROLET SILVERADO", "honda civic", "toyota camry",
            ]),
            paint in prop::option::of(prop::sample::select(vec!["white", "black", "red"])),
        ) -> String {
            format!(
                "{},{},{},{},{},{},{},2018-06-23",
                price, cell(year), model, cell(cylinders), cell(odometer),
                paint.unwrap_or(""), cell(is_4wd),
            )
        }
    }

    proptest! {
        #[test]
        fn prop_cleaned_rows_are_repaired(
            rows in prop::collection::vec(raw_row(), 1..60)
                .prop_filter("needs a complete row with a known odometer", |rows| {
                    rows.iter().any(|r| {
                        let cells: Vec<&str> = r.split(',').collect();
                        [1, 3, 4].iter().all(|&i| !cells[i].is_empty())
                    })
                })
        ) {
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            let out = clean(&rows).unwrap();
            let rules = ModelRules::default();

            for listing in &out.listings {
                prop_assert!(!listing.model.eq_ignore_ascii_case("chevrolet silverado"));
                prop_assert_eq!(rules.normalize(&listing.model), listing.model.clone());
                prop_assert!(listing.is_4wd == 0 || listing.is_4wd == 1);
                prop_assert!(listing.odometer >= 0);
                prop_assert!(!listing.paint_color.is_empty());
            }
            prop_assert_eq!(out.stats.rows_out, out.listings.len());
        }

        #[test]
        fn prop_imputed_odometer_is_median_of_known(
            known in prop::collection::vec(0u32..990_000, 1..40),
            missing in 1usize..5,
        ) {
            let mut rows: Vec<String> = known
                .iter()
                .map(|o| format!("5000,2011.0,bmw x5,6.0,{}.0,black,1.0,2018-06-23", o))
                .collect();
            rows.extend((0..missing).map(|_| "5000,2011.0,bmw x5,6.0,,black,1.0,2018-06-23".to_string()));

            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            let out = clean(&rows).unwrap();

            let known: Vec<f64> = known.iter().map(|&o| o as f64).collect();
            let expected = statistics::median(&known).unwrap();
            prop_assert_eq!(out.stats.odometer_median, Some(expected));
            for listing in &out.listings[known.len()..] {
                prop_assert_eq!(listing.odometer, expected.trunc() as i64);
            }
        }
    }
}
