//! Loosely-typed workbook boundary.
//!
//! The spreadsheet collaborator hands over sheets of rows, each row a map of
//! column header to cell value. This module converts that shape into typed
//! [`InputTables`] exactly once, so the scheduler never looks columns up by
//! string.
//!
//! # Cell Coercion
//!
//! | Target | Accepted cells |
//! |--------|----------------|
//! | Text | strings, numbers (integral floats lose their `.0`), booleans |
//! | Section count | positive integers, integral floats, integer strings |
//!
//! Empty (`null`) and missing cells are both treated as absent.
//! Extra sheets and extra columns are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TimetableError};
use crate::models::{Course, Day, InputTables, Lecturer, Room, TimePeriod};

/// Sheet names.
pub mod sheet {
    /// Lecturers sheet.
    pub const LECTURERS: &str = "Lecturers";
    /// Courses sheet.
    pub const COURSES: &str = "Courses";
    /// Rooms sheet.
    pub const ROOMS: &str = "Rooms";
    /// Days sheet.
    pub const DAYS: &str = "Days";
    /// Time Periods sheet.
    pub const TIME_PERIODS: &str = "Time Periods";
}

/// Column headers.
pub mod column {
    /// Lecturers: name.
    pub const LECTURER_NAME: &str = "Lecturer Name";
    /// Courses: code.
    pub const COURSE_CODE: &str = "Course Code";
    /// Courses: section count.
    pub const NUMBER_OF_SECTIONS: &str = "Number of Sections";
    /// Rooms: number.
    pub const ROOM_NUMBER: &str = "Room Number";
    /// Rooms: building.
    pub const BUILDING: &str = "Building";
    /// Rooms: location.
    pub const LOCATION: &str = "Location";
    /// Days: label.
    pub const DAY: &str = "Day";
    /// Time Periods: range text.
    pub const TIME_PERIOD: &str = "Time Period";
}

/// One sheet row: column header to cell.
pub type Row = Map<String, Value>;

/// Named sheets of rows, as extracted from a spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workbook {
    sheets: BTreeMap<String, Vec<Row>>,
}

impl Workbook {
    /// Creates an empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a workbook from `{ "<sheet>": [ { "<column>": <cell> } ] }` JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TimetableError::invalid_input("workbook", e.to_string()))
    }

    /// Adds or replaces a sheet.
    pub fn with_sheet(mut self, name: impl Into<String>, rows: Vec<Row>) -> Self {
        self.sheets.insert(name.into(), rows);
        self
    }

    /// Replaces a sheet in place (e.g. after interactive editing).
    pub fn set_sheet(&mut self, name: impl Into<String>, rows: Vec<Row>) {
        self.sheets.insert(name.into(), rows);
    }

    /// Rows of a sheet.
    pub fn sheet(&self, name: &str) -> Option<&[Row]> {
        self.sheets.get(name).map(Vec::as_slice)
    }

    /// Sheet names, sorted.
    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    fn required(&self, name: &str) -> Result<&[Row]> {
        self.sheet(name)
            .ok_or_else(|| TimetableError::invalid_input(name, "sheet is missing"))
    }
}

impl InputTables {
    /// Converts a workbook into typed tables.
    ///
    /// Fails with [`ErrorKind::InvalidInput`](crate::error::ErrorKind::InvalidInput)
    /// on the first missing sheet, missing column or unusable cell. Row order
    /// is preserved.
    pub fn from_workbook(workbook: &Workbook) -> Result<Self> {
        let lecturers = workbook
            .required(sheet::LECTURERS)?
            .iter()
            .enumerate()
            .map(|(i, row)| -> Result<Lecturer> {
                let cells = Cells::new(sheet::LECTURERS, i, row);
                let name = cells.text(column::LECTURER_NAME)?;
                if name.trim().is_empty() {
                    return Err(cells.error(column::LECTURER_NAME, "must not be blank"));
                }
                Ok(Lecturer::new(name))
            })
            .collect::<Result<Vec<_>>>()?;

        let courses = workbook
            .required(sheet::COURSES)?
            .iter()
            .enumerate()
            .map(|(i, row)| -> Result<Course> {
                let cells = Cells::new(sheet::COURSES, i, row);
                Ok(Course::new(
                    cells.text(column::COURSE_CODE)?,
                    cells.count(column::NUMBER_OF_SECTIONS)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let rooms = workbook
            .required(sheet::ROOMS)?
            .iter()
            .enumerate()
            .map(|(i, row)| -> Result<Room> {
                let cells = Cells::new(sheet::ROOMS, i, row);
                Ok(Room::new(cells.text(column::ROOM_NUMBER)?)
                    .with_building(cells.text(column::BUILDING)?)
                    .with_location(cells.text(column::LOCATION)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let days = workbook
            .required(sheet::DAYS)?
            .iter()
            .enumerate()
            .map(|(i, row)| -> Result<Day> {
                Ok(Day::new(Cells::new(sheet::DAYS, i, row).text(column::DAY)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let time_periods = workbook
            .required(sheet::TIME_PERIODS)?
            .iter()
            .enumerate()
            .map(|(i, row)| -> Result<TimePeriod> {
                Ok(TimePeriod::new(
                    Cells::new(sheet::TIME_PERIODS, i, row).text(column::TIME_PERIOD)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            lecturers,
            courses,
            rooms,
            days,
            time_periods,
        })
    }
}

impl TryFrom<&Workbook> for InputTables {
    type Error = TimetableError;

    fn try_from(workbook: &Workbook) -> Result<Self> {
        Self::from_workbook(workbook)
    }
}

/// Typed cell access for one row.
struct Cells<'a> {
    sheet: &'static str,
    row_index: usize,
    row: &'a Row,
}

impl<'a> Cells<'a> {
    fn new(sheet: &'static str, row_index: usize, row: &'a Row) -> Self {
        Self {
            sheet,
            row_index,
            row,
        }
    }

    fn error(&self, column: &str, message: impl std::fmt::Display) -> TimetableError {
        TimetableError::invalid_input(
            self.sheet,
            format!("row {}, column '{column}': {message}", self.row_index),
        )
    }

    fn cell(&self, column: &str) -> Result<&'a Value> {
        match self.row.get(column) {
            None | Some(Value::Null) => Err(self.error(column, "missing value")),
            Some(v) => Ok(v),
        }
    }

    fn text(&self, column: &str) -> Result<String> {
        match self.cell(column)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(number_text(n)),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(self.error(column, format!("expected text, found {other}"))),
        }
    }

    fn count(&self, column: &str) -> Result<u32> {
        let value = self.cell(column)?;
        let parsed: Option<i64> = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        let Some(n) = parsed else {
            return Err(self.error(column, format!("expected a whole number, found {value}")));
        };
        if n <= 0 {
            return Err(self.error(column, format!("must be positive, found {n}")));
        }
        u32::try_from(n).map_err(|_| self.error(column, format!("{n} is too large")))
    }
}

/// Renders a numeric cell as text, dropping the `.0` of integral floats.
fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                return (f as i64).to_string();
            }
        }
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn rows(value: Value) -> Vec<Row> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    fn sample_workbook() -> Workbook {
        Workbook::new()
            .with_sheet(
                sheet::LECTURERS,
                rows(json!([{"Lecturer Name": "A"}, {"Lecturer Name": "B"}])),
            )
            .with_sheet(
                sheet::COURSES,
                rows(json!([{"Course Code": "X", "Number of Sections": 2}])),
            )
            .with_sheet(
                sheet::ROOMS,
                rows(json!([
                    {"Room Number": 101, "Building": "Main", "Location": "North"},
                    {"Room Number": "R2", "Building": "Annex", "Location": "South"}
                ])),
            )
            .with_sheet(sheet::DAYS, rows(json!([{"Day": "Mon"}, {"Day": "Tue"}])))
            .with_sheet(
                sheet::TIME_PERIODS,
                rows(json!([{"Time Period": "09:00-10:00"}])),
            )
    }

    #[test]
    fn test_from_workbook() {
        let t = InputTables::from_workbook(&sample_workbook()).unwrap();
        assert_eq!(t.lecturers.len(), 2);
        assert_eq!(t.courses[0], Course::new("X", 2));
        assert_eq!(t.rooms[0].number, "101");
        assert_eq!(t.rooms[1].building, "Annex");
        assert_eq!(t.days[1].name, "Tue");
        assert_eq!(t.time_periods[0].label, "09:00-10:00");
    }

    #[test]
    fn test_missing_sheet() {
        let mut wb = sample_workbook();
        wb.sheets.remove(sheet::DAYS);
        let err = InputTables::from_workbook(&wb).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("Days"));
    }

    #[test]
    fn test_missing_column() {
        let wb = sample_workbook().with_sheet(
            sheet::ROOMS,
            rows(json!([{"Room Number": "R1", "Building": "Main"}])),
        );
        let err = InputTables::from_workbook(&wb).unwrap_err();
        assert!(err.to_string().contains("Location"));
    }

    #[test]
    fn test_section_count_coercion() {
        let wb = sample_workbook().with_sheet(
            sheet::COURSES,
            rows(json!([
                {"Course Code": "A", "Number of Sections": 2.0},
                {"Course Code": "B", "Number of Sections": " 3 "}
            ])),
        );
        let t = InputTables::from_workbook(&wb).unwrap();
        assert_eq!(t.courses[0].sections, 2);
        assert_eq!(t.courses[1].sections, 3);
    }

    #[test]
    fn test_section_count_rejected() {
        for bad in [json!(0), json!(-1), json!(2.5), json!("two"), json!(null), json!(true)] {
            let wb = sample_workbook().with_sheet(
                sheet::COURSES,
                rows(json!([{"Course Code": "A", "Number of Sections": bad}])),
            );
            let err = InputTables::from_workbook(&wb).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "accepted {bad}");
        }
    }

    #[test]
    fn test_blank_lecturer_rejected() {
        let wb = sample_workbook()
            .with_sheet(sheet::LECTURERS, rows(json!([{"Lecturer Name": "  "}])));
        assert!(InputTables::from_workbook(&wb).is_err());
    }

    #[test]
    fn test_extra_columns_and_sheets_ignored() {
        let wb = sample_workbook()
            .with_sheet("Notes", rows(json!([{"Anything": 1}])))
            .with_sheet(sheet::DAYS, rows(json!([{"Day": "Mon", "Comment": "busy"}])));
        let t = InputTables::from_workbook(&wb).unwrap();
        assert_eq!(t.days.len(), 1);
    }

    #[test]
    fn test_from_json_str() {
        let wb = Workbook::from_json_str(
            r#"{"Days": [{"Day": "Mon"}], "Lecturers": []}"#,
        )
        .unwrap();
        assert_eq!(wb.sheet_names().collect::<Vec<_>>(), vec!["Days", "Lecturers"]);
        assert_eq!(wb.sheet(sheet::DAYS).unwrap().len(), 1);

        assert!(Workbook::from_json_str("[1, 2]").is_err());
    }
}
