//! Header-addressed access to CSV rows
//!
//! Columns are looked up by header name so files may reorder or add
//! columns freely.

use crate::{CardGenError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;

/// A parsed CSV file with its header index
pub struct CsvTable {
    file: String,
    columns: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

impl CsvTable {
    /// Parse CSV text. `file` is only used in error messages.
    pub fn parse(file: &str, content: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let columns = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim_start_matches('\u{feff}').to_string(), i))
            .collect();

        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(CsvTable {
            file: file.to_string(),
            columns,
            records,
        })
    }

    /// Fail early if any of `names` is not a header
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        for name in names {
            if !self.columns.contains_key(*name) {
                return Err(CardGenError::MissingColumn {
                    file: self.file.clone(),
                    column: name.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = CsvRow<'_>> {
        self.records.iter().enumerate().map(move |(i, record)| CsvRow {
            table: self,
            // Line the record starts on; quoted fields may span several lines
            row: record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(i + 2),
            record,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One data row of a [`CsvTable`]
pub struct CsvRow<'a> {
    table: &'a CsvTable,
    row: usize,
    record: &'a StringRecord,
}

impl<'a> CsvRow<'a> {
    /// Raw (trimmed) cell text; missing columns and short rows read as ""
    pub fn text(&self, column: &str) -> &'a str {
        self.table
            .columns
            .get(column)
            .and_then(|&i| self.record.get(i))
            .unwrap_or("")
    }

    pub fn string(&self, column: &str) -> String {
        self.text(column).to_string()
    }

    /// Cell text, with empty cells as `None`
    pub fn optional(&self, column: &str) -> Option<String> {
        let text = self.text(column);
        (!text.is_empty()).then(|| text.to_string())
    }

    pub fn number(&self, column: &str) -> Result<u32> {
        let text = self.text(column);
        text.parse().map_err(|_| self.invalid(column, text))
    }

    /// Like [`CsvRow::number`], but an empty cell yields `default`
    pub fn number_or(&self, column: &str, default: u32) -> Result<u32> {
        if self.text(column).is_empty() {
            Ok(default)
        } else {
            self.number(column)
        }
    }

    fn invalid(&self, column: &str, value: &str) -> CardGenError {
        CardGenError::InvalidField {
            file: self.table.file.clone(),
            row: self.row,
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "name,cost,note\n  Box Step , 2 ,\nPirouette,x,spins\n";

    #[test]
    fn test_cells_are_trimmed() {
        let table = CsvTable::parse("sample.csv", SAMPLE).unwrap();
        assert_eq!(table.len(), 2);
        let row = table.rows().next().unwrap();
        assert_eq!(row.text("name"), "Box Step");
        assert_eq!(row.number("cost").unwrap(), 2);
        assert_eq!(row.optional("note"), None);
        assert_eq!(row.text("missing"), "");
    }

    #[test]
    fn test_invalid_number_reports_location() {
        let table = CsvTable::parse("sample.csv", SAMPLE).unwrap();
        let row = table.rows().nth(1).unwrap();
        let err = row.number("cost").unwrap_err();
        assert_eq!(
            err.to_string(),
            "sample.csv: row 3: invalid value \"x\" for column 'cost'"
        );
    }

    #[test]
    fn test_require_columns() {
        let table = CsvTable::parse("sample.csv", SAMPLE).unwrap();
        assert!(table.require_columns(&["name", "cost"]).is_ok());
        let err = table.require_columns(&["name", "bonus"]).unwrap_err();
        assert!(matches!(err, CardGenError::MissingColumn { ref column, .. } if column == "bonus"));
    }

    #[test]
    fn test_row_numbers_follow_multiline_fields() {
        let content = "name,text\n\"Spin\",\"turn\nand turn\"\nHop,ok\nJump,\"a\n\nb\"\nBad,x\n";
        let table = CsvTable::parse("moves.csv", content).unwrap();
        let rows: Vec<usize> = table.rows().map(|r| r.row).collect();
        assert_eq!(rows, vec![2, 4, 5, 8]);

        let last = table.rows().last().unwrap();
        assert_eq!(last.text("name"), "Bad");
        let err = last.number("text").unwrap_err();
        assert_eq!(
            err.to_string(),
            "moves.csv: row 8: invalid value \"x\" for column 'text'"
        );
    }

    #[test]
    fn test_byte_order_mark_is_stripped_from_header() {
        let table = CsvTable::parse("bom.csv", "\u{feff}name,cost\nBox Step,1\n").unwrap();
        assert!(table.require_columns(&["name", "cost"]).is_ok());
        let row = table.rows().next().unwrap();
        assert_eq!(row.text("name"), "Box Step");
        assert_eq!(row.number("cost").unwrap(), 1);
    }

    #[test]
    fn test_columns_are_found_by_header_name() {
        let content = "designer,cost,extra,name\nsam,3,?,Grapevine\n";
        let table = CsvTable::parse("reordered.csv", content).unwrap();
        assert!(table.require_columns(&["name", "cost"]).is_ok());
        let row = table.rows().next().unwrap();
        assert_eq!(row.text("name"), "Grapevine");
        assert_eq!(row.number("cost").unwrap(), 3);
        assert_eq!(row.text("extra"), "?");
    }

    #[test]
    fn test_number_or_default() {
        let table = CsvTable::parse("r.csv", "name,copies\nA,\nB,3\n").unwrap();
        let copies: Vec<u32> = table
            .rows()
            .map(|r| r.number_or("copies", 1).unwrap())
            .collect();
        assert_eq!(copies, vec![1, 3]);
    }
}
