//! Input normalization.
//!
//! Tables can be fed from several shapes of input. Each shape is a variant of
//! [`TableSource`] and reduces to one canonical [`TableData`] (headers plus
//! rows) before it reaches the renderer:
//!
//! | Variant | Headers | Rows |
//! |---------|---------|------|
//! | `Arrays` | given | given |
//! | `Records` | keys of the first record, in order | each record's values for those keys |
//! | `Query` | as `Records`, after fetching every row | |
//! | `Collection` | as `Records`, after converting to plain records | |
//!
//! Normalization is permissive: a shape that cannot produce headers yields
//! `None` instead of an error.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tabletown::{Table, TableSource};
//!
//! let value = json!([
//!     {"id": 1, "artist": "Bratmobile"},
//!     {"id": 2, "artist": "Coltrane, John"},
//! ]);
//!
//! let data = TableSource::from_value(value).and_then(TableSource::normalize).unwrap();
//! let output = Table::from_data(data).render().unwrap();
//! assert!(output.contains("| id | artist         |"));
//! ```

use std::io;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::tabular::{Cell, Table};

/// A key-value record; key order is insertion order.
pub type Record = Map<String, Value>;

/// A tabular query result that can hand over all of its rows as records.
pub trait QueryResult {
    /// Fetch every remaining row, keyed by column name.
    fn fetch_all_records(&mut self) -> Vec<Record>;
}

/// An ordered collection of records.
pub trait RecordCollection {
    /// Convert the collection to plain records.
    fn to_records(&self) -> Vec<Record>;
}

impl RecordCollection for [Record] {
    fn to_records(&self) -> Vec<Record> {
        self.to_vec()
    }
}

impl RecordCollection for Vec<Record> {
    fn to_records(&self) -> Vec<Record> {
        self.clone()
    }
}

/// Wraps any slice of serializable structs as a record collection.
///
/// Items that do not serialize to a JSON object are skipped.
///
/// ```rust
/// use serde::Serialize;
/// use tabletown::{RecordCollection, Serialized};
///
/// #[derive(Serialize)]
/// struct Album { id: u32, name: &'static str }
///
/// let albums = [Album { id: 1, name: "Pottymouth" }];
/// let records = Serialized(&albums).to_records();
/// assert_eq!(records[0]["name"], "Pottymouth");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Serialized<'a, T>(pub &'a [T]);

impl<T: Serialize> RecordCollection for Serialized<'_, T> {
    fn to_records(&self) -> Vec<Record> {
        self.0
            .iter()
            .filter_map(|item| match serde_json::to_value(item) {
                Ok(Value::Object(map)) => Some(map),
                _ => None,
            })
            .collect()
    }
}

/// Normalized table input: one header row plus data rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub headers: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableData {
    /// Create table data from headers and rows of any cell-convertible values.
    pub fn new<H, R, I, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<Cell>,
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        TableData {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Build table data from records.
    ///
    /// Headers come from the first record's keys. A later record missing one of
    /// those keys gets an empty cell; keys only present in later records are
    /// ignored. Returns `None` when there are no records.
    pub fn from_records(records: &[Record]) -> Option<Self> {
        let Some(first) = records.first() else {
            tracing::trace!("no records, cannot derive headers");
            return None;
        };
        let keys: Vec<&String> = first.keys().collect();

        let rows: Vec<Vec<Cell>> = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let missing = keys.iter().filter(|key| !record.contains_key(**key)).count();
                let extra = record.keys().filter(|key| !first.contains_key(*key)).count();
                if missing > 0 || extra > 0 {
                    tracing::debug!(
                        record = index,
                        missing,
                        extra,
                        "record keys differ from the header; missing keys render empty, extra keys are dropped"
                    );
                }
                keys.iter()
                    .map(|key| record.get(*key).map(Cell::from).unwrap_or_default())
                    .collect()
            })
            .collect();

        Some(TableData {
            headers: keys.into_iter().map(Cell::from).collect(),
            rows,
        })
    }

    /// Read table data from CSV; the first record is the header row.
    ///
    /// Quoted fields may contain line breaks and become multi-line cells.
    ///
    /// ```rust
    /// use tabletown::TableData;
    ///
    /// let csv = "id,name\n1,Pottymouth\n2,\"Giant Steps\nAtlantic\"\n";
    /// let data = TableData::from_csv(csv.as_bytes()).unwrap();
    /// assert_eq!(data.headers.len(), 2);
    /// assert_eq!(data.rows[1][1].to_string(), "Giant Steps\nAtlantic");
    /// ```
    pub fn from_csv<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<Cell> = reader.headers()?.iter().map(Cell::from).collect();
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(Cell::from).collect());
        }

        Ok(TableData { headers, rows })
    }

    /// Turn the data into a table with default settings.
    pub fn into_table(self) -> Table {
        Table::from_data(self)
    }
}

/// One of the supported input shapes.
pub enum TableSource<'a> {
    /// Explicit headers and rows.
    Arrays(TableData),
    /// Uniform key-value records.
    Records(Vec<Record>),
    /// A query result whose rows are fetched as records.
    Query(&'a mut dyn QueryResult),
    /// A collection convertible to records.
    Collection(&'a dyn RecordCollection),
}

impl TableSource<'_> {
    /// Reduce the source to headers and rows.
    ///
    /// Returns `None` when headers cannot be derived (for example, an empty
    /// list of records).
    pub fn normalize(self) -> Option<TableData> {
        match self {
            TableSource::Arrays(data) => Some(data),
            TableSource::Records(records) => TableData::from_records(&records),
            TableSource::Query(query) => TableData::from_records(&query.fetch_all_records()),
            TableSource::Collection(collection) => {
                TableData::from_records(&collection.to_records())
            }
        }
    }
}

impl TableSource<'static> {
    /// Classify a dynamic value.
    ///
    /// - an array of objects becomes [`TableSource::Records`]
    /// - an object with `headers` (array) and `rows` (array of arrays) becomes
    ///   [`TableSource::Arrays`]
    ///
    /// Any other shape yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => {
                let records: Option<Vec<Record>> = items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(map) => Some(map),
                        _ => None,
                    })
                    .collect();
                if records.is_none() {
                    tracing::debug!("array input contains non-object items");
                }
                records.map(TableSource::Records)
            }
            Value::Object(mut map) => {
                let headers = match map.remove("headers") {
                    Some(Value::Array(headers)) => headers,
                    _ => {
                        tracing::debug!("object input has no 'headers' array");
                        return None;
                    }
                };
                let rows = match map.remove("rows") {
                    Some(Value::Array(rows)) => rows,
                    _ => {
                        tracing::debug!("object input has no 'rows' array");
                        return None;
                    }
                };
                let rows: Option<Vec<Vec<Cell>>> = rows
                    .iter()
                    .map(|row| match row {
                        Value::Array(cells) => Some(cells.iter().map(Cell::from).collect()),
                        _ => None,
                    })
                    .collect();

                Some(TableSource::Arrays(TableData {
                    headers: headers.iter().map(Cell::from).collect(),
                    rows: rows?,
                }))
            }
            other => {
                tracing::debug!(kind = value_kind(&other), "unsupported input shape");
                None
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&Value> for Cell {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Cell::Int(i),
                (None, Some(f)) if n.is_f64() => Cell::Float(f),
                _ => Cell::Text(n.to_string()),
            },
            Value::String(s) => Cell::Text(s.clone()),
            // Nested arrays and objects render as compact JSON
            other => Cell::Text(other.to_string()),
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        Cell::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    struct FakeStatement {
        rows: Vec<Record>,
    }

    impl QueryResult for FakeStatement {
        fn fetch_all_records(&mut self) -> Vec<Record> {
            std::mem::take(&mut self.rows)
        }
    }

    #[test]
    fn records_keep_key_order() {
        let records = vec![
            record(json!({"id": 1, "artist": "Bratmobile", "date": 1993})),
            record(json!({"id": 2, "artist": "Coltrane, John", "date": 1959})),
        ];
        let data = TableData::from_records(&records).unwrap();
        assert_eq!(
            data.headers,
            vec![Cell::from("id"), Cell::from("artist"), Cell::from("date")]
        );
        assert_eq!(
            data.rows[1],
            vec![Cell::Int(2), Cell::from("Coltrane, John"), Cell::Int(1959)]
        );
    }

    #[test]
    fn records_missing_key_is_empty() {
        let records = vec![
            record(json!({"a": 1, "b": 2})),
            record(json!({"b": 3, "c": 4})),
        ];
        let data = TableData::from_records(&records).unwrap();
        assert_eq!(data.rows[1], vec![Cell::Null, Cell::Int(3)]);
    }

    #[test]
    fn empty_records_yield_none() {
        assert!(TableData::from_records(&[]).is_none());
        assert!(TableSource::Records(vec![]).normalize().is_none());
    }

    #[test]
    fn query_source_fetches_rows() {
        let mut statement = FakeStatement {
            rows: vec![record(json!({"id": 1, "name": "Pottymouth"}))],
        };
        let data = TableSource::Query(&mut statement).normalize().unwrap();
        assert_eq!(data.headers, vec![Cell::from("id"), Cell::from("name")]);
        assert_eq!(data.rows.len(), 1);
        assert!(statement.rows.is_empty());
    }

    #[test]
    fn collection_of_serializable_structs() {
        #[derive(Serialize)]
        struct Album {
            id: u32,
            name: String,
        }

        let albums = vec![
            Album {
                id: 1,
                name: "Pottymouth".into(),
            },
            Album {
                id: 2,
                name: "Giant Steps".into(),
            },
        ];
        let collection = Serialized(&albums);
        let data = TableSource::Collection(&collection).normalize().unwrap();
        assert_eq!(data.headers, vec![Cell::from("id"), Cell::from("name")]);
        assert_eq!(data.rows[1], vec![Cell::Int(2), Cell::from("Giant Steps")]);
    }

    #[test]
    fn from_value_records() {
        let source = TableSource::from_value(json!([{"a": 1}, {"a": 2}])).unwrap();
        assert!(matches!(source, TableSource::Records(ref r) if r.len() == 2));
    }

    #[test]
    fn from_value_headers_and_rows() {
        let value = json!({"headers": ["artist", 19], "rows": [["Bratmobile", 93]]});
        let data = TableSource::from_value(value).and_then(TableSource::normalize).unwrap();
        assert_eq!(data.headers, vec![Cell::from("artist"), Cell::Int(19)]);
        assert_eq!(data.rows, vec![vec![Cell::from("Bratmobile"), Cell::Int(93)]]);
    }

    #[test]
    fn from_value_rejects_unsupported_shapes() {
        assert!(TableSource::from_value(json!("foo")).is_none());
        assert!(TableSource::from_value(json!(9)).is_none());
        assert!(TableSource::from_value(json!(null)).is_none());
        assert!(TableSource::from_value(json!({})).is_none());
        assert!(TableSource::from_value(json!([1, 2])).is_none());
        assert!(TableSource::from_value(json!({"headers": ["a"], "rows": ["x"]})).is_none());
    }

    #[test]
    fn from_value_empty_array_normalizes_to_none() {
        let source = TableSource::from_value(json!([])).unwrap();
        assert!(source.normalize().is_none());
    }

    #[test]
    fn cell_from_json_values() {
        assert_eq!(Cell::from(&json!(null)), Cell::Null);
        assert_eq!(Cell::from(&json!(1993)), Cell::Int(1993));
        assert_eq!(Cell::from(&json!(2.5)), Cell::Float(2.5));
        assert_eq!(Cell::from(&json!(u64::MAX)).to_string(), u64::MAX.to_string());
        assert_eq!(Cell::from(&json!(["a", 1])).to_string(), r#"["a",1]"#);
    }

    #[test]
    fn csv_input() {
        let csv = "artist,title\nBratmobile,Pottymouth\n\"Coltrane, John\",Giant Steps\n";
        let data = TableData::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(data.headers, vec![Cell::from("artist"), Cell::from("title")]);
        assert_eq!(data.rows[1][0], Cell::from("Coltrane, John"));
    }

    #[test]
    fn csv_ragged_rows_are_errors() {
        let csv = "a,b\n1,2,3\n";
        let err = TableData::from_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, crate::TableError::Csv(_)));
    }

    #[test]
    fn table_data_new_converts_cells() {
        let data = TableData::new(["artist", "date"], [[Cell::from("Bratmobile"), Cell::Int(1993)]]);
        assert_eq!(data.rows[0][1], Cell::Int(1993));
    }
}
