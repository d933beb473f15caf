use crate::table::raw_table::RawTable;
use crate::table::schema::ColumnType;
use crate::table::utils::{is_missing, parse_bool, parse_float, parse_int, parse_uint};
use crate::table::value::{CellValue, Row};

/// Convert one raw cell according to its column's type.
pub fn convert_cell(raw: &str, ty: ColumnType) -> CellValue {
    if is_missing(raw) {
        return CellValue::Null;
    }
    let value = match ty {
        ColumnType::Empty => None,
        ColumnType::Boolean => parse_bool(raw).map(CellValue::Bool),
        ColumnType::Integer => parse_int(raw)
            .map(CellValue::Integer)
            .or_else(|| parse_uint(raw).map(CellValue::Unsigned)),
        // JSON has no encoding for ±inf
        ColumnType::Float => parse_float(raw)
            .filter(|v| v.is_finite())
            .map(CellValue::Float),
        ColumnType::Text => Some(CellValue::Text(raw.to_string())),
    };
    value.unwrap_or(CellValue::Null)
}

/// Typed rows for the first `limit` records of `table`.
pub fn to_rows(table: &RawTable, types: &[ColumnType], limit: usize) -> Vec<Row> {
    table
        .rows
        .iter()
        .take(limit)
        .map(|cells| {
            Row::new(
                table
                    .headers
                    .iter()
                    .zip(types)
                    .zip(cells)
                    .map(|((name, ty), raw)| (name.clone(), convert_cell(raw, *ty)))
                    .collect(),
            )
        })
        .collect()
}
