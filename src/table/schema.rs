use crate::table::raw_table::RawTable;
use crate::table::utils::{
    is_int_literal, is_missing, parse_bool, parse_float, parse_int, parse_uint,
};

/// Inferred type of one CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// No present cells at all.
    Empty,
    Boolean,
    /// Every present cell fits in `i64` or `u64`.
    Integer,
    Float,
    Text,
}

/// Decide a column's type from every present cell in it.
pub fn infer_column_type<'a, I>(cells: I) -> ColumnType
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen_any = false;
    let (mut all_bool, mut all_int, mut all_float) = (true, true, true);

    for cell in cells.into_iter().filter(|c| !is_missing(c)) {
        seen_any = true;
        all_bool &= parse_bool(cell).is_some();
        let fits = parse_int(cell).is_some() || parse_uint(cell).is_some();
        // too wide for 64 bits; a float would round it
        if !fits && is_int_literal(cell) {
            return ColumnType::Text;
        }
        all_int &= fits;
        all_float &= all_int || parse_float(cell).is_some();
        if !(all_bool || all_int || all_float) {
            return ColumnType::Text;
        }
    }

    match (seen_any, all_bool, all_int, all_float) {
        (false, ..) => ColumnType::Empty,
        (true, true, _, _) => ColumnType::Boolean,
        (true, _, true, _) => ColumnType::Integer,
        (true, _, _, true) => ColumnType::Float,
        _ => ColumnType::Text,
    }
}

/// One type per header column, decided over all rows, not just a sample.
pub fn analyze_columns(table: &RawTable) -> Vec<ColumnType> {
    (0..table.num_columns())
        .map(|idx| infer_column_type(table.column(idx)))
        .collect()
}
