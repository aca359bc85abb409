use crate::aggregates::error::AggregateError;
use polars::prelude::*;

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, AggregateError> {
    df.column(name)
        .map_err(|e| AggregateError::ColumnNotFound(name.to_string(), e))
}

pub(crate) fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, AggregateError> {
    Ok(column(df, name)?.f64()?.into_iter().collect())
}

pub(crate) fn i32_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i32>>, AggregateError> {
    Ok(column(df, name)?.i32()?.into_iter().collect())
}

pub(crate) fn i64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>, AggregateError> {
    Ok(column(df, name)?.i64()?.into_iter().collect())
}

/// `1` for days with exactly zero of the column's value, `0` otherwise, `null` when unknown.
pub(crate) fn is_zero(name: &str) -> Expr {
    col(name).eq(lit(0.0f64)).cast(DataType::Int64)
}
