//! Column selection checks shared by the analysis functions
//!
//! In-process callers pass `&[S] where S: AsRef<str>`, so "is a list of
//! strings" is already settled by the type system. Selections arriving as
//! JSON (config files) go through [`parse_string_list`] first.

use std::collections::HashSet;

use polars::prelude::*;
use serde_json::Value;

use crate::error::{EdaError, EdaResult};

pub const CAT_VARS_NOT_STRINGS: &str = "cat_vars must be a list of strings";
pub const CAT_VARS_NOT_IN_FRAME: &str = "cat_vars must belong to the dataframe";
pub const CAT_VARS_NOT_UNIQUE: &str = "cat_vars elements must be unique";
pub const N_COLS_NOT_POSITIVE: &str = "n_cols must be a positive non-zero integer";
pub const NUM_VARS_NOT_STRINGS: &str = "num_vars must be a list of strings";
pub const NUM_VARS_NOT_UNIQUE: &str = "num_vars elements must be unique";
pub const NUM_VARS_NOT_SUBSET: &str = "num_vars must be a subset of the column names";
pub const ONLY_NUMERIC_EXPECTED: &str = "only numeric columns expected";
pub const COLUMNS_NOT_NUMERIC: &str = "columns are not all numeric";

/// Fail with `message` if any name appears twice.
pub fn ensure_unique<S: AsRef<str>>(names: &[S], message: &str) -> EdaResult<()> {
    let mut seen = HashSet::with_capacity(names.len());
    if names.iter().all(|name| seen.insert(name.as_ref())) {
        Ok(())
    } else {
        Err(EdaError::invalid_argument(message))
    }
}

/// Fail with `message` if any name is not a column of `df`.
pub fn ensure_subset<S: AsRef<str>>(df: &DataFrame, names: &[S], message: &str) -> EdaResult<()> {
    let columns: HashSet<&str> = df.get_column_names().into_iter().map(|c| c.as_str()).collect();
    if names.iter().all(|name| columns.contains(name.as_ref())) {
        Ok(())
    } else {
        Err(EdaError::invalid_argument(message))
    }
}

/// Fail with `message` unless every named column has a primitive numeric dtype.
///
/// Callers must run [`ensure_subset`] first.
pub fn ensure_numeric<S: AsRef<str>>(df: &DataFrame, names: &[S], message: &str) -> EdaResult<()> {
    for name in names {
        let column = df.column(name.as_ref())?;
        if !column.dtype().is_primitive_numeric() {
            return Err(EdaError::invalid_argument(message));
        }
    }
    Ok(())
}

/// Fail unless `n_cols` is positive.
pub fn ensure_positive_n_cols(n_cols: usize) -> EdaResult<()> {
    if n_cols == 0 {
        Err(EdaError::invalid_argument(N_COLS_NOT_POSITIVE))
    } else {
        Ok(())
    }
}

/// Parse a JSON value that must be an array of strings.
///
/// `argument` names the parameter in the error message, e.g. `cat_vars`.
pub fn parse_string_list(value: &Value, argument: &str) -> EdaResult<Vec<String>> {
    let not_strings = || EdaError::InvalidType(format!("{} must be a list of strings", argument));

    let items = value.as_array().ok_or_else(not_strings)?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(not_strings))
        .collect()
}

/// Parse a JSON value that must be a positive integer grid width.
pub fn parse_n_cols(value: &Value) -> EdaResult<usize> {
    match value.as_u64() {
        Some(n) if n > 0 => {
            usize::try_from(n).map_err(|_| EdaError::invalid_argument(N_COLS_NOT_POSITIVE))
        }
        _ => Err(EdaError::invalid_argument(N_COLS_NOT_POSITIVE)),
    }
}
