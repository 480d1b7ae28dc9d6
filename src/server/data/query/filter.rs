//! Compilation of flat filter maps into parameterized predicates.
//!
//! A filter key is either a plain field (`status`), a dotted path into a joined alias
//! (`createdBy.email`), or a field followed by an operator suffix after the first
//! underscore (`numberOfPeople_GTE`). Keys whose suffix is not an operator are kept
//! whole and matched exactly, so a column literally named `custom_FOO` still filters.

use chrono::{DateTime, Utc};
use sea_orm::Value;
use serde_json::Value as JsonValue;

use crate::{
    model::query::FilterMap,
    server::data::query::{builder::SelectQuery, dialect::DatePart},
};

/// Closed set of filter operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOperator {
    /// Exact match on a key without suffix.
    Eq,
    /// Membership in a list. Scalars are treated as one-element lists.
    In,
    /// Inclusive `BETWEEN` over a two-element list.
    Range,
    Gte,
    Lte,
    Gt,
    Lt,
    DatePart(DatePart),
    /// Exact match on a key whose suffix is not an operator, using the full key.
    RawEq,
}

impl FilterOperator {
    /// Maps an uppercased suffix to its operator.
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "IN" => Some(Self::In),
            "RANGE" => Some(Self::Range),
            "GTE" => Some(Self::Gte),
            "LTE" => Some(Self::Lte),
            "GT" => Some(Self::Gt),
            "LT" => Some(Self::Lt),
            "DAY" => Some(Self::DatePart(DatePart::Day)),
            "MONTH" => Some(Self::DatePart(DatePart::Month)),
            "YEAR" => Some(Self::DatePart(DatePart::Year)),
            _ => None,
        }
    }
}

/// One parsed filter entry.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterClause {
    pub field: String,
    pub operator: FilterOperator,
    pub value: JsonValue,
}

impl FilterClause {
    /// Parses a filter key and its value.
    ///
    /// The key is split on the first underscore and the suffix is matched case
    /// insensitively. Unrecognized suffixes fall back to `RawEq` on the full key.
    pub fn parse(key: &str, value: &JsonValue) -> Self {
        let (field, operator) = match key.split_once('_') {
            None => (key, FilterOperator::Eq),
            Some((field, suffix)) => match FilterOperator::from_suffix(&suffix.to_uppercase()) {
                Some(operator) => (field, operator),
                None => (key, FilterOperator::RawEq),
            },
        };

        Self {
            field: field.to_string(),
            operator,
            value: value.clone(),
        }
    }

    /// Renders the predicate, binding its values on `query`.
    pub fn compile(&self, query: &mut SelectQuery) -> String {
        let column = query.column(&self.field);

        match self.operator {
            FilterOperator::Eq | FilterOperator::RawEq => {
                if self.value.is_null() {
                    format!("{} IS NULL", column)
                } else {
                    let param = query.bind(json_to_value(&self.value));
                    format!("{} = {}", column, param)
                }
            }
            FilterOperator::In => {
                let items = match &self.value {
                    JsonValue::Array(items) => items.clone(),
                    scalar => vec![scalar.clone()],
                };
                if items.is_empty() {
                    return "1 = 0".to_string();
                }
                let params = items
                    .iter()
                    .map(|item| query.bind(json_to_value(item)))
                    .collect::<Vec<_>>();
                format!("{} IN ({})", column, params.join(", "))
            }
            FilterOperator::Range => {
                // Malformed ranges bind the raw value so the database rejects them.
                let (start, end) = match &self.value {
                    JsonValue::Array(bounds) if bounds.len() == 2 => {
                        (json_to_value(&bounds[0]), json_to_value(&bounds[1]))
                    }
                    other => (json_to_value(other), json_to_value(other)),
                };
                let start = query.bind(start);
                let end = query.bind(end);
                format!("{} BETWEEN {} AND {}", column, start, end)
            }
            FilterOperator::Gte => self.comparison(query, &column, ">="),
            FilterOperator::Lte => self.comparison(query, &column, "<="),
            FilterOperator::Gt => self.comparison(query, &column, ">"),
            FilterOperator::Lt => self.comparison(query, &column, "<"),
            FilterOperator::DatePart(part) => {
                let param = query.bind(json_to_value(&self.value));
                query.dialect().date_part_eq(part, &column, &param)
            }
        }
    }

    fn comparison(&self, query: &mut SelectQuery, column: &str, op: &str) -> String {
        let param = query.bind(json_to_value(&self.value));
        format!("{} {} {}", column, op, param)
    }
}

/// Applies every entry of a filter map to a query as AND-combined predicates.
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterCompiler;

impl FilterCompiler {
    /// Parses a filter map into clauses, in key order.
    pub fn parse(&self, filters: &FilterMap) -> Vec<FilterClause> {
        filters
            .iter()
            .map(|(key, value)| FilterClause::parse(key, value))
            .collect()
    }

    /// Compiles `filters` onto `query`.
    ///
    /// Never fails: values of the wrong shape are bound as-is and surface as
    /// persistence errors when the query runs.
    pub fn apply<'q>(&self, query: &'q mut SelectQuery, filters: &FilterMap) -> &'q mut SelectQuery {
        for clause in self.parse(filters) {
            let predicate = clause.compile(query);
            query.and_where(predicate);
        }
        query
    }
}

/// Converts a JSON filter value into a bindable database value.
///
/// RFC 3339 strings become UTC timestamps so they compare against timestamp columns.
pub fn json_to_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::from(None::<String>),
        JsonValue::Bool(b) => Value::from(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(f) = n.as_f64() {
                Value::from(f)
            } else {
                Value::from(n.to_string())
            }
        }
        JsonValue::String(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(timestamp) => Value::from(timestamp.with_timezone(&Utc)),
            Err(_) => Value::from(s.clone()),
        },
        JsonValue::Array(_) | JsonValue::Object(_) => Value::from(value.clone()),
    }
}
