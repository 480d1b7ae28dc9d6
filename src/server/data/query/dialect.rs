use sea_orm::DbBackend;

use crate::server::error::data::DataError;

/// Diacritic groups folded by accent-insensitive search on SQLite.
///
/// Each entry maps every listed lowercase character, and its uppercase form, to the
/// base letter.
const ACCENT_GROUPS: &[(char, &str)] = &[
    ('a', "àáâãäåāăąạảấầẩẫậắằẳẵặ"),
    ('c', "çćĉċč"),
    ('d', "đď"),
    ('e', "èéêëēĕėęěẹẻẽếềểễệ"),
    ('i', "ìíîïĩīĭįỉị"),
    ('n', "ñńņň"),
    ('o', "òóôõöøōŏőơọỏốồổỗộớờởỡợ"),
    ('s', "śŝşš"),
    ('u', "ùúûüũūŭůűųưụủứừửữự"),
    ('y', "ýÿŷỳỵỷỹ"),
    ('z', "źżž"),
];

/// Part of a timestamp compared by the `DAY`/`MONTH`/`YEAR` filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePart {
    Day,
    Month,
    Year,
}

/// SQL fragments that differ between the supported backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
}

impl Dialect {
    /// Resolves the dialect for a connection backend.
    ///
    /// # Returns
    /// - `Ok(Dialect)` - PostgreSQL or SQLite
    /// - `Err(DataError::UnsupportedBackend)` - Any other backend
    pub fn from_backend(backend: DbBackend) -> Result<Self, DataError> {
        match backend {
            DbBackend::Postgres => Ok(Self::Postgres),
            DbBackend::Sqlite => Ok(Self::Sqlite),
            other => Err(DataError::UnsupportedBackend(format!("{:?}", other))),
        }
    }

    /// Case and accent insensitive containment of `param` in `column`.
    pub fn contains_ignoring_accents(&self, column: &str, param: &str) -> String {
        match self {
            Self::Postgres => format!(
                "LOWER(unaccent({})) ILIKE LOWER(unaccent({}))",
                column, param
            ),
            Self::Sqlite => format!("{} GLOB {}", column, param),
        }
    }

    /// Builds the contains pattern bound for `contains_ignoring_accents`.
    ///
    /// PostgreSQL gets `%term%`. SQLite has no `unaccent` and only folds ASCII case,
    /// so the term is folded and every letter becomes a GLOB class of its case and
    /// accent variants, e.g. `jé` becomes `*[jJ][eEèÈéÉ...]*`.
    pub fn contains_pattern(&self, term: &str) -> String {
        match self {
            Self::Postgres => format!("%{}%", term),
            Self::Sqlite => format!("*{}*", glob_variants(term)),
        }
    }

    /// Integer date part of `column` compared for equality with `param`.
    pub fn date_part_eq(&self, part: DatePart, column: &str, param: &str) -> String {
        match self {
            Self::Postgres => {
                let field = match part {
                    DatePart::Day => "day",
                    DatePart::Month => "month",
                    DatePart::Year => "year",
                };
                format!("date_part('{}', {}) = {}", field, column, param)
            }
            Self::Sqlite => {
                let format = match part {
                    DatePart::Day => "%d",
                    DatePart::Month => "%m",
                    DatePart::Year => "%Y",
                };
                format!(
                    "CAST(strftime('{}', {}) AS INTEGER) = {}",
                    format, column, param
                )
            }
        }
    }
}

/// Lowercases `value` and strips the diacritics listed in `ACCENT_GROUPS`.
pub fn fold_accents(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .map(|c| {
            ACCENT_GROUPS
                .iter()
                .find(|(_, accented)| accented.contains(c))
                .map_or(c, |(base, _)| *base)
        })
        .collect()
}

/// GLOB pattern matching `term` ignoring case and the accents of `ACCENT_GROUPS`.
fn glob_variants(term: &str) -> String {
    let mut pattern = String::new();
    for c in fold_accents(term).chars() {
        let mut variants = vec![c];
        if let Some((_, accented)) = ACCENT_GROUPS.iter().find(|(base, _)| *base == c) {
            variants.extend(accented.chars());
        }
        let variants = variants
            .into_iter()
            .flat_map(|v| std::iter::once(v).chain(v.to_uppercase().filter(move |u| *u != v)))
            .collect::<String>();

        match c {
            '*' | '?' | '[' => {
                pattern.push('[');
                pattern.push(c);
                pattern.push(']');
            }
            _ if variants.chars().count() > 1 => {
                pattern.push('[');
                pattern.push_str(&variants);
                pattern.push(']');
            }
            _ => pattern.push(c),
        }
    }
    pattern
}
