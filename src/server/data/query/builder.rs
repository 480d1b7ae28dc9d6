use sea_orm::{Statement, Value};

use crate::server::data::query::dialect::Dialect;

/// Sort direction of one ORDER BY term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Quotes one SQL identifier, doubling embedded quotes.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Builder for a single-entity SELECT rooted at one table alias.
///
/// Conditions are AND-combined. Every bound value gets the next `$n` placeholder from
/// a per-query counter, so two filters on the same column never share a parameter and
/// the same input always renders the same SQL.
#[derive(Clone, Debug)]
pub struct SelectQuery {
    table: String,
    alias: String,
    id_column: String,
    dialect: Dialect,
    joins: Vec<String>,
    conditions: Vec<String>,
    values: Vec<Value>,
    order_by: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    param_counter: usize,
}

impl SelectQuery {
    /// Creates a query selecting every column of `table` under `alias`.
    ///
    /// # Arguments
    /// - `table` - Table name of the root entity
    /// - `alias` - Alias qualifying root columns
    /// - `id_column` - Primary key column, used for counting and tie-breaking
    /// - `dialect` - Backend specific SQL fragments
    pub fn new(
        table: impl Into<String>,
        alias: impl Into<String>,
        id_column: impl Into<String>,
        dialect: Dialect,
    ) -> Self {
        Self {
            table: table.into(),
            alias: alias.into(),
            id_column: id_column.into(),
            dialect,
            joins: Vec::new(),
            conditions: Vec::new(),
            values: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
            param_counter: 0,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Resolves a field reference to a quoted column expression.
    ///
    /// Plain fields are qualified with the root alias. Dotted paths such as
    /// `createdBy.email` refer to a joined alias and are quoted segment by segment.
    pub fn column(&self, field: &str) -> String {
        if field.contains('.') {
            field
                .split('.')
                .map(quote_ident)
                .collect::<Vec<_>>()
                .join(".")
        } else {
            format!("{}.{}", quote_ident(&self.alias), quote_ident(field))
        }
    }

    /// Binds a value and returns its placeholder.
    ///
    /// Placeholders are resolved by their number, not by their position in the SQL,
    /// so conditions may use them in any order and the same placeholder may appear
    /// more than once.
    pub fn bind(&mut self, value: impl Into<Value>) -> String {
        self.values.push(value.into());
        self.param_counter += 1;
        format!("${}", self.param_counter)
    }

    /// Adds a condition AND-combined with the existing ones.
    pub fn and_where(&mut self, condition: impl Into<String>) -> &mut Self {
        self.conditions.push(condition.into());
        self
    }

    /// Adds `LEFT JOIN table AS alias ON alias.foreign_column = root.local_column`.
    ///
    /// # Arguments
    /// - `table` - Joined table name
    /// - `alias` - Alias for the joined table, usable in dotted field paths
    /// - `local_column` - Column of the root alias holding the reference
    /// - `foreign_column` - Referenced column of the joined table
    pub fn left_join(
        &mut self,
        table: &str,
        alias: &str,
        local_column: &str,
        foreign_column: &str,
    ) -> &mut Self {
        let join = format!(
            "LEFT JOIN {} AS {} ON {}.{} = {}",
            quote_ident(table),
            quote_ident(alias),
            quote_ident(alias),
            quote_ident(foreign_column),
            self.column(local_column),
        );
        self.joins.push(join);
        self
    }

    /// Appends an ORDER BY term on a field reference.
    pub fn order_by(&mut self, field: &str, order: Order) -> &mut Self {
        let term = format!("{} {}", self.column(field), order.as_sql());
        self.order_by.push(term);
        self
    }

    /// Whether the root primary key already takes part in the ordering.
    pub fn is_ordered_by_id(&self) -> bool {
        let id = self.column(&self.id_column);
        self.order_by
            .iter()
            .any(|term| term.rsplit_once(' ').is_some_and(|(column, _)| column == id))
    }

    pub fn id_column(&self) -> &str {
        &self.id_column
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// Number of values bound so far.
    pub fn param_count(&self) -> usize {
        self.values.len()
    }

    /// Renders the SELECT with ordering, limit and offset.
    pub fn build_sql(&self) -> String {
        let mut sql = format!(
            "SELECT {}.* FROM {} AS {}",
            quote_ident(&self.alias),
            quote_ident(&self.table),
            quote_ident(&self.alias)
        );
        self.push_joins_and_conditions(&mut sql);

        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {}", offset));
        }

        sql
    }

    /// Renders a count of distinct root rows matching the same joins and conditions.
    pub fn build_count_sql(&self) -> String {
        let mut sql = format!(
            "SELECT COUNT(DISTINCT {}) AS total FROM {} AS {}",
            self.column(&self.id_column),
            quote_ident(&self.table),
            quote_ident(&self.alias)
        );
        self.push_joins_and_conditions(&mut sql);
        sql
    }

    /// Builds the executable SELECT statement.
    pub fn build(&self) -> Statement {
        let sql = self.build_sql();
        tracing::debug!(sql = %sql, params = self.values.len(), "Built select query");
        Statement::from_sql_and_values(self.backend(), sql, self.values.clone())
    }

    /// Builds the executable count statement.
    pub fn build_count(&self) -> Statement {
        let sql = self.build_count_sql();
        tracing::debug!(sql = %sql, params = self.values.len(), "Built count query");
        Statement::from_sql_and_values(self.backend(), sql, self.values.clone())
    }

    fn backend(&self) -> sea_orm::DbBackend {
        match self.dialect {
            Dialect::Postgres => sea_orm::DbBackend::Postgres,
            Dialect::Sqlite => sea_orm::DbBackend::Sqlite,
        }
    }

    fn push_joins_and_conditions(&self, sql: &mut String) {
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.conditions.join(" AND "));
        }
    }
}
