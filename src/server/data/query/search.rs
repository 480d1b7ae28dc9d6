use crate::server::data::query::builder::SelectQuery;

/// Builds the OR-combined free-text search group.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchBuilder;

impl SearchBuilder {
    /// Narrows `query` to rows where any of `fields` contains `term`.
    ///
    /// Matching ignores case and diacritics. Plain fields are qualified with the root
    /// alias, dotted fields address joined aliases. The per-field predicates form one
    /// bracketed OR group that is AND-combined with the other conditions. A missing
    /// term or an empty field list leaves the query unchanged.
    pub fn apply<'q>(
        &self,
        query: &'q mut SelectQuery,
        term: Option<&str>,
        fields: &[String],
    ) -> &'q mut SelectQuery {
        let Some(term) = term.filter(|term| !term.is_empty()) else {
            return query;
        };
        if fields.is_empty() {
            return query;
        }

        let dialect = query.dialect();
        let pattern = dialect.contains_pattern(term);
        let predicates = fields
            .iter()
            .map(|field| {
                let column = query.column(field);
                let param = query.bind(pattern.clone());
                dialect.contains_ignoring_accents(&column, &param)
            })
            .collect::<Vec<_>>();

        query.and_where(format!("({})", predicates.join(" OR ")))
    }
}
