// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structure to SQL marshalling.
//!
//! The [`Marshaller`] walks a [`ToSql`] structure depth-first, in field
//! declaration order, and renders each present field according to its
//! [`Directive`]. Fragments are joined with single spaces; absent fields and
//! nested structures that render empty contribute nothing, not even a
//! separator.
//!
//! # Rendering Rules
//!
//! | Directive | Value | Output |
//! |-----------|-------|--------|
//! | `Static("CREATE")` | ignored | `CREATE` |
//! | `Keyword` named `OR REPLACE` | `true` / `false` | `OR REPLACE` / nothing |
//! | `Keyword` named `SET` | nested | `SET <nested>` or nothing if empty |
//! | `Parameter("COMMENT")`, single quotes | `"x"` | `COMMENT = 'x'` |
//! | `Parameter("ENABLED")`, single quotes | `true` | `ENABLED = true` |
//! | `Identifier` named `RENAME TO` | identifier | `RENAME TO "DB"."T"` |
//! | `List` named `COLUMNS` | `["a", "b"]` | `COLUMNS = (a, b)` |
//!
//! # Programmer Errors
//!
//! The marshaller never fails on caller data: that data has passed
//! validation. A directive paired with a value it cannot render (an
//! identifier directive over a boolean, a keyword flag with no keyword text)
//! is a bug in the option structure and panics with the structure and field
//! name.

use crate::{
    dialect::Dialect,
    directive::{
        Directive, IdentifierOptions, KeywordOptions, ListOptions, ParameterOptions, Quotes,
        Separator
    },
    presence::Presence,
    validate::{self, Validate, Violations},
    value::{SqlValue, Value}
};

/// How the fields of a structure combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    /// Every present field renders, in declaration order.
    #[default]
    Struct,
    /// Tagged union: the first non-static field that renders text, with the
    /// static fields around it. Extra branches are ignored with a warning;
    /// with no branch rendered the whole structure is empty.
    Union
}

/// An option structure that renders to SQL.
///
/// Usually derived with `#[derive(ToSql)]`. Hand-written implementations
/// list their fields in the order they must appear in the statement:
///
/// ```rust
/// use ddlkit_core::{
///     AccountObjectIdentifier, Directive, Field, ToSql, to_sql
/// };
///
/// struct DropWarehouse {
///     if_exists: Option<bool>,
///     name:      AccountObjectIdentifier
/// }
///
/// impl ToSql for DropWarehouse {
///     fn name(&self) -> &'static str {
///         "DropWarehouse"
///     }
///
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![
///             Field::fixed("drop", "DROP WAREHOUSE"),
///             Field::new("if_exists", Directive::keyword("IF EXISTS"), &self.if_exists),
///             Field::new("name", Directive::identifier(), &self.name),
///         ]
///     }
/// }
///
/// let opts = DropWarehouse {
///     if_exists: Some(true),
///     name:      AccountObjectIdentifier::new("WH")
/// };
/// assert_eq!(to_sql(&opts), "DROP WAREHOUSE IF EXISTS \"WH\"");
/// ```
pub trait ToSql {
    /// Structure name used in diagnostics and logs.
    fn name(&self) -> &'static str;

    /// How fields combine. Defaults to [`Shape::Struct`].
    fn shape(&self) -> Shape {
        Shape::Struct
    }

    /// Fields in declaration order.
    ///
    /// This order is the statement's token order; the marshaller never
    /// reorders it.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One field of an option structure, ready to render.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    /// Rust-level field name.
    pub name:      &'static str,
    /// Rendering instruction.
    pub directive: Directive,
    /// Borrowed value, `None` when absent.
    pub value:     Option<Value<'a>>
}

impl<'a> Field<'a> {
    /// Field whose value is subject to the presence rule.
    pub fn new<V>(name: &'static str, directive: Directive, value: &'a V) -> Self
    where
        V: SqlValue + Presence + ?Sized
    {
        let value = if value.is_present() {
            value.sql_value()
        } else {
            None
        };
        Self {
            name,
            directive,
            value
        }
    }

    /// Static field emitting `text` unconditionally.
    #[must_use]
    pub const fn fixed(name: &'static str, text: &'static str) -> Self {
        Self {
            name,
            directive: Directive::Static(text),
            value: None
        }
    }

    /// Whether the field will contribute to the output.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self.directive, Directive::Static(_)) || self.value.is_some()
    }
}

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point.
    Float(f64),
    /// Text.
    Text(String)
}

/// SQL text with placeholders and the values bound to them, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bound {
    /// Statement text.
    pub sql:    String,
    /// Parameter values, one per placeholder.
    pub params: Vec<Param>
}

/// Renders [`ToSql`] structures.
///
/// # Example
///
/// ```rust,ignore
/// let marshaller = Marshaller::new(Dialect::Postgres).placeholders();
/// let bound = marshaller.bind(&opts);
/// client.execute(&bound.sql, &bound.params).await?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Marshaller {
    dialect:      Dialect,
    placeholders: bool
}

impl Marshaller {
    /// Marshaller for `dialect` that inlines literals.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            placeholders: false
        }
    }

    /// Bind parameter values through placeholders instead of inlining them.
    ///
    /// Only scalar values of [`Directive::Parameter`] fields are bound;
    /// keywords, identifiers and static text are structural.
    #[must_use]
    pub const fn placeholders(mut self) -> Self {
        self.placeholders = true;
        self
    }

    /// Target dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Render `statement` to SQL text.
    ///
    /// With [`placeholders`](Self::placeholders) enabled the text contains
    /// placeholders and the values are discarded; use [`bind`](Self::bind)
    /// to keep them.
    pub fn to_sql<T: ToSql + ?Sized>(&self, statement: &T) -> String {
        self.bind(statement).sql
    }

    /// Render `statement` and collect bound parameters.
    pub fn bind<T: ToSql + ?Sized>(&self, statement: &T) -> Bound {
        let mut renderer = Renderer {
            marshaller: self,
            params:     Vec::new()
        };
        let sql = renderer.structure(statement);
        tracing::trace!(
            target: "ddlkit::marshal",
            statement = statement.name(),
            dialect = %self.dialect,
            params = renderer.params.len(),
            sql = %sql,
            "rendered statement"
        );
        Bound {
            sql,
            params: renderer.params
        }
    }

    /// Validate then render.
    ///
    /// # Errors
    ///
    /// Returns every violation when `options` is `None` or fails
    /// validation.
    pub fn build<T: ToSql + Validate>(&self, options: Option<&T>) -> Result<String, Violations> {
        let options = validate::validate_options(options)?;
        Ok(self.to_sql(options))
    }

    /// Validate then render with bound parameters.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_bound<T: ToSql + Validate>(
        &self,
        options: Option<&T>
    ) -> Result<Bound, Violations> {
        let options = validate::validate_options(options)?;
        Ok(self.bind(options))
    }
}

/// Location of the field being rendered, for programmer-error messages.
#[derive(Clone, Copy)]
struct Site {
    owner: &'static str,
    field: &'static str
}

impl Site {
    fn misuse(&self, directive: &str, value: &Value<'_>) -> ! {
        panic!(
            "{}.{}: {} directive cannot render a {} value",
            self.owner,
            self.field,
            directive,
            value.shape()
        )
    }
}

struct Renderer<'m> {
    marshaller: &'m Marshaller,
    params:     Vec<Param>
}

impl Renderer<'_> {
    fn structure<T: ToSql + ?Sized>(&mut self, statement: &T) -> String {
        let owner = statement.name();
        let fields = statement.fields();
        let mut fragments = Vec::with_capacity(fields.len());

        match statement.shape() {
            Shape::Struct => {
                for field in &fields {
                    fragments.push(self.field(owner, field));
                }
            }
            Shape::Union => {
                let mut chosen: Option<&'static str> = None;
                for field in &fields {
                    if matches!(field.directive, Directive::Static(_)) {
                        fragments.push(self.field(owner, field));
                        continue;
                    }
                    if field.value.is_none() {
                        continue;
                    }

                    let mark = self.params.len();
                    let rendered = self.field(owner, field);
                    if rendered.trim().is_empty() {
                        self.params.truncate(mark);
                        continue;
                    }
                    match chosen {
                        Some(first) => {
                            self.params.truncate(mark);
                            tracing::warn!(
                                target: "ddlkit::marshal",
                                structure = owner,
                                rendered = first,
                                ignored = field.name,
                                "more than one union branch is set, rendering the first"
                            );
                        }
                        None => {
                            chosen = Some(field.name);
                            fragments.push(rendered);
                        }
                    }
                }
                // Static text alone would dangle.
                if chosen.is_none() {
                    return String::new();
                }
            }
        }

        join_fragments(&fragments)
    }

    fn field(&mut self, owner: &'static str, field: &Field<'_>) -> String {
        let site = Site {
            owner,
            field: field.name
        };
        match (field.directive, &field.value) {
            (Directive::Static(text), _) => text.to_string(),
            (_, None) => String::new(),
            (Directive::Keyword(options), Some(value)) => self.keyword(site, &options, value),
            (Directive::Parameter(options), Some(value)) => self.parameter(&options, value),
            (Directive::Identifier(options), Some(value)) => {
                self.identifier(site, &options, value)
            }
            (Directive::List(options), Some(value)) => self.list(&options, value)
        }
    }

    fn keyword(&mut self, site: Site, options: &KeywordOptions, value: &Value<'_>) -> String {
        let body = match value {
            Value::Bool(false) => return String::new(),
            Value::Bool(true) => match options.name {
                Some(name) => return name.to_string(),
                None => site.misuse("unnamed keyword", value)
            },
            other => self.value(other, options.quotes, false).trim().to_string()
        };
        if body.is_empty() {
            return String::new();
        }

        let body = if options.parentheses {
            format!("({body})")
        } else {
            body
        };
        match options.name {
            Some(name) => format!("{name} {body}"),
            None => body
        }
    }

    fn parameter(&mut self, options: &ParameterOptions, value: &Value<'_>) -> String {
        let rendered = self
            .value(value, options.quotes, self.marshaller.placeholders)
            .trim()
            .to_string();
        if rendered.is_empty() {
            return String::new();
        }

        let rendered = if options.parentheses {
            format!("({rendered})")
        } else {
            rendered
        };
        options.equals.join(options.name, &rendered)
    }

    fn identifier(&mut self, site: Site, options: &IdentifierOptions, value: &Value<'_>) -> String {
        let dialect = self.marshaller.dialect;
        let rendered = match value {
            Value::Identifier(id) => id.qualified_name(dialect),
            Value::Text(text) => dialect.quote_identifier(text),
            other => site.misuse("identifier", other)
        };
        match options.name {
            Some(name) => options.equals.join(name, &rendered),
            None => rendered
        }
    }

    fn list(&mut self, options: &ListOptions, value: &Value<'_>) -> String {
        let rendered: Vec<String> = match value {
            Value::Sequence(items) => items
                .iter()
                .map(|item| self.list_item(item, options.quotes))
                .collect(),
            single => vec![self.list_item(single, options.quotes)]
        };
        let items: Vec<&str> = rendered
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .collect();
        if items.is_empty() {
            return String::new();
        }

        let joined = join_list(&items, options.separator, options.no_final_separator);
        let body = if options.parentheses {
            format!("({joined})")
        } else {
            joined
        };
        match options.name {
            Some(name) => options.equals.join(name, &body),
            None => body
        }
    }

    fn list_item(&mut self, item: &Value<'_>, quotes: Quotes) -> String {
        match item {
            Value::Sequence(_) => {
                let inner = self.value(item, quotes, false);
                if inner.is_empty() {
                    inner
                } else {
                    format!("({inner})")
                }
            }
            other => self.value(other, quotes, false)
        }
    }

    /// Render a value without any name or operator.
    fn value(&mut self, value: &Value<'_>, quotes: Quotes, bind: bool) -> String {
        match value {
            Value::Bool(v) if bind => self.push(Param::Bool(*v)),
            Value::Int(v) if bind => self.push(Param::Int(*v)),
            Value::UInt(v) if bind => self.push(Param::UInt(*v)),
            Value::Float(v) if bind => self.push(Param::Float(*v)),
            Value::Text(v) if bind => self.push(Param::Text(v.to_string())),
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::UInt(v) => v.to_string(),
            Value::Float(v) => float_literal(*v),
            Value::Text(v) => quotes.apply(v),
            Value::Identifier(id) => id.qualified_name(self.marshaller.dialect),
            Value::Nested(nested) => self.structure(*nested),
            Value::Sequence(items) => {
                let rendered: Vec<String> = items
                    .iter()
                    .map(|item| self.value(item, quotes, bind))
                    .collect();
                let items: Vec<&str> = rendered
                    .iter()
                    .map(String::as_str)
                    .filter(|item| !item.is_empty())
                    .collect();
                items.join(Separator::Comma.as_str())
            }
        }
    }

    fn push(&mut self, param: Param) -> String {
        self.params.push(param);
        self.marshaller.dialect.placeholder(self.params.len())
    }
}

/// Finite floats render bare; NaN and infinities as the quoted spellings
/// Snowflake and PostgreSQL both cast to float.
fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "'NaN'".to_string()
    } else if value == f64::INFINITY {
        "'inf'".to_string()
    } else if value == f64::NEG_INFINITY {
        "'-inf'".to_string()
    } else {
        value.to_string()
    }
}

/// Join non-empty fragments with single spaces.
fn join_fragments(fragments: &[String]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_list(items: &[&str], separator: Separator, no_final_separator: bool) -> String {
    match items.split_last() {
        Some((last, rest)) if no_final_separator && !rest.is_empty() => {
            format!("{} {}", rest.join(separator.as_str()), last)
        }
        _ => items.join(separator.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::AccountObjectIdentifier;

    #[derive(Default)]
    struct SetClause {
        comment:           Option<String>,
        max_cluster_count: Option<u32>
    }

    impl ToSql for SetClause {
        fn name(&self) -> &'static str {
            "SetClause"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new(
                    "comment",
                    Directive::Parameter(ParameterOptions::new("COMMENT").single_quotes()),
                    &self.comment
                ),
                Field::new(
                    "max_cluster_count",
                    Directive::parameter("MAX_CLUSTER_COUNT"),
                    &self.max_cluster_count
                ),
            ]
        }
    }

    impl Presence for SetClause {
        fn is_present(&self) -> bool {
            true
        }
    }

    impl SqlValue for SetClause {
        fn sql_value(&self) -> Option<Value<'_>> {
            Some(Value::Nested(self))
        }
    }

    #[derive(Default)]
    struct AlterWarehouse {
        if_exists: Option<bool>,
        name:      AccountObjectIdentifier,
        rename_to: Option<AccountObjectIdentifier>,
        set:       Option<SetClause>,
        tags:      Vec<String>
    }

    impl ToSql for AlterWarehouse {
        fn name(&self) -> &'static str {
            "AlterWarehouse"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::fixed("alter", "ALTER WAREHOUSE"),
                Field::new("if_exists", Directive::keyword("IF EXISTS"), &self.if_exists),
                Field::new("name", Directive::identifier(), &self.name),
                Field::new(
                    "rename_to",
                    Directive::Identifier(IdentifierOptions::named("RENAME TO")),
                    &self.rename_to
                ),
                Field::new("set", Directive::keyword("SET"), &self.set),
                Field::new(
                    "tags",
                    Directive::List(ListOptions::named("TAGS").single_quotes()),
                    &self.tags
                ),
            ]
        }
    }

    fn warehouse() -> AlterWarehouse {
        AlterWarehouse {
            name: AccountObjectIdentifier::new("WH"),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_statement() {
        assert_eq!(to_sql(&warehouse()), "ALTER WAREHOUSE \"WH\"");
    }

    fn to_sql<T: ToSql>(statement: &T) -> String {
        Marshaller::default().to_sql(statement)
    }

    #[test]
    fn flag_and_identifier_prefix() {
        let opts = AlterWarehouse {
            if_exists: Some(true),
            rename_to: Some(AccountObjectIdentifier::new("WH2")),
            ..warehouse()
        };
        assert_eq!(
            to_sql(&opts),
            "ALTER WAREHOUSE IF EXISTS \"WH\" RENAME TO \"WH2\""
        );
    }

    #[test]
    fn false_flag_renders_nothing() {
        let opts = AlterWarehouse {
            if_exists: Some(false),
            ..warehouse()
        };
        assert_eq!(to_sql(&opts), "ALTER WAREHOUSE \"WH\"");
    }

    #[test]
    fn nested_clause_with_keyword_prefix() {
        let opts = AlterWarehouse {
            set: Some(SetClause {
                comment:           Some("it's mine".to_string()),
                max_cluster_count: Some(3)
            }),
            ..warehouse()
        };
        assert_eq!(
            to_sql(&opts),
            "ALTER WAREHOUSE \"WH\" SET COMMENT = 'it''s mine' MAX_CLUSTER_COUNT = 3"
        );
    }

    #[test]
    fn empty_nested_clause_leaves_no_keyword() {
        let opts = AlterWarehouse {
            set: Some(SetClause::default()),
            ..warehouse()
        };
        assert_eq!(to_sql(&opts), "ALTER WAREHOUSE \"WH\"");
    }

    #[test]
    fn quoted_list() {
        let opts = AlterWarehouse {
            tags: vec!["a".to_string(), "b".to_string()],
            ..warehouse()
        };
        assert_eq!(to_sql(&opts), "ALTER WAREHOUSE \"WH\" TAGS = ('a', 'b')");
    }

    #[test]
    fn rendering_is_idempotent() {
        let opts = AlterWarehouse {
            if_exists: Some(true),
            set: Some(SetClause {
                comment:           Some("x".to_string()),
                max_cluster_count: None
            }),
            tags: vec!["t".to_string()],
            ..warehouse()
        };
        assert_eq!(to_sql(&opts), to_sql(&opts));
    }

    #[test]
    fn placeholders_bind_parameter_scalars_only() {
        let opts = AlterWarehouse {
            if_exists: Some(true),
            set: Some(SetClause {
                comment:           Some("hi".to_string()),
                max_cluster_count: Some(2)
            }),
            ..warehouse()
        };
        let bound = Marshaller::new(Dialect::Postgres).placeholders().bind(&opts);
        assert_eq!(
            bound.sql,
            "ALTER WAREHOUSE IF EXISTS \"WH\" SET COMMENT = $1 MAX_CLUSTER_COUNT = $2"
        );
        assert_eq!(
            bound.params,
            vec![Param::Text("hi".to_string()), Param::UInt(2)]
        );
    }

    #[test]
    fn mysql_identifier_quoting() {
        let sql = Marshaller::new(Dialect::MySql).to_sql(&warehouse());
        assert_eq!(sql, "ALTER WAREHOUSE `WH`");
    }

    struct Location {
        s3:  Option<String>,
        gcs: Option<String>
    }

    impl ToSql for Location {
        fn name(&self) -> &'static str {
            "Location"
        }

        fn shape(&self) -> Shape {
            Shape::Union
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new(
                    "s3",
                    Directive::Parameter(ParameterOptions::new("S3_URL").single_quotes()),
                    &self.s3
                ),
                Field::new(
                    "gcs",
                    Directive::Parameter(ParameterOptions::new("GCS_URL").single_quotes()),
                    &self.gcs
                ),
            ]
        }
    }

    #[test]
    fn union_renders_only_first_present_branch() {
        let both = Location {
            s3:  Some("s3://a".to_string()),
            gcs: Some("gcs://b".to_string())
        };
        assert_eq!(to_sql(&both), "S3_URL = 's3://a'");

        let second = Location {
            s3:  None,
            gcs: Some("gcs://b".to_string())
        };
        assert_eq!(to_sql(&second), "GCS_URL = 'gcs://b'");
    }

    #[test]
    fn ignored_union_branch_binds_nothing() {
        let both = Location {
            s3:  Some("s3://a".to_string()),
            gcs: Some("gcs://b".to_string())
        };
        let bound = Marshaller::new(Dialect::Postgres).placeholders().bind(&both);
        assert_eq!(bound.sql, "S3_URL = $1");
        assert_eq!(bound.params, vec![Param::Text("s3://a".to_string())]);
    }

    struct AlterTable {
        cluster_by: Option<String>,
        ratio:      Option<f64>,
        label:      Option<String>
    }

    impl ToSql for AlterTable {
        fn name(&self) -> &'static str {
            "AlterTable"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::fixed("alter", "ALTER TABLE"),
                Field::new(
                    "cluster_by",
                    Directive::Parameter(ParameterOptions::new("CLUSTER_BY")),
                    &self.cluster_by
                ),
                Field::new(
                    "ratio",
                    Directive::Parameter(ParameterOptions::new("RATIO")),
                    &self.ratio
                ),
                Field::new("label", Directive::Keyword(KeywordOptions::default()), &self.label),
            ]
        }
    }

    #[test]
    fn bare_text_is_trimmed() {
        let opts = AlterTable {
            cluster_by: Some(" x ".to_string()),
            ratio:      Some(0.5),
            label:      Some("  tagged".to_string())
        };
        assert_eq!(to_sql(&opts), "ALTER TABLE CLUSTER_BY = x RATIO = 0.5 tagged");
    }

    #[test]
    fn blank_bare_text_renders_nothing() {
        let opts = AlterTable {
            cluster_by: Some("   ".to_string()),
            ratio:      None,
            label:      None
        };
        assert_eq!(to_sql(&opts), "ALTER TABLE");
    }

    #[test]
    fn non_finite_floats_are_quoted() {
        let render = |ratio: f64| {
            to_sql(&AlterTable {
                cluster_by: None,
                ratio: Some(ratio),
                label: None
            })
        };
        assert_eq!(render(f64::NAN), "ALTER TABLE RATIO = 'NaN'");
        assert_eq!(render(f64::INFINITY), "ALTER TABLE RATIO = 'inf'");
        assert_eq!(render(f64::NEG_INFINITY), "ALTER TABLE RATIO = '-inf'");
    }

    struct Broken {
        flag: bool
    }

    impl ToSql for Broken {
        fn name(&self) -> &'static str {
            "Broken"
        }

        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::new("flag", Directive::identifier(), &self.flag)]
        }
    }

    #[test]
    #[should_panic(expected = "Broken.flag: identifier directive cannot render a bool value")]
    fn identifier_over_bool_is_a_programmer_error() {
        to_sql(&Broken {
            flag: true
        });
    }

    #[test]
    fn join_list_without_final_separator() {
        assert_eq!(join_list(&["a", "b", "c"], Separator::Comma, true), "a, b c");
        assert_eq!(join_list(&["a"], Separator::Comma, true), "a");
        assert_eq!(join_list(&["a", "b"], Separator::Space, false), "a b");
    }

    #[test]
    fn join_fragments_drops_blank_fragments() {
        let fragments = vec![
            "CREATE".to_string(),
            String::new(),
            "  ".to_string(),
            " TABLE ".to_string(),
        ];
        assert_eq!(join_fragments(&fragments), "CREATE TABLE");
    }

    #[test]
    fn field_presence() {
        assert!(Field::fixed("create", "CREATE").is_present());
        assert!(!Field::new("x", Directive::parameter("X"), &None::<i32>).is_present());
        assert!(Field::new("x", Directive::parameter("X"), &Some(1)).is_present());
    }
}
