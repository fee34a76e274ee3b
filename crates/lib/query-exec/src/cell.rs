//! Typed cell values and their text rendering.

use tokio_postgres::types::Type;

/// How a column's values are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `bool`.
    Bool,

    /// `int2`.
    Int2,

    /// `int4`.
    Int4,

    /// `int8`.
    Int8,

    /// `float4`.
    Float4,

    /// `float8`.
    Float8,

    /// `numeric`.
    Numeric,

    /// `uuid`.
    Uuid,

    /// `timestamp`.
    Timestamp,

    /// `timestamptz`.
    TimestampTz,

    /// `json` and `jsonb`.
    Json,

    /// Anything else, read as text.
    Text,
}

impl CellKind {
    /// Pick the decoding for a column type.
    pub fn of(ty: &Type) -> Self {
        match ty {
            &Type::BOOL => Self::Bool,
            &Type::INT2 => Self::Int2,
            &Type::INT4 => Self::Int4,
            &Type::INT8 => Self::Int8,
            &Type::FLOAT4 => Self::Float4,
            &Type::FLOAT8 => Self::Float8,
            &Type::NUMERIC => Self::Numeric,
            &Type::UUID => Self::Uuid,
            &Type::TIMESTAMP => Self::Timestamp,
            &Type::TIMESTAMPTZ => Self::TimestampTz,
            &Type::JSON | &Type::JSONB => Self::Json,
            _ => Self::Text,
        }
    }
}

/// A decoded cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// SQL `NULL`.
    Null,

    /// Boolean.
    Bool(bool),

    /// Any integer width.
    Int(i64),

    /// Any float width.
    Float(f64),

    /// Arbitrary-precision decimal.
    Numeric(rust_decimal::Decimal),

    /// UUID.
    Uuid(uuid::Uuid),

    /// Timestamp without time zone.
    Timestamp(time::PrimitiveDateTime),

    /// Timestamp with time zone.
    TimestampTz(time::OffsetDateTime),

    /// JSON document.
    Json(serde_json::Value),

    /// Text.
    Text(String),
}

impl Cell {
    /// Decode the cell at `idx` of a row.
    pub fn decode(
        row: &tokio_postgres::Row,
        idx: usize,
        kind: CellKind,
    ) -> Result<Self, tokio_postgres::Error> {
        fn get<'a, T, F>(
            row: &'a tokio_postgres::Row,
            idx: usize,
            wrap: F,
        ) -> Result<Cell, tokio_postgres::Error>
        where
            T: tokio_postgres::types::FromSql<'a>,
            F: FnOnce(T) -> Cell,
        {
            Ok(row.try_get::<_, Option<T>>(idx)?.map_or(Cell::Null, wrap))
        }

        match kind {
            CellKind::Bool => get(row, idx, Self::Bool),
            CellKind::Int2 => get(row, idx, |v: i16| Self::Int(v.into())),
            CellKind::Int4 => get(row, idx, |v: i32| Self::Int(v.into())),
            CellKind::Int8 => get(row, idx, Self::Int),
            CellKind::Float4 => get(row, idx, |v: f32| Self::Float(v.into())),
            CellKind::Float8 => get(row, idx, Self::Float),
            CellKind::Numeric => get(row, idx, Self::Numeric),
            CellKind::Uuid => get(row, idx, Self::Uuid),
            CellKind::Timestamp => get(row, idx, Self::Timestamp),
            CellKind::TimestampTz => get(row, idx, Self::TimestampTz),
            CellKind::Json => get(row, idx, Self::Json),
            CellKind::Text => get(row, idx, Self::Text),
        }
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Numeric(v) => write!(f, "{v}"),
            Self::Uuid(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::TimestampTz(v) => write!(f, "{v}"),
            Self::Json(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_column_types() {
        assert_eq!(CellKind::of(&Type::BOOL), CellKind::Bool);
        assert_eq!(CellKind::of(&Type::INT2), CellKind::Int2);
        assert_eq!(CellKind::of(&Type::INT8), CellKind::Int8);
        assert_eq!(CellKind::of(&Type::FLOAT4), CellKind::Float4);
        assert_eq!(CellKind::of(&Type::NUMERIC), CellKind::Numeric);
        assert_eq!(CellKind::of(&Type::TIMESTAMP), CellKind::Timestamp);
        assert_eq!(CellKind::of(&Type::TIMESTAMPTZ), CellKind::TimestampTz);
        assert_eq!(CellKind::of(&Type::JSON), CellKind::Json);
        assert_eq!(CellKind::of(&Type::JSONB), CellKind::Json);
        assert_eq!(CellKind::of(&Type::VARCHAR), CellKind::Text);
        assert_eq!(CellKind::of(&Type::TEXT), CellKind::Text);
    }

    #[test]
    fn null_renders_as_keyword() {
        assert_eq!(Cell::Null.to_string(), "NULL");
    }

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(Cell::Bool(true).to_string(), "true");
        assert_eq!(Cell::Int(-42).to_string(), "-42");
        assert_eq!(Cell::Float(1.5).to_string(), "1.5");
        assert_eq!(Cell::Float(f64::from(0.25f32)).to_string(), "0.25");
        assert_eq!(Cell::Text("héllo".to_owned()).to_string(), "héllo");
    }

    #[test]
    fn numeric_keeps_scale() {
        let value: rust_decimal::Decimal = "12.340".parse().unwrap();
        assert_eq!(Cell::Numeric(value).to_string(), "12.340");
    }

    #[test]
    fn uuid_renders_hyphenated() {
        let value = uuid::Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8);
        assert_eq!(
            Cell::Uuid(value).to_string(),
            "67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
    }

    #[test]
    fn json_renders_compact() {
        let value = serde_json::json!({ "a": [1, 2] });
        assert_eq!(Cell::Json(value).to_string(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn timestamps_render_with_offset_only_when_zoned() {
        let naive = time::macros::datetime!(2024-01-02 03:04:05);
        let zoned = naive.assume_utc();

        let naive_text = Cell::Timestamp(naive).to_string();
        let zoned_text = Cell::TimestampTz(zoned).to_string();

        assert!(naive_text.starts_with("2024-01-02 "), "{naive_text}");
        assert!(zoned_text.starts_with(&naive_text), "{zoned_text}");
        assert!(zoned_text.ends_with("+00:00:00"), "{zoned_text}");
    }
}
