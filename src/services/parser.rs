use crate::domain::models::Shape;
use std::io::BufRead;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum QueryError {
    #[error("missing query count")]
    MissingCount,
    #[error("line 1: invalid query count: {0:?}")]
    InvalidCount(String),
    #[error("expected {expected} queries, input ended after {found}")]
    UnexpectedEof { expected: usize, found: usize },
    #[error("line {line}: empty query")]
    EmptyQuery { line: usize },
    #[error("line {line}: {shape} takes {expected} argument(s), got {found}")]
    ArgumentCount {
        line: usize,
        shape: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: invalid number: {token:?}")]
    InvalidNumber { line: usize, token: String },
}

/// A negative count behaves like zero: no queries are read.
pub fn parse_count(raw: &str) -> Result<usize, QueryError> {
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|_| QueryError::InvalidCount(raw.trim().to_string()))?;
    Ok(usize::try_from(n).unwrap_or(0))
}

/// `Ok(None)` means the keyword is not a known shape and the query is dropped.
pub fn parse_query(line: usize, raw: &str) -> Result<Option<Shape>, QueryError> {
    let mut tokens = raw.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Err(QueryError::EmptyQuery { line });
    };
    let args: Vec<&str> = tokens.collect();

    match keyword {
        "rectangle" => {
            let [length, width] = numbers::<2>(line, "rectangle", &args)?;
            Ok(Some(Shape::Rectangle { length, width }))
        }
        "circle" => {
            let [radius] = numbers::<1>(line, "circle", &args)?;
            Ok(Some(Shape::Circle { radius }))
        }
        _ => Ok(None),
    }
}

fn numbers<const N: usize>(
    line: usize,
    shape: &'static str,
    args: &[&str],
) -> Result<[f64; N], QueryError> {
    if args.len() != N {
        return Err(QueryError::ArgumentCount {
            line,
            shape,
            expected: N,
            found: args.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(args) {
        *slot = token.parse().map_err(|_| QueryError::InvalidNumber {
            line,
            token: token.to_string(),
        })?;
    }
    Ok(out)
}

/// Reads the count line and then exactly that many query lines; anything after is ignored.
pub fn parse_queries(reader: impl BufRead) -> anyhow::Result<Vec<Shape>> {
    let mut lines = reader.lines();
    let count = match lines.next() {
        Some(first) => parse_count(&first?)?,
        None => return Err(QueryError::MissingCount.into()),
    };

    let mut shapes = Vec::new();
    for i in 0..count {
        let Some(raw) = lines.next() else {
            return Err(QueryError::UnexpectedEof {
                expected: count,
                found: i,
            }
            .into());
        };
        if let Some(shape) = parse_query(i + 2, &raw?)? {
            shapes.push(shape);
        }
    }
    Ok(shapes)
}
