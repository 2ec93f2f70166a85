use thiserror::Error;

use crate::features::echo::dto::QueryParameter;

const SEGMENT_SEPARATOR: char = '&';
const PAIR_SEPARATOR: char = '=';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParseError {
    #[error("segment {index} ({segment:?}) must contain exactly one '='")]
    MalformedSegment { index: usize, segment: String },
}

impl QueryParseError {
    pub fn segment_index(&self) -> usize {
        match self {
            Self::MalformedSegment { index, .. } => *index,
        }
    }
}

// No percent-decoding. An empty query is one empty segment and is rejected.
pub fn parse_query(raw: &str) -> Result<Vec<QueryParameter>, QueryParseError> {
    raw.split(SEGMENT_SEPARATOR)
        .enumerate()
        .map(|(index, segment)| parse_segment(index, segment))
        .collect()
}

fn parse_segment(index: usize, segment: &str) -> Result<QueryParameter, QueryParseError> {
    let mut parts = segment.split(PAIR_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok(QueryParameter::new(key, value)),
        _ => Err(QueryParseError::MalformedSegment {
            index,
            segment: segment.to_string(),
        }),
    }
}
