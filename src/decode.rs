//! Wire-format result decoding.
//!
//! Inverse of [`Column::to_field_data`](crate::Column::to_field_data): maps
//! generic field data returned by the service back into the matching
//! [`Column`] variant. An unrecognized wire kind is a decode failure, never
//! a silently dropped field, and every decoded column is checked against the
//! row count declared by the response envelope.

use std::ops::Range;

use crate::client::SearchResult;
use crate::column::Column;
use crate::error::{DecodeError, Error, Result};
use crate::proto::vectis as proto;
use crate::proto::vectis::{field_data, scalar_field, vector_field, DataType, ErrorCode};
use crate::schema::FieldType;

/// Reconstruct a [`Column`] from wire field data.
///
/// `expected_rows` is the row count declared by the response envelope, when
/// the envelope declares one.
pub fn column_from_field_data(fd: proto::FieldData, expected_rows: Option<usize>) -> Result<Column> {
    let declared = fd.data_type;
    let field_type = DataType::try_from(declared)
        .ok()
        .and_then(FieldType::from_proto)
        .ok_or(DecodeError::UnexpectedKind {
            field: fd.field_name.clone(),
            declared,
        })?;
    let name = fd.field_name;

    let unexpected = || DecodeError::UnexpectedKind {
        field: name.clone(),
        declared,
    };

    let field = fd
        .field
        .ok_or_else(|| DecodeError::MissingPayload(name.clone()))?;

    let column = match (field_type, field) {
        (FieldType::Bool, field_data::Field::Scalars(s)) => match s.data {
            Some(scalar_field::Data::BoolData(arr)) => Column::bool(name.clone(), arr.data),
            _ => return Err(unexpected().into()),
        },
        (FieldType::Int8, field_data::Field::Scalars(s)) => match s.data {
            Some(scalar_field::Data::IntData(arr)) => {
                Column::int8(name.clone(), narrow::<i8>(&arr.data, FieldType::Int8)?)
            }
            _ => return Err(unexpected().into()),
        },
        (FieldType::Int16, field_data::Field::Scalars(s)) => match s.data {
            Some(scalar_field::Data::IntData(arr)) => {
                Column::int16(name.clone(), narrow::<i16>(&arr.data, FieldType::Int16)?)
            }
            _ => return Err(unexpected().into()),
        },
        (FieldType::Int32, field_data::Field::Scalars(s)) => match s.data {
            Some(scalar_field::Data::IntData(arr)) => Column::int32(name.clone(), arr.data),
            _ => return Err(unexpected().into()),
        },
        (FieldType::Int64, field_data::Field::Scalars(s)) => match s.data {
            Some(scalar_field::Data::LongData(arr)) => Column::int64(name.clone(), arr.data),
            _ => return Err(unexpected().into()),
        },
        (FieldType::Float, field_data::Field::Scalars(s)) => match s.data {
            Some(scalar_field::Data::FloatData(arr)) => Column::float(name.clone(), arr.data),
            _ => return Err(unexpected().into()),
        },
        (FieldType::Double, field_data::Field::Scalars(s)) => match s.data {
            Some(scalar_field::Data::DoubleData(arr)) => Column::double(name.clone(), arr.data),
            _ => return Err(unexpected().into()),
        },
        (FieldType::String, field_data::Field::Scalars(s)) => match s.data {
            Some(scalar_field::Data::StringData(arr)) => Column::string(name.clone(), arr.data),
            _ => return Err(unexpected().into()),
        },
        (FieldType::FloatVector, field_data::Field::Vectors(v)) => {
            let dim = vector_dim(v.dim, 1)?;
            match v.data {
                Some(vector_field::Data::FloatVector(arr)) => {
                    let rows = unflatten(arr.data, dim)?;
                    Column::float_vector(name.clone(), dim, rows)?
                }
                _ => return Err(unexpected().into()),
            }
        }
        (FieldType::BinaryVector, field_data::Field::Vectors(v)) => {
            let dim = vector_dim(v.dim, 8)?;
            match v.data {
                Some(vector_field::Data::BinaryVector(bytes)) => {
                    let rows = unflatten(bytes, dim / 8)?;
                    Column::binary_vector(name.clone(), dim, rows)?
                }
                _ => return Err(unexpected().into()),
            }
        }
        (_, _) => return Err(unexpected().into()),
    };

    if let Some(expected) = expected_rows {
        if column.len() != expected {
            return Err(DecodeError::RowCountMismatch {
                field: name,
                expected,
                actual: column.len(),
            }
            .into());
        }
    }
    Ok(column)
}

fn narrow<T: TryFrom<i32>>(values: &[i32], target: FieldType) -> Result<Vec<T>> {
    values
        .iter()
        .map(|&v| {
            T::try_from(v).map_err(|_| {
                Error::from(DecodeError::IntegerOverflow {
                    value: i64::from(v),
                    target,
                })
            })
        })
        .collect()
}

fn vector_dim(dim: i64, multiple: usize) -> Result<usize> {
    let dim = usize::try_from(dim).unwrap_or(0);
    if dim == 0 || dim % multiple != 0 {
        return Err(DecodeError::DimensionMismatch { len: 0, dim }.into());
    }
    Ok(dim)
}

fn unflatten<T>(flat: Vec<T>, width: usize) -> Result<Vec<Vec<T>>> {
    if flat.len() % width != 0 {
        return Err(DecodeError::DimensionMismatch {
            len: flat.len(),
            dim: width,
        }
        .into());
    }
    let mut rows = Vec::with_capacity(flat.len() / width);
    let mut row = Vec::with_capacity(width);
    for value in flat {
        row.push(value);
        if row.len() == width {
            rows.push(std::mem::replace(&mut row, Vec::with_capacity(width)));
        }
    }
    Ok(rows)
}

/// Copy out the rows `range` of a column into a new column of the same
/// variant and name.
fn slice_column(column: &Column, range: Range<usize>) -> Result<Column> {
    let name = column.name().to_string();
    Ok(match column {
        Column::Bool(c) => Column::bool(name, c.values()[range].to_vec()),
        Column::Int8(c) => Column::int8(name, c.values()[range].to_vec()),
        Column::Int16(c) => Column::int16(name, c.values()[range].to_vec()),
        Column::Int32(c) => Column::int32(name, c.values()[range].to_vec()),
        Column::Int64(c) => Column::int64(name, c.values()[range].to_vec()),
        Column::Float(c) => Column::float(name, c.values()[range].to_vec()),
        Column::Double(c) => Column::double(name, c.values()[range].to_vec()),
        Column::String(c) => Column::string(name, c.values()[range].to_vec()),
        Column::FloatVector(c) => Column::float_vector(name, c.dim(), c.rows()[range].to_vec())?,
        Column::BinaryVector(c) => Column::binary_vector(name, c.dim(), c.rows()[range].to_vec())?,
    })
}

/// Decode flat search results into one [`SearchResult`] per query vector,
/// preserving query order. Per-query failures reported by the service land
/// in [`SearchResult::error`]; a malformed envelope fails the whole decode.
pub(crate) fn search_results_from_proto(data: proto::SearchResultData) -> Result<Vec<SearchResult>> {
    let num_queries = usize::try_from(data.num_queries).unwrap_or(0);
    if data.topks.len() != num_queries {
        return Err(DecodeError::RowCountMismatch {
            field: "topks".to_string(),
            expected: num_queries,
            actual: data.topks.len(),
        }
        .into());
    }
    if !data.statuses.is_empty() && data.statuses.len() != num_queries {
        return Err(DecodeError::RowCountMismatch {
            field: "statuses".to_string(),
            expected: num_queries,
            actual: data.statuses.len(),
        }
        .into());
    }

    let total_rows: usize = data.topks.iter().map(|&k| usize::try_from(k).unwrap_or(0)).sum();
    if data.scores.len() != total_rows {
        return Err(DecodeError::RowCountMismatch {
            field: "scores".to_string(),
            expected: total_rows,
            actual: data.scores.len(),
        }
        .into());
    }

    let ids = match data.ids {
        Some(fd) => Some(column_from_field_data(fd, Some(total_rows))?),
        None if total_rows == 0 => None,
        None => return Err(DecodeError::MissingField("ids".to_string()).into()),
    };
    let fields = data
        .fields_data
        .into_iter()
        .map(|fd| column_from_field_data(fd, Some(total_rows)))
        .collect::<Result<Vec<_>>>()?;

    let mut results = Vec::with_capacity(num_queries);
    let mut offset = 0usize;
    for (i, &topk) in data.topks.iter().enumerate() {
        let per_query_error = data
            .statuses
            .get(i)
            .filter(|s| s.error_code != ErrorCode::Success as i32)
            .map(|s| Error::from_status(s.clone()));

        let count = usize::try_from(topk).unwrap_or(0);
        let range = offset..offset + count;
        offset += count;

        if let Some(error) = per_query_error {
            results.push(SearchResult {
                result_count: 0,
                ids: None,
                fields: Vec::new(),
                scores: Vec::new(),
                error: Some(error),
            });
            continue;
        }

        let query_ids = match &ids {
            Some(column) => Some(slice_column(column, range.clone())?),
            None => None,
        };
        let query_fields = fields
            .iter()
            .map(|column| slice_column(column, range.clone()))
            .collect::<Result<Vec<_>>>()?;
        results.push(SearchResult {
            result_count: count,
            ids: query_ids,
            fields: query_fields,
            scores: data.scores[range].to_vec(),
            error: None,
        });
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_columns() -> Vec<Column> {
        vec![
            Column::bool("flag", vec![true, false, true]),
            Column::int8("tiny", vec![-128, 0, 127]),
            Column::int16("short", vec![-32768, 1, 32767]),
            Column::int32("year", vec![1994, 2001, 2010]),
            Column::int64("film_id", vec![1, 2, 3]),
            Column::float("rating", vec![7.5, 8.1, 6.9]),
            Column::double("gross", vec![1.0e9, 2.5e8, 3.3e7]),
            Column::string(
                "title",
                vec!["Leon".to_string(), "Dune".to_string(), "Heat".to_string()],
            ),
            Column::float_vector(
                "embedding",
                2,
                vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6]],
            )
            .unwrap(),
            Column::binary_vector("sig", 8, vec![vec![0x01], vec![0x02], vec![0x03]]).unwrap(),
        ]
    }

    #[test]
    fn test_round_trip_every_field_type() {
        for column in all_columns() {
            let decoded = column_from_field_data(column.to_field_data(), Some(column.len()))
                .unwrap_or_else(|e| panic!("decode failed for {:?}: {e}", column.field_type()));
            assert_eq!(column, decoded);
        }
    }

    #[test]
    fn test_narrowing_rejects_out_of_range() {
        let mut fd = Column::int32("tiny", vec![100, 300]).to_field_data();
        fd.data_type = DataType::Int8 as i32;
        let err = column_from_field_data(fd, None).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::IntegerOverflow { value: 300, .. })
        ));
    }

    #[test]
    fn test_narrowing_accepts_in_range() {
        let mut fd = Column::int32("tiny", vec![-128, 127]).to_field_data();
        fd.data_type = DataType::Int8 as i32;
        let column = column_from_field_data(fd, Some(2)).unwrap();
        assert_eq!(column.as_int8(), Some(&[-128i8, 127][..]));
    }

    #[test]
    fn test_unknown_wire_kind_fails() {
        let mut fd = Column::int64("id", vec![1]).to_field_data();
        fd.data_type = 999;
        assert!(matches!(
            column_from_field_data(fd, None).unwrap_err(),
            Error::Decode(DecodeError::UnexpectedKind { .. })
        ));
    }

    #[test]
    fn test_declared_type_payload_mismatch_fails() {
        // Declared Int64 but the payload is a 32-bit array.
        let mut fd = Column::int32("id", vec![1, 2]).to_field_data();
        fd.data_type = DataType::Int64 as i32;
        assert!(matches!(
            column_from_field_data(fd, None).unwrap_err(),
            Error::Decode(DecodeError::UnexpectedKind { .. })
        ));
    }

    #[test]
    fn test_envelope_row_count_mismatch_fails() {
        let fd = Column::int64("id", vec![1, 2, 3]).to_field_data();
        assert!(matches!(
            column_from_field_data(fd, Some(4)).unwrap_err(),
            Error::Decode(DecodeError::RowCountMismatch { .. })
        ));
    }

    #[test]
    fn test_vector_payload_must_divide_by_dim() {
        let mut fd = Column::float_vector("embedding", 2, vec![vec![1.0, 2.0]])
            .unwrap()
            .to_field_data();
        if let Some(field_data::Field::Vectors(v)) = &mut fd.field {
            v.dim = 3;
        }
        assert!(matches!(
            column_from_field_data(fd, None).unwrap_err(),
            Error::Decode(DecodeError::DimensionMismatch { .. })
        ));
    }

    fn flat_results(topks: Vec<i64>, statuses: Vec<proto::Status>) -> proto::SearchResultData {
        let total: i64 = topks.iter().sum();
        let ids: Vec<i64> = (0..total).collect();
        let scores: Vec<f32> = (0..total).map(|i| 1.0 - i as f32 * 0.1).collect();
        proto::SearchResultData {
            num_queries: topks.len() as i64,
            top_k: topks.iter().copied().max().unwrap_or(0),
            topks,
            ids: Some(Column::int64("film_id", ids).to_field_data()),
            scores,
            fields_data: vec![Column::int32("year", (0..total as i32).collect()).to_field_data()],
            statuses,
        }
    }

    #[test]
    fn test_search_decode_slices_per_query() {
        let results = search_results_from_proto(flat_results(vec![2, 1], vec![])).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].result_count, 2);
        assert_eq!(results[0].ids.as_ref().unwrap().as_int64(), Some(&[0i64, 1][..]));
        assert_eq!(results[0].scores.len(), 2);
        assert_eq!(results[1].ids.as_ref().unwrap().as_int64(), Some(&[2i64][..]));
        assert_eq!(results[1].fields[0].as_int32(), Some(&[2i32][..]));
    }

    #[test]
    fn test_search_decode_scores_length_checked() {
        let mut data = flat_results(vec![2, 1], vec![]);
        data.scores.pop();
        assert!(matches!(
            search_results_from_proto(data).unwrap_err(),
            Error::Decode(DecodeError::RowCountMismatch { .. })
        ));
    }

    #[test]
    fn test_search_decode_per_query_status() {
        let statuses = vec![
            proto::Status::default(),
            proto::Status {
                error_code: ErrorCode::UnexpectedError as i32,
                reason: "segment unavailable".to_string(),
            },
        ];
        let results = search_results_from_proto(flat_results(vec![2, 0], statuses)).unwrap();
        assert!(results[0].error.is_none());
        assert_eq!(results[0].result_count, 2);
        assert!(results[1].error.is_some());
        assert_eq!(results[1].result_count, 0);
    }
}
