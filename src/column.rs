//! Typed column data model.
//!
//! A [`Column`] pairs a field name with an ordered sequence of values of one
//! [`FieldType`]. Columns are immutable after construction, so they can be
//! shared freely across concurrent operations. Serialization widens the
//! narrow integer types (Int8/Int16) into the wire-canonical 32-bit array
//! while the declared data type preserves their identity; the inverse
//! checked narrowing lives in [`crate::decode`].

use crate::error::{Error, Result};
use crate::proto::vectis as proto;
use crate::proto::vectis::{field_data, scalar_field, vector_field};
use crate::schema::FieldType;

/// Generic carrier for one scalar field across a batch of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarColumn<T> {
    name: String,
    values: Vec<T>,
}

impl<T> ScalarColumn<T> {
    fn new(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Generic carrier for one vector field. Every row shares `dim`, fixed at
/// construction. For binary vectors `dim` is counted in bits and each row
/// holds `dim / 8` packed bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorColumn<T> {
    name: String,
    dim: usize,
    rows: Vec<Vec<T>>,
}

impl<T> VectorColumn<T> {
    fn new(name: impl Into<String>, dim: usize, rows: Vec<Vec<T>>, row_width: usize) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != row_width {
                return Err(Error::InvalidArgument(format!(
                    "vector row {} has {} values, expected {}",
                    i,
                    row.len(),
                    row_width
                )));
            }
        }
        Ok(Self {
            name: name.into(),
            dim,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A named, typed, ordered sequence of values representing one field across
/// a batch of rows. One variant per [`FieldType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Bool(ScalarColumn<bool>),
    Int8(ScalarColumn<i8>),
    Int16(ScalarColumn<i16>),
    Int32(ScalarColumn<i32>),
    Int64(ScalarColumn<i64>),
    Float(ScalarColumn<f32>),
    Double(ScalarColumn<f64>),
    String(ScalarColumn<String>),
    BinaryVector(VectorColumn<u8>),
    FloatVector(VectorColumn<f32>),
}

impl Column {
    pub fn bool(name: impl Into<String>, values: Vec<bool>) -> Self {
        Column::Bool(ScalarColumn::new(name, values))
    }

    pub fn int8(name: impl Into<String>, values: Vec<i8>) -> Self {
        Column::Int8(ScalarColumn::new(name, values))
    }

    pub fn int16(name: impl Into<String>, values: Vec<i16>) -> Self {
        Column::Int16(ScalarColumn::new(name, values))
    }

    pub fn int32(name: impl Into<String>, values: Vec<i32>) -> Self {
        Column::Int32(ScalarColumn::new(name, values))
    }

    pub fn int64(name: impl Into<String>, values: Vec<i64>) -> Self {
        Column::Int64(ScalarColumn::new(name, values))
    }

    pub fn float(name: impl Into<String>, values: Vec<f32>) -> Self {
        Column::Float(ScalarColumn::new(name, values))
    }

    pub fn double(name: impl Into<String>, values: Vec<f64>) -> Self {
        Column::Double(ScalarColumn::new(name, values))
    }

    pub fn string(name: impl Into<String>, values: Vec<String>) -> Self {
        Column::String(ScalarColumn::new(name, values))
    }

    /// Float vector column; every row must have exactly `dim` values.
    pub fn float_vector(name: impl Into<String>, dim: usize, rows: Vec<Vec<f32>>) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidArgument("vector dimension must be positive".into()));
        }
        Ok(Column::FloatVector(VectorColumn::new(name, dim, rows, dim)?))
    }

    /// Binary vector column; `dim` is in bits, a multiple of 8, and every
    /// row must hold `dim / 8` bytes.
    pub fn binary_vector(name: impl Into<String>, dim: usize, rows: Vec<Vec<u8>>) -> Result<Self> {
        if dim == 0 || dim % 8 != 0 {
            return Err(Error::InvalidArgument(format!(
                "binary vector dimension must be a positive multiple of 8, got {dim}"
            )));
        }
        Ok(Column::BinaryVector(VectorColumn::new(name, dim, rows, dim / 8)?))
    }

    pub fn name(&self) -> &str {
        match self {
            Column::Bool(c) => c.name(),
            Column::Int8(c) => c.name(),
            Column::Int16(c) => c.name(),
            Column::Int32(c) => c.name(),
            Column::Int64(c) => c.name(),
            Column::Float(c) => c.name(),
            Column::Double(c) => c.name(),
            Column::String(c) => c.name(),
            Column::BinaryVector(c) => c.name(),
            Column::FloatVector(c) => c.name(),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Column::Bool(_) => FieldType::Bool,
            Column::Int8(_) => FieldType::Int8,
            Column::Int16(_) => FieldType::Int16,
            Column::Int32(_) => FieldType::Int32,
            Column::Int64(_) => FieldType::Int64,
            Column::Float(_) => FieldType::Float,
            Column::Double(_) => FieldType::Double,
            Column::String(_) => FieldType::String,
            Column::BinaryVector(_) => FieldType::BinaryVector,
            Column::FloatVector(_) => FieldType::FloatVector,
        }
    }

    /// Row count.
    pub fn len(&self) -> usize {
        match self {
            Column::Bool(c) => c.len(),
            Column::Int8(c) => c.len(),
            Column::Int16(c) => c.len(),
            Column::Int32(c) => c.len(),
            Column::Int64(c) => c.len(),
            Column::Float(c) => c.len(),
            Column::Double(c) => c.len(),
            Column::String(c) => c.len(),
            Column::BinaryVector(c) => c.len(),
            Column::FloatVector(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vector dimension, if this is a vector column (bits for binary).
    pub fn dim(&self) -> Option<usize> {
        match self {
            Column::BinaryVector(c) => Some(c.dim()),
            Column::FloatVector(c) => Some(c.dim()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<&[bool]> {
        match self {
            Column::Bool(c) => Some(c.values()),
            _ => None,
        }
    }

    pub fn as_int8(&self) -> Option<&[i8]> {
        match self {
            Column::Int8(c) => Some(c.values()),
            _ => None,
        }
    }

    pub fn as_int16(&self) -> Option<&[i16]> {
        match self {
            Column::Int16(c) => Some(c.values()),
            _ => None,
        }
    }

    pub fn as_int32(&self) -> Option<&[i32]> {
        match self {
            Column::Int32(c) => Some(c.values()),
            _ => None,
        }
    }

    pub fn as_int64(&self) -> Option<&[i64]> {
        match self {
            Column::Int64(c) => Some(c.values()),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<&[f32]> {
        match self {
            Column::Float(c) => Some(c.values()),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<&[f64]> {
        match self {
            Column::Double(c) => Some(c.values()),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&[String]> {
        match self {
            Column::String(c) => Some(c.values()),
            _ => None,
        }
    }

    pub fn as_float_vector(&self) -> Option<&[Vec<f32>]> {
        match self {
            Column::FloatVector(c) => Some(c.rows()),
            _ => None,
        }
    }

    pub fn as_binary_vector(&self) -> Option<&[Vec<u8>]> {
        match self {
            Column::BinaryVector(c) => Some(c.rows()),
            _ => None,
        }
    }

    /// Serialize into the wire field-data representation.
    pub fn to_field_data(&self) -> proto::FieldData {
        let (field, data_type) = match self {
            Column::Bool(c) => (
                scalars(scalar_field::Data::BoolData(proto::BoolArray {
                    data: c.values().to_vec(),
                })),
                FieldType::Bool,
            ),
            Column::Int8(c) => (
                scalars(scalar_field::Data::IntData(proto::IntArray {
                    data: c.values().iter().map(|&v| i32::from(v)).collect(),
                })),
                FieldType::Int8,
            ),
            Column::Int16(c) => (
                scalars(scalar_field::Data::IntData(proto::IntArray {
                    data: c.values().iter().map(|&v| i32::from(v)).collect(),
                })),
                FieldType::Int16,
            ),
            Column::Int32(c) => (
                scalars(scalar_field::Data::IntData(proto::IntArray {
                    data: c.values().to_vec(),
                })),
                FieldType::Int32,
            ),
            Column::Int64(c) => (
                scalars(scalar_field::Data::LongData(proto::LongArray {
                    data: c.values().to_vec(),
                })),
                FieldType::Int64,
            ),
            Column::Float(c) => (
                scalars(scalar_field::Data::FloatData(proto::FloatArray {
                    data: c.values().to_vec(),
                })),
                FieldType::Float,
            ),
            Column::Double(c) => (
                scalars(scalar_field::Data::DoubleData(proto::DoubleArray {
                    data: c.values().to_vec(),
                })),
                FieldType::Double,
            ),
            Column::String(c) => (
                scalars(scalar_field::Data::StringData(proto::StringArray {
                    data: c.values().to_vec(),
                })),
                FieldType::String,
            ),
            Column::FloatVector(c) => (
                field_data::Field::Vectors(proto::VectorField {
                    dim: c.dim() as i64,
                    data: Some(vector_field::Data::FloatVector(proto::FloatArray {
                        data: c.rows().iter().flatten().copied().collect(),
                    })),
                }),
                FieldType::FloatVector,
            ),
            Column::BinaryVector(c) => (
                field_data::Field::Vectors(proto::VectorField {
                    dim: c.dim() as i64,
                    data: Some(vector_field::Data::BinaryVector(
                        c.rows().iter().flatten().copied().collect(),
                    )),
                }),
                FieldType::BinaryVector,
            ),
        };
        proto::FieldData {
            data_type: data_type.to_proto() as i32,
            field_name: self.name().to_string(),
            field: Some(field),
        }
    }
}

fn scalars(data: scalar_field::Data) -> field_data::Field {
    field_data::Field::Scalars(proto::ScalarField { data: Some(data) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::vectis::DataType;

    #[test]
    fn test_scalar_column_basics() {
        let col = Column::int32("year", vec![1994, 2001, 2010]);
        assert_eq!(col.name(), "year");
        assert_eq!(col.field_type(), FieldType::Int32);
        assert_eq!(col.len(), 3);
        assert_eq!(col.dim(), None);
        assert_eq!(col.as_int32(), Some(&[1994, 2001, 2010][..]));
        assert!(col.as_int64().is_none());
    }

    #[test]
    fn test_int8_widens_on_serialize() {
        let col = Column::int8("flags", vec![-128, 0, 127]);
        let fd = col.to_field_data();
        assert_eq!(fd.data_type, DataType::Int8 as i32);
        assert_eq!(fd.field_name, "flags");
        match fd.field {
            Some(field_data::Field::Scalars(proto::ScalarField {
                data: Some(scalar_field::Data::IntData(arr)),
            })) => assert_eq!(arr.data, vec![-128, 0, 127]),
            other => panic!("unexpected wire payload: {other:?}"),
        }
    }

    #[test]
    fn test_float_vector_flattens_row_major() {
        let col = Column::float_vector(
            "embedding",
            2,
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
        )
        .unwrap();
        assert_eq!(col.len(), 3);
        assert_eq!(col.dim(), Some(2));
        let fd = col.to_field_data();
        match fd.field {
            Some(field_data::Field::Vectors(vf)) => {
                assert_eq!(vf.dim, 2);
                match vf.data {
                    Some(vector_field::Data::FloatVector(arr)) => {
                        assert_eq!(arr.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
                    }
                    other => panic!("unexpected vector payload: {other:?}"),
                }
            }
            other => panic!("unexpected wire payload: {other:?}"),
        }
    }

    #[test]
    fn test_vector_dimension_mismatch_rejected() {
        let err = Column::float_vector("embedding", 4, vec![vec![1.0, 2.0, 3.0, 4.0], vec![1.0]]);
        assert!(matches!(err, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_binary_vector_dim_rules() {
        assert!(Column::binary_vector("sig", 12, vec![]).is_err());
        let col = Column::binary_vector("sig", 16, vec![vec![0xAB, 0xCD], vec![0x01, 0x02]]).unwrap();
        assert_eq!(col.len(), 2);
        assert_eq!(col.dim(), Some(16));
        let fd = col.to_field_data();
        match fd.field {
            Some(field_data::Field::Vectors(vf)) => {
                assert_eq!(vf.dim, 16);
                assert_eq!(
                    vf.data,
                    Some(vector_field::Data::BinaryVector(vec![0xAB, 0xCD, 0x01, 0x02]))
                );
            }
            other => panic!("unexpected wire payload: {other:?}"),
        }
    }
}
