use std::fmt;

/// A decoded IFD entry value.
///
/// A single component decodes to a scalar variant, anything else to [`Value::List`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Value {
    Byte(u8),
    SignedByte(i8),
    Short(u16),
    SignedShort(i16),
    Unsigned(u32),
    Signed(i32),
    Float(f32),
    Double(f64),
    Rational(u32, u32),
    SRational(i32, i32),
    Ascii(String),
    List(Vec<Value>),
    Ifd(u32),
    /// A format code this crate does not know, kept with the raw 4-byte value field.
    Unsupported { format: u16, raw: [u8; 4] },
}

impl Value {
    /// Numeric interpretation of a scalar value. Rationals are divided out.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v.into()),
            Value::SignedByte(v) => Some(v.into()),
            Value::Short(v) => Some(v.into()),
            Value::SignedShort(v) => Some(v.into()),
            Value::Unsigned(v) | Value::Ifd(v) => Some(v.into()),
            Value::Signed(v) => Some(v.into()),
            Value::Float(v) => Some(v.into()),
            Value::Double(v) => Some(v),
            Value::Rational(n, d) => Some(f64::from(n) / f64::from(d)),
            Value::SRational(n, d) => Some(f64::from(n) / f64::from(d)),
            Value::Ascii(_) | Value::List(_) | Value::Unsupported { .. } => None,
        }
    }

    /// Interpret this value as an unsigned offset or count.
    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Value::Byte(v) => Some(v.into()),
            Value::Short(v) => Some(v.into()),
            Value::Unsigned(v) | Value::Ifd(v) => Some(v),
            _ => None,
        }
    }

    /// Convert into the summary-facing shape, or `None` if it has no such shape.
    pub fn to_field(&self) -> Option<FieldValue> {
        match self {
            Value::Ascii(s) => Some(FieldValue::Text(s.clone())),
            Value::List(values) => values
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<_>>>()
                .map(FieldValue::Numbers),
            Value::Unsupported { .. } => None,
            scalar => scalar.as_f64().map(FieldValue::Number),
        }
    }
}

/// A named field value as exposed by the [`Exif`](crate::Exif) summaries.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A single number. Rationals are reported as `numerator / denominator`.
    Number(f64),
    /// An ordered sequence of numbers.
    Numbers(Vec<f64>),
    /// A string with trailing NUL bytes removed.
    Text(String),
}

impl FieldValue {
    /// Returns the number if this is a [`FieldValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the numbers if this is a [`FieldValue::Numbers`].
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            FieldValue::Numbers(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the string if this is a [`FieldValue::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(v) => write!(f, "{v}"),
            FieldValue::Numbers(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
            FieldValue::Text(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational_to_field() {
        assert_eq!(
            Value::Rational(1, 250).to_field(),
            Some(FieldValue::Number(0.004))
        );
        assert_eq!(
            Value::SRational(-1, 2).to_field(),
            Some(FieldValue::Number(-0.5))
        );
    }

    #[test]
    fn test_list_to_field() {
        let list = Value::List(vec![
            Value::Rational(10, 1),
            Value::Rational(30, 1),
            Value::Rational(0, 1),
        ]);
        assert_eq!(
            list.to_field(),
            Some(FieldValue::Numbers(vec![10.0, 30.0, 0.0]))
        );
        assert_eq!(Value::List(vec![]).to_field(), Some(FieldValue::Numbers(vec![])));
    }

    #[test]
    fn test_unsupported_has_no_field() {
        let value = Value::Unsupported {
            format: 13,
            raw: [0; 4],
        };
        assert_eq!(value.to_field(), None);
        assert_eq!(
            Value::List(vec![Value::Short(1), Value::Ascii("x".into())]).to_field(),
            None
        );
    }

    #[test]
    fn test_field_accessors() {
        let number = FieldValue::Number(72.0);
        assert_eq!(number.as_number(), Some(72.0));
        assert_eq!(number.as_numbers(), None);
        assert_eq!(number.as_str(), None);

        let numbers = FieldValue::Numbers(vec![2.0, 3.0]);
        assert_eq!(numbers.as_numbers(), Some(&[2.0, 3.0][..]));
        assert_eq!(numbers.as_number(), None);

        let text = FieldValue::Text("Canon".into());
        assert_eq!(text.as_str(), Some("Canon"));
        assert_eq!(text.as_numbers(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Numbers(vec![1.0, 2.5]).to_string(), "1, 2.5");
        assert_eq!(FieldValue::Text("Canon".into()).to_string(), "Canon");
    }
}
