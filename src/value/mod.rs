//! The dynamic value model.
//!
//! Every predicate and data combinator in this library operates on
//! [`Value`]: a realm-free representation of an arbitrary host value. The
//! model carries exactly the information classification needs, and nothing
//! tied to a particular execution context, which is why classification
//! survives values crossing realm boundaries: a value's [`TypeTag`] is
//! computed structurally from the value itself, never from prototype or
//! constructor identity.
//!
//! # Shapes
//!
//! - primitives: `Undefined`, `Null`, `Bool`, `Number` (an `f64`, which may
//!   be `NaN` or infinite), `String`
//! - collections: `Array`, `Object` ([`ObjectValue`]: insertion-ordered own
//!   entries plus a [`Prototype`] shape)
//! - `Function` ([`FunctionValue`]: plain/generator/async tag and name)
//! - `Date` (a UTC timestamp)
//! - `Wrapper` ([`PrimitiveWrapper`]): the wrapper-object form of a
//!   boolean, number, or string: an *object* that still answers to its
//!   primitive's type tag
//!
//! # Examples
//!
//! ```rust
//! use adjunct::value::{TypeTag, Value};
//!
//! assert_eq!(Value::from("hi").type_tag(), TypeTag::String);
//! assert_eq!(Value::from(vec![Value::Null]).type_tag(), TypeTag::Array);
//! ```

mod function;
mod object;

pub use function::{FunctionKind, FunctionValue};
pub use object::{Iter, ObjectMap, ObjectValue, Prototype};

use std::fmt;

use chrono::{DateTime, Utc};
use static_assertions::assert_impl_all;

use crate::error::TypeError;

/// An arbitrary runtime value.
///
/// See the [module documentation](self) for the shape inventory.
///
/// # Examples
///
/// ```rust
/// use adjunct::object;
/// use adjunct::value::Value;
///
/// let point = Value::from(object! { "x" => 1.5, "y" => 2.0 });
/// let x = point.as_object().unwrap().entries().get("x");
/// assert_eq!(x, Some(&Value::Number(1.5)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The undefined value.
    Undefined,
    /// The null value.
    Null,
    /// A primitive boolean.
    Bool(bool),
    /// A primitive number; may be `NaN` or infinite.
    Number(f64),
    /// A primitive string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An object: own entries plus prototype shape.
    Object(ObjectValue),
    /// A function, reduced to its classification surface.
    Function(FunctionValue),
    /// A date, as a UTC timestamp.
    Date(DateTime<Utc>),
    /// The wrapper-object form of a primitive.
    Wrapper(PrimitiveWrapper),
}

/// A wrapper object around a boolean, number, or string primitive.
///
/// Wrapper objects belong to the object category but carry the type tag of
/// the primitive they wrap, so `Value::from("x")` and a wrapped string
/// classify identically under the string predicate.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveWrapper {
    /// A wrapped boolean.
    Bool(bool),
    /// A wrapped number.
    Number(f64),
    /// A wrapped string.
    String(String),
}

/// The intrinsic type tag of a value.
///
/// This is the cross-realm classification key: it travels with the value
/// and is computed structurally, so it agrees for equivalent values from
/// different execution contexts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `Value::Undefined`.
    Undefined,
    /// `Value::Null`.
    Null,
    /// Primitive or wrapped booleans.
    Boolean,
    /// Primitive or wrapped numbers.
    Number,
    /// Primitive or wrapped strings.
    String,
    /// Arrays.
    Array,
    /// Objects that are not one of the more specific shapes.
    Object,
    /// Ordinary functions.
    Function,
    /// Generator functions.
    GeneratorFunction,
    /// Async functions.
    AsyncFunction,
    /// Dates.
    Date,
}

impl Value {
    /// Computes the value's intrinsic [`TypeTag`].
    ///
    /// Wrapper objects report their primitive's tag; function subtypes
    /// report their own tags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adjunct::value::{FunctionValue, PrimitiveWrapper, TypeTag, Value};
    ///
    /// assert_eq!(Value::Wrapper(PrimitiveWrapper::Bool(true)).type_tag(), TypeTag::Boolean);
    /// assert_eq!(
    ///     Value::Function(FunctionValue::async_function("load")).type_tag(),
    ///     TypeTag::AsyncFunction
    /// );
    /// ```
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::Undefined => TypeTag::Undefined,
            Self::Null => TypeTag::Null,
            Self::Bool(_) | Self::Wrapper(PrimitiveWrapper::Bool(_)) => TypeTag::Boolean,
            Self::Number(_) | Self::Wrapper(PrimitiveWrapper::Number(_)) => TypeTag::Number,
            Self::String(_) | Self::Wrapper(PrimitiveWrapper::String(_)) => TypeTag::String,
            Self::Array(_) => TypeTag::Array,
            Self::Object(_) => TypeTag::Object,
            Self::Function(function) => match function.kind() {
                FunctionKind::Plain => TypeTag::Function,
                FunctionKind::Generator => TypeTag::GeneratorFunction,
                FunctionKind::Async => TypeTag::AsyncFunction,
            },
            Self::Date(_) => TypeTag::Date,
        }
    }

    /// `true` for values in the object category: objects, arrays, dates,
    /// functions, and wrapper objects.
    #[must_use]
    pub const fn is_object_category(&self) -> bool {
        matches!(
            self,
            Self::Array(_) | Self::Object(_) | Self::Function(_) | Self::Date(_) | Self::Wrapper(_)
        )
    }

    /// The numeric payload of a primitive or wrapped number.
    #[must_use]
    pub const fn number_value(&self) -> Option<f64> {
        match self {
            Self::Number(number) | Self::Wrapper(PrimitiveWrapper::Number(number)) => Some(*number),
            _ => None,
        }
    }

    /// The text payload of a primitive or wrapped string.
    #[must_use]
    pub fn string_value(&self) -> Option<&str> {
        match self {
            Self::String(text) | Self::Wrapper(PrimitiveWrapper::String(text)) => Some(text),
            _ => None,
        }
    }

    /// Accesses the value as an object.
    ///
    /// # Errors
    ///
    /// [`TypeError::Mismatch`] when the value is not an `Object`.
    pub const fn as_object(&self) -> Result<&ObjectValue, TypeError> {
        match self {
            Self::Object(object) => Ok(object),
            other => Err(mismatch(TypeTag::Object, other)),
        }
    }

    /// Accesses the value as an array.
    ///
    /// # Errors
    ///
    /// [`TypeError::Mismatch`] when the value is not an `Array`.
    pub fn as_array(&self) -> Result<&[Value], TypeError> {
        match self {
            Self::Array(items) => Ok(items),
            other => Err(mismatch(TypeTag::Array, other)),
        }
    }

    /// Accesses the value as a primitive string.
    ///
    /// # Errors
    ///
    /// [`TypeError::Mismatch`] when the value is not a primitive `String`.
    pub fn as_str(&self) -> Result<&str, TypeError> {
        match self {
            Self::String(text) => Ok(text),
            other => Err(mismatch(TypeTag::String, other)),
        }
    }

    /// Accesses the value as a primitive number.
    ///
    /// # Errors
    ///
    /// [`TypeError::Mismatch`] when the value is not a primitive `Number`.
    pub const fn as_number(&self) -> Result<f64, TypeError> {
        match self {
            Self::Number(number) => Ok(*number),
            other => Err(mismatch(TypeTag::Number, other)),
        }
    }

    /// Accesses the value as a primitive boolean.
    ///
    /// # Errors
    ///
    /// [`TypeError::Mismatch`] when the value is not a primitive `Bool`.
    pub const fn as_bool(&self) -> Result<bool, TypeError> {
        match self {
            Self::Bool(flag) => Ok(*flag),
            other => Err(mismatch(TypeTag::Boolean, other)),
        }
    }

    /// Accesses the value as a function.
    ///
    /// # Errors
    ///
    /// [`TypeError::Mismatch`] when the value is not a `Function`.
    pub const fn as_function(&self) -> Result<&FunctionValue, TypeError> {
        match self {
            Self::Function(function) => Ok(function),
            other => Err(mismatch(TypeTag::Function, other)),
        }
    }

    /// Accesses the value as a date.
    ///
    /// # Errors
    ///
    /// [`TypeError::Mismatch`] when the value is not a `Date`.
    pub const fn as_date(&self) -> Result<DateTime<Utc>, TypeError> {
        match self {
            Self::Date(timestamp) => Ok(*timestamp),
            other => Err(mismatch(TypeTag::Date, other)),
        }
    }
}

const fn mismatch(expected: TypeTag, actual: &Value) -> TypeError {
    TypeError::Mismatch { expected, actual: actual.type_tag() }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Function => "Function",
            Self::GeneratorFunction => "GeneratorFunction",
            Self::AsyncFunction => "AsyncFunction",
            Self::Date => "Date",
        };
        formatter.write_str(name)
    }
}

// =============================================================================
// Conversions from host types
// =============================================================================

impl From<bool> for Value {
    #[inline]
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<ObjectMap> for Value {
    /// Wraps the entries as a plain object (base prototype).
    #[inline]
    fn from(entries: ObjectMap) -> Self {
        Self::Object(ObjectValue::plain(entries))
    }
}

impl From<ObjectValue> for Value {
    #[inline]
    fn from(object: ObjectValue) -> Self {
        Self::Object(object)
    }
}

impl From<FunctionValue> for Value {
    #[inline]
    fn from(function: FunctionValue) -> Self {
        Self::Function(function)
    }
}

impl From<DateTime<Utc>> for Value {
    #[inline]
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self::Date(timestamp)
    }
}

impl From<PrimitiveWrapper> for Value {
    #[inline]
    fn from(wrapper: PrimitiveWrapper) -> Self {
        Self::Wrapper(wrapper)
    }
}

assert_impl_all!(Value: Clone, PartialEq, fmt::Debug, Send, Sync);
assert_impl_all!(TypeError: Clone, Copy, std::error::Error, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_date() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_700_000_000_000).expect("timestamp in range")
    }

    #[rstest]
    #[case(Value::Undefined, TypeTag::Undefined)]
    #[case(Value::Null, TypeTag::Null)]
    #[case(Value::Bool(true), TypeTag::Boolean)]
    #[case(Value::Wrapper(PrimitiveWrapper::Bool(false)), TypeTag::Boolean)]
    #[case(Value::Number(1.5), TypeTag::Number)]
    #[case(Value::Wrapper(PrimitiveWrapper::Number(f64::NAN)), TypeTag::Number)]
    #[case(Value::from("text"), TypeTag::String)]
    #[case(Value::Wrapper(PrimitiveWrapper::String(String::new())), TypeTag::String)]
    #[case(Value::Array(vec![]), TypeTag::Array)]
    #[case(Value::from(crate::object! {}), TypeTag::Object)]
    #[case(Value::Function(FunctionValue::plain("run")), TypeTag::Function)]
    #[case(Value::Function(FunctionValue::generator("walk")), TypeTag::GeneratorFunction)]
    #[case(Value::Function(FunctionValue::async_function("load")), TypeTag::AsyncFunction)]
    fn type_tags_are_structural(#[case] value: Value, #[case] tag: TypeTag) {
        assert_eq!(value.type_tag(), tag);
    }

    #[rstest]
    fn date_values_tag_as_date() {
        assert_eq!(Value::Date(sample_date()).type_tag(), TypeTag::Date);
    }

    #[rstest]
    fn accessors_return_the_underlying_representation() {
        let object = Value::from(crate::object! { "a" => 1 });
        assert_eq!(object.as_object().unwrap().entries().len(), 1);

        let array = Value::from(vec![Value::Null]);
        assert_eq!(array.as_array().unwrap().len(), 1);

        assert_eq!(Value::from("hi").as_str(), Ok("hi"));
        assert_eq!(Value::Number(2.5).as_number(), Ok(2.5));
        assert_eq!(Value::Bool(true).as_bool(), Ok(true));
        assert_eq!(Value::Date(sample_date()).as_date(), Ok(sample_date()));
    }

    #[rstest]
    fn accessors_report_the_actual_tag_on_mismatch() {
        let error = Value::from("hi").as_array().unwrap_err();
        assert_eq!(
            error,
            TypeError::Mismatch { expected: TypeTag::Array, actual: TypeTag::String }
        );
    }

    #[rstest]
    fn wrapped_primitives_share_payload_helpers() {
        assert_eq!(Value::Number(3.0).number_value(), Some(3.0));
        assert_eq!(Value::Wrapper(PrimitiveWrapper::Number(3.0)).number_value(), Some(3.0));
        assert_eq!(Value::from("x").string_value(), Some("x"));
        assert_eq!(
            Value::Wrapper(PrimitiveWrapper::String(String::from("x"))).string_value(),
            Some("x")
        );
        assert_eq!(Value::Null.number_value(), None);
    }

    #[rstest]
    fn wrapper_objects_belong_to_the_object_category() {
        assert!(Value::Wrapper(PrimitiveWrapper::Bool(true)).is_object_category());
        assert!(!Value::Bool(true).is_object_category());
    }
}
