//! Type-erased values flowing through an assertion chain
//!
//! A chain may switch from one subject to another (`that(5).is_gt(3).and_that("x")`),
//! so every subject and operand is stored as a [`Value`]. Leaf checks match on the
//! variant they understand; anything else fails their precondition.
//!
//! # Example
//!
//! ```rust
//! use assertor::value::{Number, TypeTag, Value};
//!
//! let v = Value::from(42);
//! assert_eq!(v.type_tag(), TypeTag::Number);
//! assert_eq!(v.as_number(), Some(Number::Int(42)));
//!
//! let list = Value::from(vec!["a", "b"]);
//! assert_eq!(list.len(), Some(2));
//! assert_eq!(list.to_string(), "[a, b]");
//! ```

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::message::{format, Locale};

/// Semantic category of a value, used to pick message wording and
/// to describe parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeTag {
    /// An arbitrary user value.
    Object,
    /// `bool`.
    Boolean,
    /// Any integer or floating point number.
    Number,
    /// Strings and string slices.
    CharSequence,
    /// Fixed-size arrays and slices.
    Array,
    /// A type descriptor ([`TypeInfo`]).
    Class,
    /// Key/value collections.
    Map,
    /// Growable collections (`Vec`, sets, deques).
    Iterable,
    /// A point in time ([`SystemTime`]).
    Date,
    /// A zoned date-time ([`DateTime`]).
    Calendar,
    /// A local date or date-time without zone ([`NaiveDate`], [`NaiveDateTime`]).
    Temporal,
    /// An enumeration variant ([`Variant`]).
    Enum,
    /// An error value.
    Throwable,
    /// Type not known at chain construction.
    Unknown,
}

impl TypeTag {
    /// Lower-case name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Object => "object",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::CharSequence => "char sequence",
            TypeTag::Array => "array",
            TypeTag::Class => "class",
            TypeTag::Map => "map",
            TypeTag::Iterable => "iterable",
            TypeTag::Date => "date",
            TypeTag::Calendar => "calendar",
            TypeTag::Temporal => "temporal",
            TypeTag::Enum => "enum",
            TypeTag::Throwable => "throwable",
            TypeTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A number of any primitive width.
///
/// Integers compare exactly with each other; as soon as a float is involved
/// both sides are compared as `f64`.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point.
    Float(f64),
}

impl Number {
    /// Compare two numbers, `None` when a NaN is involved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use assertor::value::Number;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(Number::Int(-1).compare(&Number::UInt(1)), Some(Ordering::Less));
    /// assert_eq!(Number::Float(2.5).compare(&Number::Int(2)), Some(Ordering::Greater));
    /// assert_eq!(Number::Float(f64::NAN).compare(&Number::Int(0)), None);
    /// ```
    pub fn compare(&self, other: &Number) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::UInt(a), Number::UInt(b)) => Some(a.cmp(&b)),
            (Number::Int(a), Number::UInt(b)) => Some(i128::from(a).cmp(&i128::from(b))),
            (Number::UInt(a), Number::Int(b)) => Some(i128::from(a).cmp(&i128::from(b))),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }

    /// Lossy conversion to `f64`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(v) => v as f64,
            Number::UInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Ordering against zero.
    pub fn signum(&self) -> Option<Ordering> {
        self.compare(&Number::Int(0))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

macro_rules! impl_number_from {
    ($variant:ident as $target:ty: [$($ty:ty),+]) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Number::$variant(v as $target)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Number(Number::from(v))
                }
            }
        )+
    };
}

impl_number_from!(Int as i64: [i8, i16, i32, i64, isize]);
impl_number_from!(UInt as u64: [u8, u16, u32, u64, usize]);
impl_number_from!(Float as f64: [f32, f64]);

/// Descriptor of a Rust type, the counterpart of a class literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Describe `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeInfo {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name.
    pub fn simple_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Whether this descriptor names `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

/// An enumeration variant: owning type, variant name and declaration index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    type_name: &'static str,
    name: &'static str,
    ordinal: usize,
}

impl Variant {
    /// Describe a variant.
    pub fn new(type_name: &'static str, name: &'static str, ordinal: usize) -> Self {
        Variant {
            type_name,
            name,
            ordinal,
        }
    }

    /// Name of the enumeration type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Name of the variant.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declaration index of the variant.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

/// Object-safe view of a user value stored in [`Value::Object`].
pub trait DynObject: fmt::Debug + Send + Sync + 'static {
    /// Upcast for downcasting.
    fn as_any(&self) -> &dyn Any;
    /// Equality against another erased object; false across types.
    fn eq_dyn(&self, other: &dyn DynObject) -> bool;
}

impl<T: fmt::Debug + PartialEq + Send + Sync + 'static> DynObject for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn DynObject) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Wraps an arbitrary user value so it can be checked.
///
/// ```rust
/// use assertor::{that, value::Object};
///
/// #[derive(Debug, PartialEq)]
/// struct Point(i32, i32);
///
/// assert!(that(Object(Point(1, 2))).is_equal(Object(Point(1, 2))).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Object<T>(pub T);

impl<T: fmt::Debug + PartialEq + Send + Sync + 'static> From<Object<T>> for Value {
    fn from(object: Object<T>) -> Self {
        Value::Object(Arc::new(object.0))
    }
}

/// Wraps an error so it can be checked.
#[derive(Debug, Clone)]
pub struct Throwable(Arc<dyn StdError + Send + Sync>);

impl Throwable {
    /// Wrap an error value.
    pub fn new<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        Throwable(Arc::new(error))
    }
}

impl From<Throwable> for Value {
    fn from(throwable: Throwable) -> Self {
        Value::Error(throwable.0)
    }
}

/// A value held by a chain: subject, operand or message argument.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(Number),
    /// A single character.
    Char(char),
    /// A string.
    Str(String),
    /// An ordered collection.
    List(Vec<Value>),
    /// Key/value pairs in iteration order.
    Map(Vec<(Value, Value)>),
    /// A point in time, normalized to UTC.
    Date(DateTime<Utc>),
    /// An enumeration variant.
    Enum(Variant),
    /// A type descriptor.
    Class(TypeInfo),
    /// An error.
    Error(Arc<dyn StdError + Send + Sync>),
    /// Any other user value.
    Object(Arc<dyn DynObject>),
}

impl Value {
    /// Erase a user value.
    pub fn object<T: fmt::Debug + PartialEq + Send + Sync + 'static>(value: T) -> Self {
        Value::Object(Arc::new(value))
    }

    /// Erase an error.
    pub fn error<E: StdError + Send + Sync + 'static>(error: E) -> Self {
        Value::Error(Arc::new(error))
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The natural semantic type of this value.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Unknown,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::Char(_) | Value::Str(_) => TypeTag::CharSequence,
            Value::List(_) => TypeTag::Iterable,
            Value::Map(_) => TypeTag::Map,
            Value::Date(_) => TypeTag::Date,
            Value::Enum(_) => TypeTag::Enum,
            Value::Class(_) => TypeTag::Class,
            Value::Error(_) => TypeTag::Throwable,
            Value::Object(_) => TypeTag::Object,
        }
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is one.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is a map.
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// The instant, if this is a date.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(t) => Some(*t),
            _ => None,
        }
    }

    /// The variant, if this is an enum.
    pub fn as_variant(&self) -> Option<&Variant> {
        match self {
            Value::Enum(v) => Some(v),
            _ => None,
        }
    }

    /// The type descriptor, if this is a class.
    pub fn as_class(&self) -> Option<&TypeInfo> {
        match self {
            Value::Class(t) => Some(t),
            _ => None,
        }
    }

    /// The error, if this is one.
    pub fn as_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Value::Error(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Downcast an erased user value.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Value::Object(o) => o.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Length of a string (in chars), list or map.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Whether a string, list or map is empty. Null counts as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            other => other.len() == Some(0),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.iter().any(|(k2, v2)| k == k2 && v == v2))
            }
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Class(a), Value::Class(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a.to_string() == b.to_string(),
            (Value::Object(a), Value::Object(b)) => a.eq_dyn(&**b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::render(self, &Locale::ROOT))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl<'a> From<&'a String> for Value {
    fn from(s: &'a String) -> Self {
        Value::Str(s.clone())
    }
}

/// Anything that names an instant. Zone-less values are read as UTC.
pub trait Timestamp {
    /// The instant in UTC.
    fn to_utc(self) -> DateTime<Utc>;
}

impl Timestamp for SystemTime {
    fn to_utc(self) -> DateTime<Utc> {
        DateTime::<Utc>::from(self)
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    fn to_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

impl Timestamp for NaiveDateTime {
    fn to_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self)
    }
}

impl Timestamp for NaiveDate {
    fn to_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.and_time(NaiveTime::MIN))
    }
}

impl From<SystemTime> for Value {
    fn from(t: SystemTime) -> Self {
        Value::Date(Timestamp::to_utc(t))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(t: DateTime<Tz>) -> Self {
        Value::Date(Timestamp::to_utc(t))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(t: NaiveDateTime) -> Self {
        Value::Date(Timestamp::to_utc(t))
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(Timestamp::to_utc(d))
    }
}

impl From<Variant> for Value {
    fn from(v: Variant) -> Self {
        Value::Enum(v)
    }
}

impl From<TypeInfo> for Value {
    fn from(t: TypeInfo) -> Self {
        Value::Class(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Clone + Into<Value>> From<&'a [T]> for Value {
    fn from(v: &'a [T]) -> Self {
        Value::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<VecDeque<T>> for Value {
    fn from(v: VecDeque<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<HashSet<T>> for Value {
    fn from(v: HashSet<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(v: BTreeSet<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(m: HashMap<K, V>) -> Self {
        Value::Map(m.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(m: BTreeMap<K, V>) -> Self {
        Value::Map(m.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
