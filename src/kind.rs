//! Builder kinds
//!
//! [`Assertor`](crate::Assertor) is parameterized by a kind marker that
//! decides which checks are available: `that(5)` gets number checks,
//! `that("x")` gets string checks, and so on. Every kind also has the core
//! checks (`is_null`, `is_equal`, `validates`, ...).
//!
//! The markers are uninhabited types; only their names matter.
//!
//! To check your own type, wrap it in [`Object`](crate::value::Object) or
//! implement [`Subject`] for it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

use crate::value::{self, TypeInfo, TypeTag, Value, Variant};

/// A value that can start or join a chain.
pub trait Subject: Into<Value> {
    /// Builder kind selecting the available checks.
    type Kind;
    /// Semantic type recorded for messages.
    const TYPE: TypeTag;
}

macro_rules! kinds {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug)]
            pub enum $name {}
        )+
    };
}

kinds! {
    /// Any value: only the core checks.
    Object,
    /// `bool`.
    Boolean,
    /// Integers and floats.
    Numeric,
    /// Strings.
    Text,
    /// Arrays, slices, vectors and sets.
    Iterable,
    /// Hash and B-tree maps.
    Map,
    /// [`SystemTime`] and the chrono date types.
    Date,
    /// [`Variant`].
    Enum,
    /// [`TypeInfo`].
    Class,
    /// [`value::Throwable`].
    Throwable,
}

macro_rules! subject {
    ($kind:ident, $tag:ident: [$($ty:ty),+ $(,)?]) => {
        $(
            impl Subject for $ty {
                type Kind = $kind;
                const TYPE: TypeTag = TypeTag::$tag;
            }
        )+
    };
}

subject!(Numeric, Number: [i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64]);
subject!(Boolean, Boolean: [bool]);
subject!(Text, CharSequence: [String, &str, &String]);
subject!(Date, Date: [SystemTime]);
subject!(Date, Temporal: [NaiveDateTime, NaiveDate]);
subject!(Enum, Enum: [Variant]);
subject!(Class, Class: [TypeInfo]);
subject!(Throwable, Throwable: [value::Throwable]);
subject!(Object, Unknown: [Value]);

impl<Tz: TimeZone> Subject for DateTime<Tz> {
    type Kind = Date;
    const TYPE: TypeTag = TypeTag::Calendar;
}

impl<T: Into<Value>> Subject for Vec<T> {
    type Kind = Iterable;
    const TYPE: TypeTag = TypeTag::Iterable;
}

impl<T: Into<Value>> Subject for VecDeque<T> {
    type Kind = Iterable;
    const TYPE: TypeTag = TypeTag::Iterable;
}

impl<T: Into<Value>> Subject for HashSet<T> {
    type Kind = Iterable;
    const TYPE: TypeTag = TypeTag::Iterable;
}

impl<T: Into<Value>> Subject for BTreeSet<T> {
    type Kind = Iterable;
    const TYPE: TypeTag = TypeTag::Iterable;
}

impl<T: Into<Value>, const N: usize> Subject for [T; N] {
    type Kind = Iterable;
    const TYPE: TypeTag = TypeTag::Array;
}

impl<T: Clone + Into<Value>> Subject for &[T] {
    type Kind = Iterable;
    const TYPE: TypeTag = TypeTag::Array;
}

impl<K: Into<Value>, V: Into<Value>> Subject for HashMap<K, V> {
    type Kind = Map;
    const TYPE: TypeTag = TypeTag::Map;
}

impl<K: Into<Value>, V: Into<Value>> Subject for BTreeMap<K, V> {
    type Kind = Map;
    const TYPE: TypeTag = TypeTag::Map;
}

/// `None` becomes a null subject of the same kind, so `that(None::<i32>)`
/// still offers number checks (whose preconditions then fail).
impl<T: Subject> Subject for Option<T> {
    type Kind = T::Kind;
    const TYPE: TypeTag = T::TYPE;
}

impl<T> Subject for value::Object<T>
where
    value::Object<T>: Into<Value>,
{
    type Kind = Object;
    const TYPE: TypeTag = TypeTag::Object;
}
