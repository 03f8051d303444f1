//! Static descriptions of Rust types.
//!
//! There is no runtime reflection to walk a type's fields, so every type
//! that takes part in schema generation describes itself through
//! [`Describe`]. Primitives, containers and smart pointers are covered
//! here. Structs use [`describe_record!`](crate::describe_record).

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, VecDeque},
    rc::Rc,
    sync::{Arc, mpsc},
};

/// Lazily produces the shape of a nested type.
///
/// Nested shapes are only built when the generator descends into them, which
/// keeps self-referential records describable.
pub type ShapeFn = fn() -> Shape;

/// Marker suffix on a field tag that makes the field optional.
const OMIT_EMPTY: &str = ",omitempty";

/// A type that can describe its own shape.
///
/// ```ignore
/// use sor_schema::{Describe, Shape};
///
/// struct Celsius(f64);
///
/// impl Describe for Celsius {
///     fn shape() -> Shape {
///         f64::shape()
///     }
/// }
/// ```
pub trait Describe {
    fn shape() -> Shape;
}

/// The static shape of a type.
#[derive(Debug, Clone)]
pub enum Shape {
    String,
    Integer(IntWidth),
    Number(FloatWidth),
    Boolean,

    /// A growable sequence, e.g. `Vec<T>` or `[T]`.
    Sequence(ShapeFn),

    /// A fixed-size array, e.g. `[T; N]`.
    FixedArray {
        len: usize,
        element: ShapeFn,
    },

    /// A struct with named fields.
    Record(Record),

    /// A nullable or pointer-like wrapper around another shape.
    Optional(ShapeFn),

    Map,
    Function,
    Channel,
    Complex,
}

impl Shape {
    /// Short name of the shape family, used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer(width) => width.name(),
            Self::Number(width) => width.name(),
            Self::Boolean => "bool",
            Self::Sequence(_) => "sequence",
            Self::FixedArray { .. } => "array",
            Self::Record(_) => "struct",
            Self::Optional(_) => "optional",
            Self::Map => "map",
            Self::Function => "func",
            Self::Channel => "chan",
            Self::Complex => "complex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl IntWidth {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
    F32,
    F64,
}

impl FloatWidth {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

/// A struct, described field by field in declaration order.
#[derive(Debug, Clone)]
pub struct Record {
    /// Fully qualified type name, used to detect cycles.
    pub name: &'static str,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// The Rust field name.
    pub ident: &'static str,

    /// Serialization name annotation, e.g. `"summary"` or
    /// `"note,omitempty"`.
    pub tag: Option<&'static str>,

    /// Whether the field is `pub`.
    pub exported: bool,

    pub shape: ShapeFn,
}

/// A parsed field tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// The external (JSON) name of the field.
    pub name: &'a str,

    /// Set when the tag carries the `,omitempty` marker.
    pub omit_empty: bool,
}

impl Field {
    /// A public field with a serialization tag.
    #[must_use]
    pub const fn tagged(ident: &'static str, tag: &'static str, shape: ShapeFn) -> Self {
        Self {
            ident,
            tag: Some(tag),
            exported: true,
            shape,
        }
    }

    /// Mark the field as not `pub`.
    #[must_use]
    pub const fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// The parsed tag of a field that takes part in serialization.
    ///
    /// Returns `None` for untagged or non-public fields.
    #[must_use]
    pub fn serialized(&self) -> Option<Tag<'static>> {
        if !self.exported {
            return None;
        }

        self.tag.map(|tag| match tag.strip_suffix(OMIT_EMPTY) {
            Some(name) => Tag {
                name,
                omit_empty: true,
            },
            None => Tag {
                name: tag,
                omit_empty: false,
            },
        })
    }
}

#[doc(hidden)]
#[must_use]
pub fn is_public(visibility: &str) -> bool {
    visibility == "pub"
}

/// Implement [`Describe`] for a struct.
///
/// Each field is listed with its visibility, type and an optional
/// serialization tag. Only `pub` fields with a tag end up in the schema.
/// The macro has to be invoked where the listed fields are accessible, it
/// checks at compile time that every listed field exists with the given
/// type.
///
/// Generic records list their type parameters after the name, e.g.
/// `describe_record!(Page<T> { pub items: Vec<T> = "items" })`. Every
/// parameter must implement [`Describe`]. Lifetime and const parameters are
/// not accepted, such records need a manual [`Describe`] impl.
///
/// ```ignore
/// #[derive(serde::Deserialize)]
/// pub struct Answer {
///     pub summary: String,
///     #[serde(default)]
///     pub note: Option<String>,
///     pub internal: u32,
/// }
///
/// sor_schema::describe_record!(Answer {
///     pub summary: String = "summary",
///     pub note: Option<String> = "note,omitempty",
///     pub internal: u32,
/// });
/// ```
#[macro_export]
macro_rules! describe_record {
    (
        $record:ident $(<$($param:ident),+ $(,)?>)?
        { $($vis:vis $field:ident : $ty:ty $(= $tag:literal)?),* $(,)? }
    ) => {
        impl$(<$($param: $crate::Describe),+>)? $crate::Describe for $record$(<$($param),+>)? {
            fn shape() -> $crate::Shape {
                #[allow(dead_code)]
                fn assert_fields$(<$($param),+>)?(record: &$record$(<$($param),+>)?) {
                    $(let _: &$ty = &record.$field;)*
                }

                $crate::Shape::Record($crate::Record {
                    name: ::std::any::type_name::<$record$(<$($param),+>)?>(),
                    fields: ::std::vec![$(
                        $crate::Field {
                            ident: ::std::stringify!($field),
                            tag: $crate::__field_tag!($($tag)?),
                            exported: $crate::shape::is_public(::std::stringify!($vis)),
                            shape: <$ty as $crate::Describe>::shape,
                        }
                    ),*],
                })
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_tag {
    () => {
        ::std::option::Option::None
    };
    ($tag:literal) => {
        ::std::option::Option::Some($tag)
    };
}

macro_rules! describe_as {
    ($($ty:ty => $shape:expr),+ $(,)?) => {
        $(impl Describe for $ty {
            fn shape() -> Shape {
                $shape
            }
        })+
    };
}

describe_as! {
    String => Shape::String,
    str => Shape::String,
    Cow<'_, str> => Shape::String,
    bool => Shape::Boolean,
    i8 => Shape::Integer(IntWidth::I8),
    i16 => Shape::Integer(IntWidth::I16),
    i32 => Shape::Integer(IntWidth::I32),
    i64 => Shape::Integer(IntWidth::I64),
    i128 => Shape::Integer(IntWidth::I128),
    isize => Shape::Integer(IntWidth::Isize),
    u8 => Shape::Integer(IntWidth::U8),
    u16 => Shape::Integer(IntWidth::U16),
    u32 => Shape::Integer(IntWidth::U32),
    u64 => Shape::Integer(IntWidth::U64),
    u128 => Shape::Integer(IntWidth::U128),
    usize => Shape::Integer(IntWidth::Usize),
    f32 => Shape::Number(FloatWidth::F32),
    f64 => Shape::Number(FloatWidth::F64),
}

impl<T: Describe + ?Sized> Describe for &T {
    fn shape() -> Shape {
        T::shape()
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn shape() -> Shape {
        Shape::Sequence(T::shape)
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    fn shape() -> Shape {
        Shape::Sequence(T::shape)
    }
}

impl<T: Describe> Describe for [T] {
    fn shape() -> Shape {
        Shape::Sequence(T::shape)
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn shape() -> Shape {
        Shape::FixedArray {
            len: N,
            element: T::shape,
        }
    }
}

impl<T: Describe> Describe for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(T::shape)
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn shape() -> Shape {
        Shape::Optional(T::shape)
    }
}

impl<T: Describe + ?Sized> Describe for Rc<T> {
    fn shape() -> Shape {
        Shape::Optional(T::shape)
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn shape() -> Shape {
        Shape::Optional(T::shape)
    }
}

impl<K, V, S> Describe for HashMap<K, V, S> {
    fn shape() -> Shape {
        Shape::Map
    }
}

impl<K, V> Describe for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Map
    }
}

impl<T> Describe for mpsc::Sender<T> {
    fn shape() -> Shape {
        Shape::Channel
    }
}

impl<T> Describe for mpsc::SyncSender<T> {
    fn shape() -> Shape {
        Shape::Channel
    }
}

impl<T> Describe for mpsc::Receiver<T> {
    fn shape() -> Shape {
        Shape::Channel
    }
}

impl<R> Describe for fn() -> R {
    fn shape() -> Shape {
        Shape::Function
    }
}

impl<A, R> Describe for fn(A) -> R {
    fn shape() -> Shape {
        Shape::Function
    }
}

impl<A, B, R> Describe for fn(A, B) -> R {
    fn shape() -> Shape {
        Shape::Function
    }
}

#[cfg(test)]
#[path = "shape_tests.rs"]
mod tests;
