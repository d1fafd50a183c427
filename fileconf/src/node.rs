//! Structural description of overlayable values
//!
//! Every type the walker can descend into implements [`Overlay`] and reports
//! its shape as a [`Node`]. Records are normally described by
//! `#[derive(Overlay)]`; the implementations here cover scalars, sequences,
//! indirections and the types that are skipped.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

/// Shape of a value, with mutable access to its parts.
pub enum Node<'a> {
    /// A leaf that can be overwritten from a single environment variable.
    Scalar(&'a mut dyn Scalar),

    /// Ordered elements; element `i` is named by its index.
    Sequence(Vec<&'a mut dyn Overlay>),

    /// Named fields in declaration order.
    Record(Vec<Field<'a>>),

    /// An indirection to another value, walked under the same name.
    ///
    /// `None` means the referent exists but cannot be borrowed exclusively.
    Reference(Option<&'a mut dyn Overlay>),

    /// Not addressable from the environment. Skipped by the walker.
    Opaque,
}

/// One named field of a [`Node::Record`].
pub struct Field<'a> {
    /// Declared field name. The walker uppercases it to build the variable name.
    pub name: &'static str,
    /// The field's value, walked under the derived name.
    pub value: &'a mut dyn Overlay,
}

impl<'a> Field<'a> {
    /// Pair a declared field name with mutable access to its value.
    pub fn new(name: &'static str, value: &'a mut dyn Overlay) -> Self {
        Self { name, value }
    }
}

/// A value the environment walker can traverse.
///
/// Derive it for config structs:
///
/// ```rust
/// use fileconf::{Node, Overlay};
///
/// #[derive(Overlay)]
/// struct Database {
///     host: String,
///     port: u16,
/// }
///
/// let mut db = Database { host: "db1".into(), port: 5432 };
/// match db.node() {
///     Node::Record(fields) => {
///         let names: Vec<_> = fields.iter().map(|f| f.name).collect();
///         assert_eq!(names, ["host", "port"]);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub trait Overlay {
    fn node(&mut self) -> Node<'_>;
}

/// A leaf value that can be replaced by parsing an environment string.
pub trait Scalar {
    /// Parse `raw` and store it. Returns `false`, leaving the value as it
    /// was, when `raw` is not valid for the type.
    fn assign(&mut self, raw: &str) -> bool;

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! parsed_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn assign(&mut self, raw: &str) -> bool {
                    match raw.parse::<$ty>() {
                        Ok(value) => {
                            *self = value;
                            true
                        }
                        Err(_) => false,
                    }
                }
            }

            impl Overlay for $ty {
                fn node(&mut self) -> Node<'_> {
                    Node::Scalar(self)
                }
            }
        )*
    };
}

parsed_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Scalar for String {
    fn assign(&mut self, raw: &str) -> bool {
        raw.clone_into(self);
        true
    }
}

impl Overlay for String {
    fn node(&mut self) -> Node<'_> {
        Node::Scalar(self)
    }
}

impl Scalar for bool {
    fn assign(&mut self, raw: &str) -> bool {
        match parse_bool(raw) {
            Some(value) => {
                *self = value;
                true
            }
            None => false,
        }
    }
}

impl Overlay for bool {
    fn node(&mut self) -> Node<'_> {
        Node::Scalar(self)
    }
}

/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl<T: Overlay> Overlay for Vec<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Sequence(self.iter_mut().map(|e| e as &mut dyn Overlay).collect())
    }
}

impl<T: Overlay> Overlay for VecDeque<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Sequence(self.iter_mut().map(|e| e as &mut dyn Overlay).collect())
    }
}

impl<T: Overlay, const N: usize> Overlay for [T; N] {
    fn node(&mut self) -> Node<'_> {
        Node::Sequence(self.iter_mut().map(|e| e as &mut dyn Overlay).collect())
    }
}

impl<T: Overlay> Overlay for Box<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Reference(Some(&mut **self))
    }
}

// An absent optional has nothing to overwrite.
impl<T: Overlay> Overlay for Option<T> {
    fn node(&mut self) -> Node<'_> {
        match self {
            Some(value) => Node::Reference(Some(value)),
            None => Node::Opaque,
        }
    }
}

impl<T: Overlay> Overlay for Rc<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Reference(Rc::get_mut(self).map(|v| v as &mut dyn Overlay))
    }
}

impl<T: Overlay> Overlay for Arc<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Reference(Arc::get_mut(self).map(|v| v as &mut dyn Overlay))
    }
}

impl<K, V, S> Overlay for HashMap<K, V, S> {
    fn node(&mut self) -> Node<'_> {
        Node::Opaque
    }
}

impl<K, V> Overlay for BTreeMap<K, V> {
    fn node(&mut self) -> Node<'_> {
        Node::Opaque
    }
}

impl<T: ?Sized> Overlay for PhantomData<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Opaque
    }
}

impl Overlay for serde_json::Value {
    fn node(&mut self) -> Node<'_> {
        Node::Opaque
    }
}

impl Overlay for serde_yaml::Value {
    fn node(&mut self) -> Node<'_> {
        Node::Opaque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_forms() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        for raw in ["yes", "tRuE", "", " true", "2"] {
            assert_eq!(parse_bool(raw), None, "{raw}");
        }
    }

    #[test]
    fn test_integer_assign_rejects_out_of_range() {
        let mut port: u16 = 8080;
        assert!(!port.assign("70000"));
        assert_eq!(port, 8080);
        assert!(port.assign("9090"));
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_float_assign() {
        let mut ratio = 0.5_f64;
        assert!(ratio.assign("1.25"));
        assert_eq!(ratio, 1.25);
        assert!(!ratio.assign("one"));
        assert_eq!(ratio, 1.25);
        // Hexadecimal floats are not accepted by `FromStr`
        assert!(!ratio.assign("0x1p-2"));
        assert_eq!(ratio, 1.25);
    }

    #[test]
    fn test_string_assign_is_verbatim() {
        let mut name = String::from("alpha");
        assert!(name.assign("  beta "));
        assert_eq!(name, "  beta ");
    }

    #[test]
    fn test_type_name() {
        let mut n = 1_i32;
        let scalar: &mut dyn Scalar = &mut n;
        assert_eq!(scalar.type_name(), "i32");
    }

    #[test]
    fn test_vec_is_sequence() {
        let mut values = vec![1_u8, 2, 3];
        match values.node() {
            Node::Sequence(elements) => assert_eq!(elements.len(), 3),
            _ => panic!("Expected sequence"),
        }
    }

    #[test]
    fn test_option_none_is_opaque() {
        let mut value: Option<u8> = None;
        assert!(matches!(value.node(), Node::Opaque));

        let mut value = Some(1_u8);
        assert!(matches!(value.node(), Node::Reference(Some(_))));
    }

    #[test]
    fn test_shared_rc_is_not_addressable() {
        let mut value = Rc::new(1_u8);
        let _other = Rc::clone(&value);
        assert!(matches!(value.node(), Node::Reference(None)));
    }

    #[test]
    fn test_maps_are_opaque() {
        let mut map: HashMap<String, String> = HashMap::new();
        assert!(matches!(map.node(), Node::Opaque));
    }

    #[test]
    fn test_phantom_data_is_opaque() {
        let mut marker: PhantomData<fn() -> u8> = PhantomData;
        assert!(matches!(marker.node(), Node::Opaque));
    }
}
