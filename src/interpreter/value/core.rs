use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::host_object::HostObject},
};

/// Tolerance used when comparing two numbers for equality.
pub const EPSILON: f64 = 1e-10;

/// Shared, mutable list storage.
///
/// Lists are passed by reference: assigning a list to a second variable or
/// handing it to a host method shares the same storage.
pub type ListRef = Rc<RefCell<Vec<Value>>>;

/// Represents a runtime value in the interpreter.
///
/// There is no null variant. An expression that produces nothing (such as a
/// call to `print`) simply leaves the value stack untouched.
#[derive(Debug, Clone)]
pub enum Value {
    /// A double precision number. Integers are numbers with no fraction.
    Number(f64),
    /// An immutable piece of text.
    Text(Rc<str>),
    /// A boolean produced by comparisons, `and`, `or`, `not` and literals.
    Boolean(bool),
    /// An ordered, heterogeneous list shared by reference.
    List(ListRef),
    /// A host-defined object, compared by identity.
    Opaque(HostObject),
}

/// The kind of a [`Value`], also used as the type tag of `with` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `number`
    Number,
    /// `string`
    Text,
    /// `bool`
    Boolean,
    /// `array`
    List,
    /// `object`
    Opaque,
}

impl ValueKind {
    /// Resolves a type name as written in a `with` declaration.
    ///
    /// # Example
    /// ```
    /// use sgl::interpreter::value::core::ValueKind;
    ///
    /// assert_eq!(ValueKind::from_type_name("array"), Some(ValueKind::List));
    /// assert_eq!(ValueKind::from_type_name("list"), None);
    /// ```
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "number" => Some(Self::Number),
            "string" => Some(Self::Text),
            "bool" => Some(Self::Boolean),
            "array" => Some(Self::List),
            "object" => Some(Self::Opaque),
            _ => None,
        }
    }

    /// The name scripts use for this kind.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Text => "string",
            Self::Boolean => "bool",
            Self::List => "array",
            Self::Opaque => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(v)))
    }
}

impl From<HostObject> for Value {
    fn from(v: HostObject) -> Self {
        Self::Opaque(v)
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Text(_) => ValueKind::Text,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::List(_) => ValueKind::List,
            Self::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Returns the number held by this value.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::ExpectedNumber)`: Otherwise.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { found: self.to_string(),
                                                    line }),
        }
    }

    /// Interprets the value as a number, accepting numeric text.
    ///
    /// Range bounds use this conversion, so both `1..5` and a range whose
    /// bounds came from text arguments work.
    ///
    /// # Example
    /// ```
    /// use sgl::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(" 12 ").to_number(1).unwrap(), 12.0);
    /// assert_eq!(Value::from(3.5).to_number(1).unwrap(), 3.5);
    /// assert!(Value::from("twelve").to_number(1).is_err());
    /// assert!(Value::from(true).to_number(1).is_err());
    /// ```
    pub fn to_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(t) => {
                t.trim().parse::<f64>().map_err(|_| RuntimeError::ExpectedNumber { found: t.to_string(),
                                                                                     line })
            },
            _ => Err(RuntimeError::ExpectedNumber { found: self.to_string(),
                                                    line }),
        }
    }

    /// Returns the boolean held by this value.
    ///
    /// Conditions of `if` statements and both operands of `and` / `or` must be
    /// booleans; nothing is implicitly truthy.
    ///
    /// # Returns
    /// - `Ok(bool)`: If the value is a boolean.
    /// - `Err(RuntimeError::ExpectedBoolean)`: Otherwise.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.to_string(),
                                                     line }),
        }
    }

    /// Returns the shared storage of a list value.
    ///
    /// # Returns
    /// - `Ok(&ListRef)`: If the value is a list.
    /// - `Err(RuntimeError::ExpectedList)`: Otherwise.
    pub fn as_list(&self, line: usize) -> EvalResult<&ListRef> {
        match self {
            Self::List(list) => Ok(list),
            _ => Err(RuntimeError::ExpectedList { found: self.to_string(),
                                                  line }),
        }
    }

    /// Copies the value, giving lists (and nested lists) fresh storage.
    ///
    /// Scalars are returned as they are. Host objects keep their identity.
    ///
    /// # Example
    /// ```
    /// use sgl::interpreter::value::core::Value;
    ///
    /// let original = Value::from(vec![Value::from(1.0), Value::from(vec![Value::from(2.0)])]);
    /// let copy = original.deep_copy();
    ///
    /// copy.as_list(1).unwrap().borrow_mut().push(Value::from(3.0));
    ///
    /// assert_eq!(original.to_string(), "[1, [2]]");
    /// assert_eq!(copy.to_string(), "[1, [2], 3]");
    /// ```
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        match self {
            Self::List(list) => list.borrow().iter().map(Self::deep_copy).collect::<Vec<_>>().into(),
            _ => self.clone(),
        }
    }

    /// Structural equality as used by the `=` operator and list membership.
    ///
    /// - Numbers are equal when they differ by less than [`EPSILON`].
    /// - Lists are equal element-wise.
    /// - Host objects are equal only when they are the same object.
    /// - Values of different kinds are never equal.
    ///
    /// # Example
    /// ```
    /// use sgl::interpreter::value::core::Value;
    ///
    /// assert!(Value::from(0.1 + 0.2).script_eq(&Value::from(0.3)));
    /// assert!(!Value::from(1.0).script_eq(&Value::from("1")));
    ///
    /// let left = Value::from(vec![Value::from(1.0), Value::from("a")]);
    /// let right = Value::from(vec![Value::from(1.0), Value::from("a")]);
    /// assert!(left.script_eq(&right));
    /// ```
    #[must_use]
    pub fn script_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => (a - b).abs() < EPSILON,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.script_eq(y))
            },
            (Self::Opaque(a), Self::Opaque(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Returns `true` if the value is [`Value::Text`].
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }

    /// Returns `true` if the value is [`Value::List`].
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.script_eq(other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::List(list) => {
                write!(f, "[")?;

                for (index, value) in list.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Opaque(_) => write!(f, "<object>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_in_shortest_form() {
        assert_eq!(Value::from(7.0).to_string(), "7");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(-3.0).to_string(), "-3");
    }

    #[test]
    fn nested_lists_render_recursively() {
        let inner = Value::from(vec![Value::from("x"), Value::from(false)]);
        let outer = Value::from(vec![Value::from(1.0), inner]);
        assert_eq!(outer.to_string(), "[1, [x, false]]");
        assert_eq!(Value::from(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn opaque_values_compare_by_identity() {
        let object = HostObject::new(5_u8);
        let same = Value::Opaque(object.clone());
        assert!(Value::Opaque(object).script_eq(&same));
        assert!(!same.script_eq(&Value::Opaque(HostObject::new(5_u8))));
        assert_eq!(same.to_string(), "<object>");
    }

    #[test]
    fn list_equality_respects_epsilon_and_length() {
        let a = Value::from(vec![Value::from(0.1 + 0.2)]);
        let b = Value::from(vec![Value::from(0.3)]);
        let c = Value::from(vec![Value::from(0.3), Value::from(0.3)]);
        assert!(a.script_eq(&b));
        assert!(!a.script_eq(&c));
    }

    #[test]
    fn kinds_map_to_type_names() {
        for kind in [ValueKind::Number, ValueKind::Text, ValueKind::Boolean, ValueKind::List, ValueKind::Opaque] {
            assert_eq!(ValueKind::from_type_name(kind.type_name()), Some(kind));
        }
    }
}
