use std::{any::Any, fmt, rc::Rc};

/// An object owned by the embedding application.
///
/// Scripts can store it in variables and lists and hand it back to host
/// functions, but no operator inspects it. Two host objects are equal only if
/// they are the same allocation.
///
/// # Example
/// ```
/// use sgl::interpreter::value::host_object::HostObject;
///
/// let object = HostObject::new(String::from("handle"));
/// let alias = object.clone();
///
/// assert!(object.ptr_eq(&alias));
/// assert_eq!(alias.downcast_ref::<String>().map(String::as_str), Some("handle"));
/// assert!(!object.ptr_eq(&HostObject::new(String::from("handle"))));
/// ```
#[derive(Clone)]
pub struct HostObject(Rc<dyn Any>);

impl HostObject {
    /// Wraps a host value.
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Borrows the wrapped value if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns `true` if both handles point at the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostObject({:p})", Rc::as_ptr(&self.0).cast::<()>())
    }
}

impl PartialEq for HostObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
