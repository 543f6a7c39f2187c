/// Host-defined objects.
///
/// Defines `HostObject`, the payload of `Value::Opaque`. The interpreter never
/// looks inside it; host functions create it and downcast it back.
pub mod host_object;

/// The runtime value type.
///
/// Declares `Value`, its kinds, conversions, rendering and the equality rules
/// used by the `=` operator and by list membership.
pub mod core;
