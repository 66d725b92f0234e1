//! Value object trait: equality by value, not identity.
//!
//! PO numbers, financial years and line items have no identity of their own.
//! Two values with the same fields are the same value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// derive a new value from it (e.g. `PoNumber::with_revision`).
///
/// ## Design Constraints
///
/// - **Clone**: values are copied around freely between the form and the calculators
/// - **PartialEq**: compared by attribute values
/// - **Debug**: shows up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct FinancialYear { start_year: i32 }
///
/// impl ValueObject for FinancialYear {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
