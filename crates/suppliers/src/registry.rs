use serde::{Deserialize, Serialize};

use faturas_core::{DomainError, DomainResult};

/// Suppliers the purchasing desk starts with.
const DEFAULT_SUPPLIERS: &[&str] = &[
    "BERKLEY",
    "BRASIL SERVIÇOS",
    "BUONNY",
    "E-SALES",
    "EZ TOOLS",
    "FUSION",
    "KM STAFF",
    "NISSEYS",
    "NUNES TRANSPORTES",
    "PAES E DOCES JARDIM THELMA",
    "PALLEFORT COMERCIO",
    "PANIFICADORA MM",
    "THEODORO GÁS",
];

/// Suppliers allowed to appear more than once in the same competency month.
const DUPLICATE_EXEMPT: &[&str] = &["BUONNY"];

/// A vendor entity invoices are billed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    /// CNPJ or similar; inert pass-through attribute.
    pub tax_id: Option<String>,
    /// Whether this supplier may have multiple invoices per period.
    pub duplicate_exempt: bool,
}

/// Known suppliers, deduped case-insensitively by name.
///
/// The enumeration is open: names beyond the seeded defaults can be
/// registered at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRegistry {
    suppliers: Vec<Supplier>,
}

fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}

impl SupplierRegistry {
    /// Empty registry (closed-list variants seed their own).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the desk's default supplier list.
    pub fn with_defaults() -> Self {
        let suppliers = DEFAULT_SUPPLIERS
            .iter()
            .map(|name| Supplier {
                name: (*name).to_string(),
                tax_id: None,
                duplicate_exempt: DUPLICATE_EXEMPT.contains(name),
            })
            .collect();
        Self { suppliers }
    }

    /// Register a new supplier.
    ///
    /// Names are compared trimmed and case-insensitively; an empty name is a
    /// validation error, a known name is a conflict.
    pub fn register(&mut self, supplier: Supplier) -> DomainResult<()> {
        let name = supplier.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }
        if self.contains(name) {
            return Err(DomainError::conflict(format!(
                "supplier '{name}' is already registered"
            )));
        }
        self.suppliers.push(Supplier {
            name: name.to_string(),
            ..supplier
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = normalize(name);
        self.suppliers.iter().any(|s| normalize(&s.name) == key)
    }

    /// Whether `name` may appear multiple times in one period.
    ///
    /// Unknown suppliers are not exempt.
    pub fn is_duplicate_exempt(&self, name: &str) -> bool {
        let key = normalize(name);
        self.suppliers
            .iter()
            .any(|s| s.duplicate_exempt && normalize(&s.name) == key)
    }

    pub fn get(&self, name: &str) -> Option<&Supplier> {
        let key = normalize(name);
        self.suppliers.iter().find(|s| normalize(&s.name) == key)
    }

    /// All suppliers, sorted by name for stable form rendering.
    pub fn sorted(&self) -> Vec<&Supplier> {
        let mut out: Vec<&Supplier> = self.suppliers.iter().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(name: &str) -> Supplier {
        Supplier {
            name: name.to_string(),
            tax_id: None,
            duplicate_exempt: false,
        }
    }

    #[test]
    fn defaults_include_the_exempt_supplier() {
        let registry = SupplierRegistry::with_defaults();
        assert_eq!(registry.len(), 13);
        assert!(registry.is_duplicate_exempt("BUONNY"));
        assert!(!registry.is_duplicate_exempt("E-SALES"));
    }

    #[test]
    fn unknown_supplier_is_not_exempt() {
        let registry = SupplierRegistry::with_defaults();
        assert!(!registry.is_duplicate_exempt("ACME"));
    }

    #[test]
    fn register_rejects_empty_name() {
        let mut registry = SupplierRegistry::new();
        let err = registry.register(supplier("   ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn register_dedupes_case_insensitively() {
        let mut registry = SupplierRegistry::new();
        registry.register(supplier("Acme Ltda")).unwrap();
        let err = registry.register(supplier("  acme ltda ")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn sorted_returns_names_in_order() {
        let mut registry = SupplierRegistry::new();
        registry.register(supplier("ZETA")).unwrap();
        registry.register(supplier("ALFA")).unwrap();
        let names: Vec<&str> = registry.sorted().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["ALFA", "ZETA"]);
    }
}
