//! Test fixture generators for integration tests.
#![allow(dead_code)]

use typeviz::adapters::catalog::{FactCatalog, ModuleFacts};
use typeviz::domain::ports::TypeFact;

/// Fact with the short name taken from the last segment of `id`.
pub fn fact(id: &str, namespace: &str, base: Option<&str>, interfaces: &[&str]) -> TypeFact {
    TypeFact {
        id: id.to_string(),
        name: id.rsplit('.').next().unwrap_or(id).to_string(),
        namespace: Some(namespace.to_string()),
        base_type: base.map(str::to_string),
        interfaces: interfaces.iter().map(|s| s.to_string()).collect(),
        load_error: None,
    }
}

pub fn interface(id: &str, namespace: &str) -> TypeFact {
    fact(id, namespace, None, &[])
}

pub fn module(name: &str, types: Vec<TypeFact>) -> ModuleFacts {
    ModuleFacts {
        name: name.to_string(),
        types,
    }
}

pub fn system_module() -> ModuleFacts {
    module(
        "System.Runtime",
        vec![
            fact("System.Object", "System", None, &[]),
            interface("System.IDisposable", "System"),
        ],
    )
}

/// Small shape hierarchy plus a type implementing a standard library interface.
///
/// ```text
/// Acme.Shape  --Implements-->  Acme.IDrawable
/// Acme.Circle --DerivesFrom--> Acme.Shape         (IDrawable inherited, no extra edge)
/// Acme.Square --DerivesFrom--> Acme.Shape
/// Acme.Square --Implements-->  Acme.IComparable
/// Acme.Extras.Widget --Implements--> System.IDisposable
/// ```
pub fn shapes_catalog() -> FactCatalog {
    FactCatalog::new(vec![
        module(
            "Acme.Core",
            vec![
                interface("Acme.IDrawable", "Acme"),
                interface("Acme.IComparable", "Acme"),
                fact("Acme.Shape", "Acme", Some("System.Object"), &["Acme.IDrawable"]),
                fact("Acme.Circle", "Acme", Some("Acme.Shape"), &["Acme.IDrawable"]),
                fact(
                    "Acme.Square",
                    "Acme",
                    Some("Acme.Shape"),
                    &["Acme.IDrawable", "Acme.IComparable"],
                ),
            ],
        ),
        module(
            "Acme.Extras",
            vec![fact(
                "Acme.Extras.Widget",
                "Acme.Extras",
                Some("System.Object"),
                &["System.IDisposable"],
            )],
        ),
        system_module(),
    ])
}

/// `A -> B -> C` and a separate `D -> E`, all DerivesFrom.
pub fn chain_catalog() -> FactCatalog {
    FactCatalog::new(vec![module(
        "Chain",
        vec![
            fact("Chain.A", "Chain", Some("Chain.B"), &[]),
            fact("Chain.B", "Chain", Some("Chain.C"), &[]),
            fact("Chain.C", "Chain", None, &[]),
            fact("Chain.D", "Chain", Some("Chain.E"), &[]),
            fact("Chain.E", "Chain", None, &[]),
        ],
    )])
}

/// `A -> B -> A`, which no real type system allows but broken metadata can claim.
pub fn cycle_catalog() -> FactCatalog {
    FactCatalog::new(vec![module(
        "Cycle",
        vec![
            fact("Cycle.A", "Cycle", Some("Cycle.B"), &[]),
            fact("Cycle.B", "Cycle", Some("Cycle.A"), &[]),
        ],
    )])
}

pub const SHAPES_JSON: &str = r#"{
  "modules": [
    { "name": "Acme.Core", "types": [
      { "id": "Acme.IDrawable", "name": "IDrawable", "namespace": "Acme" },
      { "id": "Acme.Shape", "name": "Shape", "namespace": "Acme",
        "base_type": "System.Object", "interfaces": ["Acme.IDrawable"] },
      { "id": "Acme.Circle", "name": "Circle", "namespace": "Acme",
        "base_type": "Acme.Shape", "interfaces": ["Acme.IDrawable"] }
    ] },
    { "name": "System.Runtime", "types": [
      { "id": "System.Object", "name": "Object", "namespace": "System" }
    ] }
  ]
}"#;
