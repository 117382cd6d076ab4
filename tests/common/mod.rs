#![allow(dead_code)]

pub use pensum_test_utils::builders;
pub use pensum_test_utils::{init_tracing, write_file};

use pensum::catalog::Catalog;

use crate::common::builders::CatalogBuilder;

/// `A(3)`, then `B(4)` and `C(4)` both after `A`.
pub fn fan_out() -> Catalog {
    CatalogBuilder::new()
        .course("A", 3, &[])
        .course("B", 4, &["A"])
        .course("C", 4, &["A"])
        .build()
}

/// `A -> B -> C` chain, 3 credits each.
pub fn chain() -> Catalog {
    CatalogBuilder::new()
        .course("A", 3, &[])
        .course("B", 3, &["A"])
        .course("C", 3, &["B"])
        .build()
}

pub const SAMPLE_CATALOG_JSON: &str = r#"
{
  "courses": [
    { "code": "MAT101", "name": "Calculus I", "credits": 4, "prerequisites": [] },
    { "code": "FIS101", "name": "Physics I", "credits": 4, "prerequisites": ["MAT101"] },
    { "code": "MAT102", "name": "Calculus II", "credits": 4, "prerequisites": ["MAT101"] },
    { "code": "PRG101", "name": "Programming I", "credits": 3 },
    { "code": "PRG102", "name": "Programming II", "credits": 3, "prerequisites": ["PRG101"] },
    { "code": "EST201", "name": "Statistics", "credits": 3, "prerequisites": ["MAT102"] }
  ]
}
"#;
