//! Domain entities: core data structures

use serde::Deserialize;

/// One flat roster entry, as it appears in the input file.
///
/// Records are read-only facts supplied once per run. `manager` points at
/// another record's `id`; `None` marks a top-level employee.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Employee {
    /// Unique numeric identifier
    pub id: i64,
    /// Display name
    pub first_name: String,
    /// `id` of this employee's manager, `None` for roots
    pub manager: Option<i64>,
    /// Salary, may be fractional
    pub salary: f64,
}

/// One employee after hierarchy reconstruction, owning its direct reports.
///
/// Nodes form strict ownership trees: no back references, no sharing. A
/// leaf carries an empty `reports` vec.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeNode {
    pub id: i64,
    pub first_name: String,
    pub reports: Vec<EmployeeNode>,
}

impl EmployeeNode {
    /// Depth of the subtree rooted at this node (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .reports
            .iter()
            .map(EmployeeNode::depth)
            .max()
            .unwrap_or(0)
    }
}
