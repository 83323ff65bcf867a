//! Hierarchy builder: flat manager-pointer records to owned report trees.

use std::collections::HashMap;

use super::entities::{Employee, EmployeeNode};

/// Build the management forest from a flat record list.
///
/// Records are grouped by their `manager` field into an adjacency map, then
/// owned nodes are materialized top-down from the `None` group (the roots),
/// each node pulling its direct reports from the map. Input order is kept
/// within every group.
///
/// Precondition: the roster is well formed (unique ids, resolvable manager
/// references, no cycles). The builder does not verify this; a record whose
/// manager id matches no root-reachable record is silently absent from the
/// result, and ill-formed input yields unspecified output.
pub fn build_hierarchies(employees: &[Employee]) -> Vec<EmployeeNode> {
    let mut reports: HashMap<Option<i64>, Vec<&Employee>> = HashMap::new();
    for employee in employees {
        reports.entry(employee.manager).or_default().push(employee);
    }

    match reports.get(&None) {
        Some(roots) => roots
            .iter()
            .map(|employee| materialize(employee, &reports))
            .collect(),
        None => Vec::new(),
    }
}

fn materialize(employee: &Employee, reports: &HashMap<Option<i64>, Vec<&Employee>>) -> EmployeeNode {
    let direct = match reports.get(&Some(employee.id)) {
        Some(group) => group
            .iter()
            .map(|report| materialize(report, reports))
            .collect(),
        None => Vec::new(),
    };

    EmployeeNode {
        id: employee.id,
        first_name: employee.first_name.clone(),
        reports: direct,
    }
}
