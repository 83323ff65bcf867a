//! Tree renderer: sorted, indented ASCII output plus the salary summary.

use super::entities::{Employee, EmployeeNode};

/// Indent applied once per nesting level.
const INDENT: &str = "    ";

/// Render one employee as an ASCII tree fragment.
///
/// A leaf is the single line `- <first_name>`. A manager additionally gets
/// an `Employees:` header followed by its rendered reports.
pub fn render_node(node: &EmployeeNode) -> String {
    let mut rendered = format!("- {}", node.first_name);

    if !node.reports.is_empty() {
        rendered.push_str("\n  Employees:\n");
        rendered.push_str(&render_forest(&node.reports));
    }

    rendered
}

/// Render a forest of sibling nodes, sorted by first name.
///
/// The sort is stable, so equal names keep their input order. The joined
/// block is re-indented at every recursion level: a line at depth N ends up
/// with 4*(N+1) leading spaces in the outermost result.
pub fn render_forest(nodes: &[EmployeeNode]) -> String {
    let mut sorted: Vec<&EmployeeNode> = nodes.iter().collect();
    sorted.sort_by(|a, b| a.first_name.cmp(&b.first_name));

    let block = sorted
        .iter()
        .map(|node| render_node(node))
        .collect::<Vec<_>>()
        .join("\n");

    indent(&block)
}

/// Render the complete summary: hierarchy block, blank line, salary total.
///
/// The total sums `salary` over the entire flat roster, not the forest, so
/// records unreachable from any root still count. An empty forest collapses
/// to the bare total line.
pub fn render_summary(employees: &[Employee], forest: &[EmployeeNode]) -> String {
    let total: f64 = employees.iter().map(|employee| employee.salary).sum();

    let hierarchies = render_forest(forest);
    let hierarchies = hierarchies.trim_end();

    if hierarchies.is_empty() {
        format!("Total salary: {total}")
    } else {
        format!("{hierarchies}\n\nTotal salary: {total}")
    }
}

/// Prefix every non-empty line of `block` with one indent step.
fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
