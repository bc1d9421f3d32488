//! Worker group block of the cluster document.

use shipwright_api::WorkerGroup;

use crate::hcl::quote;

/// Subnet expression every worker group is placed in.
pub const WORKER_SUBNETS: &str = r#""${join(",", local.eks_vpc_private_subnets)}""#;

/// Render `local.worker_group_count` and `local.worker_groups`.
///
/// Groups keep their input order. A group's size is its minimum, maximum and
/// desired capacity.
pub fn render(groups: &[WorkerGroup]) -> String {
    let mut out = String::from("\nlocals {\n");
    out.push_str(&format!(
        "  \"worker_group_count\" = {}\n",
        quote(&groups.len().to_string())
    ));
    out.push_str("}\n");

    out.push_str("\nlocals {\n");
    out.push_str("  \"worker_groups\" = [\n");
    for group in groups {
        out.push_str(&render_group(group));
    }
    out.push_str("  ]\n");
    out.push_str("}\n");
    out
}

fn render_group(group: &WorkerGroup) -> String {
    let size = quote(&group.size.to_string());

    let mut out = String::from("    {\n");
    out.push_str(&format!("      name                 = {}\n", quote(&group.name)));
    out.push_str(&format!("      asg_min_size         = {size}\n"));
    out.push_str(&format!("      asg_max_size         = {size}\n"));
    out.push_str(&format!("      asg_desired_capacity = {size}\n"));
    out.push_str(&format!("      instance_type        = {}\n", quote(&group.machine_type)));
    out.push('\n');
    out.push_str(&format!("      subnets = {WORKER_SUBNETS}\n"));
    out.push_str("    },\n");
    out
}
