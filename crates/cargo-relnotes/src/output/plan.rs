use std::fmt::Write as _;

use relnotes_core::Release;
use relnotes_operations::operations::PlanOutput;
use serde_json::json;

use crate::error::Result;

pub(crate) trait PlanFormatter {
    fn format_plan(&self, output: &PlanOutput) -> Result<String>;
}

pub(crate) struct PlainTextPlanFormatter;

impl PlainTextPlanFormatter {
    fn format_release(buf: &mut String, release: &Release) {
        let _ = writeln!(
            buf,
            "  {}: {} -> {} ({}, {} changeset{})",
            release.name,
            release.old_version,
            release.new_version,
            release.bump_type,
            release.changesets.len(),
            if release.changesets.len() == 1 { "" } else { "s" },
        );
    }

    fn format_skipped(buf: &mut String, output: &PlanOutput, selected: &[&Release]) {
        let skipped: Vec<_> = output
            .plan
            .releases
            .iter()
            .filter(|r| !selected.iter().any(|s| s.name == r.name))
            .collect();
        if skipped.is_empty() {
            return;
        }

        buf.push_str("\nLeft out of the changelog:\n");
        for release in skipped {
            let _ = writeln!(buf, "  {}", release.name);
        }
    }

    fn format_unknown(buf: &mut String, output: &PlanOutput) {
        if output.plan.unknown_packages.is_empty() {
            return;
        }

        buf.push_str("\nUnknown packages:\n");
        for name in &output.plan.unknown_packages {
            let _ = writeln!(buf, "  {name}");
        }
    }
}

impl PlanFormatter for PlainTextPlanFormatter {
    fn format_plan(&self, output: &PlanOutput) -> Result<String> {
        let mut buf = String::new();

        if output.plan.changesets.is_empty() {
            buf.push_str("No pending changesets.\n");
            return Ok(buf);
        }

        let _ = writeln!(buf, "Pending changesets: {}", output.plan.changesets.len());

        let selected = output.selected();
        if selected.is_empty() {
            buf.push_str("\nNothing to report in the changelog.\n");
        } else {
            buf.push_str("\nChangelog entries:\n");
            for release in &selected {
                Self::format_release(&mut buf, release);
            }
        }

        Self::format_skipped(&mut buf, output, &selected);
        Self::format_unknown(&mut buf, output);

        Ok(buf)
    }
}

pub(crate) struct JsonPlanFormatter;

impl PlanFormatter for JsonPlanFormatter {
    fn format_plan(&self, output: &PlanOutput) -> Result<String> {
        let selected: Vec<&str> = output.selected().into_iter().map(|r| r.name.as_str()).collect();
        let value = json!({
            "project_root": output.project_root,
            "releases": output.plan.releases,
            "changesets": output.plan.changesets,
            "unknown_packages": output.plan.unknown_packages,
            "selected": selected,
        });

        let mut rendered = serde_json::to_string_pretty(&value)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
