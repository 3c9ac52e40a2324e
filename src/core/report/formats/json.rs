//! JSON report generator

use crate::core::get_version;
use crate::core::progress_export::{ClassSummary, ProgressRow};
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    title: &'a str,
    class_name: &'a str,
    teacher: Option<&'a str>,
    generator: String,
    summary: &'a ClassSummary,
    students: &'a [ProgressRow],
}

/// Pretty-printed JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let report = JsonReport {
            title: ctx.title,
            class_name: ctx.class_name(),
            teacher: ctx.roster.teacher.as_deref(),
            generator: format!("hlaqh {}", get_version()),
            summary: ctx.summary,
            students: ctx.rows,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::progress_export::compute_rows;
    use crate::core::report::test_support::sample_roster;

    #[test]
    fn renders_camel_case_json() {
        let roster = sample_roster();
        let rows = compute_rows(&roster);
        let summary = ClassSummary::from_rows(&rows);
        let ctx = ReportContext::new(&roster, &rows, &summary, "Progress");

        let output = JsonReporter::new().render(&ctx).expect("render");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");

        assert_eq!(value["className"], "Halaqa Al-Noor");
        assert_eq!(value["summary"]["studentCount"], 3);
        assert_eq!(value["students"][0]["name"], "Yusuf");
        assert_eq!(value["students"][0]["status"], "recorded");
        assert_eq!(value["students"][0]["report"]["memorizedAyahs"], 18);
        assert_eq!(value["students"][0]["report"]["currentSurah"]["englishName"], "Al-Falaq");
        assert_eq!(value["students"][2]["status"], "not-started");
        assert!(value["students"][2]["memorized"].is_null());
    }
}
