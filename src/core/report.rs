use crate::domain::model::{Dependency, DependencyReport, OutputFormat, ScopeSummary};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

const SECURITY_NOTE: [&str; 2] = [
    "  Note: For real security scanning, integrate with",
    "  OWASP dependency-check or Snyk.",
];

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    scopes: Option<&'a BTreeMap<String, usize>>,
    dependencies: &'a [Dependency],
}

impl DependencyReport {
    pub fn new(dependencies: Vec<Dependency>, include_scopes: bool) -> Self {
        let summary = ScopeSummary::from_dependencies(&dependencies);
        Self {
            dependencies,
            summary,
            include_scopes,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<Vec<String>> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
            OutputFormat::Csv => self.render_csv(),
        }
    }

    fn render_text(&self) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            format!("Found {} dependencies", self.summary.total()),
            String::new(),
        ];

        if self.include_scopes {
            for (scope, count) in &self.summary.scopes {
                lines.push(format!("  {}: {} dependencies", scope, count));
            }
        }

        lines.push(String::new());
        lines.extend(SECURITY_NOTE.iter().map(|s| s.to_string()));
        lines
    }

    fn render_json(&self) -> Result<Vec<String>> {
        let report = JsonReport {
            generated_at: Utc::now(),
            total: self.summary.total(),
            scopes: self.include_scopes.then_some(&self.summary.scopes),
            dependencies: &self.dependencies,
        };
        let json = serde_json::to_string_pretty(&report)?;
        Ok(json.lines().map(str::to_string).collect())
    }

    fn render_csv(&self) -> Result<Vec<String>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["group", "artifact", "type", "classifier", "version", "scope"])?;
        for dep in &self.dependencies {
            writer.write_record([
                dep.group.as_str(),
                dep.artifact.as_str(),
                dep.packaging.as_str(),
                dep.classifier.as_deref().unwrap_or(""),
                dep.version.as_str(),
                dep.scope.as_str(),
            ])?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&data)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{parse_tree, ParseOptions};

    const TREE: &str = "\
com.example:demo:jar:1.0
+- org.postgresql:postgresql:jar:42.6.0:runtime
\\- junit:junit:jar:4.13.2:test";

    fn report(include_scopes: bool) -> DependencyReport {
        DependencyReport::new(parse_tree(TREE, ParseOptions::default()), include_scopes)
    }

    #[test]
    fn test_text_report_layout() {
        let lines = report(true).render(OutputFormat::Text).unwrap();
        assert_eq!(
            lines,
            vec![
                "",
                "Found 3 dependencies",
                "",
                "  compile: 1 dependencies",
                "  runtime: 1 dependencies",
                "  test: 1 dependencies",
                "",
                "  Note: For real security scanning, integrate with",
                "  OWASP dependency-check or Snyk.",
            ]
        );
    }

    #[test]
    fn test_security_only_omits_scope_lines() {
        let lines = report(false).render(OutputFormat::Text).unwrap();
        assert!(lines.contains(&"Found 3 dependencies".to_string()));
        assert!(!lines.iter().any(|l| l.contains(": 1 dependencies")));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_json_report() {
        let json = report(true).render(OutputFormat::Json).unwrap().join("\n");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["scopes"]["runtime"], 1);
        assert_eq!(value["dependencies"][1]["artifact"], "postgresql");
        assert_eq!(value["dependencies"][1]["type"], "jar");

        let json = report(false).render(OutputFormat::Json).unwrap().join("\n");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("scopes").is_none());
    }

    #[test]
    fn test_csv_report() {
        let lines = report(true).render(OutputFormat::Csv).unwrap();
        assert_eq!(lines[0], "group,artifact,type,classifier,version,scope");
        assert_eq!(lines[2], "org.postgresql,postgresql,jar,,42.6.0,runtime");
        assert_eq!(lines.len(), 4);
    }
}
