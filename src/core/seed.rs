use crate::domain::model::{OutputFormat, SeedEntry};
use crate::utils::error::Result;

pub const SEED_HEADER: &str = "Seeding test data...";
pub const SEED_FOOTER: &str = "✓ Seed data inserted (dry-run — connect to your DB to enable)";

/// 範例資料，不會真的連到資料庫
pub fn seed_entries() -> Vec<SeedEntry> {
    [
        ("User", 10, "admin + 9 regular users"),
        ("Product", 50, "across 5 categories"),
        ("Order", 25, "various statuses"),
    ]
    .into_iter()
    .map(|(entity, count, note)| SeedEntry {
        entity: entity.to_string(),
        count,
        note: note.to_string(),
    })
    .collect()
}

impl SeedEntry {
    pub fn display_line(&self) -> String {
        format!("  → {}: {} records ({})", self.entity, self.count, self.note)
    }
}

pub fn render_seed(entries: &[SeedEntry], format: OutputFormat) -> Result<Vec<String>> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![SEED_HEADER.to_string(), String::new()];
            lines.extend(entries.iter().map(SeedEntry::display_line));
            lines.push(String::new());
            lines.push(SEED_FOOTER.to_string());
            Ok(lines)
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(entries)?;
            Ok(json.lines().map(str::to_string).collect())
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for entry in entries {
                writer.serialize(entry)?;
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_fixed_entries() {
        let entries = seed_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].entity, "User");
        assert_eq!(entries[1].count, 50);
        assert_eq!(entries[2].note, "various statuses");
    }

    #[test]
    fn test_text_output() {
        let lines = render_seed(&seed_entries(), OutputFormat::Text).unwrap();
        assert_eq!(
            lines,
            vec![
                "Seeding test data...",
                "",
                "  → User: 10 records (admin + 9 regular users)",
                "  → Product: 50 records (across 5 categories)",
                "  → Order: 25 records (various statuses)",
                "",
                "✓ Seed data inserted (dry-run — connect to your DB to enable)",
            ]
        );
    }

    #[test]
    fn test_csv_output() {
        let lines = render_seed(&seed_entries(), OutputFormat::Csv).unwrap();
        assert_eq!(lines[0], "entity,count,note");
        assert_eq!(lines[1], "User,10,admin + 9 regular users");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_json_output() {
        let json = render_seed(&seed_entries(), OutputFormat::Json)
            .unwrap()
            .join("\n");
        let parsed: Vec<SeedEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, seed_entries());
    }
}
