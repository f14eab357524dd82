use crate::domain::model::{Dependency, DEFAULT_SCOPE};
use regex::Regex;
use std::sync::OnceLock;

const TREE_CHARS: &[char] = &['+', '-', '\\', '|', ' '];

fn log_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*\[(INFO|WARNING|WARN|ERROR|DEBUG)\]\s?").expect("valid log prefix regex")
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Drop a leading `[INFO] ` style tag before parsing.
    pub strip_log_prefix: bool,
}

/// Parse every line of `mvn dependency:tree` text output, skipping anything
/// that does not look like a dependency.
pub fn parse_tree(text: &str, options: ParseOptions) -> Vec<Dependency> {
    let dependencies: Vec<Dependency> = text
        .trim()
        .lines()
        .filter_map(|line| parse_line_with(line, options))
        .collect();

    tracing::debug!(
        "Parsed {} dependencies from {} lines",
        dependencies.len(),
        text.trim().lines().count()
    );

    dependencies
}

/// Besides the 4/5-field forms, a 6-field line is read as
/// `group:artifact:type:classifier:version:scope`, text after the scope such as
/// `(optional)` is dropped, and an empty or whitespace-containing group or
/// artifact marks the line as malformed.
pub fn parse_line(line: &str) -> Option<Dependency> {
    parse_line_with(line, ParseOptions::default())
}

fn parse_line_with(line: &str, options: ParseOptions) -> Option<Dependency> {
    let line = if options.strip_log_prefix {
        log_prefix_regex().replace(line, "")
    } else {
        line.into()
    };

    let stripped = line.trim().trim_start_matches(TREE_CHARS);
    if !stripped.contains(':') || stripped.starts_with('[') {
        return None;
    }

    let parts: Vec<&str> = stripped.split(':').collect();
    if parts.len() < 4 {
        return None;
    }
    if parts[..2]
        .iter()
        .any(|p| p.is_empty() || p.contains(char::is_whitespace))
    {
        return None;
    }

    let (classifier, version, scope) = match parts.len() {
        4 => (None, parts[3], None),
        5 => (None, parts[3], Some(parts[4])),
        // group:artifact:type:classifier:version:scope
        _ => (Some(parts[3]), parts[4], Some(parts[5])),
    };

    // `compile (optional)` 之類的尾註只保留 scope 本身
    let scope = scope
        .and_then(|s| s.split_whitespace().next())
        .unwrap_or(DEFAULT_SCOPE);

    Some(Dependency {
        group: parts[0].to_string(),
        artifact: parts[1].to_string(),
        packaging: parts[2].to_string(),
        classifier: classifier.map(str::to_string),
        version: version.to_string(),
        scope: scope.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_five_field_line() {
        let dep = parse_line("group:artifact:jar:1.0:compile").unwrap();
        assert_eq!(dep.group, "group");
        assert_eq!(dep.artifact, "artifact");
        assert_eq!(dep.packaging, "jar");
        assert_eq!(dep.version, "1.0");
        assert_eq!(dep.scope, "compile");
        assert_eq!(dep.classifier, None);
    }

    #[test]
    fn test_tree_characters_are_stripped() {
        let dep = parse_line("|  +- org.slf4j:slf4j-api:jar:2.0.9:runtime").unwrap();
        assert_eq!(dep.group, "org.slf4j");
        assert_eq!(dep.scope, "runtime");

        let dep = parse_line("   \\- junit:junit:jar:4.13.2:test").unwrap();
        assert_eq!(dep.group, "junit");
        assert_eq!(dep.scope, "test");
    }

    #[test]
    fn test_four_fields_default_to_compile_scope() {
        let dep = parse_line("com.example:app:jar:1.0-SNAPSHOT").unwrap();
        assert_eq!(dep.version, "1.0-SNAPSHOT");
        assert_eq!(dep.scope, DEFAULT_SCOPE);
    }

    #[test]
    fn test_classifier_form() {
        let dep = parse_line("+- io.netty:netty-transport:jar:linux-x86_64:4.1.100:runtime").unwrap();
        assert_eq!(dep.classifier.as_deref(), Some("linux-x86_64"));
        assert_eq!(dep.version, "4.1.100");
        assert_eq!(dep.scope, "runtime");
    }

    #[test]
    fn test_trailing_annotation_is_dropped() {
        let dep = parse_line("+- com.google.code.findbugs:jsr305:jar:3.0.2:compile (optional)").unwrap();
        assert_eq!(dep.scope, "compile");
    }

    #[test]
    fn test_lines_without_colon_or_with_bracket_are_skipped() {
        assert!(parse_line("BUILD SUCCESS").is_none());
        assert!(parse_line("").is_none());
        assert!(parse_line("[INFO] com.example:app:jar:1.0").is_none());
        assert!(parse_line("[INFO] --- maven-dependency-plugin:3.6.0:tree (default-cli) @ app ---").is_none());
        assert!(parse_line("a:b:c").is_none());
        assert!(parse_line("Finished at: 2024-01-01T10:00:00Z").is_none());
    }

    #[test]
    fn test_log_prefix_stripping_is_opt_in() {
        let options = ParseOptions {
            strip_log_prefix: true,
        };
        let deps = parse_tree(
            "[INFO] com.example:app:jar:1.0\n[INFO] +- junit:junit:jar:4.13.2:test\n[INFO] BUILD SUCCESS",
            options,
        );
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[1].artifact, "junit");

        let deps = parse_tree("[INFO] +- junit:junit:jar:4.13.2:test", ParseOptions::default());
        assert!(deps.is_empty());
    }
}
