//! YAML front-matter parsing for store files

use serde_yaml::Value;

/// Parse the YAML front-matter block (between the first `---` line and the
/// next) into a mapping. Returns `None` when there is no valid front-matter;
/// the caller then falls back to filename-derived metadata.
pub fn parse_frontmatter(content: &str) -> Option<Value> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 3 || lines[0].trim() != "---" {
        return None;
    }
    let end_idx = lines[1..].iter().position(|l| l.trim() == "---")? + 1;
    let frontmatter_str = lines[1..end_idx].join("\n");
    let value: Value = serde_yaml::from_str(&frontmatter_str).ok()?;
    if value.as_mapping().is_none() {
        return None;
    }
    Some(value)
}

/// Extract a `name:` override from a file's front-matter, if present
pub fn name_override(content: &str) -> Option<String> {
    let value = parse_frontmatter(content)?;
    let name = value.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frontmatter_mapping() {
        let content = "---\nname: pm\nrole: planner\n---\n\n# PM\n";
        let value = parse_frontmatter(content);
        assert!(value.is_some());
    }

    #[test]
    fn test_parse_frontmatter_missing_delimiters() {
        assert!(parse_frontmatter("# Just markdown\n").is_none());
        assert!(parse_frontmatter("---\nunterminated: yes\n").is_none());
    }

    #[test]
    fn test_parse_frontmatter_non_mapping_rejected() {
        assert!(parse_frontmatter("---\n- a\n- b\n---\nbody\n").is_none());
    }

    #[test]
    fn test_name_override_present() {
        let content = "---\nname: product-manager\n---\n\nbody\n";
        assert_eq!(
            name_override(content),
            Some("product-manager".to_string())
        );
    }

    #[test]
    fn test_name_override_absent_or_empty() {
        assert_eq!(name_override("---\nrole: planner\n---\nbody\n"), None);
        assert_eq!(name_override("---\nname: \"\"\n---\nbody\n"), None);
        assert_eq!(name_override("no frontmatter"), None);
    }

    #[test]
    fn test_name_override_invalid_yaml() {
        assert_eq!(name_override("---\nname: [unclosed\n---\nbody\n"), None);
    }
}
