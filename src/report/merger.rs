use crate::report::document::Document;

/// Fold one source document's file groups into the accumulating destination.
///
/// Each incoming group's path is passed through `normalize` first. When the
/// destination already holds a group with the same path, the incoming
/// violations are appended to it; otherwise the group is pushed at the end.
/// Ordering is finalized later by [`sort_document`], not here.
pub fn merge_into(
    source: Document,
    destination: &mut Document,
    normalize: impl Fn(&str) -> String,
) {
    for mut group in source.files {
        group.name = normalize(&group.name);

        if let Some(existing) = destination.files.iter_mut().find(|g| g.name == group.name) {
            existing.violations.append(&mut group.violations);
        } else {
            destination.files.push(group);
        }
    }
}

/// Impose the canonical order: file groups ascending by path, violations
/// within a group ascending by (line, column).
///
/// `sort_by` is stable, so violations tying exactly on (line, column) keep
/// their merge order and repeated runs produce byte-identical output.
/// Idempotent.
pub fn sort_document(document: &mut Document) {
    document.files.sort_by(|a, b| a.name.cmp(&b.name));
    for group in &mut document.files {
        group
            .violations
            .sort_by(|a, b| (a.line, a.column).cmp(&(b.line, b.column)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::document::{FileGroup, Violation};

    fn violation(line: u32, column: u32, message: &str) -> Violation {
        Violation {
            line,
            column,
            severity: "warning".to_string(),
            message: message.to_string(),
            source: "test-rule".to_string(),
        }
    }

    fn group(name: &str, violations: Vec<Violation>) -> FileGroup {
        FileGroup {
            name: name.to_string(),
            violations,
        }
    }

    fn identity(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn test_shared_path_concatenates_into_one_group() {
        let a = Document {
            version: String::new(),
            files: vec![group("src.go", vec![violation(1, 1, "first")])],
        };
        let b = Document {
            version: String::new(),
            files: vec![group("src.go", vec![violation(2, 20, "second")])],
        };

        let mut merged = Document::default();
        merge_into(a, &mut merged, identity);
        merge_into(b, &mut merged, identity);

        assert_eq!(merged.files.len(), 1);
        assert_eq!(merged.files[0].name, "src.go");
        let messages: Vec<_> = merged.files[0]
            .violations
            .iter()
            .map(|v| v.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_merge_applies_normalizer_before_matching() {
        let a = Document {
            version: String::new(),
            files: vec![group("/repo/src.go", vec![violation(1, 1, "abs")])],
        };
        let b = Document {
            version: String::new(),
            files: vec![group("src.go", vec![violation(2, 1, "rel")])],
        };

        let mut merged = Document::default();
        let strip = |name: &str| name.trim_start_matches("/repo/").to_string();
        merge_into(a, &mut merged, strip);
        merge_into(b, &mut merged, strip);

        // Both groups land under the normalized path
        assert_eq!(merged.files.len(), 1);
        assert_eq!(merged.files[0].name, "src.go");
        assert_eq!(merged.files[0].violations.len(), 2);
    }

    #[test]
    fn test_sort_orders_groups_and_violations() {
        let mut doc = Document {
            version: String::new(),
            files: vec![
                group(
                    "src2.go",
                    vec![violation(3, 1, "late"), violation(1, 2, "early")],
                ),
                group("src.go", vec![violation(2, 20, "b"), violation(2, 4, "a")]),
            ],
        };

        sort_document(&mut doc);

        assert_eq!(doc.files[0].name, "src.go");
        assert_eq!(doc.files[1].name, "src2.go");
        // column breaks the line tie in src.go
        assert_eq!(doc.files[0].violations[0].column, 4);
        assert_eq!(doc.files[0].violations[1].column, 20);
        // line 1 before line 3 in src2.go
        assert_eq!(doc.files[1].violations[0].line, 1);
        assert_eq!(doc.files[1].violations[1].line, 3);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut doc = Document {
            version: String::new(),
            files: vec![
                group("b.go", vec![violation(2, 1, "x"), violation(1, 1, "y")]),
                group("a.go", vec![violation(5, 3, "z")]),
            ],
        };

        sort_document(&mut doc);
        let once = doc.clone();
        sort_document(&mut doc);
        assert_eq!(doc, once);
    }

    #[test]
    fn test_exact_position_ties_keep_merge_order() {
        let a = Document {
            version: String::new(),
            files: vec![group("src.go", vec![violation(1, 1, "from-a")])],
        };
        let b = Document {
            version: String::new(),
            files: vec![group("src.go", vec![violation(1, 1, "from-b")])],
        };

        let mut merged = Document::default();
        merge_into(a, &mut merged, identity);
        merge_into(b, &mut merged, identity);
        sort_document(&mut merged);

        let messages: Vec<_> = merged.files[0]
            .violations
            .iter()
            .map(|v| v.message.as_str())
            .collect();
        assert_eq!(messages, vec!["from-a", "from-b"]);
    }

    #[test]
    fn test_end_to_end_merge_scenario() {
        let a = Document {
            version: "1.0.0".to_string(),
            files: vec![group("src.go", vec![violation(1, 1, "error1")])],
        };
        let b = Document {
            version: "2.0.0".to_string(),
            files: vec![
                group("src.go", vec![violation(2, 20, "error2")]),
                group(
                    "src2.go",
                    vec![violation(3, 1, "error1"), violation(1, 2, "eee")],
                ),
            ],
        };

        let mut merged = Document::default();
        for doc in [a, b] {
            merge_into(doc, &mut merged, identity);
        }
        sort_document(&mut merged);

        assert_eq!(merged.files.len(), 2);
        assert_eq!(merged.files[0].name, "src.go");
        assert_eq!(merged.files[0].violations.len(), 2);
        assert_eq!(merged.files[0].violations[0].line, 1);
        assert_eq!(merged.files[0].violations[1].line, 2);

        assert_eq!(merged.files[1].name, "src2.go");
        assert_eq!(merged.files[1].violations.len(), 2);
        assert_eq!(merged.files[1].violations[0].line, 1);
        assert_eq!(merged.files[1].violations[1].line, 3);
        assert_eq!(merged.violation_count(), 4);
    }
}
