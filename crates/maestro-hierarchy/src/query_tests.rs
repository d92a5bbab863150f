use super::*;

/// root
/// ├── container "Login Section"
/// │   ├── "Login Button"
/// │   └── "Login Input"
/// └── "Footer"
fn overlapping() -> HierarchyNode {
    HierarchyNode::new()
        .with_child(
            HierarchyNode::new()
                .with_attribute("text", "Login Section")
                .with_attribute("resource-id", "login_container")
                .with_child(HierarchyNode::new().with_attribute("text", "Login Button"))
                .with_child(HierarchyNode::new().with_attribute("text", "Login Input")),
        )
        .with_child(HierarchyNode::new().with_attribute("text", "Footer"))
}

fn matches(outcome: QueryOutcome) -> Vec<HierarchyNode> {
    match outcome {
        QueryOutcome::Matches(nodes) => nodes,
        QueryOutcome::NoMatches(echo) => panic!("Expected matches, got {:?}", echo),
    }
}

#[test]
fn test_query_defaults() {
    let query = HierarchyQuery::new("Login");
    assert_eq!(query.search_in, vec!["text", "resource-id", "content-desc"]);
    assert_eq!(query.parent_levels, 0);
}

#[test]
fn test_matches_collapse_into_container() {
    let hierarchy = Hierarchy::from_tree(overlapping());
    let outcome = run_query(&hierarchy, &HierarchyQuery::new("Login")).unwrap();

    let nodes = matches(outcome);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].attribute("text"), Some("Login Section"));
    assert_eq!(nodes[0].children.len(), 2);
}

#[test]
fn test_parent_levels_resolve_to_root() {
    let tree = overlapping();
    let hierarchy = Hierarchy::from_tree(tree.clone());
    let query = HierarchyQuery::new("Login").with_parent_levels(1);

    let nodes = matches(run_query(&hierarchy, &query).unwrap());
    assert_eq!(nodes, vec![tree]);
}

#[test]
fn test_disjoint_matches_returned_in_order() {
    let hierarchy = Hierarchy::from_tree(overlapping());
    let query = HierarchyQuery::new("Button|Footer").with_search_in(vec!["text".to_string()]);

    let nodes = matches(run_query(&hierarchy, &query).unwrap());
    let texts: Vec<_> = nodes.iter().map(|n| n.attribute("text").unwrap()).collect();
    assert_eq!(texts, vec!["Login Button", "Footer"]);
}

#[test]
fn test_search_in_restricts_attributes() {
    let hierarchy = Hierarchy::from_tree(overlapping());
    let query = HierarchyQuery::new("login_container").with_search_in(vec!["text".to_string()]);

    let outcome = run_query(&hierarchy, &query).unwrap();
    assert!(matches!(outcome, QueryOutcome::NoMatches(_)));
}

#[test]
fn test_no_matches_echoes_query() {
    let hierarchy = Hierarchy::from_tree(overlapping());
    let query = HierarchyQuery::new("Nothing").with_parent_levels(2);

    match run_query(&hierarchy, &query).unwrap() {
        QueryOutcome::NoMatches(echo) => {
            assert_eq!(echo.query, "Nothing");
            assert_eq!(echo.parent_levels, 2);
            assert_eq!(echo.search_in, query.search_in);
            let json = serde_json::to_value(&echo).unwrap();
            assert_eq!(json["message"], "No matches found");
            assert_eq!(json["searchIn"][0], "text");
            assert_eq!(json["parentLevels"], 2);
        }
        other => panic!("Expected NoMatches, got {:?}", other),
    }
}

#[test]
fn test_invalid_pattern_is_an_error() {
    let hierarchy = Hierarchy::from_tree(overlapping());
    let result = run_query(&hierarchy, &HierarchyQuery::new("(unclosed"));
    assert!(matches!(result, Err(HierarchyError::InvalidPattern { .. })));
}

#[test]
fn test_results_do_not_alias_hierarchy() {
    let hierarchy = Hierarchy::from_tree(overlapping());
    let mut nodes = matches(run_query(&hierarchy, &HierarchyQuery::new("Footer")).unwrap());
    nodes[0].attributes.clear();

    let again = matches(run_query(&hierarchy, &HierarchyQuery::new("Footer")).unwrap());
    assert_eq!(again[0].attribute("text"), Some("Footer"));
}

#[test]
fn test_query_deep_snapshot() {
    let mut json = String::from(r#"{"attributes":{"text":"Level 199"},"children":[]}"#);
    for level in (0..199).rev() {
        json = format!(
            r#"{{"attributes":{{"resource-id":"level_{}"}},"children":[{}]}}"#,
            level, json
        );
    }
    let hierarchy = Hierarchy::parse(&json).unwrap();
    assert_eq!(hierarchy.len(), 200);

    let query = HierarchyQuery::new("Level 199").with_parent_levels(3);
    let nodes = matches(run_query(&hierarchy, &query).unwrap());
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].attribute("resource-id"), Some("level_196"));
    assert_eq!(nodes[0].children[0].children[0].children[0].attribute("text"), Some("Level 199"));
}
