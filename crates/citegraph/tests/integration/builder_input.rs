//! Integration tests for loading citation graphs from files.

use citegraph::{most_cited_article, ArticleId, Error, GraphBuilder, InputFormat};

use crate::common::{scenario_graph, temp_input};

#[test]
fn test_build_from_json_file() {
    let file = temp_input(
        r#"[
            {"origin": 1, "target": 2},
            {"origin": 1, "target": 3},
            {"origin": 3, "target": 4},
            {"origin": 2, "target": 4},
            {"origin": 5, "target": 1}
        ]"#,
        "json",
    );

    let (graph, stats) = GraphBuilder::new().with_input(file.path()).build().unwrap();

    assert_eq!(graph, scenario_graph());
    assert_eq!(stats.records_read, 5);
    assert_eq!(stats.citations_created, 5);
    assert_eq!(most_cited_article(&graph), Some(ArticleId::new(4)));
}

#[test]
fn test_build_from_csv_file() {
    let file = temp_input("origin,target\n1,2\n1,3\n3,4\n2,4\n5,1\n1,2\n", "csv");

    let (graph, stats) = GraphBuilder::new().with_input(file.path()).build().unwrap();

    assert_eq!(graph, scenario_graph());
    assert_eq!(stats.duplicate_citations, 1);
}

#[test]
fn test_build_from_json_document_with_isolated_articles() {
    let file = temp_input(
        r#"{"articles": [8], "citations": [{"from": 1, "to": 2}]}"#,
        "json",
    );

    let (graph, stats) = GraphBuilder::new().with_input(file.path()).build().unwrap();

    assert!(graph.exists(8));
    assert_eq!(stats.articles_created, 3);
}

#[test]
fn test_build_with_format_override() {
    let file = temp_input("origin,target\n7,8\n", "txt");

    let (graph, _) = GraphBuilder::new()
        .with_input(file.path())
        .with_format(InputFormat::Csv)
        .build()
        .unwrap();

    assert!(graph.contains_citation(7, 8));
}

#[test]
fn test_build_merges_file_and_inline_citations() {
    let file = temp_input(r#"[{"origin": 1, "target": 2}]"#, "json");

    let (graph, _) = GraphBuilder::new()
        .with_citation(2, 3)
        .with_input(file.path())
        .build()
        .unwrap();

    assert_eq!(graph.citation_count(), 2);
}

#[test]
fn test_build_rejects_malformed_json() {
    let file = temp_input(r#"[{"origin": "one"}]"#, "json");
    let result = GraphBuilder::new().with_input(file.path()).build();
    assert!(matches!(result, Err(Error::Json(_))));
}
