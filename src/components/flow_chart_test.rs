use super::chain_edges;

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn empty_and_single_paths_have_no_edges() {
    assert!(chain_edges(&skills(&[])).is_empty());
    assert!(chain_edges(&skills(&["JavaScript"])).is_empty());
}

#[test]
fn edges_join_consecutive_skills() {
    let edges = chain_edges(&skills(&["JavaScript", "CSS", "Python"]));
    assert_eq!(
        edges,
        vec![
            ("JavaScript".to_owned(), "CSS".to_owned()),
            ("CSS".to_owned(), "Python".to_owned()),
        ]
    );
}

#[test]
fn first_edge_starts_at_first_skill() {
    let edges = chain_edges(&skills(&["React", "Node.js"]));
    assert_eq!(edges[0].0, "React");
    assert_eq!(edges.len(), 1);
}
