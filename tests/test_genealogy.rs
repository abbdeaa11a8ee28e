use gedtree::genealogy::{GraphBuilder, PointerTag, UnresolvedReference};
use std::path::Path;

const SMALL_FAMILY: &str = "\
0 @I1@ INDI
1 NAME John
0 @I2@ INDI
1 NAME Ann
0 @I3@ INDI
1 NAME Sam
1 FAMC @F1@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 CHIL @I3@";

// --- TESTS LINKING ---
#[test]
fn test_small_family() {
    let tree = gedtree::parse_str(SMALL_FAMILY).unwrap();
    let graph = GraphBuilder::new().build(&tree);

    assert_eq!(graph.num_individuals(), 3);
    assert_eq!(graph.num_families(), 1);
    let john = graph.individual_by_xref("@I1@").unwrap().index();
    let ann = graph.individual_by_xref("@I2@").unwrap().index();
    let sam = graph.individual_by_xref("@I3@").unwrap().index();
    assert_eq!(graph.name(john), Some("John"));
    assert_eq!(graph.name(ann), Some("Ann"));
    assert_eq!(graph.name(sam), Some("Sam"));

    // Family
    let family = graph.family_by_xref("@F1@").unwrap();
    assert_eq!(family.father(), Some(john));
    assert_eq!(family.mother(), Some(ann));
    assert_eq!(family.children(), &[sam]);

    // Parent links and back-edges
    assert_eq!(graph[sam].father(), Some(john));
    assert_eq!(graph[sam].mother(), Some(ann));
    assert_eq!(graph[john].children(), &[sam]);
    assert_eq!(graph[ann].children(), &[sam]);
    assert!(graph[john].is_root_ancestor());
    assert!(!graph[sam].is_root_ancestor());
    assert!(graph.unresolved().is_empty());
}

#[test]
fn test_two_children_in_pointer_order() {
    let tree = gedtree::parse_str(
        "0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n1 CHIL @I4@\n1 CHIL @I3@\n\
         0 @I1@ INDI\n0 @I2@ INDI\n0 @I3@ INDI\n1 FAMC @F1@\n0 @I4@ INDI\n1 FAMC @F1@",
    )
    .unwrap();
    let graph = GraphBuilder::new().build(&tree);

    let index_of = |xref: &str| graph.individual_by_xref(xref).unwrap().index();
    let [father, mother, third, fourth] = ["@I1@", "@I2@", "@I3@", "@I4@"].map(index_of);

    // Family keeps CHIL order
    assert_eq!(graph.families()[0].children(), &[fourth, third]);

    // Parents hold both children (linked in individual order)
    for parent in [father, mother] {
        let children = graph[parent].children();
        assert_eq!(children.len(), 2);
        assert!(children.contains(&third));
        assert!(children.contains(&fourth));
    }
    let names: Vec<_> = graph.children(father).map(|child| child.xref()).collect();
    assert_eq!(names, vec!["@I3@", "@I4@"]);
}

#[test]
fn test_relation_helpers() {
    let path = Path::new("tests").join("fixtures").join("smith_family.ged");
    let tree = gedtree::parse_file(&path).unwrap();
    let graph = GraphBuilder::new().build(&tree);

    let sam = graph.find_individual_by_attribute("NAME", "Sam /Smith/").unwrap();
    assert_eq!(graph.father(sam.index()).unwrap().xref(), "@I1@");
    assert_eq!(graph.mother(sam.index()).unwrap().xref(), "@I2@");
    assert_eq!(graph.birth_date(sam.index()), Some("1 JAN 1900"));

    let mary = graph.individual_by_xref("@I4@").unwrap();
    assert_eq!(graph.birth_date(mary.index()), None);

    let john = graph.individual_by_xref("@I1@").unwrap();
    assert!(graph.father(john.index()).is_none());
    let families: Vec<_> = graph.spouse_families(john.index()).map(|f| f.xref()).collect();
    assert_eq!(families, vec!["@F1@"]);
    assert_eq!(graph.spouse_families(sam.index()).count(), 0);

    let record = graph.family_record(0).unwrap();
    assert_eq!(record.chained_data(&["MARR", "DATE"]), Some("1895"));
    let record = graph.record(mary.index()).unwrap();
    assert_eq!(record.tag(), "@I4@");
}

#[test]
fn test_record_out_of_range_is_none() {
    let tree = gedtree::parse_str("0 @I1@ INDI").unwrap();
    let graph = GraphBuilder::new().build(&tree);

    assert!(graph.record(0).is_some());
    assert!(graph.record(3).is_none());
    assert!(graph.family_record(0).is_none());
}

// --- TESTS QUERIES ---
#[test]
fn test_find_individual_by_attribute() {
    let tree = gedtree::parse_str(SMALL_FAMILY).unwrap();
    let graph = GraphBuilder::new().build(&tree);

    let ann = graph.find_individual_by_attribute("NAME", "Ann").unwrap();
    assert_eq!(ann.xref(), "@I2@");
    assert!(graph.find_individual_by_attribute("NAME", "Zed").is_none());
    // Exact match only
    assert!(graph.find_individual_by_attribute("NAME", "ann").is_none());
    assert!(graph.find_individual_by_attribute("NAME", "An").is_none());
}

#[test]
fn test_found_individual_outlives_query_strings() {
    let tree = gedtree::parse_str(SMALL_FAMILY).unwrap();
    let graph = GraphBuilder::new().build(&tree);

    let found = {
        let tag = String::from("NAME");
        let value = format!("{}{}", "Sa", "m");
        graph.find_individual_by_attribute(&tag, &value)
    };
    assert_eq!(found.map(|individual| individual.xref()), Some("@I3@"));

    let matches: Vec<_> = {
        let value = String::from("John");
        graph.find_individuals_by_attribute("NAME", &value).collect()
    };
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].xref(), "@I1@");
}

#[test]
fn test_find_returns_first_in_document_order() {
    let tree = gedtree::parse_str(
        "0 @I1@ INDI\n1 SEX F\n0 @I2@ INDI\n1 SEX M\n0 @I3@ INDI\n1 SEX F",
    )
    .unwrap();
    let graph = GraphBuilder::new().build(&tree);

    assert_eq!(graph.find_individual_by_attribute("SEX", "F").unwrap().xref(), "@I1@");
    let women: Vec<_> = graph
        .find_individuals_by_attribute("SEX", "F")
        .map(|individual| individual.xref())
        .collect();
    assert_eq!(women, vec!["@I1@", "@I3@"]);
}

// --- TESTS DIAGNOSTICS ---
#[test]
fn test_unresolved_references_are_reported() {
    let tree = gedtree::parse_str(
        "0 @I1@ INDI\n0 @I2@ INDI\n1 FAMC @F9@\n0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I8@\n1 CHIL @I9@",
    )
    .unwrap();
    let graph = GraphBuilder::new().build(&tree);

    let family = &graph.families()[0];
    assert_eq!(family.father(), Some(0));
    assert_eq!(family.mother(), None);
    assert!(family.children().is_empty());

    let targets: Vec<_> = graph
        .unresolved()
        .iter()
        .map(|reference| (reference.pointer, reference.target.as_str()))
        .collect();
    assert_eq!(
        targets,
        vec![
            (PointerTag::Wife, "@I8@"),
            (PointerTag::Child, "@I9@"),
            (PointerTag::ChildToFamily, "@F9@"),
        ]
    );
    assert_eq!(
        graph.unresolved()[2],
        UnresolvedReference {
            source: "@I2@".to_string(),
            pointer: PointerTag::ChildToFamily,
            target: "@F9@".to_string(),
        }
    );
    assert_eq!(
        graph.unresolved()[0].to_string(),
        "@F1@ WIFE points to unknown record '@I8@'"
    );
}

#[test]
fn test_duplicate_xref_keeps_first() {
    let tree = gedtree::parse_str("0 @I1@ INDI\n1 NAME First\n0 @I1@ INDI\n1 NAME Second").unwrap();
    let graph = GraphBuilder::new().build(&tree);

    assert_eq!(graph.num_individuals(), 2);
    let found = graph.individual_by_xref("@I1@").unwrap();
    assert_eq!(graph.name(found.index()), Some("First"));
}

#[test]
fn test_rebuild_does_not_duplicate_children() {
    let tree = gedtree::parse_str(SMALL_FAMILY).unwrap();
    let mut graph = GraphBuilder::new().build(&tree);

    graph.rebuild();
    graph.rebuild();

    assert_eq!(graph.num_individuals(), 3);
    assert_eq!(graph.num_families(), 1);
    let john = graph.individual_by_xref("@I1@").unwrap();
    assert_eq!(john.children().len(), 1);
    assert_eq!(graph.families()[0].children().len(), 1);
}

#[test]
fn test_ancestry_cycle_detection() {
    let tree = gedtree::parse_str(SMALL_FAMILY).unwrap();
    let graph = GraphBuilder::new().build(&tree);
    assert_eq!(graph.find_ancestry_cycle(), None);

    // @I1@ is father of @I2@, who is father of @I1@
    let tree = gedtree::parse_str(
        "0 @I1@ INDI\n1 FAMC @F2@\n0 @I2@ INDI\n1 FAMC @F1@\n\
         0 @F1@ FAM\n1 HUSB @I1@\n1 CHIL @I2@\n0 @F2@ FAM\n1 HUSB @I2@\n1 CHIL @I1@",
    )
    .unwrap();
    let graph = GraphBuilder::new().build(&tree);
    let mut cycle = graph.find_ancestry_cycle().unwrap();
    cycle.sort_unstable();
    assert_eq!(cycle, vec![0, 1]);
}

#[test]
fn test_self_ancestor_is_a_cycle() {
    let tree = gedtree::parse_str("0 @I1@ INDI\n1 FAMC @F1@\n0 @F1@ FAM\n1 WIFE @I1@").unwrap();
    let graph = GraphBuilder::new().build(&tree);
    assert_eq!(graph.find_ancestry_cycle(), Some(vec![0]));
}
