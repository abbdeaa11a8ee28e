use std::path::Path;

#[test]
fn test_lookups_on_parsed_file() {
    let path = Path::new("tests").join("fixtures").join("smith_family.ged");
    let tree = gedtree::parse_file(&path).unwrap();
    let john = tree.find_root("@I1@").unwrap().index();

    // Single level
    assert_eq!(tree.get_attribute(john, "NAME"), Some("John /Smith/"));
    assert_eq!(tree.get_attribute(john, "DEAT"), None);
    // Present but without data
    assert_eq!(tree.get_attribute(john, "BIRT"), Some(""));
    // Nested tags are not immediate children
    assert_eq!(tree.get_attribute(john, "DATE"), None);

    // Chained
    assert_eq!(tree.get_chained_data(john, &["BIRT", "DATE"]), Some("12 MAR 1870"));
    assert_eq!(tree.get_chained_data(john, &["BIRT", "PLAC"]), Some("Leeds, England"));
    assert_eq!(tree.get_chained_data(john, &[]), Some("INDI"));
    assert_eq!(tree.get_chained_data(john, &["DEAT", "DATE"]), None);
    assert_eq!(tree.get_chained_data(john, &["BIRT", "DATE", "TIME"]), None);
}

#[test]
fn test_first_of_repeated_tags() {
    let tree = gedtree::parse_str("0 @F1@ FAM\n1 CHIL @I3@\n1 CHIL @I4@").unwrap();
    let family = tree.find_root("@F1@").unwrap();

    assert_eq!(family.attribute("CHIL"), Some("@I3@"));
    let all: Vec<_> = family.children_with_tag("CHIL").map(|c| c.data()).collect();
    assert_eq!(all, vec!["@I3@", "@I4@"]);
}
