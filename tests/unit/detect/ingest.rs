use super::*;

const TABLE: &str = r#"{
  "COCO_INSTANCE_CATEGORY_NAMES": ["__background__", "person", "bicycle", "banana", "apple"],
  "filtered_list": ["banana", "apple"]
}"#;

#[test]
fn columnar_output_keeps_order() {
    let set = DetectionReader::new()
        .parse_str(r#"{"labels": ["apple", "cup"], "bbox": [[1, 2, 30, 40], [5, 5, 9, 9]]}"#)
        .unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.as_slice()[0].label, "apple");
    assert_eq!(set.as_slice()[1].bbox, BoundingBox::new(5, 5, 9, 9).unwrap());
}

#[test]
fn row_output_and_fractional_coordinates() {
    let set = DetectionReader::new()
        .parse_str(r#"[{"label": "Box", "bbox": [50.9, 50.2, 150.7, 150.0]}]"#)
        .unwrap();
    let d = &set.as_slice()[0];
    assert_eq!(d.label, "Box");
    assert_eq!(
        (d.bbox.x1(), d.bbox.y1(), d.bbox.x2(), d.bbox.y2()),
        (50, 50, 150, 150)
    );
}

#[test]
fn empty_output_is_not_an_error() {
    let set = DetectionReader::new()
        .parse_str(r#"{"labels": [], "bbox": []}"#)
        .unwrap();
    assert!(set.is_empty());
}

#[test]
fn mismatched_columns_are_rejected() {
    let err = DetectionReader::new()
        .parse_str(r#"{"labels": ["a", "b"], "bbox": [[0, 0, 1, 1]]}"#)
        .unwrap_err();
    assert!(matches!(err, ArscanError::Validation(_)));
}

#[test]
fn degenerate_boxes_are_rejected() {
    let err = DetectionReader::new()
        .parse_str(r#"[{"label": "a", "bbox": [10, 0, 10, 5]}]"#)
        .unwrap_err();
    assert!(err.to_string().contains("detection 0"));
}

#[test]
fn class_ids_resolve_and_filter_through_the_table() {
    let table = CategoryTable::from_json_str(TABLE).unwrap();
    let set = DetectionReader::new()
        .with_categories(table)
        .parse_str(r#"{"labels": [1, 3, 4, "banana"], "bbox": [[0,0,1,1],[0,0,2,2],[0,0,3,3],[0,0,4,4]]}"#)
        .unwrap();
    let labels: Vec<_> = set.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, ["banana", "apple", "banana"]);
}

#[test]
fn explicit_allow_list_wins_over_table() {
    let table = CategoryTable::from_json_str(TABLE).unwrap();
    let set = DetectionReader::new()
        .with_allow_list(["person"])
        .with_categories(table)
        .parse_str(r#"{"labels": [1, 3], "bbox": [[0,0,1,1],[0,0,2,2]]}"#)
        .unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.as_slice()[0].label, "person");
}

#[test]
fn class_id_without_table_or_out_of_range_fails() {
    assert!(matches!(
        DetectionReader::new().parse_str(r#"[{"label": 3, "bbox": [0,0,1,1]}]"#),
        Err(ArscanError::Validation(_))
    ));
    let table = CategoryTable::from_json_str(TABLE).unwrap();
    assert!(
        DetectionReader::new()
            .with_categories(table)
            .parse_str(r#"[{"label": 99, "bbox": [0,0,1,1]}]"#)
            .is_err()
    );
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        DetectionReader::new().parse_str("{"),
        Err(ArscanError::Serde(_))
    ));
}
