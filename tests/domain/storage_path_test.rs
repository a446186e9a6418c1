use docdigest::domain::{DocumentId, StoragePath};

#[test]
fn given_filename_with_spaces_when_building_path_then_sanitizes_and_prefixes_id() {
    let id = DocumentId::new();

    let path = StoragePath::new(&id, "Annual Report (final).docx");

    assert_eq!(
        path.as_str(),
        format!("{}/Annual_Report__final_.docx", id.as_uuid())
    );
}

#[test]
fn given_path_traversal_when_building_path_then_separators_are_replaced() {
    let id = DocumentId::new();

    let path = StoragePath::new(&id, "../../etc/passwd");

    assert!(!path.as_str()[37..].contains('/'));
    assert_eq!(path.to_string(), path.as_str());
}
