use docdigest::application::ports::FileUploader;
use docdigest::infrastructure::storage::LocalUploader;

#[tokio::test]
async fn given_file_when_uploading_locally_then_copies_it_under_public_url() {
    let store_dir = tempfile::tempdir().unwrap();
    let source_dir = tempfile::tempdir().unwrap();
    let source = source_dir.path().join("output.docx");
    std::fs::write(&source, b"docx bytes").unwrap();
    let uploader =
        LocalUploader::new(store_dir.path().to_path_buf(), "http://localhost:8080/files/")
            .unwrap();

    let url = uploader.upload(&source, "report.docx").await.unwrap();

    let relative = url
        .strip_prefix("http://localhost:8080/files/")
        .expect("url should start with the public base");
    assert!(relative.ends_with("/report.docx"));
    let stored = std::fs::read(uploader.root().join(relative)).unwrap();
    assert_eq!(stored, b"docx bytes");
}

#[tokio::test]
async fn given_same_name_twice_when_uploading_then_urls_differ() {
    let store_dir = tempfile::tempdir().unwrap();
    let source_dir = tempfile::tempdir().unwrap();
    let source = source_dir.path().join("output.docx");
    std::fs::write(&source, b"x").unwrap();
    let uploader =
        LocalUploader::new(store_dir.path().to_path_buf(), "http://host/files").unwrap();

    let first = uploader.upload(&source, "a.docx").await.unwrap();
    let second = uploader.upload(&source, "a.docx").await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn given_missing_source_when_uploading_then_returns_error() {
    let store_dir = tempfile::tempdir().unwrap();
    let uploader =
        LocalUploader::new(store_dir.path().to_path_buf(), "http://host/files").unwrap();

    let result = uploader
        .upload(&store_dir.path().join("missing.docx"), "missing.docx")
        .await;

    assert!(result.is_err());
}
