mod content_type_test;
mod storage_path_test;
