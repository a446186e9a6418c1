mod summarization_service_test;
mod text_normalizer_test;
