use std::sync::Arc;

use docdigest::application::ports::{FileLoaderError, SummaryBounds};
use docdigest::application::services::{
    SummarizationError, SummarizationOptions, SummarizationService,
};
use docdigest::domain::ContentType;
use docdigest::infrastructure::text_processing::{CompositeFileLoader, FixedCharacterSplitter};

use crate::helpers::{
    FailingSummarizer, RecordingSummarizer, SlowFirstSummarizer, summarization_service, words,
};

#[tokio::test]
async fn given_2000_char_text_when_summarizing_then_two_chunk_fragments_joined_in_order() {
    let summarizer = Arc::new(RecordingSummarizer::default());
    let service = summarization_service(summarizer.clone());
    let text = format!("{}ip", "lorem ".repeat(333));
    assert_eq!(text.chars().count(), 2000);

    let result = service
        .summarize_document(text.as_bytes(), "lorem.txt".to_string(), ContentType::Text)
        .await
        .unwrap();

    assert_eq!(result.summary.text(), "[1024 chars] [976 chars]");
    assert_eq!(result.summary.chunks_total, 2);
    assert_eq!(result.summary.chunks_skipped, 0);
    assert_eq!(result.document.filename, "lorem.txt");
    assert_eq!(result.document.size_bytes, 2000);
}

#[tokio::test]
async fn given_short_trailing_chunk_when_summarizing_then_tail_is_skipped() {
    let summarizer = Arc::new(RecordingSummarizer::default());
    let service = summarization_service(summarizer.clone());
    let text = words("alpha", 180);

    let result = service
        .summarize_document(text.as_bytes(), "alpha.txt".to_string(), ContentType::Text)
        .await
        .unwrap();

    assert_eq!(result.summary.text(), "[1024 chars]");
    assert_eq!(result.summary.chunks_total, 2);
    assert_eq!(result.summary.chunks_skipped, 1);
    assert_eq!(summarizer.inputs.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn given_text_below_word_threshold_when_summarizing_then_returns_empty_summary_error() {
    let summarizer = Arc::new(RecordingSummarizer::default());
    let service = summarization_service(summarizer.clone());
    let text = words("tiny", 49);

    let result = service
        .summarize_document(text.as_bytes(), "tiny.txt".to_string(), ContentType::Text)
        .await;

    assert!(matches!(result, Err(SummarizationError::EmptySummary)));
    assert!(summarizer.inputs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_exactly_threshold_words_when_summarizing_then_chunk_is_kept() {
    let summarizer = Arc::new(RecordingSummarizer::default());
    let service = summarization_service(summarizer.clone());
    let text = words("edge", 50);

    let result = service
        .summarize_document(text.as_bytes(), "edge.txt".to_string(), ContentType::Text)
        .await
        .unwrap();

    assert_eq!(result.summary.fragments().len(), 1);
}

#[tokio::test]
async fn given_messy_whitespace_when_summarizing_then_summarizer_sees_normalized_text() {
    let summarizer = Arc::new(RecordingSummarizer::default());
    let service = summarization_service(summarizer.clone());
    let text = format!("{} .\n\n\t{} !", words("one", 30), words("two", 30));

    service
        .summarize_document(text.as_bytes(), "messy.txt".to_string(), ContentType::Text)
        .await
        .unwrap();

    let inputs = summarizer.inputs.lock().unwrap();
    assert_eq!(
        inputs[0],
        format!("{}. {}!", words("one", 30), words("two", 30))
    );
}

#[tokio::test]
async fn given_whitespace_only_file_when_summarizing_then_returns_no_text_error() {
    let service = summarization_service(Arc::new(RecordingSummarizer::default()));

    let result = service
        .summarize_document(b" \n \t ", "blank.txt".to_string(), ContentType::Text)
        .await;

    assert!(matches!(result, Err(SummarizationError::NoTextExtracted)));
}

#[tokio::test]
async fn given_invalid_utf8_when_summarizing_then_returns_encoding_error() {
    let service = summarization_service(Arc::new(RecordingSummarizer::default()));

    let result = service
        .summarize_document(&[0xC3, 0x28, 0xFF], "bad.txt".to_string(), ContentType::Text)
        .await;

    assert!(matches!(
        result,
        Err(SummarizationError::FileLoading(
            FileLoaderError::InvalidEncoding(_)
        ))
    ));
}

#[tokio::test]
async fn given_summarizer_failure_when_summarizing_then_error_propagates() {
    let service = summarization_service(Arc::new(FailingSummarizer));
    let text = words("word", 80);

    let result = service
        .summarize_document(text.as_bytes(), "fail.txt".to_string(), ContentType::Text)
        .await;

    assert!(matches!(result, Err(SummarizationError::Summarizer(_))));
}

#[tokio::test]
async fn given_concurrent_chunks_finishing_out_of_order_when_summarizing_then_order_is_kept() {
    let service = SummarizationService::new(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        Arc::new(FixedCharacterSplitter::new(60)),
        Arc::new(SlowFirstSummarizer),
        SummarizationOptions {
            min_chunk_words: 5,
            concurrency: 3,
            ..SummarizationOptions::default()
        },
    );
    let text = format!(
        "{}{}{}",
        "aaaa ".repeat(12),
        "bbbb ".repeat(12),
        "cccc ".repeat(12)
    );

    let summary = service.summarize_text(&text).await.unwrap();

    assert_eq!(summary.fragments(), ["aaaa", "bbbb", "cccc"]);
    assert_eq!(summary.text(), "aaaa bbbb cccc");
}

#[tokio::test]
async fn given_default_options_when_summarizing_then_every_call_uses_fixed_bounds() {
    let summarizer = Arc::new(RecordingSummarizer::default());
    let service = summarization_service(summarizer.clone());
    let text = words("bound", 400);

    service
        .summarize_document(text.as_bytes(), "b.txt".to_string(), ContentType::Text)
        .await
        .unwrap();

    let bounds = summarizer.bounds.lock().unwrap();
    assert_eq!(bounds.len(), 3);
    assert!(bounds.iter().all(|b| *b
        == SummaryBounds {
            min_length: 30,
            max_length: 130,
            do_sample: false,
        }));
}

#[tokio::test]
async fn given_zero_chunk_size_when_summarizing_then_returns_splitting_error() {
    let service = SummarizationService::new(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        Arc::new(FixedCharacterSplitter::new(0)),
        Arc::new(RecordingSummarizer::default()),
        SummarizationOptions::default(),
    );

    let result = service.summarize_text("some text").await;

    assert!(matches!(result, Err(SummarizationError::Splitting(_))));
}

#[tokio::test]
async fn given_shared_service_when_summarizing_on_spawned_task_then_completes() {
    let service = Arc::new(summarization_service(Arc::new(
        RecordingSummarizer::default(),
    )));
    let data = words("spawn", 120).into_bytes();

    let task_service = Arc::clone(&service);
    let handle = tokio::spawn(async move {
        task_service
            .summarize_document(&data, "spawn.txt".to_string(), ContentType::Text)
            .await
    });

    let result = handle.await.unwrap().unwrap();
    assert_eq!(result.summary.fragments().len(), 1);
}
