//! Tests for the null embedding provider and null counting pipeline

use packlens_domain::ports::providers::{CountingPipeline, EmbeddingProvider};
use packlens_domain::{EmbedOutcome, ImagePayload, PackCount};
use packlens_providers::counting::NullCountingPipeline;
use packlens_providers::embedding::NullEmbeddingProvider;

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[tokio::test]
async fn test_same_bytes_same_unit_vector() {
    let provider = NullEmbeddingProvider::with_dimensions(64);
    let photo = ImagePayload::jpeg(b"shelf photo bytes, long enough".to_vec());

    let first = provider.embed(&photo).await.unwrap().into_embedding().unwrap();
    let second = provider.embed(&photo).await.unwrap().into_embedding().unwrap();

    assert_eq!(first.vector, second.vector);
    assert_eq!(first.dimensions, 64);
    assert!((dot(&first.vector, &first.vector) - 1.0).abs() < 1e-4);
}

#[tokio::test]
async fn test_different_bytes_are_far_apart() {
    let provider = NullEmbeddingProvider::new();
    let a = provider.vector_for(b"first reference image");
    let b = provider.vector_for(b"second reference image");

    assert_eq!(a.len(), 2048);
    assert!(dot(&a, &b).abs() < 0.2);
}

#[tokio::test]
async fn test_tiny_payload_is_rejected() {
    let provider = NullEmbeddingProvider::new().with_min_payload_bytes(8);

    let outcome = provider
        .embed(&ImagePayload::jpeg(vec![0; 4]))
        .await
        .unwrap();
    assert!(matches!(outcome, EmbedOutcome::Rejected { .. }));
}

#[tokio::test]
async fn test_null_counting_reports_fixed_counts() {
    let counts = vec![PackCount {
        category: "water".to_string(),
        brand: "Fizz".to_string(),
        count: 6,
        confidence: 0.9,
    }];
    let pipeline = NullCountingPipeline::with_counts(counts.clone());

    let photo = ImagePayload::jpeg(vec![1; 32]);
    assert_eq!(pipeline.analyze(&photo).await.unwrap(), counts);
    assert!(
        NullCountingPipeline::new()
            .analyze(&photo)
            .await
            .unwrap()
            .is_empty()
    );
}
