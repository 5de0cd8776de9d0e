use std::time::Duration;

use figi_core::{
    ApiStatus, FigiError, IdType, MappingJob, MappingTransport, decode_response, request_body,
};
use figi_mock::{
    DynamicMockTransport, EchoTransport, MAX_JOBS_WITHOUT_KEY, MockBehavior, MockTransport,
    REJECTED_KEY,
};

async fn round_trip(
    t: &dyn MappingTransport,
    jobs: &[MappingJob],
    key: Option<&str>,
) -> Result<figi_core::MappingResponse, FigiError> {
    let body = request_body(jobs)?;
    decode_response(&t.send(&body, key).await.into_body()?)
}

#[tokio::test]
async fn fixture_answers_in_request_order() {
    let jobs = [
        MappingJob::new(IdType::IdWertpapier, "851399").with_exch_code("US"),
        MappingJob::new(IdType::IdSedol, "0000000"),
        MappingJob::isin("US0378331005"),
    ];
    let resp = round_trip(&MockTransport::new(), &jobs, None).await.unwrap();

    assert_eq!(resp.len(), 3);
    assert_eq!(resp.jobs[0].results[0].figi.as_deref(), Some("BBG000BLNNH6"));
    assert!(!resp.jobs[1].is_match());
    assert_eq!(resp.jobs[1].warning.as_deref(), Some("No identifier found."));
    assert_eq!(resp.jobs[2].len(), 2);
}

#[tokio::test]
async fn forced_failures() {
    let t = MockTransport::new();
    let fail = round_trip(&t, &[MappingJob::isin("FAIL")], None).await;
    assert!(matches!(fail, Err(FigiError::Transport { .. })));

    let limited = round_trip(&t, &[MappingJob::isin("RATE_LIMIT")], None)
        .await
        .unwrap_err();
    assert_eq!(limited.status(), Some(ApiStatus::TooManyRequests));
}

#[tokio::test]
async fn request_level_errors() {
    let t = MockTransport::new();
    assert_eq!(t.send("{}", None).await.status, ApiStatus::NotArray);
    assert_eq!(
        t.send("[]", Some(REJECTED_KEY)).await.status,
        ApiStatus::InvalidKey
    );

    let jobs = vec![MappingJob::isin("US0378331005"); MAX_JOBS_WITHOUT_KEY + 1];
    let body = request_body(&jobs).unwrap();
    assert_eq!(t.send(&body, None).await.status, ApiStatus::TooManyJobs);
    assert!(t.send(&body, Some("good-key")).await.status.is_ok());
}

#[tokio::test]
async fn echo_preserves_field_values() {
    let job = MappingJob::new(IdType::IdBbGlobal, "BBG000BLNNH6")
        .with_exch_code("US")
        .with_currency("USD");
    let resp = round_trip(&EchoTransport, std::slice::from_ref(&job), None)
        .await
        .unwrap();

    let result = &resp.jobs[0].results[0];
    assert_eq!(result.figi.as_deref(), Some(job.id_value.as_str()));
    assert_eq!(result.exch_code, job.exch_code);
}

#[tokio::test]
async fn dynamic_mock_follows_script_and_records() {
    let (t, ctl) = DynamicMockTransport::new_with_controller("scripted");
    ctl.push_behavior(MockBehavior::Reply(406, "Unsupported Content-Type".into()))
        .await;
    ctl.set_behavior(MockBehavior::Reply(200, "[]".into())).await;

    assert_eq!(
        t.send("[]", Some("k")).await.status,
        ApiStatus::InvalidContentType
    );
    assert!(t.send("[]", None).await.status.is_ok());
    assert!(t.send("[]", None).await.status.is_ok());

    let seen = ctl.requests().await;
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].api_key.as_deref(), Some("k"));
    assert_eq!(seen[1].api_key, None);

    ctl.clear_all().await;
    assert_eq!(t.send("[]", None).await.status, ApiStatus::ServerError);
}

#[tokio::test]
async fn dynamic_mock_fail_and_hang() {
    let (t, ctl) = DynamicMockTransport::new_with_controller("scripted");
    ctl.push_behavior(MockBehavior::Fail("reset by peer".into()))
        .await;
    let reply = t.send("[]", None).await;
    assert_eq!(reply.failure.as_deref(), Some("reset by peer"));

    ctl.set_behavior(MockBehavior::Hang).await;
    let hung = tokio::time::timeout(Duration::from_millis(50), t.send("[]", None)).await;
    assert!(hung.is_err());
}
