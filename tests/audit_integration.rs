//! End-to-end audit tests against a local mock HTTP server.
//!
//! The mock server answers 404 for any unmatched path, which doubles as a
//! well-behaved custom-404 site unless a test mounts a catch-all.

use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seo_audit::config::AuditConfig;
use seo_audit::{
    run_audit, AuditClient, AuditReport, Check, CheckResult, Elaborator, EnrichmentError,
    Observation, Verdict,
};

const PAGE_HTML: &str = r#"<html>
<head>
    <title>A carefully sized page title for the audit integration test</title>
    <meta name="description" content="short">
    <link rel="icon" href="/favicon.ico">
</head>
<body>
    <h2>Section</h2>
    <img src="/hero.png" alt="">
    <img src="/logo.png" alt="logo">
    <p>integration fixture body text with repeated fixture words fixture</p>
</body>
</html>"#;

fn client() -> AuditClient {
    AuditClient::new(&AuditConfig::default()).expect("client builds")
}

fn check<'a>(report: &'a AuditReport, wanted: Check) -> &'a CheckResult {
    report
        .checks
        .iter()
        .find(|c| c.check == wanted)
        .expect("report carries the full catalogue")
}

async fn serve_page(server: &MockServer, status: u16, html: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(html, "text/html"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn successful_run_reports_every_check() {
    let server = MockServer::start().await;
    serve_page(&server, 200, PAGE_HTML).await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *"))
        .mount(&server)
        .await;

    let report = run_audit(&server.uri(), &client(), None)
        .await
        .expect("audit succeeds");

    assert_eq!(report.status_code, 200);
    assert!(!report.was_redirected);
    assert_eq!(report.checks.len(), 19);

    // Title is 59 chars, inside the 50-70 window
    assert_eq!(check(&report, Check::Title).verdict, Verdict::Pass);
    assert_eq!(
        check(&report, Check::MetaDescription).verdict,
        Verdict::Warning
    );
    assert_eq!(check(&report, Check::H1Headings).verdict, Verdict::Warning);
    assert_eq!(check(&report, Check::Favicon).verdict, Verdict::Pass);
    assert_eq!(check(&report, Check::RobotsTxt).verdict, Verdict::Pass);
    // sitemap.xml is unmatched -> 404 -> missing
    assert_eq!(check(&report, Check::Sitemap).verdict, Verdict::Missing);
    // the synthetic probe path is unmatched -> a proper 404
    assert_eq!(check(&report, Check::Custom404).verdict, Verdict::Pass);
    // plain http from the mock server
    assert_eq!(check(&report, Check::Https).verdict, Verdict::Warning);

    match &check(&report, Check::ImagesMissingAlt).observation {
        Observation::Images(images) => {
            assert_eq!(images.len(), 1);
            assert!(images[0].absolute_url.ends_with("/hero.png"));
        }
        other => panic!("unexpected observation: {other:?}"),
    }
}

#[tokio::test]
async fn failing_robots_probe_does_not_disturb_other_checks() {
    let server = MockServer::start().await;
    serve_page(&server, 200, PAGE_HTML).await;
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let report = run_audit(&server.uri(), &client(), None)
        .await
        .expect("audit still succeeds");

    assert_eq!(check(&report, Check::RobotsTxt).verdict, Verdict::Missing);
    // Page-derived checks are untouched by the probe failure
    assert_eq!(check(&report, Check::Title).verdict, Verdict::Pass);
    assert_eq!(check(&report, Check::H1Headings).verdict, Verdict::Warning);
    assert_eq!(report.checks.len(), 19);
}

#[tokio::test]
async fn non_2xx_primary_response_is_data_not_error() {
    let server = MockServer::start().await;
    serve_page(&server, 404, "<html><head><title>Gone</title></head></html>").await;

    let report = run_audit(&server.uri(), &client(), None)
        .await
        .expect("a reachable 404 is still a report");
    assert_eq!(report.status_code, 404);
    assert_eq!(report.checks.len(), 19);
}

#[tokio::test]
async fn redirects_are_followed_and_recorded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/home"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE_HTML, "text/html"))
        .mount(&server)
        .await;

    let report = run_audit(&server.uri(), &client(), None)
        .await
        .expect("audit succeeds");
    assert!(report.was_redirected);
    assert!(report.final_url.ends_with("/home"));
    assert_eq!(report.status_code, 200);
}

#[tokio::test]
async fn catch_all_sites_score_no_custom_404() {
    let server = MockServer::start().await;
    // Client-side-routing style site: every path answers 200
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE_HTML, "text/html"))
        .mount(&server)
        .await;

    let report = run_audit(&server.uri(), &client(), None)
        .await
        .expect("audit succeeds");
    assert_eq!(
        check(&report, Check::Custom404).observation,
        Observation::Presence(false)
    );
    assert_eq!(check(&report, Check::Custom404).verdict, Verdict::Warning);
}

#[tokio::test]
async fn unreachable_host_is_a_terminal_error() {
    let result = run_audit("http://audit-target-does-not-exist.invalid", &client(), None).await;
    let err = result.expect_err("unreachable host must fail the run");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn invalid_input_is_rejected_before_any_request() {
    let result = run_audit("not a url at all!!!", &client(), None).await;
    assert!(result.is_err());
}

struct CannedElaborator;

#[async_trait::async_trait]
impl Elaborator for CannedElaborator {
    async fn elaborate(
        &self,
        check: Check,
        _observation: &Observation,
    ) -> Result<String, EnrichmentError> {
        Ok(format!("More about {}.", check.as_str()))
    }
}

struct BrokenElaborator;

#[async_trait::async_trait]
impl Elaborator for BrokenElaborator {
    async fn elaborate(
        &self,
        _check: Check,
        _observation: &Observation,
    ) -> Result<String, EnrichmentError> {
        Err(EnrichmentError::Unavailable("no API key".to_string()))
    }
}

#[tokio::test]
async fn elaborations_attach_per_check() {
    let server = MockServer::start().await;
    serve_page(&server, 200, PAGE_HTML).await;

    let report = run_audit(&server.uri(), &client(), Some(&CannedElaborator))
        .await
        .expect("audit succeeds");
    assert!(report
        .checks
        .iter()
        .all(|c| c.elaboration.as_deref().is_some_and(|e| e.contains(c.name))));
}

#[tokio::test]
async fn elaboration_failure_leaves_fixed_texts_standing() {
    let server = MockServer::start().await;
    serve_page(&server, 200, PAGE_HTML).await;

    let report = run_audit(&server.uri(), &client(), Some(&BrokenElaborator))
        .await
        .expect("enrichment failure never aborts the run");
    assert!(report.checks.iter().all(|c| c.elaboration.is_none()));
    assert!(report.checks.iter().all(|c| !c.recommendation.is_empty()));
}
