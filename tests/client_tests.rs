//! Integration tests for the MauticClient using mockito for HTTP mocking.

use mautic_lead_capture::domain::{EmailAddress, PhoneNumber, TaxId};
use mautic_lead_capture::{FormPayload, MauticClient, SubmitError, ValidatedLead};
use mockito::{Matcher, Server};

fn sample_payload() -> FormPayload {
    let lead = ValidatedLead {
        full_name: "Maria Silva".to_string(),
        tax_id: TaxId::new("123.456.789-01").unwrap(),
        email: EmailAddress::new("maria@example.com").unwrap(),
        phone: PhoneNumber::new("(11) 99999-8888").unwrap(),
    };
    FormPayload::new(&lead, 1, "formcapturasorteio")
}

#[test]
fn test_submit_form_posts_multipart_fields() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/form/submit")
        .match_query(Matcher::UrlEncoded("formId".into(), "1".into()))
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data; boundary=.+".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"(?s)name="mauticform\[nome\]".*Maria Silva"#.into()),
            Matcher::Regex(r#"(?s)name="mauticform\[cpf\]".*12345678901"#.into()),
            Matcher::Regex(r#"(?s)name="mauticform\[telefone\]".*11999998888"#.into()),
            Matcher::Regex(r#"(?s)name="mauticform\[email\]".*maria@example\.com"#.into()),
            Matcher::Regex(r#"(?s)name="mauticform\[formName\]".*formcapturasorteio"#.into()),
            Matcher::Regex(r#"(?s)name="mauticform\[submit\]".*1"#.into()),
        ]))
        .with_status(200)
        .create();

    let client = MauticClient::with_base_url(server.url());
    let result = client.submit_form(&sample_payload());

    mock.assert();
    assert!(result.is_ok());
    assert_eq!(client.metrics().leads_submitted_total(), 1);
}

#[test]
fn test_submit_form_ignores_server_error_status() {
    // The response is unobservable by contract; a 500 is still "dispatched".
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/form/submit")
        .match_query(Matcher::UrlEncoded("formId".into(), "1".into()))
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let client = MauticClient::with_base_url(server.url());
    let result = client.submit_form(&sample_payload());

    mock.assert();
    assert!(result.is_ok());
    assert_eq!(client.metrics().leads_submitted_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_submit_form_transport_failure() {
    // Nothing listens on this port; the dispatch itself fails.
    let client = MauticClient::with_base_url("http://127.0.0.1:1".to_string());
    let result = client.submit_form(&sample_payload());

    assert!(matches!(
        result,
        Err(SubmitError::ConnectionFailed) | Err(SubmitError::Timeout) | Err(SubmitError::Transport(_))
    ));
    assert_eq!(client.metrics().leads_submitted_total(), 0);
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_fetch_form_script_ok() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/media/js/mautic-form.js")
        .with_status(200)
        .with_header("content-type", "text/javascript")
        .with_body("/* mautic form sdk */")
        .create();

    let client = MauticClient::with_base_url(server.url());
    assert!(client.fetch_form_script().is_ok());
    mock.assert();
}

#[test]
fn test_fetch_form_script_missing_is_an_error() {
    // Unlike form submission, the script fetch does observe the status.
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/media/js/mautic-form.js")
        .with_status(404)
        .create();

    let client = MauticClient::with_base_url(server.url());
    let result = client.fetch_form_script();

    mock.assert();
    assert!(matches!(result, Err(SubmitError::Transport(_))));
}
