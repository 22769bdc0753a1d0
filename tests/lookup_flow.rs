// tests/lookup_flow.rs
//
// Controller lifecycle against a scripted transport: validation, error
// taxonomy, rendering, loading pairing, stale replies.
//
mod common;

use common::*;
use spec_lookup::core::net::{ HttpResponse, TransportError };
use spec_lookup::{ LookupError, LookupState };

#[test]
fn empty_or_blank_query_never_hits_the_network() {
    for q in ["", "   ", "\t\n "] {
        let (mut ctl, calls) = controller(200, &s24_body());
        let err = ctl.search(q).unwrap_err();
        assert_eq!(err, LookupError::EmptyQuery);
        assert!(calls.lock().unwrap().is_empty());

        // Error shown, loading never toggled.
        assert!(ctl.surface().results.html().to_lowercase().contains("enter a device name to search"));
        assert_eq!(ctl.surface().loading.shown, 0);
        assert_eq!(ctl.surface().loading.hidden, 0);
        assert_eq!(ctl.state(), LookupState::ErrorDisplayed);
    }
}

#[test]
fn query_is_trimmed_and_percent_encoded() {
    let (mut ctl, calls) = controller(200, &s24_body());
    ctl.search("  Samsung S24 Ultra  ").unwrap();
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[format!("{ENDPOINT}?query=Samsung%20S24%20Ultra")]
    );
}

#[test]
fn s24_display_section_has_exactly_one_line() {
    let (mut ctl, _) = controller(200, &s24_body());
    let device = ctl.search("Samsung S24 Ultra").unwrap();
    assert_eq!(device.title, "Samsung Galaxy S24 Ultra");

    let html = ctl.surface().results.html();
    assert!(html.starts_with("<h2>Full Specifications Samsung Galaxy S24 Ultra</h2>"));
    assert!(html.contains(
        "<div class=\"spec-title\">📱 DISPLAY</div><ul><li class=\"spec-item\"><strong>Size:</strong> 6.8 inches</li></ul>"
    ));
    // LAUNCH is all "-" → no section at all.
    assert!(!html.contains("LAUNCH"));
    // Groups keep their fixed order.
    assert!(html.find("DISPLAY").unwrap() < html.find("BATTERY").unwrap());
    assert!(html.ends_with("<p class=\"source-info\">Source: GSMArena via Varshade API</p>"));

    let img = ctl.surface().image.html();
    assert!(img.contains("<h2>Samsung Galaxy S24 Ultra</h2>"));
    assert!(img.contains("samsung-galaxy-s24-ultra-5g-sm-s928-stylus.jpg"));
    assert!(img.contains("placehold.co"));

    assert_eq!(ctl.state(), LookupState::Displayed);
}

#[test]
fn http_404_mentions_status() {
    let (mut ctl, _) = controller(404, "Not Found");
    let err = ctl.search("Samsung S24 Ultra").unwrap_err();
    assert_eq!(err, LookupError::ApiError { status: 404 });
    assert!(ctl.surface().results.html().contains("404"));
    assert!(ctl.surface().image.html().is_empty());
}

#[test]
fn transport_failure_reads_as_network_block() {
    let (mut ctl, _) = controller_with(|_| Err(TransportError::Request(s("Failed to fetch"))));
    let err = ctl.search("Samsung S24 Ultra").unwrap_err();
    assert_eq!(err.kind(), "NetworkError");

    let html = ctl.surface().results.html();
    assert!(html.contains("CORS"));
    assert!(html.contains("proxy"));
    assert!(!html.contains("Failed to fetch"));
}

#[test]
fn success_false_is_not_found_with_verbatim_query() {
    let (mut ctl, _) = controller(200, r#"{"success": false, "message": "nothing"}"#);
    let err = ctl.search("Nokia  3310 <classic>").unwrap_err();
    assert_eq!(err, LookupError::NotFound { query: s("Nokia  3310 <classic>") });
    assert!(err.to_string().contains("Nokia  3310 <classic>"));
    // Shown escaped in HTML.
    assert!(ctl.surface().results.html().contains("Nokia  3310 &lt;classic&gt;"));
}

#[test]
fn missing_specs_prefers_title_over_query() {
    let (mut ctl, _) = controller(200, r#"{"success": true, "data": {"title": "Google Pixel 9", "image": "x"}}"#);
    let err = ctl.search("pixel").unwrap_err();
    assert_eq!(err, LookupError::NoSpecs { subject: s("Google Pixel 9") });

    let (mut ctl, _) = controller(200, r#"{"success": true}"#);
    let err = ctl.search("pixel").unwrap_err();
    assert_eq!(err, LookupError::NoSpecs { subject: s("pixel") });
}

#[test]
fn malformed_body_is_unexpected() {
    let (mut ctl, _) = controller(200, "<html>maintenance</html>");
    let err = ctl.search("x").unwrap_err();
    assert_eq!(err.kind(), "UnexpectedError");

    // Wrong value type fails the parse instead of rendering blanks.
    let (mut ctl, _) = controller(200, r#"{"success": true, "data": {"title": "X", "specs": {"battery": {"type": 5000}}}}"#);
    assert_eq!(ctl.search("x").unwrap_err().kind(), "UnexpectedError");
}

#[test]
fn loading_shown_and_hidden_once_per_search() {
    let (mut ctl, _) = controller(200, &s24_body());
    ctl.search("a").unwrap();
    ctl.search("b").unwrap();
    let l = &ctl.surface().loading;
    assert_eq!((l.shown, l.hidden, l.visible), (2, 2, false));

    let (mut ctl, _) = controller(500, "");
    let _ = ctl.search("a");
    let l = &ctl.surface().loading;
    assert_eq!((l.shown, l.hidden, l.visible), (1, 1, false));
}

#[test]
fn begin_clears_previous_result_and_shows_loading() {
    let (mut ctl, _) = controller(200, &s24_body());
    ctl.search("a").unwrap();
    assert!(!ctl.surface().results.html().is_empty());

    let _ticket = ctl.begin("b").unwrap();
    assert!(ctl.surface().results.html().is_empty());
    assert!(ctl.surface().image.html().is_empty());
    assert!(ctl.surface().loading.visible);
    assert_eq!(ctl.state(), LookupState::Loading);
}

#[test]
fn only_the_latest_reply_is_displayed() {
    let (mut ctl, _) = controller_with(|url| {
        if url.ends_with("query=old") {
            Ok(HttpResponse::new(404, ""))
        } else {
            Ok(HttpResponse::new(200, s24_body()))
        }
    });

    let old = ctl.begin("old").unwrap();
    let new = ctl.begin("new").unwrap();
    assert!(new.seq() > old.seq());
    assert_eq!(ctl.latest_seq(), new.seq());

    // Old reply arrives last-but-not-latest: ignored, nothing touched.
    let old_reply = old.execute();
    let new_reply = new.execute();
    assert!(ctl.finish(old_reply).is_none());
    assert!(ctl.surface().results.html().is_empty());
    assert!(ctl.surface().loading.visible);

    let shown = ctl.finish(new_reply).unwrap().unwrap();
    assert_eq!(shown.title, "Samsung Galaxy S24 Ultra");
    assert!(!ctl.surface().results.html().contains("404"));

    let l = &ctl.surface().loading;
    assert_eq!((l.shown, l.hidden, l.visible), (1, 1, false));
}

#[test]
fn empty_query_supersedes_in_flight_request() {
    let (mut ctl, _) = controller(200, &s24_body());
    let pending = ctl.begin("a").unwrap();
    assert!(matches!(ctl.begin(" "), Err(LookupError::EmptyQuery)));

    let l = &ctl.surface().loading;
    assert_eq!((l.shown, l.hidden, l.visible), (1, 1, false));

    assert!(ctl.finish(pending.execute()).is_none());
    assert_eq!(ctl.state(), LookupState::ErrorDisplayed);
    assert!(ctl.surface().results.html().contains("error-message"));
}

#[test]
fn pending_ticket_is_debuggable() {
    let (mut ctl, _) = controller(200, &s24_body());
    let ticket = ctl.begin("Pixel 9").unwrap();
    let dbg = format!("{ticket:?}");
    assert!(dbg.starts_with("Ticket {"));
    assert!(dbg.contains("Pixel 9"));
    assert!(dbg.contains("query=Pixel%209"));
}

#[test]
fn ticket_runs_on_another_thread() {
    let (mut ctl, _) = controller(200, &s24_body());
    let ticket = ctl.begin("Samsung S24 Ultra").unwrap();
    let reply = std::thread::spawn(move || ticket.execute()).join().unwrap();
    assert_eq!(reply.query(), "Samsung S24 Ultra");
    assert!(reply.outcome().is_ok());
    assert!(ctl.finish(reply).unwrap().is_ok());
}

#[test]
fn searches_are_reentrant_after_error() {
    let (mut ctl, _) = controller_with(|url| {
        if url.ends_with("query=bad") {
            Ok(HttpResponse::new(200, r#"{"success": false}"#))
        } else {
            Ok(HttpResponse::new(200, s24_body()))
        }
    });
    assert!(ctl.search("bad").is_err());
    assert_eq!(ctl.state(), LookupState::ErrorDisplayed);
    assert!(ctl.search("good").is_ok());
    assert_eq!(ctl.state(), LookupState::Displayed);
    assert!(!ctl.surface().results.html().contains("error-message"));
}

fn s(v: &str) -> String {
    v.to_string()
}
