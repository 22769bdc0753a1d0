// tests/common/mod.rs
//
// Scripted transport + controller wiring shared by the integration tests.
//
#![allow(dead_code)]

use std::sync::{ Arc, Mutex };

use spec_lookup::core::net::{ Endpoint, HttpResponse, Transport, TransportError };
use spec_lookup::lookup::SpecLookupController;
use spec_lookup::progress::FlagIndicator;
use spec_lookup::render::{ HtmlTarget, Surface };

pub const ENDPOINT: &str = "https://api.example.test/api/search/gsmarena";

pub type TestController = SpecLookupController<HtmlTarget, FlagIndicator>;

/// Every URL the transport was asked for.
pub type Calls = Arc<Mutex<Vec<String>>>;

pub fn controller_with<F>(respond: F) -> (TestController, Calls)
where
    F: Fn(&str) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
{
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&calls);
    let transport: Arc<dyn Transport> = Arc::new(move |url: &str| {
        log.lock().unwrap().push(url.to_string());
        respond(url)
    });
    let surface = Surface::new(HtmlTarget::default(), HtmlTarget::default(), FlagIndicator::default());
    let ctl = SpecLookupController::new(transport, Endpoint::parse(ENDPOINT).unwrap(), surface);
    (ctl, calls)
}

/// Always answers with the same status/body.
pub fn controller(status: u16, body: &str) -> (TestController, Calls) {
    let body = body.to_string();
    controller_with(move |_| Ok(HttpResponse::new(status, body.clone())))
}

pub fn s24_body() -> String {
    r#"{
        "success": true,
        "data": {
            "title": "Samsung Galaxy S24 Ultra",
            "image": "https://fdn2.gsmarena.com/vv/bigpic/samsung-galaxy-s24-ultra-5g-sm-s928-stylus.jpg",
            "specs": {
                "display": { "type": "-", "size": "6.8 inches", "resolution": "-", "protection": "-" },
                "launch": { "announced": "-", "status": "-" },
                "battery": { "type": "Li-Ion 5000 mAh", "charging": "45W wired" }
            }
        }
    }"#
    .to_string()
}
