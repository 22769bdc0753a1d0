// src/lookup.rs
//
// The lookup lifecycle: Idle → Loading → {Displayed, ErrorDisplayed}, re-entrant.
//
// A search is three steps so a front end can put the network part on another
// thread:
//   begin(query)     UI side. Validate, bump the sequence number, clear the
//                    regions, show loading. Returns a Ticket.
//   Ticket::execute  Anywhere. GET + interpret. Returns a Reply.
//   finish(reply)    UI side. Drops replies that aren't from the latest
//                    begin(); otherwise hides loading once and renders.
// `search` runs all three in a row.

use std::fmt;
use std::sync::Arc;

use log::{ debug, error, info };

use crate::{
    config::options::LookupOptions,
    core::{
        net::{ Endpoint, HttpTransport, Transport },
        sanitize::normalize_query,
    },
    error::{ LookupError, SetupError },
    progress::LoadingIndicator,
    render::{ RenderTarget, Surface },
    specs::{ device::interpret, DeviceResult },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Loading,
    Displayed,
    ErrorDisplayed,
}

/// One request that has been started but not interpreted yet.
pub struct Ticket {
    seq: u64,
    query: String,
    url: String,
    transport: Arc<dyn Transport>,
}

impl Ticket {
    pub fn seq(&self) -> u64 { self.seq }
    pub fn query(&self) -> &str { &self.query }
    pub fn url(&self) -> &str { &self.url }

    pub fn execute(self) -> Reply {
        debug!("Lookup #{}: GET {}", self.seq, self.url);
        let outcome = interpret(&self.query, self.transport.get(&self.url));
        Reply { seq: self.seq, query: self.query, outcome }
    }
}

impl fmt::Debug for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticket")
            .field("seq", &self.seq)
            .field("query", &self.query)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Interpreted result of one ticket.
pub struct Reply {
    seq: u64,
    query: String,
    outcome: Result<DeviceResult, LookupError>,
}

impl Reply {
    pub fn seq(&self) -> u64 { self.seq }
    pub fn query(&self) -> &str { &self.query }
    pub fn outcome(&self) -> &Result<DeviceResult, LookupError> { &self.outcome }
}

pub struct SpecLookupController<T, L> {
    transport: Arc<dyn Transport>,
    endpoint: Endpoint,
    surface: Surface<T, L>,
    latest: u64,
    state: LookupState,
}

impl<T: RenderTarget, L: LoadingIndicator> SpecLookupController<T, L> {
    pub fn new(transport: Arc<dyn Transport>, endpoint: Endpoint, surface: Surface<T, L>) -> Self {
        Self { transport, endpoint, surface, latest: 0, state: LookupState::Idle }
    }

    /// Real HTTP transport against `opts.endpoint`.
    pub fn from_options(opts: &LookupOptions, surface: Surface<T, L>) -> Result<Self, SetupError> {
        let endpoint = Endpoint::parse(&opts.endpoint)
            .map_err(|e| SetupError::InvalidEndpoint(s!(&opts.endpoint), e))?;
        let transport = HttpTransport::new(opts)?;
        info!("Lookup: endpoint={} timeout={}s", endpoint, opts.timeout_secs);
        Ok(Self::new(Arc::new(transport), endpoint, surface))
    }

    pub fn surface(&self) -> &Surface<T, L> { &self.surface }
    pub fn surface_mut(&mut self) -> &mut Surface<T, L> { &mut self.surface }
    pub fn state(&self) -> LookupState { self.state }

    /// Sequence number of the most recent `begin`.
    pub fn latest_seq(&self) -> u64 { self.latest }

    pub fn search(&mut self, query: &str) -> Result<DeviceResult, LookupError> {
        let ticket = self.begin(query)?;
        let reply = ticket.execute();
        self.apply(reply)
    }

    pub fn begin(&mut self, query: &str) -> Result<Ticket, LookupError> {
        // Any begin supersedes whatever is in flight, including an empty one.
        self.latest += 1;
        let seq = self.latest;

        let Some(q) = normalize_query(query) else {
            if self.state == LookupState::Loading {
                // The superseded request showed it; nobody else will hide it.
                self.surface.loading.hide();
            }
            self.fail(seq, &LookupError::EmptyQuery);
            return Err(LookupError::EmptyQuery);
        };

        self.surface.clear();
        if self.state != LookupState::Loading {
            self.surface.loading.show();
        }
        self.state = LookupState::Loading;

        let url = self.endpoint.url_for(q);
        info!("Lookup #{}: begin query={:?}", seq, q);

        Ok(Ticket { seq, query: s!(q), url, transport: Arc::clone(&self.transport) })
    }

    /// `None` if `reply` was superseded (nothing is touched).
    pub fn finish(&mut self, reply: Reply) -> Option<Result<DeviceResult, LookupError>> {
        if reply.seq != self.latest || self.state != LookupState::Loading {
            debug!("Lookup #{}: stale reply discarded (latest #{})", reply.seq, self.latest);
            return None;
        }
        Some(self.apply(reply))
    }

    fn apply(&mut self, reply: Reply) -> Result<DeviceResult, LookupError> {
        self.surface.loading.hide();

        match reply.outcome {
            Ok(device) => {
                self.surface.render_image(&device.title, &device.image);
                self.surface.render_specs(&device);
                self.state = LookupState::Displayed;
                info!("Lookup #{}: OK title={:?}", reply.seq, device.title);
                Ok(device)
            }
            Err(e) => {
                self.fail(reply.seq, &e);
                Err(e)
            }
        }
    }

    fn fail(&mut self, seq: u64, e: &LookupError) {
        match e {
            LookupError::NetworkError { detail } => {
                error!("Lookup #{}: {} ({}): {}", seq, e.kind(), detail, e)
            }
            _ => error!("Lookup #{}: {}: {}", seq, e.kind(), e),
        }
        self.surface.render_error(&e.to_string());
        self.state = LookupState::ErrorDisplayed;
    }
}
