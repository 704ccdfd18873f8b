//! The search view state machine.
//!
//! [`SearchView`] holds everything the page shows: the current query and page,
//! whether a request is in flight, the contents of the results container and
//! the pagination bar. Front ends feed it user actions and fetch outcomes and
//! draw whatever it holds; it never performs I/O itself.
//!
//! Every request is described by a [`FetchTicket`]. Issuing a new ticket
//! supersedes all earlier ones, and outcomes for superseded tickets are
//! dropped, so a slow response can never overwrite a newer render.

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::pagination::{pagination_bar, total_pages, PaginationBar, MAX_PAGES};
use crate::query::normalize_query;
use crate::snippet::{parse_snippet, SnippetSegment};
use crate::types::{SearchResponse, PAGE_SIZE};

pub const PROMPT_MESSAGE: &str = "Please enter a search query.";
pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";
pub const NO_RESULTS_HEADING: &str = "No Results Found for Your Query";
pub const NO_RESULTS_BODY: [&str; 2] = [
    "DevSearch is currently a specialized search engine for developers, focused on topics like Python and JavaScript projects, tutorials, and resources.",
    "We are constantly expanding our index. Thank you for your understanding!",
];

/// A request the front end should perform, then hand back to [`SearchView::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub query: String,
    pub page: u32,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Rendered,
}

/// A rendered result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    /// 1-based position across all pages.
    pub rank: u64,
    pub title: String,
    pub url: String,
    pub snippet: Vec<SnippetSegment>,
}

/// Contents of the results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsPanel {
    /// Single card asking for a query.
    Prompt,
    /// Single card with [`ERROR_MESSAGE`].
    Error,
    /// The empty-state block.
    NoResults,
    Cards(Vec<ResultCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    current_query: String,
    current_page: u32,
    results_active: bool,
    generation: u64,
    phase: Phase,
    panel: Option<ResultsPanel>,
    pagination: Option<PaginationBar>,
}

impl Default for SearchView {
    fn default() -> Self {
        Self {
            current_query: String::new(),
            current_page: 1,
            results_active: false,
            generation: 0,
            phase: Phase::Idle,
            panel: None,
            pagination: None,
        }
    }
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a form submit.
    ///
    /// Empty input shows the prompt card and returns `None`. Otherwise the
    /// query becomes current, the page resets to 1 and a ticket for page 1
    /// is returned.
    pub fn submit_query(&mut self, raw_input: &str) -> Option<FetchTicket> {
        let Some(query) = normalize_query(raw_input) else {
            // Outstanding requests must not replace the prompt.
            self.generation += 1;
            self.clear();
            self.panel = Some(ResultsPanel::Prompt);
            self.phase = Phase::Rendered;
            return None;
        };

        self.current_query = query.to_string();
        self.current_page = 1;
        self.results_active = true;
        Some(self.fetch_and_render(1))
    }

    /// Handle a pagination control. Returns `None` before any query was submitted.
    pub fn request_page(&mut self, page: u32) -> Option<FetchTicket> {
        if self.current_query.is_empty() || page == 0 {
            return None;
        }
        self.current_page = page;
        Some(self.fetch_and_render(page))
    }

    fn fetch_and_render(&mut self, page: u32) -> FetchTicket {
        self.generation += 1;
        self.clear();
        self.phase = Phase::Loading;
        debug!(query = %self.current_query, page, generation = self.generation, "Issuing search request");
        FetchTicket {
            query: self.current_query.clone(),
            page,
            generation: self.generation,
        }
    }

    /// Apply the outcome of a request. Returns `false` if the ticket was superseded
    /// and the outcome was dropped.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<SearchResponse, FetchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                query = %ticket.query,
                page = ticket.page,
                generation = ticket.generation,
                latest = self.generation,
                "Dropping stale search response"
            );
            return false;
        }

        match outcome {
            Ok(data) => self.render_page(&data),
            Err(e) => {
                warn!(query = %ticket.query, page = ticket.page, "Search request failed: {e}");
                self.clear();
                self.panel = Some(ResultsPanel::Error);
                self.phase = Phase::Rendered;
            }
        }
        true
    }

    /// Render a response into the results container and pagination bar.
    ///
    /// A response reporting more than [`MAX_PAGES`] pages renders the error card.
    pub fn render_page(&mut self, data: &SearchResponse) {
        self.clear();
        self.phase = Phase::Rendered;

        if total_pages(data.total_results) > MAX_PAGES {
            warn!(total_results = data.total_results, "Rejecting response with too many pages");
            self.panel = Some(ResultsPanel::Error);
            return;
        }

        let panel = if data.results.is_empty() {
            ResultsPanel::NoResults
        } else {
            let offset = u64::from(data.page.saturating_sub(1)) * PAGE_SIZE;
            let cards = data
                .results
                .iter()
                .enumerate()
                .map(|(i, item)| ResultCard {
                    rank: offset + i as u64 + 1,
                    title: item.title.clone(),
                    url: item.url.clone(),
                    snippet: parse_snippet(&item.snippet),
                })
                .collect();
            ResultsPanel::Cards(cards)
        };

        self.panel = Some(panel);
        self.pagination = pagination_bar(data.page, data.total_results);
    }

    fn clear(&mut self) {
        self.panel = None;
        self.pagination = None;
    }

    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Set once a non-empty query has been submitted.
    pub fn results_active(&self) -> bool {
        self.results_active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn panel(&self) -> Option<&ResultsPanel> {
        self.panel.as_ref()
    }

    pub fn pagination(&self) -> Option<&PaginationBar> {
        self.pagination.as_ref()
    }
}
