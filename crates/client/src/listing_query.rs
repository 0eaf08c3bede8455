//! Public listing query: filter state, pagination and the current page of
//! results.
//!
//! Requests are tagged with a sequence number when issued. A response is
//! applied only if its tag is still the latest, so a slow response to an
//! outdated filter can never overwrite a newer page.

use std::ops::RangeInclusive;

use vitrine_shared::{ApiError, Listing, ListingPage, SortMode};

use crate::api_client::ApiClient;
use crate::config::PAGE_SIZE;
use crate::log_debug;

/// User-selected filters. Prices stay as typed; they are converted to
/// numbers only when the query is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub city: String,
    pub category: String,
    pub price_min: String,
    pub price_max: String,
    pub verified_only: bool,
    pub online_only: bool,
    pub sort: SortMode,
}

/// One filter edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    City(String),
    Category(String),
    PriceMin(String),
    PriceMax(String),
    VerifiedOnly(bool),
    OnlineOnly(bool),
    Sort(SortMode),
    Page(u32),
}

/// A list request that has been issued but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub params: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    filters: ListingFilters,
    page: u32,
    listings: Vec<Listing>,
    total: u64,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            filters: ListingFilters::default(),
            page: 1,
            listings: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            latest_seq: 0,
        }
    }
}

/// `⌈total / page_size⌉`, never less than one page.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let pages = total.div_ceil(u64::from(page_size.max(1)));
    u32::try_from(pages).unwrap_or(u32::MAX).max(1)
}

/// Numbered page links shown around `page`: at most `width`, centred on the
/// current page and shifted to stay within `1..=total_pages`.
pub fn page_window(page: u32, total_pages: u32, width: u32) -> RangeInclusive<u32> {
    let total = total_pages.max(1);
    let width = width.clamp(1, total);
    let page = page.clamp(1, total);
    let start = page
        .saturating_sub(width / 2)
        .clamp(1, total - width + 1);
    start..=start + width - 1
}

fn parse_price(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a route such as `/acompanhantes/rio-de-janeiro`.
    pub fn from_route(city: Option<&str>, category: Option<&str>) -> Self {
        let mut query = Self::default();
        query.filters.city = city.unwrap_or_default().to_string();
        query.filters.category = category.unwrap_or_default().to_string();
        query
    }

    pub fn filters(&self) -> &ListingFilters {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, PAGE_SIZE)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Loaded successfully but matched nothing.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.listings.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Apply one filter edit. Anything other than a page change sends the
    /// user back to page 1.
    pub fn set_filter(&mut self, change: FilterChange) {
        match change {
            FilterChange::Page(page) => {
                self.page = page.max(1);
                return;
            }
            FilterChange::City(city) => self.filters.city = city,
            FilterChange::Category(category) => self.filters.category = category,
            FilterChange::PriceMin(value) => self.filters.price_min = value,
            FilterChange::PriceMax(value) => self.filters.price_max = value,
            FilterChange::VerifiedOnly(on) => self.filters.verified_only = on,
            FilterChange::OnlineOnly(on) => self.filters.online_only = on,
            FilterChange::Sort(sort) => self.filters.sort = sort,
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters = ListingFilters::default();
        self.page = 1;
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.set_filter(FilterChange::Page(self.page + 1));
        true
    }

    /// Jump to a page picked from the numbered links.
    pub fn go_to_page(&mut self, page: u32) {
        self.set_filter(FilterChange::Page(page));
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.set_filter(FilterChange::Page(self.page - 1));
        true
    }

    /// Query string for the list endpoint. Empty filters are omitted, and so
    /// are price bounds that are not whole numbers.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let f = &self.filters;
        let mut params = vec![
            ("page", self.page.to_string()),
            ("per_page", PAGE_SIZE.to_string()),
            ("ordenar", f.sort.as_str().to_string()),
        ];
        if !f.city.is_empty() {
            params.push(("cidade", f.city.clone()));
        }
        if !f.category.is_empty() {
            params.push(("categoria", f.category.clone()));
        }
        if let Some(min) = parse_price(&f.price_min) {
            params.push(("preco_min", min.to_string()));
        }
        if let Some(max) = parse_price(&f.price_max) {
            params.push(("preco_max", max.to_string()));
        }
        if f.verified_only {
            params.push(("verificada", "true".to_string()));
        }
        if f.online_only {
            params.push(("online", "true".to_string()));
        }
        params
    }

    /// Mark a request as issued and return its tag and parameters.
    pub fn begin_fetch(&mut self) -> PageRequest {
        self.latest_seq += 1;
        self.loading = true;
        PageRequest {
            seq: self.latest_seq,
            params: self.query_params(),
        }
    }

    /// Apply a response. Returns `false` (and changes nothing) when a newer
    /// request has been issued since `seq`.
    ///
    /// On failure the previous results stay in place and the error is kept
    /// for display.
    pub fn apply(&mut self, seq: u64, result: Result<ListingPage, ApiError>) -> bool {
        if seq != self.latest_seq {
            log_debug!("Discarding stale listing response #{seq} (latest #{})", self.latest_seq);
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.listings = page.data;
                self.total = page.total;
                self.error = None;
            }
            Err(e) => {
                crate::log_error!("Failed to load listings: {e}");
                self.error = Some(e.user_message());
            }
        }
        true
    }

    /// Issue and apply a request for the current filters and page.
    pub async fn fetch_page(&mut self, api: &ApiClient) {
        let request = self.begin_fetch();
        let result = api.list_listings(&request.params).await;
        self.apply(request.seq, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use mockito::Matcher;

    fn listing(id: u64) -> Listing {
        Listing {
            id,
            slug: format!("perfil-{id}"),
            ..Default::default()
        }
    }

    fn page_of(ids: &[u64], total: u64) -> ListingPage {
        ListingPage {
            data: ids.iter().copied().map(listing).collect(),
            total,
            pages: 0,
            current_page: 1,
        }
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn every_filter_change_except_page_resets_to_first_page() {
        let changes = vec![
            FilterChange::City("rio-de-janeiro".into()),
            FilterChange::Category("loiras".into()),
            FilterChange::PriceMin("100".into()),
            FilterChange::PriceMax("500".into()),
            FilterChange::VerifiedOnly(true),
            FilterChange::OnlineOnly(true),
            FilterChange::Sort(SortMode::PriceAsc),
        ];
        for change in changes {
            let mut query = ListingQuery::new();
            query.set_filter(FilterChange::Page(3));
            assert_eq!(query.page(), 3);
            query.set_filter(change.clone());
            assert_eq!(query.page(), 1, "{change:?} should reset the page");
        }
    }

    #[test]
    fn page_change_keeps_filters() {
        let mut query = ListingQuery::from_route(Some("niteroi"), None);
        query.set_filter(FilterChange::Page(2));
        assert_eq!(query.page(), 2);
        assert_eq!(query.filters().city, "niteroi");

        query.set_filter(FilterChange::Page(0));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(37, 12), 4);
        assert_eq!(total_pages(36, 12), 3);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(0, 12), 1);
    }

    #[test]
    fn page_window_slides_with_the_current_page() {
        assert_eq!(page_window(1, 3, 5), 1..=3);
        assert_eq!(page_window(2, 10, 5), 1..=5);
        assert_eq!(page_window(3, 10, 5), 1..=5);
        assert_eq!(page_window(6, 10, 5), 4..=8);
        assert_eq!(page_window(9, 10, 5), 6..=10);
        assert_eq!(page_window(10, 10, 5), 6..=10);
        assert_eq!(page_window(1, 0, 5), 1..=1);
    }

    #[test]
    fn go_to_page_keeps_filters() {
        let mut query = ListingQuery::from_route(Some("niteroi"), None);
        query.go_to_page(4);
        assert_eq!(query.page(), 4);
        assert_eq!(query.filters().city, "niteroi");
    }

    #[test]
    fn query_includes_only_set_filters() {
        let query = ListingQuery::new();
        assert_eq!(
            query.query_params(),
            vec![
                ("page", "1".to_string()),
                ("per_page", "12".to_string()),
                ("ordenar", "recentes".to_string()),
            ]
        );

        let mut query = ListingQuery::from_route(Some("rio-de-janeiro"), Some("morenas"));
        query.set_filter(FilterChange::PriceMin(" 150 ".into()));
        query.set_filter(FilterChange::PriceMax("barato".into()));
        query.set_filter(FilterChange::VerifiedOnly(true));
        query.set_filter(FilterChange::Sort(SortMode::Popular));
        let params = query.query_params();

        assert_eq!(param(&params, "cidade"), Some("rio-de-janeiro"));
        assert_eq!(param(&params, "categoria"), Some("morenas"));
        assert_eq!(param(&params, "preco_min"), Some("150"));
        assert_eq!(param(&params, "preco_max"), None);
        assert_eq!(param(&params, "verificada"), Some("true"));
        assert_eq!(param(&params, "online"), None);
        assert_eq!(param(&params, "ordenar"), Some("popular"));
    }

    #[test]
    fn clear_filters_restores_initial_query() {
        let initial = ListingQuery::new().query_params();

        let mut query = ListingQuery::new();
        query.set_filter(FilterChange::City("rio-de-janeiro".into()));
        query.set_filter(FilterChange::OnlineOnly(true));
        query.set_filter(FilterChange::Sort(SortMode::PriceDesc));
        query.set_filter(FilterChange::Page(4));
        query.clear_filters();

        assert_eq!(query.page(), 1);
        assert_eq!(query.query_params(), initial);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut query = ListingQuery::new();
        let first = query.begin_fetch();
        query.set_filter(FilterChange::City("niteroi".into()));
        let second = query.begin_fetch();

        assert!(query.apply(second.seq, Ok(page_of(&[2], 1))));
        assert!(!query.apply(first.seq, Ok(page_of(&[1, 3], 2))));

        assert_eq!(query.listings()[0].id, 2);
        assert_eq!(query.total(), 1);
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut query = ListingQuery::new();
        let req = query.begin_fetch();
        query.apply(req.seq, Ok(page_of(&[1, 2], 2)));

        let req = query.begin_fetch();
        query.apply(req.seq, Err(ApiError::Network("offline".into())));

        assert_eq!(query.listings().len(), 2);
        assert_eq!(query.error(), Some(vitrine_shared::CONNECTION_ERROR_MESSAGE));
        assert!(!query.is_loading());
        assert!(!query.is_empty_result());
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut query = ListingQuery::new();
        let req = query.begin_fetch();
        assert!(query.is_loading());
        query.apply(req.seq, Ok(page_of(&[], 0)));

        assert!(query.is_empty_result());
        assert_eq!(query.error(), None);
        assert_eq!(query.total_pages(), 1);
        assert!(!query.has_next());
    }

    #[test]
    fn pagination_stops_at_last_page() {
        let mut query = ListingQuery::new();
        let req = query.begin_fetch();
        query.apply(req.seq, Ok(page_of(&[1], 37)));

        assert!(!query.previous_page());
        assert!(query.next_page());
        assert!(query.next_page());
        assert!(query.next_page());
        assert_eq!(query.page(), 4);
        assert!(!query.next_page());
        assert!(query.previous_page());
        assert_eq!(query.page(), 3);
    }

    #[tokio::test]
    async fn fetch_page_sends_filters_and_replaces_results() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/acompanhantes")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("per_page".into(), "12".into()),
                Matcher::UrlEncoded("ordenar".into(), "preco_asc".into()),
                Matcher::UrlEncoded("cidade".into(), "rio-de-janeiro".into()),
                Matcher::UrlEncoded("online".into(), "true".into()),
            ]))
            .with_body(r#"{"data":[{"id":5,"slug":"ana","nome":"Ana","valor_hora":250}],"total":37,"pages":4,"current_page":1}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        let mut query = ListingQuery::from_route(Some("rio-de-janeiro"), None);
        query.set_filter(FilterChange::Sort(SortMode::PriceAsc));
        query.set_filter(FilterChange::OnlineOnly(true));
        query.fetch_page(&api).await;

        mock.assert_async().await;
        assert_eq!(query.listings()[0].name, "Ana");
        assert_eq!(query.total_pages(), 4);
        assert!(query.has_next());
    }

    #[tokio::test]
    async fn cleared_query_reproduces_unfiltered_load() {
        let mut server = mockito::Server::new_async().await;
        let unfiltered = server
            .mock("GET", "/acompanhantes")
            .match_query(Matcher::Exact("page=1&per_page=12&ordenar=recentes".into()))
            .with_body(r#"{"data":[{"id":1},{"id":2}],"total":2}"#)
            .expect(2)
            .create_async()
            .await;
        server
            .mock("GET", "/acompanhantes")
            .match_query(Matcher::UrlEncoded("categoria".into(), "ruivas".into()))
            .with_body(r#"{"data":[],"total":0}"#)
            .create_async()
            .await;

        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        let mut query = ListingQuery::new();
        query.fetch_page(&api).await;
        let initial = query.listings().to_vec();

        query.set_filter(FilterChange::Category("ruivas".into()));
        query.fetch_page(&api).await;
        assert!(query.is_empty_result());

        query.clear_filters();
        query.fetch_page(&api).await;

        assert_eq!(query.listings(), initial.as_slice());
        unfiltered.assert_async().await;
    }
}
