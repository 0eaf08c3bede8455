//! Taxonomy loading.
//!
//! Lists are fetched concurrently and the load fails if any one of them
//! fails. No order between the requests is assumed.

use futures_util::future::{try_join, try_join4};
use vitrine_shared::{ApiError, Taxonomy};

use crate::api_client::ApiClient;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomies {
    pub cities: Vec<Taxonomy>,
    pub neighborhoods: Vec<Taxonomy>,
    pub categories: Vec<Taxonomy>,
    pub services: Vec<Taxonomy>,
}

impl Taxonomies {
    /// Cities and categories, used by the listing filters.
    pub async fn load_filters(api: &ApiClient) -> Result<Self, ApiError> {
        let (cities, categories) = try_join(api.cities(), api.categories()).await?;
        Ok(Self {
            cities,
            categories,
            ..Default::default()
        })
    }

    /// All four lists, used by the profile editor.
    pub async fn load_all(api: &ApiClient) -> Result<Self, ApiError> {
        let (cities, neighborhoods, categories, services) = try_join4(
            api.cities(),
            api.neighborhoods(None),
            api.categories(),
            api.services(),
        )
        .await?;
        Ok(Self {
            cities,
            neighborhoods,
            categories,
            services,
        })
    }

    pub fn city_name<'a>(&'a self, slug: &'a str) -> &'a str {
        vitrine_shared::taxonomy_name(&self.cities, slug)
    }

    pub fn category_name<'a>(&'a self, slug: &'a str) -> &'a str {
        vitrine_shared::taxonomy_name(&self.categories, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    async fn mock_list(server: &mut mockito::Server, path: &str, body: &str) -> mockito::Mock {
        server
            .mock("GET", path)
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn filters_load_cities_and_categories() {
        let mut server = mockito::Server::new_async().await;
        let cities = mock_list(
            &mut server,
            "/cidades",
            r#"[{"id":1,"nome":"Rio de Janeiro","slug":"rio-de-janeiro","count":12}]"#,
        )
        .await;
        let categories = mock_list(
            &mut server,
            "/categorias",
            r#"[{"id":2,"nome":"Morenas","slug":"morenas","count":4}]"#,
        )
        .await;

        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        let tax = Taxonomies::load_filters(&api).await.unwrap();

        assert_eq!(tax.city_name("rio-de-janeiro"), "Rio de Janeiro");
        assert_eq!(tax.category_name("morenas"), "Morenas");
        assert!(tax.services.is_empty());
        cities.assert_async().await;
        categories.assert_async().await;
    }

    #[tokio::test]
    async fn one_failure_fails_the_load() {
        let mut server = mockito::Server::new_async().await;
        mock_list(&mut server, "/cidades", "[]").await;
        mock_list(&mut server, "/bairros", "[]").await;
        mock_list(&mut server, "/categorias", "[]").await;
        server
            .mock("GET", "/servicos")
            .with_status(500)
            .with_body("{}")
            .create_async()
            .await;

        let api = ApiClient::new(&ClientConfig::default()).with_base_url(server.url());
        let err = Taxonomies::load_all(&api).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }
}
