use std::sync::Arc;

use catalog::client::CatalogHttpClient;
use catalog::source::HttpCatalogSource;
use logger::TracingLogger;
use persistence::client::repository::ClientRepositoryPostgres;
use persistence::session::store::InMemorySessionStore;

use business::application::catalog::get_all::GetAllProductsUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_latest::GetLatestProductsUseCaseImpl;
use business::application::catalog::search::SearchProductsUseCaseImpl;
use business::application::client::create::CreateClientUseCaseImpl;
use business::application::client::list::ListClientsUseCaseImpl;
use business::application::inquiry::advance_flow::AdvanceInquiryFlowUseCaseImpl;
use business::application::inquiry::submit::SubmitInquiryUseCaseImpl;
use business::application::shopping_list::add_item::AddItemUseCaseImpl;
use business::application::shopping_list::change_quantity::ChangeQuantityUseCaseImpl;
use business::application::shopping_list::clear::ClearListUseCaseImpl;
use business::application::shopping_list::get::GetListUseCaseImpl;
use business::application::shopping_list::remove_item::RemoveItemUseCaseImpl;

use crate::config::catalog_config::CatalogConfig;
use crate::config::inquiry_config::InquiryConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub shopping_list_api: crate::api::shopping_list::routes::ShoppingListApi,
    pub client_api: crate::api::client::routes::ClientApi,
    pub inquiry_api: crate::api::inquiry::routes::InquiryApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog_config = CatalogConfig::from_env();
        let source = Arc::new(HttpCatalogSource::new(CatalogHttpClient::new(
            catalog_config.feed_url,
            catalog_config.api_key,
            catalog_config.basic_auth,
        )));
        let sessions = Arc::new(InMemorySessionStore::new());
        let client_repository = Arc::new(ClientRepositoryPostgres::new(pool));

        // Catalog use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            source: source.clone(),
            logger: logger.clone(),
        });
        let get_latest_use_case = Arc::new(GetLatestProductsUseCaseImpl {
            source: source.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            source: source.clone(),
            logger: logger.clone(),
        });
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            source: source.clone(),
            logger: logger.clone(),
        });

        // Shopping list use cases
        let get_list_use_case = Arc::new(GetListUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddItemUseCaseImpl {
            source,
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let change_quantity_use_case = Arc::new(ChangeQuantityUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveItemUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearListUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });

        // Client directory use cases
        let list_clients_use_case = Arc::new(ListClientsUseCaseImpl {
            repository: client_repository.clone(),
            logger: logger.clone(),
        });
        let create_client_use_case = Arc::new(CreateClientUseCaseImpl {
            repository: client_repository.clone(),
            logger: logger.clone(),
        });

        // Inquiry use cases
        let inquiry_config = InquiryConfig::from_env();
        let advance_flow_use_case = Arc::new(AdvanceInquiryFlowUseCaseImpl {
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let submit_use_case = Arc::new(SubmitInquiryUseCaseImpl {
            sessions,
            clients: client_repository,
            logger,
            destination: inquiry_config.email_to,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_use_case,
            get_latest_use_case,
            get_by_id_use_case,
            search_use_case,
        );

        let shopping_list_api = crate::api::shopping_list::routes::ShoppingListApi::new(
            get_list_use_case,
            add_item_use_case,
            change_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        );

        let client_api = crate::api::client::routes::ClientApi::new(
            list_clients_use_case,
            create_client_use_case,
        );

        let inquiry_api =
            crate::api::inquiry::routes::InquiryApi::new(advance_flow_use_case, submit_use_case);

        Ok(Self {
            health_api,
            product_api,
            shopping_list_api,
            client_api,
            inquiry_api,
        })
    }
}
