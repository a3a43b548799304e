#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.product_not_found")]
    ProductNotFound,
    #[error("shopping_list.out_of_stock")]
    OutOfStock,
    #[error("catalog.unavailable")]
    Catalog(#[from] crate::domain::catalog::errors::CatalogError),
}
