//! Category listing service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CategoryQuery, CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, Error};

/// Category listing backed by a [`CategoryRepository`].
#[derive(Clone)]
pub struct CategoryService<C> {
    categories: Arc<C>,
}

impl<C> CategoryService<C> {
    /// Create the service over `categories`.
    pub fn new(categories: Arc<C>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl<C: CategoryRepository> CategoryQuery for CategoryService<C> {
    async fn list_categories(&self) -> Result<Vec<Category>, Error> {
        self.categories.list().await.map_err(|error| match error {
            CategoryRepositoryError::Unavailable { message } => {
                Error::internal(format!("category repository unavailable: {message}"))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryId;
    use crate::domain::ports::MockCategoryRepository;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn lists_repository_categories_in_order() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_list().times(1).return_once(|| {
            Ok(vec![
                Category::new(CategoryId::new(1), "Work"),
                Category::new(CategoryId::new(2), "Personal"),
            ])
        });

        let names: Vec<_> = CategoryService::new(Arc::new(repo))
            .list_categories()
            .await
            .expect("categories")
            .iter()
            .map(|category| category.name().to_owned())
            .collect();
        assert_eq!(names, ["Work", "Personal"]);
    }
}
