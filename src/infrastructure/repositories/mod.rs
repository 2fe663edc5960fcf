pub mod mongo_recipe_repository;
pub mod recipe_repository;

pub use mongo_recipe_repository::MongoRecipeRepository;
pub use recipe_repository::{RecipeRepository, RepositoryError};
