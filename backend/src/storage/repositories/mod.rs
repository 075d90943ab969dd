pub mod animal_repository;
pub mod user_repository;

pub use animal_repository::AnimalRepository;
pub use user_repository::UserRepository;
