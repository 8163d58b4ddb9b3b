pub mod catalog;
pub mod product {
    pub mod entity;
    pub mod repository;
}
