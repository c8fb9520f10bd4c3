pub mod db;
pub mod food_item {
    pub mod entity;
    pub mod repository;
}
