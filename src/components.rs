pub mod amino_table;
pub mod food_card;

pub use amino_table::AminoTable;
pub use food_card::FoodCard;
