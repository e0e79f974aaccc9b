pub mod rounded_box;
pub mod stack;
