pub mod action_bar;
pub mod input_field;
pub mod notice;
pub mod task_table;
pub mod utils;
pub mod warning;

pub use input_field::InputField;
pub use notice::Notice;
pub use warning::Warning;
