pub mod field;
pub mod result;
pub mod view;

pub use view::PredictionForm;
