pub mod align;
pub mod translate;
