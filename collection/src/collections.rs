pub mod collection;
pub mod comparer;
pub mod index;
