pub mod columns;
pub mod pagination;
