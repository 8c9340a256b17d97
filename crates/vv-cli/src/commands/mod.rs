pub mod commit;
pub mod root;
pub mod witness;
