mod portal;

pub use portal::AuthPortal;
