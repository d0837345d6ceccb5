pub mod origin;
pub use origin::*;
pub mod bbox;
pub use bbox::*;
