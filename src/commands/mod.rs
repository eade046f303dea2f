pub mod check;
pub mod decode;

pub use check::handle_check;
pub use decode::handle_decode;
