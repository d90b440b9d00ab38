pub mod console;
pub mod constants;
pub mod crypto;
pub mod info;
pub mod key;
pub mod object;
