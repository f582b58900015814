mod emailjs;
mod smtp;

pub use emailjs::*;
pub use smtp::*;
