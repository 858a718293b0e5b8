mod key_printer_service;

pub use key_printer_service::*;
