// Утилиты

pub mod b64;
