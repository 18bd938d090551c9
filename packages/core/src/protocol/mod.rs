// Протокольный модуль: wire-типы и кодек

pub mod messages;
pub mod wire;
