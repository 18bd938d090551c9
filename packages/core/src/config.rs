//! Централизованная конфигурация для Vesper Core
//!
//! Все константы и настройки движка должны быть определены здесь,
//! чтобы избежать хардкода по всему проекту.

use std::sync::OnceLock;

/// Глобальная конфигурация движка (синглтон)
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Основная структура конфигурации
#[derive(Debug, Clone)]
pub struct Config {
    // ============================================
    // КРИПТОГРАФИЧЕСКИЕ ПАРАМЕТРЫ
    // ============================================
    /// Длина симметричного ключа (root/chain/message keys, в байтах)
    pub key_length: usize,

    /// Длина shared secret, передаваемого при создании сессии (в байтах)
    pub shared_secret_length: usize,

    /// Размер публичного ключа X25519 (в байтах)
    pub public_key_length: usize,

    /// Длина nonce для XChaCha20-Poly1305 (в байтах)
    pub xchacha_nonce_length: usize,

    /// Размер Poly1305 authentication tag (в байтах)
    pub aead_tag_length: usize,

    // ============================================
    // DOUBLE RATCHET ПАРАМЕТРЫ
    // ============================================
    /// Ёмкость кеша пропущенных message keys по умолчанию (DoS защита)
    pub default_max_cache: usize,
}

impl Config {
    /// Создать конфигурацию с дефолтными значениями
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Self {
        Self {
            // Криптография
            key_length: 32,
            shared_secret_length: 32,
            public_key_length: 32,
            xchacha_nonce_length: 24,
            aead_tag_length: 16,

            // Double Ratchet
            default_max_cache: 1000,
        }
    }

    /// Создать конфигурацию из переменных окружения
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("MAX_CACHED_MESSAGE_KEYS") {
            if let Ok(parsed) = val.parse() {
                config.default_max_cache = parsed;
            }
        }

        config
    }

    /// Получить глобальный экземпляр конфигурации
    ///
    /// Автоматически инициализирует конфигурацию со значениями по умолчанию
    /// при первом вызове
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::default)
    }

    /// Инициализировать глобальную конфигурацию со значениями по умолчанию
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init() -> Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(Self::default())
            .map_err(|_| "Config already initialized")
    }

    /// Инициализировать глобальную конфигурацию из переменных окружения
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_from_env() -> Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(Self::from_env())
            .map_err(|_| "Config already initialized")
    }

    /// Инициализировать глобальную конфигурацию с кастомным экземпляром
    ///
    /// # Errors
    ///
    /// Возвращает ошибку, если конфигурация уже была инициализирована
    pub fn init_with(config: Config) -> Result<(), &'static str> {
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| "Config already initialized")
    }

    /// Проверить, инициализирована ли глобальная конфигурация
    pub fn is_initialized() -> bool {
        GLOBAL_CONFIG.get().is_some()
    }
}
