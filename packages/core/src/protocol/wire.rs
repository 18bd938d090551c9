// Wire format (MessagePack сериализация)
// Используется для передачи сообщений и снапшотов сессий через транспорт

use crate::crypto::messaging::session_state::SessionState;
use crate::error::CryptoError;
use crate::protocol::messages::Message;
use rmp_serde::{Deserializer, Serializer};
use serde::{Deserialize, Serialize};

/// Упаковать Message в MessagePack формат
pub fn pack_message(message: &Message) -> Result<Vec<u8>, CryptoError> {
    pack_raw(message)
}

/// Распаковать MessagePack в Message
pub fn unpack_message(data: &[u8]) -> Result<Message, CryptoError> {
    unpack_raw(data)
}

/// Упаковать снапшот сессии в MessagePack формат
pub fn pack_session_state(state: &SessionState) -> Result<Vec<u8>, CryptoError> {
    pack_raw(state)
}

/// Распаковать MessagePack в снапшот сессии
pub fn unpack_session_state(data: &[u8]) -> Result<SessionState, CryptoError> {
    unpack_raw(data)
}

/// Упаковать произвольные данные в MessagePack
pub fn pack_raw<T: Serialize>(data: &T) -> Result<Vec<u8>, CryptoError> {
    let mut buffer = Vec::new();
    data.serialize(&mut Serializer::new(&mut buffer))
        .map_err(|e| CryptoError::SerializationError(format!("MessagePack pack error: {}", e)))?;
    Ok(buffer)
}

/// Распаковать MessagePack в произвольный тип
pub fn unpack_raw<'a, T: Deserialize<'a>>(data: &'a [u8]) -> Result<T, CryptoError> {
    let mut deserializer = Deserializer::new(data);
    T::deserialize(&mut deserializer)
        .map_err(|e| CryptoError::DeserializationError(format!("MessagePack unpack error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::messages::Header;

    #[test]
    fn test_pack_unpack_message() {
        let message = Message {
            header: Header {
                public_key: vec![7u8; 32],
                number_of_messages_in_previous_sending_chain: 4,
                message_number: 9,
            },
            cipher: vec![1, 2, 3, 4, 5],
        };

        let packed = pack_message(&message).unwrap();
        assert!(!packed.is_empty());
        assert_eq!(unpack_message(&packed).unwrap(), message);
    }

    #[test]
    fn test_unpack_rejects_garbage() {
        assert!(unpack_message(&[0xC1, 0xFF, 0x00]).is_err());
    }
}
