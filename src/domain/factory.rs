//! Domain factories for generating identifiers.

use rand::seq::IndexedRandom;

use super::value_object::{ArchiveId, ConnectionId, ROOM_CODE_LENGTH, RoomCode};

/// Alphabet room codes are drawn from.
const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Factory for generating RoomCode instances.
///
/// Encapsulates random code sampling, separating the generation concern
/// from the validation logic in RoomCode. Uniqueness against allocated
/// codes is the caller's concern (the room directory retries on collision).
pub struct RoomCodeFactory;

impl RoomCodeFactory {
    /// Generate a random room code over the uppercase alphabet.
    pub fn generate() -> RoomCode {
        let mut rng = rand::rng();
        let code: String = (0..ROOM_CODE_LENGTH)
            .map(|_| *ROOM_CODE_ALPHABET.choose(&mut rng).unwrap() as char)
            .collect();
        RoomCode::new(code).expect("codes drawn from the uppercase alphabet are always valid")
    }
}

/// Factory for generating ConnectionId instances (UUID v4).
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new connection handle.
    pub fn generate() -> ConnectionId {
        ConnectionId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Factory for generating ArchiveId instances (UUID v4).
pub struct ArchiveIdFactory;

impl ArchiveIdFactory {
    /// Generate a new archive record identifier.
    pub fn generate() -> ArchiveId {
        ArchiveId::new(uuid::Uuid::new_v4().to_string())
    }
}
