//! High-level envelope cipher over [`Payload`] values.
//!
//! This is the surface callers use: `Text` payloads come back as base64
//! strings suitable for a text column, `Bytes` payloads come back as raw
//! buffers suitable for a blob store, and decryption mirrors the shape in
//! the other direction.

use keepsafe_common::{Error, Payload, Result};

use crate::aead;
use crate::codec;
use crate::keys::EnvelopeKey;
use crate::provider::KeyProvider;

/// Authenticated encryption of text and binary payloads with the
/// process-wide key.
///
/// Encrypt and decrypt calls are independent and share only the cached
/// key, so one cipher can be used concurrently without coordination.
#[derive(Debug)]
pub struct EnvelopeCipher {
    provider: KeyProvider,
}

impl EnvelopeCipher {
    /// Create a cipher over the given key provider.
    pub fn new(provider: KeyProvider) -> Self {
        Self { provider }
    }

    /// Cipher keyed from the default environment variable.
    pub fn from_env() -> Self {
        Self::new(KeyProvider::from_env())
    }

    fn key(&self) -> Result<&EnvelopeKey> {
        self.provider
            .key()
            .map_err(|e| Error::KeyUnavailable(e.to_string()))
    }

    /// Encrypt a payload, mirroring its shape.
    ///
    /// `Text` input is UTF-8 encoded, sealed, and returned as a base64
    /// envelope string; `Bytes` input is sealed and returned as a raw
    /// envelope buffer. Every call draws a fresh IV, so equal plaintexts
    /// produce different envelopes.
    ///
    /// # Errors
    /// - Returns `KeyUnavailable` if the key cannot be loaded
    pub fn encrypt(&self, payload: Payload) -> Result<Payload> {
        let key = self.key()?;
        match payload {
            Payload::Text(text) => {
                let envelope = aead::seal(key, text.as_bytes())?;
                Ok(Payload::Text(codec::encode(&envelope)))
            }
            Payload::Bytes(bytes) => Ok(Payload::Bytes(aead::seal(key, &bytes)?)),
        }
    }

    /// Decrypt an envelope payload, mirroring its shape.
    ///
    /// # Errors
    /// - Returns `KeyUnavailable` if the key cannot be loaded
    /// - Returns `MalformedEnvelope` for bad base64 or an input too short
    ///   to contain an IV
    /// - Returns `AuthenticationFailure` if tag verification fails; no
    ///   partial plaintext is returned
    /// - Returns `InvalidInput` if a `Text` request authenticates but the
    ///   plaintext is not UTF-8 (the envelope was created from bytes)
    pub fn decrypt(&self, payload: Payload) -> Result<Payload> {
        let key = self.key()?;
        match payload {
            Payload::Text(encoded) => {
                let envelope = codec::decode(&encoded)?;
                let plaintext = aead::open(key, &envelope)?;
                Ok(Payload::Text(codec::into_text(plaintext)?))
            }
            Payload::Bytes(envelope) => Ok(Payload::Bytes(aead::open(key, &envelope)?)),
        }
    }
}

/// Generate a fresh random 256-bit key, base64-encoded for placement in
/// configuration.
///
/// Provisioning helper only; the cached key of any live provider is
/// unaffected.
pub fn generate_key() -> String {
    EnvelopeKey::generate().to_base64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aead::OVERHEAD;
    use crate::provider::KeyProvider;

    const ZERO_KEY_B64: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

    fn cipher() -> EnvelopeCipher {
        EnvelopeCipher::new(KeyProvider::from_base64(ZERO_KEY_B64))
    }

    #[test]
    fn test_text_roundtrip() {
        let cipher = cipher();
        let encrypted = cipher.encrypt(Payload::from("a journal entry")).unwrap();
        assert!(encrypted.is_text());

        let decrypted = cipher.decrypt(encrypted).unwrap();
        assert_eq!(decrypted.into_text().unwrap(), "a journal entry");
    }

    #[test]
    fn test_bytes_roundtrip() {
        let cipher = cipher();
        let file: Vec<u8> = (0..=255).collect();

        let encrypted = cipher.encrypt(Payload::from(file.clone())).unwrap();
        assert!(!encrypted.is_text());
        assert_eq!(encrypted.len(), file.len() + OVERHEAD);

        let decrypted = cipher.decrypt(encrypted).unwrap();
        assert_eq!(decrypted.into_bytes().unwrap(), file);
    }

    #[test]
    fn test_hello_vault_scenario() {
        // Fixed zero key, "hello vault", encrypted twice: two distinct
        // base64 strings, both decrypting back, each decoding to at least
        // 12 + 16 + 11 bytes.
        let cipher = cipher();

        let first = cipher.encrypt(Payload::from("hello vault")).unwrap();
        let second = cipher.encrypt(Payload::from("hello vault")).unwrap();

        let first_b64 = first.clone().into_text().unwrap();
        let second_b64 = second.clone().into_text().unwrap();
        assert_ne!(first_b64, second_b64);

        for encoded in [&first_b64, &second_b64] {
            let raw = codec::decode(encoded).unwrap();
            assert_eq!(raw.len(), OVERHEAD + "hello vault".len());
        }

        assert_eq!(
            cipher.decrypt(first).unwrap().into_text().unwrap(),
            "hello vault"
        );
        assert_eq!(
            cipher.decrypt(second).unwrap().into_text().unwrap(),
            "hello vault"
        );
    }

    #[test]
    fn test_cross_provider_interoperability() {
        // Two independent providers loading the same key stand in for two
        // process instances: envelopes carry no per-process state.
        let writer = cipher();
        let reader = EnvelopeCipher::new(KeyProvider::from_base64(ZERO_KEY_B64));

        let envelope = writer.encrypt(Payload::from("shared state")).unwrap();
        let decrypted = reader.decrypt(envelope).unwrap();
        assert_eq!(decrypted.into_text().unwrap(), "shared state");
    }

    #[test]
    fn test_generated_key_is_usable() {
        let encoded = generate_key();
        let cipher = EnvelopeCipher::new(KeyProvider::from_base64(encoded));

        let envelope = cipher.encrypt(Payload::from("provisioned")).unwrap();
        assert_eq!(
            cipher.decrypt(envelope).unwrap().into_text().unwrap(),
            "provisioned"
        );
    }

    #[test]
    fn test_generate_key_does_not_touch_active_cache() {
        let cipher = cipher();
        let envelope = cipher.encrypt(Payload::from("before")).unwrap();

        let _ = generate_key();

        // Still decryptable with the cached key.
        assert_eq!(
            cipher.decrypt(envelope).unwrap().into_text().unwrap(),
            "before"
        );
    }

    #[test]
    fn test_bad_key_surfaces_as_key_unavailable() {
        let cipher = EnvelopeCipher::new(KeyProvider::from_base64("broken"));
        assert!(matches!(
            cipher.encrypt(Payload::from("x")),
            Err(Error::KeyUnavailable(_))
        ));
        assert!(matches!(
            cipher.decrypt(Payload::from("eA==")),
            Err(Error::KeyUnavailable(_))
        ));
    }

    #[test]
    fn test_decrypt_bad_base64_is_malformed() {
        let cipher = cipher();
        assert!(matches!(
            cipher.decrypt(Payload::from("*** not base64 ***")),
            Err(Error::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn test_decrypt_tampered_text_envelope_fails() {
        let cipher = cipher();
        let encoded = cipher
            .encrypt(Payload::from("tamper me"))
            .unwrap()
            .into_text()
            .unwrap();

        let mut raw = codec::decode(&encoded).unwrap();
        let mid = raw.len() / 2;
        raw[mid] ^= 0x10;
        let tampered = codec::encode(&raw);

        assert!(matches!(
            cipher.decrypt(Payload::Text(tampered)),
            Err(Error::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_binary_envelope_requested_as_text_is_caller_error() {
        let cipher = cipher();

        // A binary plaintext, sealed in bytes mode, then handed back as a
        // base64 string: authentication succeeds but UTF-8 decoding cannot.
        let envelope = cipher
            .encrypt(Payload::from(vec![0xFFu8, 0xFE, 0x00, 0x80]))
            .unwrap()
            .into_bytes()
            .unwrap();
        let as_text = codec::encode(&envelope);

        assert!(matches!(
            cipher.decrypt(Payload::Text(as_text)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unicode_text_roundtrip() {
        let cipher = cipher();
        let entry = "今日の日記 — café ☕";

        let encrypted = cipher.encrypt(Payload::from(entry)).unwrap();
        assert_eq!(
            cipher.decrypt(encrypted).unwrap().into_text().unwrap(),
            entry
        );
    }
}
