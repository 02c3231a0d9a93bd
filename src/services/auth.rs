use argon2::{
    password_hash::{rand_core::OsRng, Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use std::sync::OnceLock;

// Argon2id parameters shared by hashing, verification, and the dummy
// verification on unknown usernames (which keeps login timing uniform).
const MEMORY_KIB: u32 = 64 * 1024;
const ITERATIONS: u32 = 3;
const LANES: u32 = 4;

pub struct PasswordManager;

static ENGINE: OnceLock<Argon2> = OnceLock::new();

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        ENGINE.get_or_init(|| {
            let params = Params::new(MEMORY_KIB, ITERATIONS, LANES, None)
                .expect("Invalid Argon2 parameters");
            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed = PasswordHash::new(stored_hash)?;
        match Self::engine().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Verify a login attempt without leaking whether the username exists:
    /// unknown users still burn a full verification against a dummy hash,
    /// keeping response timing uniform.
    pub fn verify_login(stored_hash: Option<&str>, password: &str) -> bool {
        match stored_hash {
            Some(hash) => Self::verify_password(password, hash).unwrap_or(false),
            None => {
                let dummy = Self::hash_password("dummy-password-for-timing")
                    .unwrap_or_else(|_| FALLBACK_DUMMY_HASH.to_string());
                let _ = Self::verify_password(password, &dummy);
                false
            }
        }
    }
}

// Pre-computed Argon2id hash with the parameters above, used only if
// hashing the dummy password itself fails.
const FALLBACK_DUMMY_HASH: &str =
    "$argon2id$v=19$m=65536,t=3,p=4$dW5rbm93bl9zYWx0X2R1bW15$E2LvWPx3FxvDaJxEMpLLBfWbLkPXfYHrF8z9CGCX3eI";
