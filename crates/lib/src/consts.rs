/// Environment variable naming the default content root.
pub const ROOT_ENV_VAR: &str = "DOCPACK_ROOT";

/// Content root used when neither `--root` nor [`ROOT_ENV_VAR`] is given.
pub const DEFAULT_CONTENT_ROOT: &str = "content";

/// Stem of the per-language manifest file (`language.yaml`, `language.json`, ...).
pub const MANIFEST_STEM: &str = "language";

/// Number of hex characters kept from a content hash.
pub const OBJ_HASH_PREFIX_LEN: usize = 20;
