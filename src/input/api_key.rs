use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::input::InputError;

pub const API_KEY_ENV: &str = "TMDB_API_KEY";
pub const PRIVATE_DIR: &str = "private";
pub const API_KEY_FILE: &str = "api_key";

/// TMDB key from `TMDB_API_KEY`, else from `<main_folder>/private/api_key`.
/// Returns an empty key when neither is available.
pub fn resolve_api_key(main_folder: &Path) -> Result<String, InputError> {
    resolve_api_key_from(std::env::var(API_KEY_ENV).ok(), main_folder)
}

/// Same as [`resolve_api_key`] with the environment value passed in. A blank
/// value falls through to the private folder.
pub fn resolve_api_key_from(
    env_value: Option<String>,
    main_folder: &Path,
) -> Result<String, InputError> {
    info!("setting TMDB API key");
    if let Some(key) = env_value {
        let key = key.trim().to_string();
        if !key.is_empty() {
            debug!("using API key from {}", API_KEY_ENV);
            return Ok(key);
        }
    }
    load_api_key_from_folder(main_folder)
}

pub fn load_api_key_from_folder(main_folder: &Path) -> Result<String, InputError> {
    let abs_path = if main_folder.is_absolute() {
        main_folder.to_path_buf()
    } else {
        std::env::current_dir()?.join(main_folder)
    };
    let private_dir = abs_path.join(PRIVATE_DIR);
    if !private_dir.is_dir() {
        warn!(
            "no private folder in {}; API key will remain blank",
            abs_path.display()
        );
        return Ok(String::new());
    }

    debug!("private folder exists in {}", abs_path.display());
    let key_path = private_dir.join(API_KEY_FILE);
    if !key_path.is_file() {
        return Err(InputError::MissingInput(key_path.display().to_string()));
    }
    let key = fs::read_to_string(&key_path)?.trim().to_string();
    if key.is_empty() {
        warn!("API key file {} is empty", key_path.display());
    }
    Ok(key)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/api_key.rs"]
mod tests;
