//! Keypair requests.

use hyperstack::{KeypairRequest, Request};
use tracing::debug;

use crate::cli::CreateKeypairArgs;
use crate::error::CliError;

const KEYPAIRS_PATH: &str = "/core/keypairs";

/// `POST /core/keypairs`
///
/// The public key comes from `--public-key` or, trimmed, from the file named
/// by `--public-key-file`.
pub fn create(args: &CreateKeypairArgs) -> Result<Request, CliError> {
    let public_key = match (&args.public_key_file, &args.public_key) {
        (Some(path), _) => {
            debug!(path = %path.display(), "reading public key file");
            std::fs::read_to_string(path)
                .map_err(|e| CliError::input_file(path, e))?
                .trim()
                .to_string()
        }
        (None, Some(key)) => key.clone(),
        (None, None) => String::new(),
    };

    let body = KeypairRequest {
        name: args.name.clone(),
        environment_name: args.environment_name.clone(),
        public_key,
    };
    Ok(Request::post(KEYPAIRS_PATH).with_json(&body)?)
}
