//! Content digests used as registry lookup keys.

use crate::error::{JarBomError, Result};
use sha1::{Digest, Sha1};
use std::path::Path;
use tokio::io::AsyncReadExt;

const CHUNK_SIZE: usize = 64 * 1024;

/// Computes the lowercase hex SHA-1 of a file, streaming it in 64 KiB chunks.
pub async fn sha1_file(path: &Path) -> Result<String> {
    let read_err = |source| JarBomError::Hash {
        path: path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::File::open(path).await.map_err(read_err)?;
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf).await.map_err(read_err)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    let digest = hex_encode(&hasher.finalize());
    tracing::debug!("sha1 {} = {}", path.display(), digest);
    Ok(digest)
}

/// SHA-1 of an in-memory buffer.
pub fn sha1_hex(data: &[u8]) -> String {
    hex_encode(&Sha1::digest(data))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
