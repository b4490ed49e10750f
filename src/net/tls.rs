//! TLS configuration and certificate loading.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;

use crate::config::TlsConfig;

/// Error type for TLS setup.
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no certificates found in {}", .0.display())]
    NoCertificates(PathBuf),

    #[error("no private key found in {}", .0.display())]
    NoPrivateKey(PathBuf),

    #[error("rejected TLS material: {0}")]
    Rejected(#[source] std::io::Error),
}

fn open(path: &Path) -> Result<BufReader<File>, TlsError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| TlsError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Read the PEM certificate chain, as DER blobs.
pub fn read_certificates(path: &Path) -> Result<Vec<Vec<u8>>, TlsError> {
    let mut reader = open(path)?;
    let certs = rustls_pemfile::certs(&mut reader)
        .map(|cert| cert.map(|der| der.to_vec()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| TlsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    if certs.is_empty() {
        return Err(TlsError::NoCertificates(path.to_path_buf()));
    }
    Ok(certs)
}

/// Read the first PEM private key (PKCS#1, PKCS#8 or SEC1), as DER.
pub fn read_private_key(path: &Path) -> Result<Vec<u8>, TlsError> {
    let mut reader = open(path)?;
    match rustls_pemfile::private_key(&mut reader) {
        Ok(Some(key)) => Ok(key.secret_der().to_vec()),
        Ok(None) => Err(TlsError::NoPrivateKey(path.to_path_buf())),
        Err(source) => Err(TlsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load TLS configuration from certificate and key files.
pub async fn load_tls_config(config: &TlsConfig) -> Result<RustlsConfig, TlsError> {
    let cert_path = Path::new(&config.cert_path);
    let key_path = Path::new(&config.key_path);

    let certs = read_certificates(cert_path)?;
    let key = read_private_key(key_path)?;

    tracing::info!(
        cert_path = %cert_path.display(),
        certificates = certs.len(),
        "TLS material loaded"
    );

    RustlsConfig::from_der(certs, key)
        .await
        .map_err(TlsError::Rejected)
}
