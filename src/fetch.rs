//! Source image acquisition.
//!
//! Materializes one [`IconSource`] into a staging file inside the resource
//! tree: hosted sources are fetched over HTTP, local sources are copied from
//! the project. Either way the caller gets a plain file it can fan out from.

use crate::resolver::IconSource;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("reading response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("copying {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Save the image behind `source` to `dest`, overwriting anything there.
pub fn save_source(source: &IconSource, dest: &Path) -> Result<(), SaveError> {
    match source {
        IconSource::Remote(url) => {
            let response = ureq::get(url).call().map_err(|err| SaveError::Fetch {
                url: url.clone(),
                source: Box::new(err),
            })?;

            let mut body = Vec::new();
            response
                .into_reader()
                .read_to_end(&mut body)
                .map_err(|err| SaveError::Body {
                    url: url.clone(),
                    source: err,
                })?;

            fs::write(dest, body).map_err(|err| SaveError::Write {
                path: dest.to_path_buf(),
                source: err,
            })
        }
        IconSource::Local(path) => fs::copy(path, dest)
            .map(|_| ())
            .map_err(|err| SaveError::Copy {
                path: path.clone(),
                source: err,
            }),
    }
}
