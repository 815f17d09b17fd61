use std::path::{Path, PathBuf};

pub type TintResult<T> = Result<T, TintError>;

#[derive(thiserror::Error, Debug)]
pub enum TintError {
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Image format error on '{}': {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Luminance map is {map:?} but source image is {source_dims:?}")]
    Dimensions {
        map: (u32, u32),
        source_dims: (u32, u32),
    },
}

impl TintError {
    /// Sorts an `image` error into the IO / format split
    pub fn from_image(path: &Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(source) => TintError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => TintError::Format {
                path: path.to_path_buf(),
                source: other,
            },
        }
    }
}
