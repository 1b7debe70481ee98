use crate::error::RenderError;
use crate::matrix::Matrix;
use crate::options::RenderConfig;
use crate::render;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/*---- Utilities ----*/

/// Renders a matrix and returns the encoded image bytes.
///
/// # Example
///
/// ```rust
/// use qirender::helper::to_bytes;
/// use qirender::matrix::Matrix;
/// use qirender::options::RenderConfig;
///
/// let matrix = Matrix::from_modules(21, |x, y| (x * y) % 3 == 0);
/// let config = RenderConfig::builder().builtin_encoder_named("png").unwrap().build();
/// let png = to_bytes(&matrix, &config).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn to_bytes(matrix: &Matrix, config: &RenderConfig) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    render::encode(matrix, config, &mut out)?;
    Ok(out)
}

/// Renders a matrix and saves the encoded image to a file.
///
/// # Arguments
///
/// * `matrix` - The cell matrix to render.
/// * `config` - Colors, shape, logo and encoder to use.
/// * `directory` - Optional. The directory the image is saved in. Defaults to "generated"
///   and is created if missing.
/// * `filename` - Optional. The file name, extension included. Defaults to a timestamp-based
///   name with the encoder's extension, if it has one.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns a [`RenderError`] if rendering, encoding or writing fails.
pub fn save(
    matrix: &Matrix,
    config: &RenderConfig,
    directory: Option<&str>,
    filename: Option<&str>,
) -> Result<PathBuf, RenderError> {
    let directory = Path::new(directory.unwrap_or("generated"));
    let filename = match filename {
        Some(name) => name.to_string(),
        None => {
            let since_the_epoch = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
            let stem = format!("qr-{}", since_the_epoch.as_millis());
            match config.encoder().extension() {
                Some(ext) => format!("{}.{}", stem, ext),
                None => stem,
            }
        }
    };

    // Check if the directory exists, create it if it doesn't
    if !directory.exists() {
        fs::create_dir_all(directory)?;
    }

    let file_path = directory.join(filename);
    log::debug!("saving QR image to {}", file_path.display());
    render::encode(matrix, config, BufWriter::new(File::create(&file_path)?))?;
    Ok(file_path)
}
