use dssc_protocol::{decode_record, encode_tga, ParamReport, RenderParams, HEADER_SIZE};
use indicatif::ProgressBar;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::ConvertError;

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Print the raw header bytes before the parameters
    pub dump_header: bool,
}

/// Result of converting one capture file
#[derive(Debug)]
pub struct Conversion {
    pub params: RenderParams,
    pub report_path: PathBuf,
    pub image_path: PathBuf,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub converted: usize,
    pub failed: usize,
    /// Exit code of the last failing input, 0 if all succeeded
    pub exit_code: u8,
}

fn check_source(path: &Path) -> Result<(), ConvertError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(ConvertError::SourceNotRegular(path.to_owned())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ConvertError::SourceNotFound(path.to_owned()))
        }
        Err(source) => Err(ConvertError::Io {
            path: path.to_owned(),
            source,
        }),
    }
}

fn dump_header(out: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    writeln!(out, "\nHeader:")?;
    for (row, chunk) in bytes[..HEADER_SIZE].chunks(16).enumerate() {
        writeln!(out, "  {:02X}: {}", row * 16, hex::encode(chunk))?;
    }
    Ok(())
}

fn write_output(
    out: &mut impl Write,
    what: &str,
    path: &Path,
    contents: &[u8],
) -> Result<(), ConvertError> {
    write!(out, "Writing {what} to {}... ", path.display())?;
    out.flush()?;

    if let Err(source) = fs::write(path, contents) {
        writeln!(out, "Failed")?;
        return Err(ConvertError::Io {
            path: path.to_owned(),
            source,
        });
    }

    writeln!(out, "Done")?;
    Ok(())
}

/// Convert one capture file into a `.txt` parameter report and a `.tga`
/// image next to it, echoing progress and parameters to `out`.
///
/// Existing output files are overwritten.
pub fn convert_capture(
    path: &Path,
    options: &ConvertOptions,
    out: &mut impl Write,
) -> Result<Conversion, ConvertError> {
    check_source(path)?;

    let bytes = fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), size = bytes.len(), "read capture");

    let capture = decode_record(&bytes).map_err(|source| ConvertError::InvalidFormat {
        path: path.to_owned(),
        source,
    })?;
    debug!(version = capture.version, "decoded capture");

    writeln!(out, "{}: file read successfully", path.display())?;
    if options.dump_header {
        dump_header(out, &bytes)?;
    }

    writeln!(out, "\nParameters:")?;
    write!(out, "{}", ParamReport::with_prefix(&capture.params, "  "))?;

    let report_path = path.with_extension("txt");
    let report = ParamReport::new(&capture.params).to_string();
    write_output(out, "parameters", &report_path, report.as_bytes())?;

    let image_path = path.with_extension("tga");
    write_output(out, "image", &image_path, &encode_tga(&capture.pixels))?;

    Ok(Conversion {
        params: capture.params,
        report_path,
        image_path,
    })
}

/// Convert every file in order. A failure is reported and the batch goes
/// on with the next file.
pub fn convert_batch(
    paths: &[PathBuf],
    options: &ConvertOptions,
    out: &mut impl Write,
    progress: &ProgressBar,
) -> io::Result<BatchOutcome> {
    let mut outcome = BatchOutcome::default();

    for path in paths {
        let result = progress.suspend(|| convert_capture(path, options, &mut *out));
        match result {
            Ok(conversion) => {
                debug!(
                    report = %conversion.report_path.display(),
                    image = %conversion.image_path.display(),
                    tex_mode = conversion.params.tex_mode,
                    "converted"
                );
                outcome.converted += 1;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "conversion failed");
                progress.suspend(|| writeln!(out, "{e}"))?;
                outcome.failed += 1;
                outcome.exit_code = e.exit_code();
            }
        }
        progress.suspend(|| writeln!(out))?;
        progress.inc(1);
    }

    Ok(outcome)
}
