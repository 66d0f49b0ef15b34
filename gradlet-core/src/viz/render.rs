use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::GradletError;

/// Renders `dot_source` to an SVG file at `path` with the Graphviz `dot` tool.
///
/// # Errors
/// `GradletError::Render` if `dot` cannot be started or exits unsuccessfully.
pub fn render_svg(dot_source: &str, path: impl AsRef<Path>) -> Result<(), GradletError> {
    render_svg_with("dot", dot_source, path)
}

/// Like [`render_svg`] with an explicit Graphviz executable.
pub fn render_svg_with(
    program: &str,
    dot_source: &str,
    path: impl AsRef<Path>,
) -> Result<(), GradletError> {
    let path = path.as_ref();
    log::debug!("Rendering graph to {} with {}", path.display(), program);

    let mut child = Command::new(program)
        .arg("-Tsvg")
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| GradletError::Render(format!("failed to start {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(dot_source.as_bytes())
            .map_err(|e| GradletError::Render(format!("failed to write to {}: {}", program, e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| GradletError::Render(format!("failed to wait for {}: {}", program, e)))?;
    if !output.status.success() {
        log::warn!("{} failed to render {}", program, path.display());
        return Err(GradletError::Render(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_render_error() {
        let result = render_svg_with(
            "gradlet-no-such-graphviz-binary",
            "digraph G {}\n",
            std::env::temp_dir().join("gradlet_missing.svg"),
        );
        assert!(matches!(result, Err(GradletError::Render(_))));
    }
}
