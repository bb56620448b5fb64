//! Writing downloaded files to disk.

use std::path::Path;

use crate::error::Result;
use crate::media::MediaFile;

/// Write downloaded files into a directory, creating it if needed.
pub async fn save_files(files: &[MediaFile], output_dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(output_dir).await?;

    for file in files {
        let path = output_dir.join(&file.filename);
        tokio::fs::write(&path, &file.content).await?;
        tracing::debug!("wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_files_writes_content() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![MediaFile {
            filename: "abc_0.png".to_string(),
            content: vec![1, 2, 3],
            content_type: "image/png".to_string(),
            title: None,
        }];

        save_files(&files, &dir.path().join("out")).await.unwrap();

        let written = std::fs::read(dir.path().join("out/abc_0.png")).unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }
}
