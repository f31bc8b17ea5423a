//! # 安全改写
//!
//! 快照 → 改写 → 提交 / 回滚。单文件级别的全有或全无：
//! 文件要么是完整的新内容，要么与原内容逐字节相同。
//!
//! ## 功能
//! - `Backup`: 同目录备份文件，提交时删除，回滚时改名覆盖原文件
//! - `safe_rewrite`: 以纯文本变换函数为参数的通用改写入口
//!
//! ## 依赖关系
//! - 被 `jobs/mod.rs` 调用
//! - 无外部 crate 依赖

use crate::error::{Result, SitefixError};

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// 单文件备份
///
/// 既未提交也未回滚就被丢弃时，在 `Drop` 中尽力恢复。release 构建使用
/// `panic = "abort"`，panic 时不会展开，这一路径只在提前返回和
/// debug / test 构建的 panic 中生效。
#[derive(Debug)]
pub struct Backup {
    original: PathBuf,
    backup: PathBuf,
    armed: bool,
}

impl Backup {
    /// 在 `<path><suffix>` 创建备份
    ///
    /// 备份已存在时说明上次运行被中断，那份备份可能是唯一完整的原文，
    /// 因此不覆盖它，返回 `StaleBackup`，两个文件都保持原样。
    pub fn create(path: &Path, suffix: &str) -> Result<Self> {
        let backup = backup_path(path, suffix);
        let mut dest = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&backup)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => SitefixError::StaleBackup {
                    path: backup.display().to_string(),
                },
                _ => SitefixError::BackupError {
                    path: backup.display().to_string(),
                    source: e,
                },
            })?;

        let copied = File::open(path)
            .and_then(|mut src| io::copy(&mut src, &mut dest))
            .and_then(|_| fs::metadata(path))
            .and_then(|meta| fs::set_permissions(&backup, meta.permissions()));

        if let Err(e) = copied {
            drop(dest);
            let _ = fs::remove_file(&backup);
            return Err(SitefixError::BackupError {
                path: backup.display().to_string(),
                source: e,
            });
        }

        Ok(Self {
            original: path.to_path_buf(),
            backup,
            armed: true,
        })
    }

    /// 改写成功：删除备份
    ///
    /// 删除失败时备份仍处于待恢复状态，随后由 `Drop` 恢复原文件。
    pub fn commit(mut self) -> Result<()> {
        fs::remove_file(&self.backup).map_err(|e| SitefixError::BackupError {
            path: self.backup.display().to_string(),
            source: e,
        })?;
        self.armed = false;
        Ok(())
    }

    /// 改写失败：用备份覆盖原文件
    pub fn rollback(mut self) -> Result<()> {
        self.armed = false;
        fs::rename(&self.backup, &self.original).map_err(|e| SitefixError::RestoreError {
            path: self.original.display().to_string(),
            backup: self.backup.display().to_string(),
            source: e,
        })
    }
}

impl Drop for Backup {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::rename(&self.backup, &self.original);
        }
    }
}

/// 备份文件路径：原文件名后直接追加后缀
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// 改写结果，携带变换函数返回的附加数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafeOutcome<T> {
    /// 内容有变化并已写回
    Written(T),
    /// 内容无变化，未写文件
    Unchanged(T),
}

impl<T> SafeOutcome<T> {
    pub fn is_written(&self) -> bool {
        matches!(self, SafeOutcome::Written(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            SafeOutcome::Written(v) | SafeOutcome::Unchanged(v) => v,
        }
    }
}

/// 以备份保护的方式改写单个文件
///
/// `transform` 接收原文，返回新文本与附加数据。变换失败或写入失败时
/// 原文件从备份恢复，错误继续向上传递；成功后备份被删除。
pub fn safe_rewrite<T, F>(path: &Path, suffix: &str, transform: F) -> Result<SafeOutcome<T>>
where
    F: FnOnce(&str) -> Result<(String, T)>,
{
    let original = fs::read_to_string(path).map_err(|e| SitefixError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let backup = Backup::create(path, suffix)?;

    let (text, payload) = match transform(&original) {
        Ok(staged) => staged,
        Err(e) => return Err(abort(backup, e)),
    };

    if text == original {
        backup.commit()?;
        return Ok(SafeOutcome::Unchanged(payload));
    }

    if let Err(e) = fs::write(path, &text) {
        let err = SitefixError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        };
        return Err(abort(backup, err));
    }

    backup.commit()?;
    Ok(SafeOutcome::Written(payload))
}

/// 回滚并合并错误信息
fn abort(backup: Backup, err: SitefixError) -> SitefixError {
    match backup.rollback() {
        Ok(()) => err,
        Err(restore) => SitefixError::Other(format!(
            "{}; {}",
            err.chain_message(),
            restore.chain_message()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        let p = backup_path(Path::new("pages/a.html"), ".lightmode_backup");
        assert_eq!(p, PathBuf::from("pages/a.html.lightmode_backup"));
    }

    #[test]
    fn test_rewrite_writes_changed_content() {
        let (_dir, path) = fixture("bg-gray-900");
        let outcome = safe_rewrite(&path, ".bak", |text| {
            Ok((text.replace("900", "50"), 1usize))
        })
        .unwrap();

        assert_eq!(outcome, SafeOutcome::Written(1));
        assert_eq!(fs::read_to_string(&path).unwrap(), "bg-gray-50");
        assert!(!backup_path(&path, ".bak").exists());
    }

    #[test]
    fn test_unchanged_content_is_not_written() {
        let (_dir, path) = fixture("already light");
        let before = fs::metadata(&path).unwrap().modified().unwrap();

        let outcome = safe_rewrite(&path, ".bak", |text| Ok((text.to_string(), ()))).unwrap();

        assert!(!outcome.is_written());
        assert_eq!(fs::read_to_string(&path).unwrap(), "already light");
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
        assert!(!backup_path(&path, ".bak").exists());
    }

    #[test]
    fn test_failed_transform_restores_original() {
        let (_dir, path) = fixture("original <header>");

        let result: Result<SafeOutcome<()>> = safe_rewrite(&path, ".bak", |_| {
            Err(SitefixError::Other("injected".to_string()))
        });

        assert!(matches!(result, Err(SitefixError::Other(ref m)) if m == "injected"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original <header>");
        assert!(!backup_path(&path, ".bak").exists());
    }

    #[test]
    fn test_backup_exists_during_transform() {
        let (_dir, path) = fixture("snapshot");
        let backup = backup_path(&path, ".bak");

        safe_rewrite(&path, ".bak", |text| {
            assert_eq!(fs::read_to_string(&backup).unwrap(), "snapshot");
            Ok((format!("{text}!"), ()))
        })
        .unwrap();

        assert!(!backup.exists());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.html");
        let result = safe_rewrite(&path, ".bak", |t| Ok((t.to_string(), ())));
        assert!(matches!(result, Err(SitefixError::FileReadError { .. })));
        assert!(!backup_path(&path, ".bak").exists());
    }

    #[test]
    fn test_non_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.html");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        let result = safe_rewrite(&path, ".bak", |t| Ok((t.to_string(), ())));
        assert!(matches!(result, Err(SitefixError::FileReadError { .. })));
        assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00, 0x80]);
    }

    #[test]
    fn test_leftover_backup_is_never_overwritten() {
        let (_dir, path) = fixture("<html>ful");
        let backup = backup_path(&path, ".bak");
        fs::write(&backup, "<html>full original</html>").unwrap();

        let result = safe_rewrite(&path, ".bak", |t| Ok((t.replace("ful", "FUL"), ())));

        assert!(matches!(result, Err(SitefixError::StaleBackup { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html>ful");
        assert_eq!(
            fs::read_to_string(&backup).unwrap(),
            "<html>full original</html>"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_write_restores_original() {
        let (dir, path) = fixture("original");
        let dangling = dir.path().join("nowhere").join("page.html");

        let result = safe_rewrite(&path, ".bak", |text| {
            fs::remove_file(&path).unwrap();
            std::os::unix::fs::symlink(&dangling, &path).unwrap();
            Ok((format!("{text} changed"), ()))
        });

        assert!(matches!(result, Err(SitefixError::FileWriteError { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(!fs::symlink_metadata(&path).unwrap().file_type().is_symlink());
        assert!(!backup_path(&path, ".bak").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_restore_keeps_backup() {
        let (_dir, path) = fixture("original");

        let result = safe_rewrite(&path, ".bak", |text| {
            fs::remove_file(&path).unwrap();
            fs::create_dir(&path).unwrap();
            fs::write(path.join("child.html"), "x").unwrap();
            Ok((format!("{text} changed"), ()))
        });

        match result {
            Err(SitefixError::Other(msg)) => {
                assert!(msg.contains("Failed to write file"), "{msg}");
                assert!(msg.contains("Failed to restore"), "{msg}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(
            fs::read_to_string(backup_path(&path, ".bak")).unwrap(),
            "original"
        );
    }

    #[test]
    fn test_dropped_backup_restores_original() {
        let (_dir, path) = fixture("keep me");
        {
            let _backup = Backup::create(&path, ".bak").unwrap();
            fs::write(&path, "half-written").unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
        assert!(!backup_path(&path, ".bak").exists());
    }

    #[test]
    fn test_explicit_rollback() {
        let (_dir, path) = fixture("v1");
        let backup = Backup::create(&path, ".bak").unwrap();
        assert!(backup_path(&path, ".bak").exists());
        fs::write(&path, "v2").unwrap();
        backup.rollback().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "v1");
    }
}
