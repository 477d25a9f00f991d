//! Convenience wrappers for common POSIX commands
//!
//! Each operation is a direct specialization of the executor: argument
//! construction plus trim/split-on-newline post-processing, nothing more.
//! All error conditions are exactly those of the underlying executor call.

use crate::executor::{CommandExecutor, ExecutorError};

fn into_lines(output: &str) -> Vec<String> {
    output.trim().lines().map(str::to_string).collect()
}

impl CommandExecutor {
    /// Run `ls` with the given arguments and return the listed names.
    pub async fn ls(&self, args: &[String]) -> Result<Vec<String>, ExecutorError> {
        let output = self.run("ls", args).await?;
        Ok(into_lines(&output))
    }

    /// Run `pwd` and return the current working directory path, with no
    /// trailing newline.
    pub async fn pwd(&self) -> Result<String, ExecutorError> {
        let output = self.run("pwd", &[]).await?;
        Ok(output.trim().to_string())
    }

    /// Resolve a domain name with `host` and return the result lines.
    ///
    /// The domain is passed as a plain argv entry, so shell metacharacters in
    /// it have no effect.
    pub async fn host(&self, domain: &str) -> Result<Vec<String>, ExecutorError> {
        let output = self.run("host", &[domain.to_string()]).await?;
        Ok(into_lines(&output))
    }

    /// Resolve a domain name with `host` through a detected shell.
    ///
    /// The command line is built by string concatenation and handed to the
    /// interpreter, so shell metacharacters in `domain` ARE interpreted.
    /// Prefer [`host`](Self::host) unless shell syntax is actually wanted.
    pub async fn host_via_shell(&self, domain: &str) -> Result<Vec<String>, ExecutorError> {
        let output = self.run_via_shell(&format!("host {}", domain)).await?;
        Ok(into_lines(&output))
    }

    /// Create a directory with `mkdir`.
    pub async fn mkdir(&self, name: &str) -> Result<(), ExecutorError> {
        self.run("mkdir", &[name.to_string()]).await?;
        Ok(())
    }

    /// Create an empty file (or update its timestamps) with `touch`.
    pub async fn touch(&self, name: &str) -> Result<(), ExecutorError> {
        self.run("touch", &[name.to_string()]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::executor::{CommandExecutor, ExecutorConfig, ExecutorError};

    fn executor_in(dir: &std::path::Path) -> CommandExecutor {
        CommandExecutor::new(ExecutorConfig {
            working_dir: Some(dir.to_string_lossy().to_string()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_ls_lists_names() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("a"), b"").unwrap();
        std::fs::write(temp.path().join("b"), b"").unwrap();

        let executor = executor_in(temp.path());
        let names = executor.ls(&[]).await.unwrap();

        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_ls_empty_directory() {
        let temp = tempfile::TempDir::new().unwrap();

        let executor = executor_in(temp.path());
        let names = executor.ls(&[]).await.unwrap();

        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_pwd_has_no_trailing_newline() {
        let temp = tempfile::TempDir::new().unwrap();
        let canonical = temp.path().canonicalize().unwrap();

        let executor = executor_in(temp.path());
        let dir = executor.pwd().await.unwrap();

        assert!(!dir.ends_with('\n'));
        assert_eq!(dir, canonical.to_string_lossy());
    }

    #[tokio::test]
    async fn test_mkdir_creates_and_refuses_duplicate() {
        let temp = tempfile::TempDir::new().unwrap();
        let executor = executor_in(temp.path());

        executor.mkdir("newdir").await.unwrap();
        assert!(executor.ls(&[]).await.unwrap().contains(&"newdir".to_string()));

        // Second attempt on the same name fails
        let result = executor.mkdir("newdir").await;
        assert!(matches!(
            result,
            Err(ExecutorError::ExecutionFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_touch_creates_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let executor = executor_in(temp.path());

        executor.touch("note.txt").await.unwrap();

        assert!(temp.path().join("note.txt").exists());
    }
}
