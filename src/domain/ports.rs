use crate::utils::error::Result;

/// Byte-level file access used by history persistence.
///
/// `read_file` on a missing path must fail with `ConvertError::IoError` of kind
/// `NotFound`; `remove_file` on a missing path succeeds.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}
